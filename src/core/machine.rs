//! Generic machine: one current state, one table, one history.

use super::event::EventKind;
use super::history::{StateHistory, StateTransition};
use super::state::State;
use super::table::TransitionTable;
use chrono::Utc;

/// A machine holding exactly one current state.
///
/// The machine owns its table. `advance` is the only way to move the
/// current state, so concrete machines route every mutation through their
/// own `consume_event`.
#[derive(Clone, Debug)]
pub struct Machine<S: State> {
    current: S,
    table: TransitionTable<S>,
    history: StateHistory<S>,
}

impl<S: State> Machine<S> {
    /// Create a machine sitting in the table's initial state.
    pub fn new(table: TransitionTable<S>) -> Self {
        Self {
            current: table.initial(),
            table,
            history: StateHistory::new(),
        }
    }

    pub fn current_state(&self) -> S {
        self.current
    }

    /// Whether the current state has a transition for `event`.
    pub fn accepts(&self, event: EventKind) -> bool {
        self.table.accepts(self.current, event)
    }

    /// Outgoing transitions of the current state.
    pub fn transitionable_states(&self) -> Vec<(EventKind, S)> {
        self.table.transitionable_states(self.current)
    }

    pub fn history(&self) -> &StateHistory<S> {
        &self.history
    }

    /// Move to the successor of the current state for `event`.
    ///
    /// Returns the new state, or `None` with nothing changed when the
    /// current row has no entry for `event`.
    pub fn advance(&mut self, event: EventKind) -> Option<S> {
        let from = self.current;
        let to = self.table.successor(from, event)?;
        self.history = self.history.record(StateTransition {
            from,
            to,
            event,
            timestamp: Utc::now(),
        });
        self.current = to;
        Some(to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;

    state_enum! {
        enum Gate {
            Closed,
            Open,
        }
    }

    fn gate() -> Machine<Gate> {
        let table = TransitionTable::builder(Gate::Closed)
            .on(Gate::Closed, EventKind::GamePlay, Gate::Open)
            .on(Gate::Open, EventKind::GameUndo, Gate::Closed)
            .build()
            .unwrap();
        Machine::new(table)
    }

    #[test]
    fn starts_in_initial_state() {
        let machine = gate();
        assert_eq!(machine.current_state(), Gate::Closed);
        assert!(machine.history().transitions().is_empty());
    }

    #[test]
    fn advance_switches_and_records() {
        let mut machine = gate();
        assert_eq!(machine.advance(EventKind::GamePlay), Some(Gate::Open));
        assert_eq!(machine.current_state(), Gate::Open);
        assert_eq!(machine.advance(EventKind::GameUndo), Some(Gate::Closed));

        let path = machine.history().get_path();
        assert_eq!(path, vec![&Gate::Closed, &Gate::Open, &Gate::Closed]);
    }

    #[test]
    fn unknown_event_changes_nothing() {
        let mut machine = gate();
        assert!(!machine.accepts(EventKind::GameUndo));
        assert_eq!(machine.advance(EventKind::GameUndo), None);
        assert_eq!(machine.advance(EventKind::GameUndo), None);
        assert_eq!(machine.current_state(), Gate::Closed);
        assert!(machine.history().transitions().is_empty());
    }

    #[test]
    fn transitionable_states_reflect_current_row() {
        let mut machine = gate();
        assert_eq!(
            machine.transitionable_states(),
            vec![(EventKind::GamePlay, Gate::Open)]
        );
        machine.advance(EventKind::GamePlay);
        assert_eq!(
            machine.transitionable_states(),
            vec![(EventKind::GameUndo, Gate::Closed)]
        );
    }
}
