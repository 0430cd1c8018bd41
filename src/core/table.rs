//! Transition tables.
//!
//! A table maps `(state, event kind)` to the successor state. It is assembled
//! once through [`TransitionTableBuilder`](crate::builder::TransitionTableBuilder)
//! and has no mutating methods afterwards.

use super::event::EventKind;
use super::state::State;
use crate::builder::TransitionTableBuilder;
use std::collections::HashMap;

/// Immutable `(state, event) -> state` mapping with a designated initial state.
#[derive(Clone, Debug)]
pub struct TransitionTable<S: State> {
    initial: S,
    rows: HashMap<S, HashMap<EventKind, S>>,
}

impl<S: State> TransitionTable<S> {
    /// Start building a table whose machines begin in `initial`.
    pub fn builder(initial: S) -> TransitionTableBuilder<S> {
        TransitionTableBuilder::new(initial)
    }

    pub(crate) fn from_rows(initial: S, rows: HashMap<S, HashMap<EventKind, S>>) -> Self {
        Self { initial, rows }
    }

    pub fn initial(&self) -> S {
        self.initial
    }

    /// Successor of `from` when `event` is consumed, if the table has one.
    pub fn successor(&self, from: S, event: EventKind) -> Option<S> {
        self.rows.get(&from).and_then(|row| row.get(&event)).copied()
    }

    pub fn accepts(&self, from: S, event: EventKind) -> bool {
        self.successor(from, event).is_some()
    }

    /// Outgoing transitions of `from`, ordered by event kind.
    pub fn transitionable_states(&self, from: S) -> Vec<(EventKind, S)> {
        let mut row: Vec<(EventKind, S)> = self
            .rows
            .get(&from)
            .into_iter()
            .flatten()
            .map(|(event, to)| (*event, *to))
            .collect();
        row.sort_by_key(|(event, _)| *event);
        row
    }

    /// A state with no outgoing transitions rejects every event.
    pub fn is_terminal(&self, state: S) -> bool {
        self.rows.get(&state).map_or(true, HashMap::is_empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_enum;

    state_enum! {
        enum Lamp {
            Off,
            On,
            Broken,
        }
        final: [Broken]
    }

    fn lamp_table() -> TransitionTable<Lamp> {
        TransitionTable::builder(Lamp::Off)
            .on(Lamp::Off, EventKind::GamePlay, Lamp::On)
            .on(Lamp::On, EventKind::GameUndo, Lamp::Off)
            .on(Lamp::On, EventKind::GameEnd, Lamp::Broken)
            .build()
            .unwrap()
    }

    #[test]
    fn successor_follows_rows() {
        let table = lamp_table();
        assert_eq!(table.initial(), Lamp::Off);
        assert_eq!(table.successor(Lamp::Off, EventKind::GamePlay), Some(Lamp::On));
        assert_eq!(table.successor(Lamp::Off, EventKind::GameEnd), None);
        assert!(table.accepts(Lamp::On, EventKind::GameEnd));
    }

    #[test]
    fn final_state_is_terminal() {
        let table = lamp_table();
        assert!(table.is_terminal(Lamp::Broken));
        assert!(!table.is_terminal(Lamp::On));
        assert!(table.transitionable_states(Lamp::Broken).is_empty());
    }

    #[test]
    fn transitionable_states_are_sorted_by_event() {
        let table = lamp_table();
        assert_eq!(
            table.transitionable_states(Lamp::On),
            vec![
                (EventKind::GameUndo, Lamp::Off),
                (EventKind::GameEnd, Lamp::Broken)
            ]
        );
    }
}
