//! Builder for transition tables.

use crate::builder::error::BuildError;
use crate::core::{EventKind, State, TransitionTable};
use std::collections::{HashMap, HashSet, VecDeque};

/// Fluent builder for a [`TransitionTable`].
///
/// `build` checks that the table describes a complete machine: no key is
/// defined twice, every non-final state can leave, final states cannot, and
/// every state is reachable from the initial one.
pub struct TransitionTableBuilder<S: State> {
    initial: S,
    rows: HashMap<S, HashMap<EventKind, S>>,
    duplicate: Option<(S, EventKind)>,
}

impl<S: State> TransitionTableBuilder<S> {
    /// Create a builder for machines starting in `initial`.
    pub fn new(initial: S) -> Self {
        Self {
            initial,
            rows: HashMap::new(),
            duplicate: None,
        }
    }

    /// Add the transition `from --event--> to`.
    pub fn on(mut self, from: S, event: EventKind, to: S) -> Self {
        let previous = self.rows.entry(from).or_default().insert(event, to);
        if previous.is_some() && self.duplicate.is_none() {
            self.duplicate = Some((from, event));
        }
        self
    }

    /// Validate and build the table.
    pub fn build(self) -> Result<TransitionTable<S>, BuildError> {
        if let Some((state, event)) = self.duplicate {
            return Err(BuildError::DuplicateTransition {
                state: state.name(),
                event: event.name(),
            });
        }

        for state in S::all() {
            let has_exits = self.rows.get(state).is_some_and(|row| !row.is_empty());
            if state.is_final() && has_exits {
                return Err(BuildError::FinalStateHasTransitions {
                    state: state.name(),
                });
            }
            if !state.is_final() && !has_exits {
                return Err(BuildError::UnwiredState {
                    state: state.name(),
                });
            }
        }

        let reachable = self.reachable();
        if let Some(state) = S::all().iter().find(|s| !reachable.contains(*s)) {
            return Err(BuildError::UnreachableState {
                state: state.name(),
            });
        }

        Ok(TransitionTable::from_rows(self.initial, self.rows))
    }

    fn reachable(&self) -> HashSet<S> {
        let mut seen = HashSet::from([self.initial]);
        let mut queue = VecDeque::from([self.initial]);
        while let Some(state) = queue.pop_front() {
            for next in self.rows.get(&state).into_iter().flat_map(|row| row.values()) {
                if seen.insert(*next) {
                    queue.push_back(*next);
                }
            }
        }
        seen
    }
}
