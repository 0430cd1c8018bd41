//! Transition journal of a single machine.
//!
//! Each game, player and board machine appends one entry per accepted
//! transition, together with the event that caused it.

use super::event::EventKind;
use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One accepted transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    pub from: S,
    pub to: S,
    /// Kind of the event that was consumed.
    pub event: EventKind,
    pub timestamp: DateTime<Utc>,
}

/// Transitions of one machine, oldest first.
///
/// Values are never edited in place: [`StateHistory::record`] hands back an
/// extended copy.
///
/// # Example
///
/// ```rust
/// use turnmind::core::{EventKind, StateHistory, StateTransition};
/// use turnmind::machines::GameState;
/// use chrono::Utc;
///
/// let history = StateHistory::new().record(StateTransition {
///     from: GameState::Initializing,
///     to: GameState::Playing,
///     event: EventKind::GameInitialized,
///     timestamp: Utc::now(),
/// });
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&GameState::Initializing, &GameState::Playing]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Copy of this history with `transition` appended.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// States visited: the source of the first transition followed by the
    /// target of every transition. Empty when nothing was recorded.
    pub fn get_path(&self) -> Vec<&S> {
        self.transitions
            .first()
            .map(|first| &first.from)
            .into_iter()
            .chain(self.transitions.iter().map(|t| &t.to))
            .collect()
    }

    /// Events that drove the recorded transitions, oldest first.
    pub fn events(&self) -> Vec<EventKind> {
        self.transitions.iter().map(|t| t.event).collect()
    }

    /// Wall-clock time between the first and the latest transition.
    pub fn duration(&self) -> Option<Duration> {
        let first = self.transitions.first()?;
        let last = self.transitions.last()?;
        last.timestamp
            .signed_duration_since(first.timestamp)
            .to_std()
            .ok()
    }

    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
    enum Phase {
        Lobby,
        Match,
        Over,
    }

    impl State for Phase {
        fn name(&self) -> &'static str {
            match self {
                Self::Lobby => "Lobby",
                Self::Match => "Match",
                Self::Over => "Over",
            }
        }

        fn is_final(&self) -> bool {
            matches!(self, Self::Over)
        }

        fn all() -> &'static [Self] {
            &[Self::Lobby, Self::Match, Self::Over]
        }
    }

    fn step(from: Phase, to: Phase, event: EventKind) -> StateTransition<Phase> {
        StateTransition {
            from,
            to,
            event,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn fresh_history_has_no_path() {
        let history: StateHistory<Phase> = StateHistory::default();
        assert!(history.get_path().is_empty());
        assert!(history.events().is_empty());
        assert!(history.duration().is_none());
        assert!(history.last().is_none());
    }

    #[test]
    fn recording_leaves_original_untouched() {
        let empty = StateHistory::new();
        let extended = empty.record(step(
            Phase::Lobby,
            Phase::Match,
            EventKind::GameInitialized,
        ));

        assert!(empty.transitions().is_empty());
        assert_eq!(extended.transitions().len(), 1);
    }

    #[test]
    fn get_path_and_events_follow_record_order() {
        let history = StateHistory::new()
            .record(step(
                Phase::Lobby,
                Phase::Match,
                EventKind::GameInitialized,
            ))
            .record(step(Phase::Match, Phase::Over, EventKind::GameEnd));

        assert_eq!(
            history.get_path(),
            vec![&Phase::Lobby, &Phase::Match, &Phase::Over]
        );
        assert_eq!(
            history.events(),
            vec![EventKind::GameInitialized, EventKind::GameEnd]
        );
        assert_eq!(history.last().map(|t| t.to), Some(Phase::Over));
    }

    #[test]
    fn one_transition_spans_no_time() {
        let history = StateHistory::new().record(step(
            Phase::Lobby,
            Phase::Match,
            EventKind::GameInitialized,
        ));

        assert_eq!(history.duration(), Some(Duration::from_secs(0)));
    }

    #[test]
    fn survives_json_round_trip() {
        let history = StateHistory::new().record(step(
            Phase::Lobby,
            Phase::Match,
            EventKind::GameInitialized,
        ));

        let json = serde_json::to_string(&history).unwrap();
        let back: StateHistory<Phase> = serde_json::from_str(&json).unwrap();

        assert_eq!(back.get_path(), vec![&Phase::Lobby, &Phase::Match]);
        assert_eq!(back.events(), vec![EventKind::GameInitialized]);
    }
}
