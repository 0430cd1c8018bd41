//! Dispatch errors.

use crate::core::MachineRef;
use std::fmt;
use thiserror::Error;

/// Why a sub-machine refused an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Refusal {
    /// The current state has no transition for the event.
    NoTransition,
    /// The event lacks the payload the machine needs.
    MissingPayload,
    /// The board's rules turned the request down.
    RuleViolation,
}

impl fmt::Display for Refusal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Self::NoTransition => "no transition from this state",
            Self::MissingPayload => "required payload missing",
            Self::RuleViolation => "refused by board rules",
        };
        f.write_str(reason)
    }
}

/// A sub-machine understood an event but could not take it in its current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{machine} cannot accept '{event}' in state '{state}': {reason}")]
pub struct EventNotAcceptable {
    pub machine: MachineRef,
    pub state: &'static str,
    pub event: &'static str,
    pub reason: Refusal,
}

/// Errors reported by the game machine's dispatch.
///
/// Everything except [`DispatchError::CascadeOverflow`] is an expected
/// outcome that leaves the machines unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("Event '{event}' rejected in game state '{state}'")]
    Rejected {
        state: &'static str,
        event: &'static str,
    },

    #[error("Player event '{event}' does not name a player")]
    MissingTarget { event: &'static str },

    #[error(transparent)]
    NotAcceptable(#[from] EventNotAcceptable),

    #[error("Notification cascade exceeded maximum depth {max}")]
    CascadeOverflow { max: usize },
}

impl DispatchError {
    /// Fatal errors signal a broken invariant rather than a refused action.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::CascadeOverflow { .. })
    }
}
