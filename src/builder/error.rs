//! Build errors for transition tables and game machines.

use crate::config::ConfigError;
use crate::core::PlayerIndex;
use thiserror::Error;

/// Errors that can occur when building transition tables and game machines.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Transition from '{state}' on '{event}' is defined more than once")]
    DuplicateTransition {
        state: &'static str,
        event: &'static str,
    },

    #[error("State '{state}' has no outgoing transitions but is not final")]
    UnwiredState { state: &'static str },

    #[error("Final state '{state}' must not define transitions")]
    FinalStateHasTransitions { state: &'static str },

    #[error("State '{state}' is unreachable from the initial state")]
    UnreachableState { state: &'static str },

    #[error("Player {0} machine not provided. Call .player(...) before .build()")]
    MissingPlayer(PlayerIndex),

    #[error("Player machine for seat {found} was provided twice")]
    SeatTaken { found: PlayerIndex },

    #[error("Board machine not provided. Call .board(...) before .build()")]
    MissingBoard,

    #[error("Invalid game configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
