//! Turnmind: hierarchical state machines for two-player board games
//!
//! A top-level game machine owns two player machines and a board machine.
//! Events go in through the game machine, which either moves itself or
//! forwards them to a sub-machine. Sub-machines report settled transitions
//! as notifications, and the game machine reacts by synthesizing further
//! events: both players ready starts the game, a board move hands the turn
//! to the other player.
//!
//! # Core Concepts
//!
//! - **State**: enum states declared with `state_enum!`
//! - **Transition table**: immutable `(state, event) -> state` mapping,
//!   validated when built
//! - **Event / Notification**: signals going down and coming back up
//! - **History**: immutable record of every transition
//!
//! # Example
//!
//! ```rust
//! use turnmind::core::{Event, EventKind, Move, PlayerIndex, Square};
//! use turnmind::machines::{GameState, GameStateMachine, PlayerState};
//!
//! let mut game = GameStateMachine::new();
//! for seat in PlayerIndex::ALL {
//!     game.consume_event(&Event::for_player(EventKind::PlayerReady, seat));
//! }
//! assert_eq!(game.current_state(), GameState::Playing);
//!
//! // Seat one moves first; the move promotes seat zero.
//! let mv = Move::new(Square::new(6, 4), Square::new(4, 4));
//! assert!(game.consume_event(&Event::board_move(mv)));
//! assert_eq!(game.player(PlayerIndex::Zero).current_state(), PlayerState::Turning);
//! assert_eq!(game.player(PlayerIndex::One).current_state(), PlayerState::Waiting);
//!
//! // Unknown or premature actions are simply not accepted.
//! assert!(!game.consume_event(&Event::new(EventKind::GameEnd)));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod machines;

// Re-export commonly used types
pub use crate::builder::{BuildError, GameStateMachineBuilder};
pub use crate::config::GameConfig;
pub use crate::core::{Event, EventKind, Notification, NotificationKind, PlayerIndex, State};
pub use crate::machines::{
    BoardStateMachine, DispatchError, GameState, GameStateMachine, PlayerStateMachine,
};
