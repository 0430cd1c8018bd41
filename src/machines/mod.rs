//! The concrete machines of a two-player game.
//!
//! - `GameStateMachine`: top-level orchestrator
//! - `PlayerStateMachine`: one per seat
//! - `BoardStateMachine`: shared board lifecycle
//!
//! Sub-machines implement [`SubMachine`]; the game machine owns them and is
//! the only caller of their `consume_event`.

mod board;
mod error;
mod game;
mod player;
mod submachine;

pub use board::{BoardRules, BoardState, BoardStateMachine, OpenBoard};
pub use error::{DispatchError, EventNotAcceptable, Refusal};
pub use game::{Dispatch, GameState, GameStateMachine, JournalEntry, Snapshot};
pub use player::{PlayerState, PlayerStateMachine};
pub use submachine::SubMachine;
