//! Core state machine types and logic.
//!
//! This module contains the contracts shared by every machine:
//! - State definitions via the `State` trait
//! - Events, notifications and machine identities
//! - Immutable transition tables and history tracking
//! - The generic `Machine` that owns a current state

mod event;
mod history;
mod identity;
mod machine;
mod notification;
mod state;
mod table;

pub use event::{Event, EventDomain, EventKind, Move, Payload, Square, UnknownEvent};
pub use history::{StateHistory, StateTransition};
pub use identity::{MachineRef, PlayerIndex};
pub use machine::Machine;
pub use notification::{Notification, NotificationKind};
pub use state::State;
pub use table::TransitionTable;
