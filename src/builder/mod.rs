//! Builder API for ergonomic machine construction.
//!
//! This module provides fluent builders and macros for declaring states,
//! assembling validated transition tables and wiring a game machine
//! together from its sub-machines.

pub mod error;
pub mod game;
pub mod macros;
pub mod table;

pub use error::BuildError;
pub use game::GameStateMachineBuilder;
pub use table::TransitionTableBuilder;
