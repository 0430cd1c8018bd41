//! Contract between the game machine and the machines it orchestrates.

use super::error::EventNotAcceptable;
use crate::core::{Event, MachineRef, Notification, State};

/// A machine owned by the game machine.
///
/// Sub-machines never call back into their owner. When a transition
/// settles they hand back the notification it raised, and the owner reacts
/// to it after the sub-machine call has returned.
pub trait SubMachine {
    type State: State;

    /// Which machine of the hierarchy this is.
    fn label(&self) -> MachineRef;

    /// Consume an event.
    ///
    /// On success returns the notification raised by the new state, if any.
    /// On refusal nothing has changed.
    fn consume_event(&mut self, event: &Event) -> Result<Option<Notification>, EventNotAcceptable>;

    /// Read-only view of the current state.
    fn current_state(&self) -> Self::State;
}
