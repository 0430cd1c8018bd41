//! Core State trait for machine states.
//!
//! States are plain enum values. A machine owns its transition table keyed
//! by these values, so a state never needs a reference back to the machine
//! that holds it.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for the states of a machine.
///
/// All methods are pure. The usual way to implement this trait is the
/// [`state_enum!`](crate::state_enum) macro, which also derives the
/// required traits.
///
/// # Required Traits
///
/// - `Copy` + `Eq` + `Hash`: states are used as transition table keys
/// - `Debug`: states must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: states appear in serialized history
///
/// # Example
///
/// ```rust
/// use turnmind::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Door {
///     Open,
///     Closed,
///     Welded,
/// }
///
/// impl State for Door {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Welded => "Welded",
///         }
///     }
///
///     fn is_final(&self) -> bool {
///         matches!(self, Self::Welded)
///     }
///
///     fn all() -> &'static [Self] {
///         &[Self::Open, Self::Closed, Self::Welded]
///     }
/// }
///
/// assert_eq!(Door::all().len(), 3);
/// assert!(Door::Welded.is_final());
/// ```
pub trait State:
    Copy + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync + 'static
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &'static str;

    /// Check if this is a final (terminal) state.
    ///
    /// A final state has an empty transition row: every event submitted
    /// while the machine sits in it is rejected.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }

    /// Every state of the machine, in declaration order.
    fn all() -> &'static [Self];
}
