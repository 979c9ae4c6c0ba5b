//! Identifier bounds for states and triggers.
//!
//! States and triggers are caller-supplied values used as map keys. Any type
//! that is cloneable, comparable, hashable and debuggable qualifies, so enums,
//! string slices, owned strings and integers all work out of the box.

use std::fmt::Debug;
use std::hash::Hash;

/// Identifier of a state.
///
/// Blanket-implemented for every `Clone + Eq + Hash + Debug` type.
///
/// # Example
///
/// ```rust
/// use hsm::core::StateId;
///
/// fn takes_state<S: StateId>(_state: S) {}
///
/// takes_state("idle");
/// takes_state(String::from("idle"));
/// takes_state(3u8);
/// ```
pub trait StateId: Clone + Eq + Hash + Debug {}

impl<T> StateId for T where T: Clone + Eq + Hash + Debug {}

/// Identifier of a trigger.
///
/// Blanket-implemented for every `Clone + Eq + Hash + Debug` type.
pub trait TriggerId: Clone + Eq + Hash + Debug {}

impl<T> TriggerId for T where T: Clone + Eq + Hash + Debug {}

/// Render an identifier for diagnostics and error messages.
pub(crate) fn describe<I: Debug>(id: &I) -> String {
    format!("{id:?}")
}
