//! The record describing one fired transition.

use serde::{Deserialize, Serialize};

/// Immutable description of a transition being fired.
///
/// A fresh record is built for every `fire` call and handed to the source
/// state's exit hooks and the destination state's entry hooks.
///
/// # Example
///
/// ```rust
/// use hsm::core::Transition;
///
/// let transition = Transition::new("idle", "idle", "tick");
/// assert!(transition.is_loopback());
/// assert_eq!(transition.trigger(), &"tick");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transition<S, T> {
    from: S,
    to: S,
    trigger: T,
}

impl<S, T> Transition<S, T> {
    pub fn new(from: S, to: S, trigger: T) -> Self {
        Self { from, to, trigger }
    }

    /// State the machine is leaving.
    pub fn from(&self) -> &S {
        &self.from
    }

    /// State the machine is entering.
    pub fn to(&self) -> &S {
        &self.to
    }

    pub fn trigger(&self) -> &T {
        &self.trigger
    }
}

impl<S: PartialEq, T> Transition<S, T> {
    /// True when source and destination are the same state.
    pub fn is_loopback(&self) -> bool {
        self.from == self.to
    }
}
