//! Construction options for a state machine.

use serde::{Deserialize, Serialize};

/// Tunables applied when a machine is created.
///
/// Deserializable so hosts can embed it in their own configuration files.
/// Missing fields fall back to [`MachineOptions::default`].
///
/// # Example
///
/// ```rust
/// use hsm::machine::MachineOptions;
///
/// let options = MachineOptions::default().history_capacity(16);
/// assert!(options.record_history);
/// assert_eq!(options.history_capacity, Some(16));
/// ```
/// History entries kept by default; older ones are dropped first.
pub const DEFAULT_HISTORY_CAPACITY: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MachineOptions {
    /// Keep a trail of fired transitions.
    pub record_history: bool,

    /// Upper bound on retained history entries; `None` keeps everything.
    pub history_capacity: Option<usize>,
}

impl Default for MachineOptions {
    fn default() -> Self {
        Self {
            record_history: true,
            history_capacity: Some(DEFAULT_HISTORY_CAPACITY),
        }
    }
}

impl MachineOptions {
    /// Options with history recording switched off.
    pub fn without_history() -> Self {
        Self {
            record_history: false,
            history_capacity: None,
        }
    }

    pub fn record_history(mut self, enabled: bool) -> Self {
        self.record_history = enabled;
        self
    }

    pub fn history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = Some(capacity);
        self
    }

    /// Keep every fired transition. Memory grows with each `fire`.
    pub fn unbounded_history(mut self) -> Self {
        self.history_capacity = None;
        self
    }
}
