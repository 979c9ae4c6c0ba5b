//! Trail of transitions a machine has fired.
//!
//! The history is a diagnostic aid: it lets a host inspect the path a machine
//! took and how long it took. It is not meant as a storage format.

use super::transition::Transition;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::time::Duration;

/// One fired transition and when it was committed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry<S, T> {
    pub transition: Transition<S, T>,
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of transitions, oldest first.
///
/// When built with a capacity, recording past it drops the oldest entry.
///
/// # Example
///
/// ```rust
/// use hsm::core::{HistoryEntry, StateHistory, Transition};
/// use chrono::Utc;
///
/// let history = StateHistory::new()
///     .record(HistoryEntry {
///         transition: Transition::new("root", "jump", "jump_signal"),
///         timestamp: Utc::now(),
///     })
///     .record(HistoryEntry {
///         transition: Transition::new("jump", "idle", "jump_signal"),
///         timestamp: Utc::now(),
///     });
///
/// assert_eq!(history.get_path(), vec![&"root", &"jump", &"idle"]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateHistory<S, T> {
    entries: VecDeque<HistoryEntry<S, T>>,
    capacity: Option<usize>,
}

impl<S, T> Default for StateHistory<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, T> StateHistory<S, T> {
    /// Create an unbounded, empty history.
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: None,
        }
    }

    /// Create an empty history that keeps at most `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    pub fn capacity(&self) -> Option<usize> {
        self.capacity
    }

    /// Number of retained entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over retained entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry<S, T>> {
        self.entries.iter()
    }

    /// Most recent entry, if any.
    pub fn last(&self) -> Option<&HistoryEntry<S, T>> {
        self.entries.back()
    }

    /// Append in place, evicting the oldest entry when full.
    pub(crate) fn push(&mut self, entry: HistoryEntry<S, T>) {
        if self.capacity == Some(0) {
            return;
        }
        if let Some(capacity) = self.capacity {
            while self.entries.len() >= capacity {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(entry);
    }

    /// Path of states traversed: the source of the oldest retained entry,
    /// then the destination of every entry.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::with_capacity(self.entries.len() + 1);
        if let Some(first) = self.entries.front() {
            path.push(first.transition.from());
        }
        for entry in &self.entries {
            path.push(entry.transition.to());
        }
        path
    }

    /// Time between the oldest and newest retained entries.
    ///
    /// Returns `None` when empty.
    pub fn duration(&self) -> Option<Duration> {
        match (self.entries.front(), self.entries.back()) {
            (Some(first), Some(last)) => last
                .timestamp
                .signed_duration_since(first.timestamp)
                .to_std()
                .ok(),
            _ => None,
        }
    }
}

impl<S: Clone, T: Clone> StateHistory<S, T> {
    /// Record an entry, returning a new history and leaving `self` untouched.
    pub fn record(&self, entry: HistoryEntry<S, T>) -> Self {
        let mut next = self.clone();
        next.push(entry);
        next
    }
}
