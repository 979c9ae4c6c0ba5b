//! Errors raised while configuring or driving a state machine.

use crate::core::hook::HookError;
use std::fmt;
use thiserror::Error;

/// Which hook list was running when a hook failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookPhase {
    /// The global `on_transitioned` callback.
    Transitioned,
    /// An exit hook of the source state.
    Exit,
    /// An entry hook of the destination state.
    Entry,
}

impl fmt::Display for HookPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transitioned => f.write_str("transition"),
            Self::Exit => f.write_str("exit"),
            Self::Entry => f.write_str("entry"),
        }
    }
}

/// Errors produced by states, configurators and the machine.
///
/// All of these are programming or configuration errors. None is transient,
/// so retrying the same call will fail the same way. State and trigger values
/// are carried as their `Debug` rendering.
#[derive(Debug, Error)]
pub enum StateMachineError {
    #[error("Trigger {trigger} is already registered for state {state}")]
    DuplicateTrigger { state: String, trigger: String },

    #[error("No transition present for trigger {trigger} in state {state}")]
    TransitionNotFound { state: String, trigger: String },

    #[error("Trigger {trigger} is not permitted in state {state}")]
    TriggerNotPermitted { state: String, trigger: String },

    #[error("State {state} is not configured yet so no representation exists for it")]
    UnconfiguredState { state: String },

    #[error("Configuring {state} as a substate of itself creates an illegal cyclic configuration")]
    CyclicConfiguration { state: String },

    #[error("Hook must not be absent")]
    NullAction,

    #[error("Hook is already registered as an {phase} hook of state {state}")]
    DuplicateHook { state: String, phase: HookPhase },

    #[error("{phase} hook failed while in state {state}: {source}")]
    HookFailed {
        state: String,
        phase: HookPhase,
        #[source]
        source: HookError,
    },
}
