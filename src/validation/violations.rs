//! Problems found while validating a machine's configuration.

use thiserror::Error;

/// One configuration problem.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigViolation {
    #[error("Current state {state} is not configured")]
    CurrentStateUnconfigured { state: String },

    #[error("Trigger {trigger} in state {state} leads to unconfigured state {destination}")]
    UnconfiguredDestination {
        state: String,
        trigger: String,
        destination: String,
    },

    #[error("Custom check failed: {message}")]
    CustomCheckFailed { message: String },
}
