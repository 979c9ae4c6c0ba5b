//! Configuration checks that accumulate every violation.

use crate::core::{describe, StateId, TriggerId};
use crate::machine::StateMachine;
use crate::validation::violations::ConfigViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Outcome of validating a machine.
pub type ValidationResult = Validation<(), NonEmptyVec<ConfigViolation>>;

/// Type alias for custom check functions
pub type ConfigCheck<S, T> = Box<dyn Fn(&StateMachine<S, T>) -> ValidationResult + Send + Sync>;

/// Set of checks run against a configured machine.
///
/// The built-in checks are always on: the current state must be configured,
/// and every transition must lead to a configured state (otherwise firing it
/// fails at run time).
pub struct ValidationRules<S, T> {
    checks: Vec<ConfigCheck<S, T>>,
}

impl<S: StateId, T: TriggerId> ValidationRules<S, T> {
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Add a custom validation check
    pub fn require<F>(mut self, check: F) -> Self
    where
        F: Fn(&StateMachine<S, T>) -> ValidationResult + Send + Sync + 'static,
    {
        self.checks.push(Box::new(check));
        self
    }

    /// Add a simple predicate check with error message
    pub fn require_pred<F>(mut self, predicate: F, error_msg: String) -> Self
    where
        F: Fn(&StateMachine<S, T>) -> bool + Send + Sync + 'static,
    {
        let check = move |machine: &StateMachine<S, T>| {
            if predicate(machine) {
                Validation::success(())
            } else {
                Validation::fail(ConfigViolation::CustomCheckFailed {
                    message: error_msg.clone(),
                })
            }
        };
        self.checks.push(Box::new(check));
        self
    }

    /// Run built-in and custom checks, collecting ALL violations.
    pub fn validate(&self, machine: &StateMachine<S, T>) -> ValidationResult {
        let mut checks: Vec<ValidationResult> = Vec::new();

        let current = machine.current_state();
        checks.push(if machine.is_configured(current) {
            Validation::success(())
        } else {
            Validation::fail(ConfigViolation::CurrentStateUnconfigured {
                state: describe(current),
            })
        });

        for state in machine.bound_states() {
            for (trigger, destination) in state.transitions() {
                if !machine.is_configured(destination) {
                    checks.push(Validation::fail(
                        ConfigViolation::UnconfiguredDestination {
                            state: describe(state.id()),
                            trigger: describe(trigger),
                            destination: describe(destination),
                        },
                    ));
                }
            }
        }

        for check_fn in &self.checks {
            checks.push(check_fn(machine));
        }

        Validation::all_vec(checks).map(|_| ())
    }
}

impl<S: StateId, T: TriggerId> Default for ValidationRules<S, T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate `machine` with the built-in checks only.
///
/// # Example
///
/// ```rust
/// use hsm::machine::StateMachine;
/// use hsm::validation::validate;
///
/// let mut machine = StateMachine::new("root");
/// machine.configure("root").permit("jump_signal", "jump")?;
/// assert!(validate(&machine).is_failure());
///
/// machine.configure("jump");
/// assert!(validate(&machine).is_success());
/// # Ok::<(), hsm::core::StateMachineError>(())
/// ```
pub fn validate<S: StateId, T: TriggerId>(machine: &StateMachine<S, T>) -> ValidationResult {
    ValidationRules::new().validate(machine)
}
