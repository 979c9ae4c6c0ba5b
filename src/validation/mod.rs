//! Whole-configuration validation.
//!
//! Configuration errors surface one at a time while a machine is being set
//! up, and a transition into a state that was never configured only fails
//! when it is fired. Validation walks the finished configuration once and
//! reports every problem together, using Stillwater's `Validation` type to
//! accumulate violations instead of stopping at the first.
//!
//! # Example
//!
//! ```rust
//! use hsm::machine::StateMachine;
//! use hsm::validation::{validate, ConfigViolation};
//! use stillwater::validation::Validation;
//!
//! let mut machine = StateMachine::new("unvalidated");
//! machine
//!     .configure("unvalidated")
//!     .permit("validate", "in_progress")?
//!     .permit("abandon", "abandoned")?;
//!
//! match validate(&machine) {
//!     Validation::Failure(violations) => assert_eq!(violations.len(), 2),
//!     Validation::Success(_) => unreachable!(),
//! }
//! # Ok::<(), hsm::core::StateMachineError>(())
//! ```

pub mod rules;
pub mod violations;

pub use rules::{validate, ConfigCheck, ValidationResult, ValidationRules};
pub use violations::ConfigViolation;
