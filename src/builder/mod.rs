//! Configuration API.
//!
//! [`StateConfigurator`] is the fluent surface handed out by
//! `StateMachine::configure`. The [`state_enum!`](crate::state_enum) and
//! [`trigger_enum!`](crate::trigger_enum) macros declare identifier enums
//! with minimal boilerplate.

pub mod configurator;
pub mod macros;

pub use configurator::StateConfigurator;
