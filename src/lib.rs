//! hsm: a small hierarchical state machine
//!
//! A caller declares states and the triggers that move between them up
//! front, then drives the machine by firing triggers. Everything runs
//! synchronously on the caller's thread; there is no background processing.
//!
//! # Core Concepts
//!
//! - **State**: an identifier plus its outgoing trigger table and
//!   entry/exit hooks
//! - **Configurator**: fluent builder returned by `configure(state)`
//! - **Transition**: immutable record of one fired trigger
//! - **Substate**: a state sharing its superstate's configuration
//!
//! # Example
//!
//! ```rust
//! use hsm::core::Hook;
//! use hsm::machine::StateMachine;
//! use hsm::{state_enum, trigger_enum};
//!
//! state_enum! {
//!     enum Motion { Root, Idle, Jump }
//! }
//!
//! trigger_enum! {
//!     enum Signal { JumpSignal }
//! }
//!
//! let mut machine = StateMachine::new(Motion::Root);
//! machine
//!     .configure(Motion::Root)
//!     .permit(Signal::JumpSignal, Motion::Jump)?;
//! machine
//!     .configure(Motion::Jump)
//!     .on_enter(Hook::new(|| println!("jump started")))?
//!     .on_exit(Hook::new(|| println!("jump ended")))?
//!     .permit(Signal::JumpSignal, Motion::Idle)?;
//! machine.configure(Motion::Idle);
//!
//! machine.fire(Signal::JumpSignal)?;
//! assert!(machine.is_in_state(&Motion::Jump));
//!
//! machine.fire(Signal::JumpSignal)?;
//! assert!(machine.is_in_state(&Motion::Idle));
//!
//! assert!(machine.fire(Signal::JumpSignal).is_err());
//! # Ok::<(), hsm::core::StateMachineError>(())
//! ```

pub mod builder;
pub mod core;
pub mod machine;
pub mod validation;

// Re-export commonly used types
pub use builder::StateConfigurator;
pub use crate::core::{Hook, State, StateMachineError, Transition};
pub use machine::{Machine, MachineOptions, StateMachine};
