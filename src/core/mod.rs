//! Core types shared by the configurator and the machine.
//!
//! - Identifier bounds for states and triggers
//! - Hooks with reference identity
//! - The per-state `State` configuration
//! - The immutable transition record and the transition history
//! - The error enum

mod error;
mod history;
mod hook;
mod id;
mod state;
mod transition;

pub use error::{HookPhase, StateMachineError};
pub use history::{HistoryEntry, StateHistory};
pub use hook::{Hook, HookError, HookResult};
pub use id::{StateId, TriggerId};
pub use state::State;
pub use transition::Transition;

pub(crate) use id::describe;
