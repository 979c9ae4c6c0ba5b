//! The state machine engine and the narrow interface hosts program against.
//!
//! Hosts that only configure and drive a machine can depend on [`Machine`]
//! instead of the concrete [`StateMachine`], leaving room for other backing
//! stores behind the same calls.

mod engine;
mod options;

pub use engine::StateMachine;
pub use options::{MachineOptions, DEFAULT_HISTORY_CAPACITY};

use crate::builder::StateConfigurator;
use crate::core::{StateId, StateMachineError, Transition, TriggerId};

/// Configure-and-fire surface of a state machine.
///
/// # Example
///
/// ```rust
/// use hsm::machine::{Machine, StateMachine};
///
/// fn press<M: Machine<&'static str, &'static str>>(machine: &mut M) -> bool {
///     machine.can_fire(&"press") && machine.fire("press").is_ok()
/// }
///
/// let mut machine = StateMachine::new("off");
/// machine.configure("off").permit("press", "on")?;
/// machine.configure("on").permit("press", "off")?;
///
/// assert!(press(&mut machine));
/// assert!(machine.is_in_state(&"on"));
/// # Ok::<(), hsm::core::StateMachineError>(())
/// ```
pub trait Machine<S: StateId, T: TriggerId> {
    /// Fluent configurator handed out by [`Machine::configure`].
    type Configurator<'a>
    where
        Self: 'a;

    fn configure(&mut self, state: S) -> Self::Configurator<'_>;

    fn fire(&mut self, trigger: T) -> Result<Transition<S, T>, StateMachineError>;

    fn is_in_state(&self, state: &S) -> bool;

    fn can_fire(&self, trigger: &T) -> bool;

    fn permitted_triggers(&self) -> Result<Vec<T>, StateMachineError>;
}

impl<S: StateId, T: TriggerId> Machine<S, T> for StateMachine<S, T> {
    type Configurator<'a>
        = StateConfigurator<'a, S, T>
    where
        Self: 'a;

    fn configure(&mut self, state: S) -> Self::Configurator<'_> {
        StateMachine::configure(self, state)
    }

    fn fire(&mut self, trigger: T) -> Result<Transition<S, T>, StateMachineError> {
        StateMachine::fire(self, trigger)
    }

    fn is_in_state(&self, state: &S) -> bool {
        StateMachine::is_in_state(self, state)
    }

    fn can_fire(&self, trigger: &T) -> bool {
        StateMachine::can_fire(self, trigger)
    }

    fn permitted_triggers(&self) -> Result<Vec<T>, StateMachineError> {
        StateMachine::permitted_triggers(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drive<M>(machine: &mut M, triggers: &[u8]) -> Vec<bool>
    where
        M: Machine<u8, u8>,
    {
        triggers
            .iter()
            .map(|trigger| machine.fire(*trigger).is_ok())
            .collect()
    }

    #[test]
    fn trait_drives_the_concrete_engine() {
        let mut machine = StateMachine::new(0u8);
        Machine::configure(&mut machine, 0).permit(1, 1).unwrap();
        Machine::configure(&mut machine, 1).permit(2, 0).unwrap();

        assert_eq!(drive(&mut machine, &[1, 1, 2, 2]), vec![true, false, true, false]);
        assert!(Machine::is_in_state(&machine, &0));
        assert_eq!(Machine::permitted_triggers(&machine).unwrap(), vec![1]);
    }
}
