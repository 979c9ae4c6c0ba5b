//! Fluent configuration surface for one state.

use crate::core::{Hook, State, StateId, StateMachineError, TriggerId};
use crate::machine::StateMachine;

/// Builder returned by [`StateMachine::configure`].
///
/// Every method consumes the configurator and hands it back on success, so
/// calls chain with `?`:
///
/// ```rust
/// use hsm::core::Hook;
/// use hsm::machine::StateMachine;
///
/// let mut machine = StateMachine::new("root");
/// machine
///     .configure("jump")
///     .on_enter(Hook::new(|| println!("jump started")))?
///     .on_exit(Hook::new(|| println!("jump ended")))?
///     .permit("jump_signal", "idle")?;
/// # Ok::<(), hsm::core::StateMachineError>(())
/// ```
///
/// Mutations go to the `State` the identifier is bound to. After
/// [`substate_of`](Self::substate_of) that is the superstate's `State`, which
/// every other substate of the same superstate shares.
pub struct StateConfigurator<'m, S, T> {
    machine: &'m mut StateMachine<S, T>,
    state: S,
}

impl<'m, S: StateId, T: TriggerId> StateConfigurator<'m, S, T> {
    pub(crate) fn new(machine: &'m mut StateMachine<S, T>, state: S) -> Self {
        Self { machine, state }
    }

    /// Identifier this configurator was obtained for.
    pub fn state(&self) -> &S {
        &self.state
    }

    /// The `State` this identifier currently resolves to.
    pub fn representation(&self) -> Result<&State<S, T>, StateMachineError> {
        self.machine.get_state_configs(&self.state)
    }

    fn target(&mut self) -> Result<&mut State<S, T>, StateMachineError> {
        self.machine.get_state_configs_mut(&self.state)
    }

    /// Allow `trigger` to move this state to `destination`.
    pub fn permit(mut self, trigger: T, destination: S) -> Result<Self, StateMachineError> {
        tracing::trace!(state = ?self.state, trigger = ?trigger, destination = ?destination, "permit");
        self.target()?.add_transition(trigger, destination)?;
        Ok(self)
    }

    /// Allow `trigger` only if `condition` holds right now.
    ///
    /// The condition is evaluated once, during this call. It is not a guard:
    /// if it is false the trigger is never registered, and later changes to
    /// whatever the condition looked at have no effect on `fire`.
    pub fn permit_if<F>(self, trigger: T, destination: S, condition: F) -> Result<Self, StateMachineError>
    where
        F: FnOnce() -> bool,
    {
        if condition() {
            self.permit(trigger, destination)
        } else {
            Ok(self)
        }
    }

    /// Allow `trigger` to exit and re-enter this state.
    ///
    /// After [`substate_of`](Self::substate_of) the entry lands in the shared
    /// table but still targets this state, so firing it from the superstate
    /// or a sibling moves into this state instead of looping.
    pub fn permit_loopback(self, trigger: T) -> Result<Self, StateMachineError> {
        let own = self.state.clone();
        self.permit(trigger, own)
    }

    /// [`permit_loopback`](Self::permit_loopback), gated once like
    /// [`permit_if`](Self::permit_if).
    pub fn permit_loopback_if<F>(self, trigger: T, condition: F) -> Result<Self, StateMachineError>
    where
        F: FnOnce() -> bool,
    {
        if condition() {
            self.permit_loopback(trigger)
        } else {
            Ok(self)
        }
    }

    /// Run `hook` whenever a transition enters this state.
    pub fn on_enter(mut self, hook: impl Into<Option<Hook>>) -> Result<Self, StateMachineError> {
        let hook = hook.into().ok_or(StateMachineError::NullAction)?;
        self.target()?.add_entry_hook(hook)?;
        Ok(self)
    }

    /// Run `hook` whenever a transition leaves this state.
    pub fn on_exit(mut self, hook: impl Into<Option<Hook>>) -> Result<Self, StateMachineError> {
        let hook = hook.into().ok_or(StateMachineError::NullAction)?;
        self.target()?.add_exit_hook(hook)?;
        Ok(self)
    }

    /// Bind this state to the `State` of `super_state`.
    ///
    /// From here on this identifier shares the superstate's transitions and
    /// hooks: anything permitted through this configurator is also permitted
    /// from the superstate and from its other substates, and vice versa.
    /// Whatever was configured for this identifier before the call is left
    /// behind. `super_state` must already be configured.
    pub fn substate_of(self, super_state: S) -> Result<Self, StateMachineError> {
        self.machine.rebind(&self.state, &super_state)?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Motion {
        Root,
        Grounded,
        Idle,
        Walk,
        Jump,
    }

    #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
    enum Signal {
        Jump,
        Land,
        Tick,
    }

    #[test]
    fn permit_registers_transition() {
        let mut machine = StateMachine::new(Motion::Root);
        machine
            .configure(Motion::Root)
            .permit(Signal::Jump, Motion::Jump)
            .unwrap();

        assert!(machine.can_fire(&Signal::Jump));
        assert!(!machine.can_fire(&Signal::Land));
    }

    #[test]
    fn duplicate_permit_fails_even_across_configure_calls() {
        let mut machine = StateMachine::new(Motion::Root);
        machine
            .configure(Motion::Root)
            .permit(Signal::Jump, Motion::Jump)
            .unwrap();

        let result = machine.configure(Motion::Root).permit(Signal::Jump, Motion::Idle);

        assert!(matches!(
            result,
            Err(StateMachineError::DuplicateTrigger { .. })
        ));
    }

    #[test]
    fn permit_if_evaluates_condition_once() {
        let calls = Cell::new(0);
        let allowed = Cell::new(false);
        let mut machine = StateMachine::new(Motion::Root);
        machine
            .configure(Motion::Root)
            .permit_if(Signal::Jump, Motion::Jump, || {
                calls.set(calls.get() + 1);
                allowed.get()
            })
            .unwrap();
        machine.configure(Motion::Jump);

        allowed.set(true);

        assert_eq!(calls.get(), 1);
        assert!(!machine.can_fire(&Signal::Jump));
        assert!(matches!(
            machine.fire(Signal::Jump),
            Err(StateMachineError::TriggerNotPermitted { .. })
        ));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn permit_if_true_registers_transition() {
        let mut machine = StateMachine::new(Motion::Root);
        machine
            .configure(Motion::Root)
            .permit_if(Signal::Jump, Motion::Jump, || true)
            .unwrap();

        assert!(machine.can_fire(&Signal::Jump));
    }

    #[test]
    fn loopback_targets_own_state() {
        let mut machine = StateMachine::new(Motion::Idle);
        let configurator = machine
            .configure(Motion::Idle)
            .permit_loopback(Signal::Tick)
            .unwrap()
            .permit_loopback_if(Signal::Land, || false)
            .unwrap();

        let representation = configurator.representation().unwrap();
        assert_eq!(
            representation.get_transition_state(&Signal::Tick).unwrap(),
            &Motion::Idle
        );
        assert!(!representation.can_handle(&Signal::Land));
    }

    #[test]
    fn absent_hooks_are_rejected() {
        let mut machine: StateMachine<Motion, Signal> = StateMachine::new(Motion::Root);

        assert!(matches!(
            machine.configure(Motion::Root).on_enter(None),
            Err(StateMachineError::NullAction)
        ));
        assert!(matches!(
            machine.configure(Motion::Root).on_exit(None),
            Err(StateMachineError::NullAction)
        ));
    }

    #[test]
    fn registering_the_same_hook_twice_fails() {
        let mut machine: StateMachine<Motion, Signal> = StateMachine::new(Motion::Root);
        let hook = Hook::new(|| {});

        let result = machine
            .configure(Motion::Root)
            .on_exit(hook.clone())
            .unwrap()
            .on_exit(hook);

        assert!(matches!(
            result,
            Err(StateMachineError::DuplicateHook { .. })
        ));
    }

    #[test]
    fn substate_of_itself_is_cyclic() {
        let mut machine: StateMachine<Motion, Signal> = StateMachine::new(Motion::Root);

        let result = machine.configure(Motion::Grounded).substate_of(Motion::Grounded);

        assert!(matches!(
            result,
            Err(StateMachineError::CyclicConfiguration { .. })
        ));
    }

    #[test]
    fn substate_of_unconfigured_superstate_fails() {
        let mut machine: StateMachine<Motion, Signal> = StateMachine::new(Motion::Root);

        let result = machine.configure(Motion::Walk).substate_of(Motion::Grounded);

        assert!(matches!(
            result,
            Err(StateMachineError::UnconfiguredState { .. })
        ));
    }

    #[test]
    fn substates_share_the_superstate_table() {
        let mut machine = StateMachine::new(Motion::Walk);
        machine.configure(Motion::Grounded);
        machine.configure(Motion::Jump);
        machine
            .configure(Motion::Idle)
            .substate_of(Motion::Grounded)
            .unwrap();
        machine
            .configure(Motion::Walk)
            .substate_of(Motion::Grounded)
            .unwrap()
            .permit(Signal::Jump, Motion::Jump)
            .unwrap();

        for state in [Motion::Walk, Motion::Idle, Motion::Grounded] {
            let config = machine.get_state_configs(&state).unwrap();
            assert!(config.can_handle(&Signal::Jump), "{state:?}");
            assert!(config.includes(&Motion::Grounded));
        }
        assert!(machine.can_fire(&Signal::Jump));
    }

    #[test]
    fn substate_leaves_earlier_configuration_behind() {
        let mut machine = StateMachine::new(Motion::Walk);
        machine.configure(Motion::Grounded);
        machine
            .configure(Motion::Walk)
            .permit(Signal::Tick, Motion::Walk)
            .unwrap()
            .substate_of(Motion::Grounded)
            .unwrap();

        assert!(!machine.can_fire(&Signal::Tick));
        assert!(!machine
            .get_state_configs(&Motion::Grounded)
            .unwrap()
            .can_handle(&Signal::Tick));
    }

    #[test]
    fn configure_is_idempotent_after_substate_binding() {
        let mut machine = StateMachine::new(Motion::Walk);
        machine.configure(Motion::Grounded);
        machine
            .configure(Motion::Walk)
            .substate_of(Motion::Grounded)
            .unwrap();

        // a second configure keeps the substate binding
        machine
            .configure(Motion::Walk)
            .permit(Signal::Jump, Motion::Jump)
            .unwrap();

        assert!(machine
            .get_state_configs(&Motion::Grounded)
            .unwrap()
            .can_handle(&Signal::Jump));
    }
}
