//! The per-state configuration: outgoing transitions and lifecycle hooks.

use super::error::{HookPhase, StateMachineError};
use super::hook::Hook;
use super::id::{describe, StateId, TriggerId};
use super::transition::Transition;
use std::collections::HashMap;

/// One state's outgoing transitions and entry/exit hooks.
///
/// Several state identifiers may resolve to the same `State` once substates
/// are declared; see `StateConfigurator::substate_of`.
///
/// # Example
///
/// ```rust
/// use hsm::core::State;
///
/// let mut root = State::new("root");
/// root.add_transition("jump_signal", "jump").unwrap();
///
/// assert!(root.can_handle(&"jump_signal"));
/// assert_eq!(root.get_transition_state(&"jump_signal").unwrap(), &"jump");
/// assert!(root.add_transition("jump_signal", "idle").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct State<S, T> {
    id: S,
    transitions: HashMap<T, S>,
    order: Vec<T>,
    entry_hooks: Vec<Hook>,
    exit_hooks: Vec<Hook>,
}

impl<S: StateId, T: TriggerId> State<S, T> {
    pub fn new(id: S) -> Self {
        Self {
            id,
            transitions: HashMap::new(),
            order: Vec::new(),
            entry_hooks: Vec::new(),
            exit_hooks: Vec::new(),
        }
    }

    /// Identifier this state was created for.
    pub fn id(&self) -> &S {
        &self.id
    }

    /// Identity check against this state's own id.
    pub fn includes(&self, state: &S) -> bool {
        self.id == *state
    }

    /// Register `trigger` as moving to `destination`.
    ///
    /// Fails with [`StateMachineError::DuplicateTrigger`] if the trigger is
    /// already registered here.
    pub fn add_transition(&mut self, trigger: T, destination: S) -> Result<(), StateMachineError> {
        if self.transitions.contains_key(&trigger) {
            return Err(StateMachineError::DuplicateTrigger {
                state: describe(&self.id),
                trigger: describe(&trigger),
            });
        }
        self.order.push(trigger.clone());
        self.transitions.insert(trigger, destination);
        Ok(())
    }

    pub fn can_handle(&self, trigger: &T) -> bool {
        self.transitions.contains_key(trigger)
    }

    /// Destination registered for `trigger`.
    pub fn get_transition_state(&self, trigger: &T) -> Result<&S, StateMachineError> {
        self.transitions
            .get(trigger)
            .ok_or_else(|| StateMachineError::TransitionNotFound {
                state: describe(&self.id),
                trigger: describe(trigger),
            })
    }

    /// Registered triggers, in registration order.
    pub fn permitted_triggers(&self) -> impl Iterator<Item = &T> {
        self.order.iter()
    }

    /// `(trigger, destination)` pairs, in registration order.
    pub fn transitions(&self) -> impl Iterator<Item = (&T, &S)> {
        self.order
            .iter()
            .filter_map(|trigger| self.transitions.get_key_value(trigger))
    }

    pub fn add_entry_hook(&mut self, hook: impl Into<Option<Hook>>) -> Result<(), StateMachineError> {
        let hook = hook.into().ok_or(StateMachineError::NullAction)?;
        Self::push_hook(&self.id, &mut self.entry_hooks, hook, HookPhase::Entry)
    }

    pub fn add_exit_hook(&mut self, hook: impl Into<Option<Hook>>) -> Result<(), StateMachineError> {
        let hook = hook.into().ok_or(StateMachineError::NullAction)?;
        Self::push_hook(&self.id, &mut self.exit_hooks, hook, HookPhase::Exit)
    }

    fn push_hook(
        id: &S,
        hooks: &mut Vec<Hook>,
        hook: Hook,
        phase: HookPhase,
    ) -> Result<(), StateMachineError> {
        if hooks.iter().any(|existing| existing.same_as(&hook)) {
            return Err(StateMachineError::DuplicateHook {
                state: describe(id),
                phase,
            });
        }
        hooks.push(hook);
        Ok(())
    }

    /// Run entry hooks in registration order, stopping at the first failure.
    pub fn run_entry_hooks(&self, transition: &Transition<S, T>) -> Result<(), StateMachineError> {
        Self::run_hooks(&self.entry_hooks, transition, transition.to(), HookPhase::Entry)
    }

    /// Run exit hooks in registration order, stopping at the first failure.
    pub fn run_exit_hooks(&self, transition: &Transition<S, T>) -> Result<(), StateMachineError> {
        Self::run_hooks(&self.exit_hooks, transition, transition.from(), HookPhase::Exit)
    }

    fn run_hooks(
        hooks: &[Hook],
        transition: &Transition<S, T>,
        state: &S,
        phase: HookPhase,
    ) -> Result<(), StateMachineError> {
        for (index, hook) in hooks.iter().enumerate() {
            tracing::trace!(
                state = ?state,
                trigger = ?transition.trigger(),
                %phase,
                index,
                "running hook"
            );
            hook.call().map_err(|source| StateMachineError::HookFailed {
                state: describe(state),
                phase,
                source,
            })?;
        }
        Ok(())
    }
}
