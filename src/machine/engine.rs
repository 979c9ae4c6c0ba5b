//! The concrete state machine engine.

use crate::builder::StateConfigurator;
use crate::core::{
    describe, HistoryEntry, Hook, HookPhase, State, StateHistory, StateId, StateMachineError,
    Transition, TriggerId,
};
use crate::machine::options::MachineOptions;
use chrono::Utc;
use std::collections::HashMap;
use std::fmt;

/// State machine over caller-defined states and triggers.
///
/// Configure every state up front with [`StateMachine::configure`], then
/// drive the machine with [`StateMachine::fire`].
///
/// `State` records live in an arena owned by the machine. Each configured
/// identifier is bound to one arena slot. Declaring a substate rebinds the
/// substate's identifier to the superstate's slot, so both identifiers share
/// one transition table and one set of hooks from then on.
///
/// The machine does no internal locking. Share it across threads behind a
/// mutex or confine it to one owner. Hooks cannot reach the machine they run
/// in unless the host smuggles a handle into the closure; a hook that fires
/// the same machine again would interleave exit and entry hooks of two
/// transitions, and nothing here guards against that.
///
/// # Example
///
/// ```rust
/// use hsm::machine::StateMachine;
///
/// let mut machine = StateMachine::new("root");
/// machine.configure("root").permit("jump_signal", "jump")?;
/// machine.configure("jump").permit("jump_signal", "idle")?;
/// machine.configure("idle");
///
/// machine.fire("jump_signal")?;
/// assert!(machine.is_in_state(&"jump"));
///
/// machine.fire("jump_signal")?;
/// assert!(machine.is_in_state(&"idle"));
///
/// assert!(machine.fire("jump_signal").is_err());
/// # Ok::<(), hsm::core::StateMachineError>(())
/// ```
pub struct StateMachine<S, T> {
    current: S,
    states: Vec<State<S, T>>,
    bindings: HashMap<S, usize>,
    on_transitioned: Option<Hook>,
    history: StateHistory<S, T>,
    options: MachineOptions,
}

impl<S: StateId, T: TriggerId> StateMachine<S, T> {
    /// Create a machine in `initial` with default options.
    ///
    /// No entry hooks run for the initial state.
    pub fn new(initial: S) -> Self {
        Self::with_options(initial, MachineOptions::default())
    }

    pub fn with_options(initial: S, options: MachineOptions) -> Self {
        let history = match options.history_capacity {
            Some(capacity) => StateHistory::with_capacity(capacity),
            None => StateHistory::new(),
        };
        Self {
            current: initial,
            states: Vec::new(),
            bindings: HashMap::new(),
            on_transitioned: None,
            history,
            options,
        }
    }

    pub fn current_state(&self) -> &S {
        &self.current
    }

    pub fn options(&self) -> &MachineOptions {
        &self.options
    }

    /// Transitions fired so far, subject to [`MachineOptions`].
    pub fn history(&self) -> &StateHistory<S, T> {
        &self.history
    }

    /// Most recently committed transition, if history is recorded.
    pub fn last_transition(&self) -> Option<&Transition<S, T>> {
        self.history.last().map(|entry| &entry.transition)
    }

    /// Configuration surface for `state`.
    ///
    /// The first call registers a fresh, empty `State` for the identifier.
    /// Later calls hand back a configurator over the same binding.
    pub fn configure(&mut self, state: S) -> StateConfigurator<'_, S, T> {
        if !self.bindings.contains_key(&state) {
            tracing::trace!(state = ?state, "registering state");
            let slot = self.states.len();
            self.states.push(State::new(state.clone()));
            self.bindings.insert(state.clone(), slot);
        }
        StateConfigurator::new(self, state)
    }

    /// The `State` the identifier is currently bound to.
    pub fn get_state_configs(&self, state: &S) -> Result<&State<S, T>, StateMachineError> {
        let slot = self.slot(state)?;
        Ok(&self.states[slot])
    }

    pub(crate) fn get_state_configs_mut(
        &mut self,
        state: &S,
    ) -> Result<&mut State<S, T>, StateMachineError> {
        let slot = self.slot(state)?;
        Ok(&mut self.states[slot])
    }

    /// Point `state` at whatever `State` `super_state` is bound to.
    pub(crate) fn rebind(&mut self, state: &S, super_state: &S) -> Result<(), StateMachineError> {
        if state == super_state {
            return Err(StateMachineError::CyclicConfiguration {
                state: describe(state),
            });
        }
        let target = self.slot(super_state)?;
        let binding = self
            .bindings
            .get_mut(state)
            .ok_or_else(|| StateMachineError::UnconfiguredState {
                state: describe(state),
            })?;
        *binding = target;
        tracing::trace!(state = ?state, super_state = ?super_state, "bound substate");
        Ok(())
    }

    fn slot(&self, state: &S) -> Result<usize, StateMachineError> {
        self.bindings
            .get(state)
            .copied()
            .ok_or_else(|| StateMachineError::UnconfiguredState {
                state: describe(state),
            })
    }

    /// Configured identifiers with the `State` each resolves to.
    pub fn configured_states(&self) -> impl Iterator<Item = (&S, &State<S, T>)> {
        self.bindings
            .iter()
            .map(|(state, slot)| (state, &self.states[*slot]))
    }

    /// Whether `state` was ever passed to [`StateMachine::configure`].
    pub fn is_configured(&self, state: &S) -> bool {
        self.bindings.contains_key(state)
    }

    /// Distinct `State` records reachable from some identifier, in the order
    /// they were first registered. Records shared by substates appear once.
    pub(crate) fn bound_states(&self) -> Vec<&State<S, T>> {
        let mut slots: Vec<usize> = self.bindings.values().copied().collect();
        slots.sort_unstable();
        slots.dedup();
        slots.into_iter().map(|slot| &self.states[slot]).collect()
    }

    /// Exact equality against the current state.
    ///
    /// Superstates of the current state do not count.
    pub fn is_in_state(&self, state: &S) -> bool {
        self.current == *state
    }

    /// Whether `fire(trigger)` would pass the permission check.
    ///
    /// Never fails: an unconfigured current state permits nothing.
    pub fn can_fire(&self, trigger: &T) -> bool {
        self.get_state_configs(&self.current)
            .map(|config| config.can_handle(trigger))
            .unwrap_or(false)
    }

    /// Triggers permitted from the current state, in registration order.
    pub fn permitted_triggers(&self) -> Result<Vec<T>, StateMachineError> {
        Ok(self
            .get_state_configs(&self.current)?
            .permitted_triggers()
            .cloned()
            .collect())
    }

    /// Install the callback run before every transition's hooks.
    ///
    /// Replaces any previously installed callback.
    pub fn on_transitioned(&mut self, hook: impl Into<Option<Hook>>) -> Result<(), StateMachineError> {
        let hook = hook.into().ok_or(StateMachineError::NullAction)?;
        self.on_transitioned = Some(hook);
        Ok(())
    }

    /// Fire `trigger` from the current state.
    ///
    /// Runs the `on_transitioned` callback, then the source state's exit
    /// hooks, then the destination state's entry hooks, and only then
    /// commits the new current state. Any failure returns early and leaves
    /// the current state untouched; hooks that already ran are not undone.
    pub fn fire(&mut self, trigger: T) -> Result<Transition<S, T>, StateMachineError> {
        let source_slot = self.slot(&self.current)?;
        let config = &self.states[source_slot];
        if !config.can_handle(&trigger) {
            return Err(StateMachineError::TriggerNotPermitted {
                state: describe(&self.current),
                trigger: describe(&trigger),
            });
        }
        let destination = config.get_transition_state(&trigger)?.clone();
        let destination_slot = self.slot(&destination)?;

        if let Some(callback) = &self.on_transitioned {
            callback
                .call()
                .map_err(|source| StateMachineError::HookFailed {
                    state: describe(&self.current),
                    phase: HookPhase::Transitioned,
                    source,
                })
                .inspect_err(|err| tracing::warn!(error = %err, "transition aborted"))?;
        }

        let transition = Transition::new(self.current.clone(), destination, trigger);
        self.states[source_slot]
            .run_exit_hooks(&transition)
            .and_then(|()| self.states[destination_slot].run_entry_hooks(&transition))
            .inspect_err(|err| tracing::warn!(error = %err, "transition aborted"))?;

        tracing::debug!(
            from = ?transition.from(),
            to = ?transition.to(),
            trigger = ?transition.trigger(),
            loopback = transition.is_loopback(),
            "transitioned"
        );
        self.current = transition.to().clone();
        if self.options.record_history {
            self.history.push(HistoryEntry {
                transition: transition.clone(),
                timestamp: Utc::now(),
            });
        }
        Ok(transition)
    }
}

impl<S: StateId, T: TriggerId> fmt::Display for StateMachine<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Current state: {:?} | Permitted triggers: ", self.current)?;
        if let Ok(config) = self.get_state_configs(&self.current) {
            for (index, trigger) in config.permitted_triggers().enumerate() {
                if index > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{trigger:?}")?;
            }
        }
        Ok(())
    }
}

impl<S: StateId, T: TriggerId> fmt::Debug for StateMachine<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StateMachine")
            .field("current", &self.current)
            .field("configured", &self.bindings.len())
            .field("history", &self.history.len())
            .finish()
    }
}
