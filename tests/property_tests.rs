//! Property-based tests for the state machine engine.
//!
//! These tests use proptest to verify properties hold across
//! many randomly generated configurations and trigger sequences.

use hsm::core::{Hook, StateMachineError};
use hsm::machine::StateMachine;
use proptest::prelude::*;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

const STATES: u8 = 5;
const TRIGGERS: u8 = 4;

prop_compose! {
    fn arbitrary_state()(state in 0..STATES) -> u8 {
        state
    }
}

prop_compose! {
    fn arbitrary_trigger()(trigger in 0..TRIGGERS) -> u8 {
        trigger
    }
}

// (source, trigger, destination) triples; for a repeated (source, trigger)
// the first destination wins.
prop_compose! {
    fn arbitrary_table()(
        edges in prop::collection::vec(
            (arbitrary_state(), arbitrary_trigger(), arbitrary_state()),
            0..20,
        )
    ) -> HashMap<(u8, u8), u8> {
        let mut table = HashMap::new();
        for (source, trigger, destination) in edges {
            table.entry((source, trigger)).or_insert(destination);
        }
        table
    }
}

fn build(table: &HashMap<(u8, u8), u8>) -> StateMachine<u8, u8> {
    let mut machine = StateMachine::new(0);
    for state in 0..STATES {
        machine.configure(state);
    }
    for ((source, trigger), destination) in table {
        machine
            .configure(*source)
            .permit(*trigger, *destination)
            .unwrap();
    }
    machine
}

proptest! {
    #[test]
    fn can_fire_matches_permitted_triggers(
        table in arbitrary_table(),
        trigger in arbitrary_trigger(),
    ) {
        let machine = build(&table);
        prop_assert_eq!(machine.can_fire(&trigger), table.contains_key(&(0, trigger)));
    }

    #[test]
    fn fire_lands_exactly_on_configured_destination(
        table in arbitrary_table(),
        triggers in prop::collection::vec(arbitrary_trigger(), 0..30),
    ) {
        let mut machine = build(&table);

        for trigger in triggers {
            let before = *machine.current_state();
            match table.get(&(before, trigger)) {
                Some(destination) => {
                    let transition = machine.fire(trigger).unwrap();
                    prop_assert_eq!(machine.current_state(), destination);
                    prop_assert_eq!(transition.from(), &before);
                    prop_assert_eq!(transition.is_loopback(), before == *destination);
                }
                None => {
                    let result = machine.fire(trigger);
                    let rejected = matches!(
                        result,
                        Err(StateMachineError::TriggerNotPermitted { .. })
                    );
                    prop_assert!(rejected, "fire without a permitted trigger must be rejected");
                    prop_assert_eq!(*machine.current_state(), before);
                }
            }
        }
    }

    #[test]
    fn history_path_follows_fired_transitions(
        table in arbitrary_table(),
        triggers in prop::collection::vec(arbitrary_trigger(), 0..30),
    ) {
        let mut machine = build(&table);
        let mut expected = vec![0u8];

        for trigger in triggers {
            if let Ok(transition) = machine.fire(trigger) {
                expected.push(*transition.to());
            }
        }

        let path: Vec<u8> = machine.history().get_path().into_iter().copied().collect();
        if machine.history().is_empty() {
            prop_assert!(path.is_empty());
        } else {
            prop_assert_eq!(path, expected);
        }
    }

    #[test]
    fn duplicate_permit_always_fails(
        source in arbitrary_state(),
        trigger in arbitrary_trigger(),
        first in arbitrary_state(),
        second in arbitrary_state(),
    ) {
        let mut machine: StateMachine<u8, u8> = StateMachine::new(source);
        machine.configure(source).permit(trigger, first).unwrap();

        let result = machine.configure(source).permit(trigger, second);

        let duplicate = matches!(result, Err(StateMachineError::DuplicateTrigger { .. }));
        prop_assert!(duplicate);
        prop_assert_eq!(
            machine.get_state_configs(&source).unwrap().get_transition_state(&trigger).unwrap(),
            &first
        );
    }

    #[test]
    fn hooks_run_exit_then_entry_in_order(
        exits in 0usize..4,
        entries in 0usize..4,
    ) {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut machine = StateMachine::new(0u8);
        machine.configure(0).permit(0u8, 1).unwrap();
        machine.configure(1);

        for i in 0..exits {
            let log = Arc::clone(&log);
            machine
                .configure(0)
                .on_exit(Hook::new(move || log.lock().unwrap().push(format!("exit {i}"))))
                .unwrap();
        }
        for i in 0..entries {
            let log = Arc::clone(&log);
            machine
                .configure(1)
                .on_enter(Hook::new(move || log.lock().unwrap().push(format!("enter {i}"))))
                .unwrap();
        }

        machine.fire(0).unwrap();

        let expected: Vec<String> = (0..exits)
            .map(|i| format!("exit {i}"))
            .chain((0..entries).map(|i| format!("enter {i}")))
            .collect();
        prop_assert_eq!(log.lock().unwrap().clone(), expected);
    }
}
