//! Jump Motion State Machine
//!
//! Drives a player's motion through root -> jump -> idle with entry and exit
//! hooks timing the jump.
//!
//! Key concepts:
//! - Fluent configuration with `configure(state)`
//! - Entry/exit hooks capturing host state through closures
//! - A state without outgoing triggers rejects every fire
//!
//! Run with: RUST_LOG=hsm=debug cargo run --example jump_motion

use chrono::Utc;
use hsm::core::{Hook, StateMachineError};
use hsm::machine::StateMachine;
use hsm::{state_enum, trigger_enum};
use std::sync::{Arc, Mutex};
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Motion {
        Root,
        Idle,
        Jump,
    }
}

trigger_enum! {
    enum Signal {
        JumpSignal,
    }
}

fn main() -> Result<(), StateMachineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();

    println!("=== Jump Motion State Machine ===\n");

    let started = Arc::new(Mutex::new(None));
    let start_timer = {
        let started = Arc::clone(&started);
        Hook::new(move || {
            let now = Utc::now();
            println!("  jump started at {now}");
            if let Ok(mut slot) = started.lock() {
                *slot = Some(now);
            }
        })
    };
    let stop_timer = {
        let started = Arc::clone(&started);
        Hook::new(move || {
            let now = Utc::now();
            let airtime = started
                .lock()
                .ok()
                .and_then(|slot| *slot)
                .map(|at| now.signed_duration_since(at));
            println!("  jump ended at {now} (airtime {airtime:?})");
        })
    };

    let mut machine = StateMachine::new(Motion::Root);
    machine
        .configure(Motion::Root)
        .permit(Signal::JumpSignal, Motion::Jump)?;
    machine
        .configure(Motion::Jump)
        .on_enter(start_timer)?
        .on_exit(stop_timer)?
        .permit(Signal::JumpSignal, Motion::Idle)?;
    machine.configure(Motion::Idle);
    machine.on_transitioned(Hook::new(|| println!("  transitioning...")))?;

    println!("{machine}\n");

    for _ in 0..3 {
        println!("Triggering: {}", Signal::JumpSignal);
        match machine.fire(Signal::JumpSignal) {
            Ok(transition) => println!("  {} -> {}", transition.from(), transition.to()),
            Err(err) => println!("  rejected: {err}"),
        }
        println!("{machine}\n");
    }

    println!("Path: {:?}", machine.history().get_path());

    println!("\n=== Example Complete ===");
    Ok(())
}
