//! Validation Workflow
//!
//! Models a remote-settings validation flow where every "in progress" and
//! "finished" step shares one superstate configuration.
//!
//! Key concepts:
//! - Substates sharing the superstate's transitions
//! - Loopbacks gated once at configuration time
//! - Whole-configuration validation that reports every problem at once
//!
//! Run with: RUST_LOG=hsm=trace cargo run --example validation_workflow

use hsm::core::StateMachineError;
use hsm::machine::{MachineOptions, StateMachine};
use hsm::validation::validate;
use hsm::{state_enum, trigger_enum};
use stillwater::validation::Validation;
use tracing_subscriber::EnvFilter;

state_enum! {
    enum Step {
        Unvalidated,
        InProgress,
        Validated,
        FailedValidation,
        ValidationError,
    }
}

trigger_enum! {
    enum Signal {
        Validate,
        Succeeded,
        Failed,
        Errored,
        Retry,
    }
}

fn main() -> Result<(), StateMachineError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .init();

    println!("=== Validation Workflow ===\n");

    let remote_reachable = true;
    let mut machine =
        StateMachine::with_options(Step::Unvalidated, MachineOptions::default().history_capacity(16));

    machine
        .configure(Step::Unvalidated)
        .permit(Signal::Validate, Step::InProgress)?;
    machine
        .configure(Step::InProgress)
        .permit(Signal::Succeeded, Step::Validated)?
        .permit(Signal::Failed, Step::FailedValidation)?
        .permit(Signal::Errored, Step::ValidationError)?
        .permit_loopback_if(Signal::Retry, || remote_reachable)?;

    println!("Before finishing configuration:");
    report(&machine);

    // Finished steps all go back through validation the same way.
    machine
        .configure(Step::Validated)
        .permit(Signal::Validate, Step::InProgress)?;
    machine
        .configure(Step::FailedValidation)
        .substate_of(Step::Validated)?;
    machine
        .configure(Step::ValidationError)
        .substate_of(Step::Validated)?;

    println!("\nAfter finishing configuration:");
    report(&machine);

    for signal in [
        Signal::Validate,
        Signal::Retry,
        Signal::Failed,
        Signal::Validate,
        Signal::Succeeded,
    ] {
        let transition = machine.fire(signal)?;
        println!(
            "  {signal}: {} -> {}{}",
            transition.from(),
            transition.to(),
            if transition.is_loopback() { " (loopback)" } else { "" }
        );
    }

    println!("\n{machine}");
    println!("Path: {:?}", machine.history().get_path());

    println!("\n=== Example Complete ===");
    Ok(())
}

fn report(machine: &StateMachine<Step, Signal>) {
    match validate(machine) {
        Validation::Success(_) => println!("  configuration is complete"),
        Validation::Failure(violations) => {
            for violation in violations.iter() {
                println!("  - {violation}");
            }
        }
    }
}
