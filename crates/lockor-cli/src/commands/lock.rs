//! Lock, unlock, toggle and save check

use std::path::Path;

use clap::Args;
use lockor_core::{LockOutcome, LockTransition};
use lockor_engine::{apply_engine_command, EngineCommand, EngineCommandResult};

use super::{open_session, report_failures};

#[derive(Debug, Args)]
pub struct PathArgs {
    /// File path, absolute or relative to the workspace root
    pub path: String,
}

pub fn execute_lock(workspace: &Path, args: PathArgs) -> Result<(), Box<dyn std::error::Error>> {
    run(workspace, EngineCommand::LockFile {
        path: Some(args.path),
    })
}

pub fn execute_unlock(workspace: &Path, args: PathArgs) -> Result<(), Box<dyn std::error::Error>> {
    run(workspace, EngineCommand::UnlockFile {
        path: Some(args.path),
    })
}

pub fn execute_toggle(workspace: &Path, args: PathArgs) -> Result<(), Box<dyn std::error::Error>> {
    run(workspace, EngineCommand::ToggleLock {
        path: Some(args.path),
    })
}

fn run(workspace: &Path, cmd: EngineCommand) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session(workspace)?;

    match apply_engine_command(cmd, &mut session)? {
        EngineCommandResult::Lock(outcome) => print_outcome(&outcome),
        EngineCommandResult::LevelChange(outcome) => report_failures(&outcome.failures),
    }

    Ok(())
}

fn print_outcome(outcome: &LockOutcome) {
    let verb = match outcome.transition {
        LockTransition::Locked => "Locked",
        LockTransition::AlreadyLocked => "Already locked",
        LockTransition::Unlocked => "Unlocked",
        LockTransition::NotLocked => "Not locked",
    };
    println!("{}: {} ({})", verb, outcome.path, outcome.level);
    report_failures(&outcome.failures);
}

/// Exit status tells external tooling whether the write may proceed
pub fn execute_check_save(
    workspace: &Path,
    args: PathArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session(workspace)?;
    session.will_save(&args.path)?;
    println!("Save allowed: {}", session.lookup_path(Some(&args.path))?);
    Ok(())
}
