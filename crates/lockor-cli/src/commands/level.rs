//! Protection level commands

use std::path::Path;

use clap::Args;
use lockor_core::{LevelChangeOutcome, LockorError, ProtectionLevel};
use lockor_engine::{apply_engine_command, EngineCommand, EngineCommandResult};

use super::{open_session, report_failures};

#[derive(Debug, Args)]
pub struct LevelArgs {
    /// New level: soft, ai-aware or hard; omit to print the current one
    pub level: Option<String>,
}

pub fn execute(workspace: &Path, args: LevelArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session(workspace)?;

    let Some(raw) = args.level else {
        println!("{}", session.manager().protection_level());
        return Ok(());
    };

    let level: ProtectionLevel = raw.parse().map_err(|e| LockorError::InvalidConfig {
        message: format!("{}", e),
    })?;

    let result = apply_engine_command(EngineCommand::SetProtectionLevel { level }, &mut session)?;
    print_level_change(&result);
    Ok(())
}

pub fn execute_reapply(workspace: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = open_session(workspace)?;
    let result = apply_engine_command(EngineCommand::ApplyProtectionLevel, &mut session)?;
    print_level_change(&result);
    Ok(())
}

fn print_level_change(result: &EngineCommandResult) {
    if let EngineCommandResult::LevelChange(LevelChangeOutcome {
        level,
        files,
        failures,
    }) = result
    {
        println!("Protection level: {} (applied to {} locked files)", level, files);
        report_failures(failures);
    }
}
