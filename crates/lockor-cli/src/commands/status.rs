//! Read-only commands

use std::path::Path;

use clap::Args;
use lockor_core::LockStatusInfo;
use lockor_engine::{apply_engine_query, EngineQuery, EngineQueryResult};

use super::lock::PathArgs;
use super::open_session;

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// File to report on; omit for the whole workspace
    pub path: Option<String>,

    /// Print the status as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute_list(workspace: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session(workspace)?;

    if let EngineQueryResult::LockedFileList(entries) =
        apply_engine_query(EngineQuery::ShowLockedFiles, &session)?
    {
        if entries.is_empty() {
            println!("No locked files");
        }
        for entry in entries {
            println!("{}", entry.label);
        }
    }

    Ok(())
}

pub fn execute_is_locked(
    workspace: &Path,
    args: PathArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session(workspace)?;

    if let EngineQueryResult::IsLocked(locked) = apply_engine_query(
        EngineQuery::IsFileLocked {
            path: Some(args.path),
        },
        &session,
    )? {
        println!("{}", locked);
    }

    Ok(())
}

pub fn execute_status(
    workspace: &Path,
    args: StatusArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let session = open_session(workspace)?;

    if let EngineQueryResult::LockStatus(info) =
        apply_engine_query(EngineQuery::GetLockStatusInfo { path: args.path }, &session)?
    {
        if args.json {
            println!("{}", serde_json::to_string_pretty(&info)?);
        } else {
            print_status(&info);
        }
    }

    Ok(())
}

fn print_status(info: &LockStatusInfo) {
    println!("Protection level: {}", info.protection_level);
    println!("Locked files: {}", info.locked_file_count);
    if let Some(file) = &info.file {
        println!("File: {}", file);
        println!("  locked: {}", info.is_locked);
        println!("  can save: {}", info.can_save);
        println!("  AI may modify: {}", info.can_ai_modify);
    }
}
