//! Subcommand implementations

use std::path::Path;
use std::sync::Arc;

use lockor_engine::{open_workspace, Session};

use crate::notifier::ConsoleNotifier;

pub mod level;
pub mod lock;
pub mod status;

pub fn open_session(workspace: &Path) -> Result<Session, Box<dyn std::error::Error>> {
    Ok(open_workspace(workspace, Arc::new(ConsoleNotifier))?)
}

/// Report best-effort failures without failing the command
pub fn report_failures(failures: &[lockor_core::LockorError]) {
    for failure in failures {
        eprintln!("warning: {} [{}]", failure, failure.code());
    }
}
