//! Engine-level mutating commands.

use lockor_core::errors::ExError;
use lockor_core::{log_op_end, log_op_error, log_op_start, LevelChangeOutcome, LockOutcome};
use lockor_core_types::ProtectionLevel;
use lockor_store::errors::Result;

use crate::session::Session;

/// Commands that change lock state or protection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineCommand {
    /// Lock a file; `None` targets the active document.
    LockFile { path: Option<String> },
    /// Unlock a file; `None` targets the active document.
    UnlockFile { path: Option<String> },
    /// Lock if unlocked, unlock if locked.
    ToggleLock { path: Option<String> },
    /// Re-derive permissions and artifacts from the configured level.
    ApplyProtectionLevel,
    /// Write a new level to the settings file, then re-apply it.
    SetProtectionLevel { level: ProtectionLevel },
}

impl EngineCommand {
    /// Operation name used in boundary logs
    pub fn op_name(&self) -> &'static str {
        match self {
            EngineCommand::LockFile { .. } => "lock_file",
            EngineCommand::UnlockFile { .. } => "unlock_file",
            EngineCommand::ToggleLock { .. } => "toggle_lock",
            EngineCommand::ApplyProtectionLevel => "apply_protection_level",
            EngineCommand::SetProtectionLevel { .. } => "set_protection_level",
        }
    }
}

/// Result of applying an engine command.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommandResult {
    /// Outcome of lock, unlock or toggle.
    Lock(LockOutcome),
    /// Outcome of applying or setting the protection level.
    LevelChange(LevelChangeOutcome),
}

impl EngineCommandResult {
    /// Best-effort failures collected while applying the command
    pub fn failures(&self) -> &[lockor_core::LockorError] {
        match self {
            EngineCommandResult::Lock(outcome) => &outcome.failures,
            EngineCommandResult::LevelChange(outcome) => &outcome.failures,
        }
    }
}

/// Apply an engine command to a session.
///
/// # Errors
/// Fails when the target path cannot be resolved or the settings file
/// cannot be written. State conflicts (already locked, not locked) are not
/// errors; they are reported in the outcome.
pub fn apply_engine_command(
    cmd: EngineCommand,
    session: &mut Session,
) -> Result<EngineCommandResult> {
    let op = cmd.op_name();
    log_op_start!(op);
    let start = std::time::Instant::now();

    let result = (|| -> Result<EngineCommandResult> {
        match cmd {
            EngineCommand::LockFile { path } => {
                let path = session.resolve_path(path.as_deref())?;
                Ok(EngineCommandResult::Lock(session.manager_mut().lock(&path)))
            }
            EngineCommand::UnlockFile { path } => {
                let path = session.resolve_path(path.as_deref())?;
                Ok(EngineCommandResult::Lock(session.manager_mut().unlock(&path)))
            }
            EngineCommand::ToggleLock { path } => {
                let path = session.resolve_path(path.as_deref())?;
                Ok(EngineCommandResult::Lock(session.manager_mut().toggle(&path)))
            }
            EngineCommand::ApplyProtectionLevel => {
                let outcome = session.manager_mut().apply_protection_level_change();
                session.set_last_level(outcome.level);
                Ok(EngineCommandResult::LevelChange(outcome))
            }
            EngineCommand::SetProtectionLevel { level } => {
                session
                    .settings_file()
                    .write_protection_level(level)
                    .map_err(|e: ExError| e.with_op("set_protection_level"))?;
                let outcome = session.manager_mut().apply_protection_level_change();
                session.set_last_level(outcome.level);
                Ok(EngineCommandResult::LevelChange(outcome))
            }
        }
    })();

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(r) => log_op_end!(op, duration_ms = elapsed, failures = r.failures().len()),
        Err(e) => {
            let e_clone = e.clone();
            log_op_error!(op, e_clone, duration_ms = elapsed);
        }
    }
    result
}
