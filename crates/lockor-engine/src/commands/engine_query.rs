//! Engine-level read-only query surface.
//!
//! `apply_engine_query` never mutates the session.

use lockor_core::render::display_path;
use lockor_core::{log_op_end, log_op_error, log_op_start, LockStatusInfo};
use lockor_store::errors::Result;
use serde::Serialize;

use crate::session::Session;

/// Read-only queries supported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineQuery {
    /// Locked files with workspace-relative labels, for display.
    ShowLockedFiles,
    /// Whether a file is locked; `None` targets the active document.
    IsFileLocked { path: Option<String> },
    /// Raw lock keys.
    GetLockedFiles,
    /// Structured status; `None` targets the active document, or the
    /// workspace as a whole when no document is active.
    GetLockStatusInfo { path: Option<String> },
}

impl EngineQuery {
    /// Operation name used in boundary logs
    pub fn op_name(&self) -> &'static str {
        match self {
            EngineQuery::ShowLockedFiles => "show_locked_files",
            EngineQuery::IsFileLocked { .. } => "is_file_locked",
            EngineQuery::GetLockedFiles => "get_locked_files",
            EngineQuery::GetLockStatusInfo { .. } => "get_lock_status_info",
        }
    }
}

/// One row of the locked files listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LockedFileEntry {
    pub path: String,
    /// Path relative to the workspace root when it lies below it
    pub label: String,
}

/// Result of an engine query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineQueryResult {
    LockedFileList(Vec<LockedFileEntry>),
    IsLocked(bool),
    LockedFiles(Vec<String>),
    LockStatus(LockStatusInfo),
}

/// Apply a read-only query to a session.
///
/// # Errors
/// Fails when a path argument is needed and cannot be resolved.
pub fn apply_engine_query(query: EngineQuery, session: &Session) -> Result<EngineQueryResult> {
    let op = query.op_name();
    log_op_start!(op);
    let start = std::time::Instant::now();

    let result = (|| -> Result<EngineQueryResult> {
        let manager = session.manager();
        match query {
            EngineQuery::ShowLockedFiles => {
                let root = Some(session.root());
                let entries = manager
                    .list_locked()
                    .into_iter()
                    .map(|path| LockedFileEntry {
                        label: display_path(root, &path),
                        path,
                    })
                    .collect();
                Ok(EngineQueryResult::LockedFileList(entries))
            }
            EngineQuery::IsFileLocked { path } => {
                let path = session.lookup_path(path.as_deref())?;
                Ok(EngineQueryResult::IsLocked(manager.is_locked(&path)))
            }
            EngineQuery::GetLockedFiles => {
                Ok(EngineQueryResult::LockedFiles(manager.list_locked()))
            }
            EngineQuery::GetLockStatusInfo { path } => {
                let path = match path {
                    Some(p) => Some(session.lookup_path(Some(&p))?),
                    None => session.active_document().map(str::to_string),
                };
                Ok(EngineQueryResult::LockStatus(
                    manager.lock_status_info(path.as_deref()),
                ))
            }
        }
    })();

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(_) => log_op_end!(op, duration_ms = elapsed),
        Err(e) => {
            let e_clone = e.clone();
            log_op_error!(op, e_clone, duration_ms = elapsed);
        }
    }
    result
}
