//! Atomic write primitives
//!
//! Uses temp→rename so readers never observe a half-written artifact

use crate::errors::{io_error, Result};
use std::fs;
use std::path::Path;

/// Atomically replace the content of `target_path`
///
/// Missing parent directories are created.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    if let Some(parent) = target_path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error("create_artifact_dir", e))?;
    }

    let temp_path = temp_path_for(target_path);

    fs::write(&temp_path, content).map_err(|e| io_error("write_artifact_temp", e))?;

    if let Err(e) = fs::rename(&temp_path, target_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("rename_artifact_temp", e));
    }

    Ok(())
}

/// Remove `target_path`; an absent file is not an error
pub fn remove_if_exists(target_path: &Path) -> Result<()> {
    match fs::remove_file(target_path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(io_error("remove_artifact", e)),
    }
}

// Appends rather than replaces the extension: `status.md` -> `status.md.tmp`
fn temp_path_for(target_path: &Path) -> std::path::PathBuf {
    let mut name = target_path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    target_path.with_file_name(name)
}
