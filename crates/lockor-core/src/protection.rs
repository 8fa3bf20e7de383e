//! OS write-permission handling for the `hard` protection level

use std::path::Path;

use lockor_core_types::ProtectionLevel;

use crate::errors::Result;
use crate::ports::PermissionOps;

const WRITE_BITS: u32 = 0o222;
const OWNER_WRITE: u32 = 0o200;

/// Mode with owner, group and other write bits cleared
pub fn read_only_mode(mode: u32) -> u32 {
    mode & !WRITE_BITS
}

/// Mode with the owner write bit set
pub fn owner_writable_mode(mode: u32) -> u32 {
    mode | OWNER_WRITE
}

/// Strip every write bit from `path`
///
/// # Errors
/// Fails when the mode cannot be read or written.
pub fn make_read_only(ops: &dyn PermissionOps, path: &Path) -> Result<()> {
    let mode = ops.mode(path)?;
    let target = read_only_mode(mode);
    if target != mode {
        ops.set_mode(path, target)?;
    }
    tracing::debug!(path = %path.display(), mode = format!("{:o}", target), "write bits stripped");
    Ok(())
}

/// Give the owner write permission back
///
/// Group and other write bits are not restored.
///
/// # Errors
/// Fails when the mode cannot be read or written.
pub fn restore_owner_write(ops: &dyn PermissionOps, path: &Path) -> Result<()> {
    let mode = ops.mode(path)?;
    let target = owner_writable_mode(mode);
    if target != mode {
        ops.set_mode(path, target)?;
    }
    tracing::debug!(path = %path.display(), mode = format!("{:o}", target), "owner write restored");
    Ok(())
}

/// Bring a locked file's mode in line with `level`
///
/// # Errors
/// Fails when the mode cannot be read or written.
pub fn apply_level(ops: &dyn PermissionOps, path: &Path, level: ProtectionLevel) -> Result<()> {
    if level.strips_write_permission() {
        make_read_only(ops, path)
    } else {
        restore_owner_write(ops, path)
    }
}
