//! File mode primitive backed by the real filesystem

use std::fs;
use std::path::Path;

use lockor_core::errors::LockorError;
use lockor_core::ports::PermissionOps;

#[derive(Debug, Clone, Copy, Default)]
pub struct FsPermissions;

fn permission_error(path: &Path, err: std::io::Error) -> LockorError {
    LockorError::Permission {
        path: path.display().to_string(),
        message: err.to_string(),
    }
}

#[cfg(unix)]
impl PermissionOps for FsPermissions {
    fn mode(&self, path: &Path) -> lockor_core::Result<u32> {
        use std::os::unix::fs::PermissionsExt;

        let metadata = fs::metadata(path).map_err(|e| permission_error(path, e))?;
        Ok(metadata.permissions().mode() & 0o7777)
    }

    fn set_mode(&self, path: &Path, mode: u32) -> lockor_core::Result<()> {
        use std::os::unix::fs::PermissionsExt;

        fs::set_permissions(path, fs::Permissions::from_mode(mode))
            .map_err(|e| permission_error(path, e))
    }
}

// Only the read-only flag exists here; write bits map onto it.
#[cfg(not(unix))]
impl PermissionOps for FsPermissions {
    fn mode(&self, path: &Path) -> lockor_core::Result<u32> {
        let metadata = fs::metadata(path).map_err(|e| permission_error(path, e))?;
        Ok(if metadata.permissions().readonly() {
            0o444
        } else {
            0o666
        })
    }

    fn set_mode(&self, path: &Path, mode: u32) -> lockor_core::Result<()> {
        let metadata = fs::metadata(path).map_err(|e| permission_error(path, e))?;
        let mut permissions = metadata.permissions();
        permissions.set_readonly(mode & 0o222 == 0);
        fs::set_permissions(path, permissions).map_err(|e| permission_error(path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_permission_error() {
        let err = FsPermissions
            .mode(Path::new("/definitely/not/here.rs"))
            .unwrap_err();
        assert_eq!(err.code(), "ERR_PERMISSION");
    }
}
