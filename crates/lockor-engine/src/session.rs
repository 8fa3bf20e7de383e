//! Workspace session
//!
//! A session owns the lock manager for one workspace root plus the host's
//! notion of the active document. It is the unit the command surface and
//! the host hooks operate on.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use lockor_core::errors::{ExError, ExErrorKind, LockorError};
use lockor_core::{
    log_op_end, log_op_error, log_op_start, Collaborators, LevelChangeOutcome, LockStateManager,
    Notifier, ProtectionLevel,
};
use lockor_store::errors::Result;
use lockor_store::{FsArtifactSink, FsPermissions, SqliteStateStore, TomlConfigReader};

pub struct Session {
    root: PathBuf,
    manager: LockStateManager,
    settings_file: TomlConfigReader,
    active_document: Option<String>,
    last_level: ProtectionLevel,
}

/// Open the workspace rooted at `root`
///
/// Wires `<root>/.lockor/state.db`, `<root>/.lockor/settings.toml`, the
/// artifact files below the root and the real file permissions into a new
/// lock manager.
///
/// # Errors
/// Fails when the root does not exist or the state database cannot be
/// opened or migrated.
pub fn open_workspace(root: &Path, notifier: Arc<dyn Notifier>) -> Result<Session> {
    log_op_start!("open_workspace", path = %root.display());
    let start = std::time::Instant::now();

    let result = (|| -> Result<Session> {
        let root = std::fs::canonicalize(root).map_err(|e| {
            ExError::new(ExErrorKind::WorkspaceRootMissing)
                .with_op("open_workspace")
                .with_path(root.display().to_string())
                .with_message(e.to_string())
        })?;

        let state = SqliteStateStore::for_workspace(&root)?;
        let settings_file = TomlConfigReader::for_workspace(&root);

        let manager = LockStateManager::new(
            Some(root.clone()),
            Collaborators {
                state: Box::new(state),
                config: Box::new(settings_file.clone()),
                permissions: Box::new(FsPermissions),
                artifacts: Box::new(FsArtifactSink::new(Some(root.clone()))),
                notifier,
            },
        );
        let last_level = manager.protection_level();

        Ok(Session {
            root,
            manager,
            settings_file,
            active_document: None,
            last_level,
        })
    })();

    let elapsed = start.elapsed().as_millis() as u64;
    match &result {
        Ok(session) => log_op_end!(
            "open_workspace",
            duration_ms = elapsed,
            locked_count = session.manager.locked_count()
        ),
        Err(e) => log_op_error!("open_workspace", e.clone(), duration_ms = elapsed),
    }
    result
}

impl Session {
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn manager(&self) -> &LockStateManager {
        &self.manager
    }

    pub fn manager_mut(&mut self) -> &mut LockStateManager {
        &mut self.manager
    }

    pub fn settings_file(&self) -> &TomlConfigReader {
        &self.settings_file
    }

    pub fn active_document(&self) -> Option<&str> {
        self.active_document.as_deref()
    }

    /// Record the document currently focused in the host
    pub fn set_active_document(&mut self, path: Option<String>) {
        self.active_document = path;
    }

    /// Turn a command's path argument into a lock key
    ///
    /// `None` falls back to the active document. Relative paths are joined
    /// to the workspace root; absolute paths are used as given.
    ///
    /// # Errors
    /// `ERR_NO_ACTIVE_DOCUMENT` when no path was given and none is active,
    /// `ERR_INVALID_INPUT` for a blank path.
    pub fn resolve_path(&self, path: Option<&str>) -> Result<String> {
        let raw = self.requested_path(path)?;
        if raw.trim().is_empty() {
            return Err(LockorError::InvalidPath {
                path: raw.to_string(),
            }
            .into());
        }
        Ok(self.lock_key(raw))
    }

    /// Like [`Session::resolve_path`], for lookups that must not fail on a
    /// malformed path
    ///
    /// A blank path is passed through untouched; it is never a lock key, so
    /// it reads as unlocked.
    ///
    /// # Errors
    /// `ERR_NO_ACTIVE_DOCUMENT` when no path was given and none is active.
    pub fn lookup_path(&self, path: Option<&str>) -> Result<String> {
        let raw = self.requested_path(path)?;
        if raw.trim().is_empty() {
            return Ok(raw.to_string());
        }
        Ok(self.lock_key(raw))
    }

    fn requested_path<'a>(&'a self, path: Option<&'a str>) -> Result<&'a str> {
        match path {
            Some(p) => Ok(p),
            None => self
                .active_document
                .as_deref()
                .ok_or_else(|| LockorError::NoActiveDocument.into()),
        }
    }

    fn lock_key(&self, raw: &str) -> String {
        let candidate = Path::new(raw);
        if candidate.is_absolute() {
            raw.to_string()
        } else {
            self.root.join(candidate).display().to_string()
        }
    }

    /// Save hook: must run before the host writes `path` to disk
    ///
    /// # Errors
    /// `ERR_SAVE_BLOCKED` when the save has to be abandoned.
    pub fn will_save(&self, path: &str) -> Result<()> {
        let path = self.lookup_path(Some(path))?;
        self.manager.will_save(&path).map_err(|e| {
            tracing::info!(path = %path, err.code = e.code(), "save vetoed");
            ExError::from(e).with_op("will_save")
        })
    }

    /// Change hook: called for every in-memory edit of a document
    ///
    /// Returns whether a warning is pending for the document.
    pub fn did_change(&mut self, path: &str) -> bool {
        match self.lookup_path(Some(path)) {
            Ok(path) => self.manager.document_changed(&path),
            Err(_) => false,
        }
    }

    /// Configuration hook: the settings file was edited
    ///
    /// A changed protection level is re-applied to every locked file. Any
    /// other change regenerates the artifacts only, and `None` is returned.
    pub fn configuration_changed(&mut self) -> Option<LevelChangeOutcome> {
        let settings = self.manager.settings();
        if settings.protection_level != self.last_level {
            tracing::debug!(
                from = %self.last_level,
                to = %settings.protection_level,
                "protection level changed"
            );
            self.last_level = settings.protection_level;
            Some(self.manager.apply_protection_level_change())
        } else {
            let failures = self.manager.regenerate_artifacts(&settings);
            if !failures.is_empty() {
                tracing::debug!(failures = failures.len(), "artifact regeneration incomplete");
            }
            None
        }
    }

    /// Remember the level after the engine applied it itself
    pub(crate) fn set_last_level(&mut self, level: ProtectionLevel) {
        self.last_level = level;
    }

    /// Cancel pending edit warnings
    pub fn close(mut self) {
        self.manager.dispose();
    }
}
