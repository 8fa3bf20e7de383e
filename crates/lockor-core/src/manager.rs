//! Lock state manager
//!
//! Owns the set of locked paths for one workspace session and keeps every
//! derived effect in step with it: persisted state, OS write bits under the
//! `hard` level, generated artifacts and observer notifications.
//!
//! ## Failure policy
//!
//! Only the in-memory set is authoritative for the session. Persistence,
//! permission and artifact failures are caught, logged with `log_degraded!`
//! and returned in the operation's outcome; they never undo a lock change
//! and never surface as `Err`.

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use lockor_core_types::ProtectionLevel;

use crate::debounce::{ChangeDebouncer, CHANGE_QUIET_INTERVAL};
use crate::errors::{ArtifactKind, LockorError};
use crate::log_degraded;
use crate::model::{
    LockStateChange, LockStatusInfo, LockedFileSet, Notice, NoticeLevel, Settings,
    LOCKED_FILES_KEY,
};
use crate::ports::{ArtifactSink, ConfigReader, Notifier, PermissionOps, StateStore};
use crate::protection;
use crate::render;

/// Everything the manager talks to
pub struct Collaborators {
    pub state: Box<dyn StateStore>,
    pub config: Box<dyn ConfigReader>,
    pub permissions: Box<dyn PermissionOps>,
    pub artifacts: Box<dyn ArtifactSink>,
    pub notifier: Arc<dyn Notifier>,
}

/// What a lock or unlock call did to the set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockTransition {
    Locked,
    AlreadyLocked,
    Unlocked,
    NotLocked,
}

/// Result of `lock`, `unlock` or `toggle`
#[derive(Debug, Clone, PartialEq)]
pub struct LockOutcome {
    pub path: String,
    pub transition: LockTransition,
    pub level: ProtectionLevel,
    /// Best-effort side effects that failed
    pub failures: Vec<LockorError>,
}

impl LockOutcome {
    /// Whether the locked set was mutated
    pub fn changed(&self) -> bool {
        matches!(
            self.transition,
            LockTransition::Locked | LockTransition::Unlocked
        )
    }

    /// The path is locked after this operation
    pub fn is_locked(&self) -> bool {
        matches!(
            self.transition,
            LockTransition::Locked | LockTransition::AlreadyLocked
        )
    }

    /// State conflict as an informational error, if there was one
    pub fn conflict(&self) -> Option<LockorError> {
        match self.transition {
            LockTransition::AlreadyLocked => Some(LockorError::AlreadyLocked {
                path: self.path.clone(),
            }),
            LockTransition::NotLocked => Some(LockorError::NotLocked {
                path: self.path.clone(),
            }),
            LockTransition::Locked | LockTransition::Unlocked => None,
        }
    }
}

/// Result of re-applying the protection level to every locked file
#[derive(Debug, Clone, PartialEq)]
pub struct LevelChangeOutcome {
    pub level: ProtectionLevel,
    pub files: usize,
    pub failures: Vec<LockorError>,
}

pub struct LockStateManager {
    pub(crate) locked: LockedFileSet,
    workspace_root: Option<PathBuf>,
    state: Box<dyn StateStore>,
    config: Box<dyn ConfigReader>,
    permissions: Box<dyn PermissionOps>,
    artifacts: Box<dyn ArtifactSink>,
    pub(crate) notifier: Arc<dyn Notifier>,
    pub(crate) debouncer: ChangeDebouncer,
}

impl LockStateManager {
    /// Create a manager and load the locked set from persistence
    ///
    /// A missing or unreadable persisted value starts the session with an
    /// empty set.
    pub fn new(workspace_root: Option<PathBuf>, deps: Collaborators) -> Self {
        Self::with_quiet_interval(workspace_root, deps, CHANGE_QUIET_INTERVAL)
    }

    /// Same as `new` with a custom debounce interval for edit warnings
    pub fn with_quiet_interval(
        workspace_root: Option<PathBuf>,
        deps: Collaborators,
        quiet: Duration,
    ) -> Self {
        let locked = load_locked_files(deps.state.as_ref());
        tracing::debug!(locked_count = locked.len(), "lock state loaded");

        Self {
            locked,
            workspace_root,
            state: deps.state,
            config: deps.config,
            permissions: deps.permissions,
            artifacts: deps.artifacts,
            debouncer: ChangeDebouncer::new(quiet, Arc::clone(&deps.notifier)),
            notifier: deps.notifier,
        }
    }

    pub fn workspace_root(&self) -> Option<&Path> {
        self.workspace_root.as_deref()
    }

    /// Current configuration, read fresh
    ///
    /// An unreadable configuration falls back to the defaults.
    pub fn settings(&self) -> Settings {
        match self.config.settings() {
            Ok(settings) => settings,
            Err(err) => {
                log_degraded!("read_settings", err);
                Settings::default()
            }
        }
    }

    pub fn protection_level(&self) -> ProtectionLevel {
        self.settings().protection_level
    }

    pub fn is_locked(&self, path: &str) -> bool {
        self.locked.contains(path)
    }

    pub fn list_locked(&self) -> Vec<String> {
        self.locked.to_vec()
    }

    pub fn locked_count(&self) -> usize {
        self.locked.len()
    }

    pub fn lock(&mut self, path: &str) -> LockOutcome {
        let settings = self.settings();
        let level = settings.protection_level;

        if self.locked.contains(path) {
            self.notice(
                &settings,
                Notice::info(format!("File is already locked: {}", path)).for_path(path),
            );
            return LockOutcome {
                path: path.to_string(),
                transition: LockTransition::AlreadyLocked,
                level,
                failures: Vec::new(),
            };
        }

        self.locked.insert(path);
        let mut failures = Vec::new();
        self.persist(&settings, &mut failures);

        if level.strips_write_permission() {
            if let Err(err) =
                protection::make_read_only(self.permissions.as_ref(), Path::new(path))
            {
                log_degraded!("make_read_only", err.clone(), path = path);
                failures.push(err);
            }
        }

        failures.extend(self.regenerate_artifacts(&settings));
        self.announce(path, true, &settings);
        self.notice(&settings, Notice::info(format!("Locked: {}", path)).for_path(path));

        LockOutcome {
            path: path.to_string(),
            transition: LockTransition::Locked,
            level,
            failures,
        }
    }

    pub fn unlock(&mut self, path: &str) -> LockOutcome {
        let settings = self.settings();
        let level = settings.protection_level;

        if !self.locked.contains(path) {
            self.notice(
                &settings,
                Notice::info(format!("File is not locked: {}", path)).for_path(path),
            );
            return LockOutcome {
                path: path.to_string(),
                transition: LockTransition::NotLocked,
                level,
                failures: Vec::new(),
            };
        }

        self.locked.remove(path);
        self.debouncer.cancel(path);
        let mut failures = Vec::new();
        self.persist(&settings, &mut failures);

        if level.strips_write_permission() {
            if let Err(err) =
                protection::restore_owner_write(self.permissions.as_ref(), Path::new(path))
            {
                log_degraded!("restore_owner_write", err.clone(), path = path);
                failures.push(err);
            }
        }

        failures.extend(self.regenerate_artifacts(&settings));
        self.announce(path, false, &settings);
        self.notice(&settings, Notice::info(format!("Unlocked: {}", path)).for_path(path));

        LockOutcome {
            path: path.to_string(),
            transition: LockTransition::Unlocked,
            level,
            failures,
        }
    }

    pub fn toggle(&mut self, path: &str) -> LockOutcome {
        if self.is_locked(path) {
            self.unlock(path)
        } else {
            self.lock(path)
        }
    }

    /// Re-derive OS permissions and artifacts after the level changed
    ///
    /// Every file is processed even when an earlier one fails.
    pub fn apply_protection_level_change(&mut self) -> LevelChangeOutcome {
        let settings = self.settings();
        let level = settings.protection_level;
        let mut failures = Vec::new();

        for path in self.locked.iter() {
            if let Err(err) =
                protection::apply_level(self.permissions.as_ref(), Path::new(path), level)
            {
                log_degraded!("apply_protection_level", err.clone(), path = path);
                failures.push(err);
            }
        }

        failures.extend(self.regenerate_artifacts(&settings));
        self.notice(
            &settings,
            Notice::info(format!("Protection level is now {}", level)),
        );

        LevelChangeOutcome {
            level,
            files: self.locked.len(),
            failures,
        }
    }

    /// Structured status for a document (or for the workspace when `None`)
    pub fn lock_status_info(&self, path: Option<&str>) -> LockStatusInfo {
        let level = self.protection_level();
        let is_locked = path.is_some_and(|p| self.is_locked(p));

        LockStatusInfo {
            file: path.map(str::to_string),
            is_locked,
            protection_level: level,
            can_ai_modify: !is_locked || level.allows_ai_modification(),
            can_save: !is_locked || !level.blocks_saves(),
            locked_file_count: self.locked.len(),
            locked_files: self.locked.to_vec(),
        }
    }

    /// Rewrite every artifact from the current set
    ///
    /// Each artifact is attempted independently. With an empty set the
    /// documents are removed and diagnostics cleared.
    pub fn regenerate_artifacts(&self, settings: &Settings) -> Vec<LockorError> {
        let level = settings.protection_level;
        let root = self.workspace_root.as_deref();
        let mut failures = Vec::new();

        if self.locked.is_empty() {
            for kind in [ArtifactKind::RuleFile, ArtifactKind::StatusFile] {
                if let Err(err) = self.artifacts.remove(kind) {
                    log_degraded!("remove_artifact", err.clone(), artifact = kind.as_str());
                    failures.push(err);
                }
            }
        } else {
            let documents = [
                (
                    ArtifactKind::RuleFile,
                    render::render_rule_file(&self.locked, level, root),
                ),
                (
                    ArtifactKind::StatusFile,
                    render::render_status_file(&self.locked, level, root, Utc::now()),
                ),
            ];
            for (kind, content) in documents {
                if let Err(err) = self.artifacts.write(kind, &content) {
                    log_degraded!("write_artifact", err.clone(), artifact = kind.as_str());
                    failures.push(err);
                }
            }
        }

        let diagnostics = if settings.add_visible_markers {
            render::render_diagnostics(&self.locked, level)
        } else {
            Vec::new()
        };
        self.notifier.publish_diagnostics(&diagnostics);

        failures
    }

    /// Cancel every pending edit warning
    pub fn dispose(&mut self) {
        self.debouncer.dispose();
    }

    pub(crate) fn notice(&self, settings: &Settings, notice: Notice) {
        if notice.level == NoticeLevel::Error || settings.show_notifications {
            self.notifier.notify(&notice);
        }
    }

    fn persist(&self, settings: &Settings, failures: &mut Vec<LockorError>) {
        if let Err(err) = self.state.set(LOCKED_FILES_KEY, self.locked.to_json()) {
            log_degraded!("persist_locked_files", err.clone(), locked_count = self.locked.len());
            self.notice(
                settings,
                Notice::warning(
                    "Lock state could not be saved; the change applies to this session only",
                ),
            );
            failures.push(err);
        }
    }

    fn announce(&self, path: &str, locked: bool, settings: &Settings) {
        self.notifier.lock_state_changed(&LockStateChange {
            path: path.to_string(),
            locked,
            locked_count: self.locked.len(),
            show_status_indicator: settings.show_status_bar_item,
        });
    }
}

fn load_locked_files(state: &dyn StateStore) -> LockedFileSet {
    match state.get(LOCKED_FILES_KEY) {
        Ok(Some(value)) => LockedFileSet::from_json(&value).unwrap_or_else(|| {
            log_degraded!(
                "load_locked_files",
                LockorError::Serialization {
                    message: format!("expected an array of paths under '{}'", LOCKED_FILES_KEY),
                }
            );
            LockedFileSet::new()
        }),
        Ok(None) => LockedFileSet::new(),
        Err(err) => {
            log_degraded!("load_locked_files", err);
            LockedFileSet::new()
        }
    }
}
