//! In-memory port implementations
//!
//! Each type is a cheap handle over shared state: clone one, hand the clone
//! to the manager, and keep the original to inspect or steer it.

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use serde_json::Value;

use super::{ArtifactSink, ConfigReader, Notifier, PermissionOps, StateStore};
use crate::errors::{ArtifactKind, LockorError, Result};
use crate::model::{LockDiagnostic, LockStateChange, Notice, Settings};

/// Key/value store held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStateStore {
    entries: Rc<RefCell<HashMap<String, Value>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStateStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent `set` fail until switched back
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Seed a value without going through the failure switch
    pub fn insert(&self, key: &str, value: Value) {
        self.entries.borrow_mut().insert(key.to_string(), value);
    }
}

impl StateStore for MemoryStateStore {
    fn get(&self, key: &str) -> Result<Option<Value>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: Value) -> Result<()> {
        if self.fail_writes.get() {
            return Err(LockorError::Persistence {
                message: format!("write of '{}' rejected", key),
            });
        }
        self.entries.borrow_mut().insert(key.to_string(), value);
        Ok(())
    }
}

/// Configuration that can be changed between operations
#[derive(Debug, Clone, Default)]
pub struct StaticConfig {
    settings: Rc<Cell<Settings>>,
}

impl StaticConfig {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings: Rc::new(Cell::new(settings)),
        }
    }

    pub fn set(&self, settings: Settings) {
        self.settings.set(settings);
    }

    pub fn set_protection_level(&self, level: lockor_core_types::ProtectionLevel) {
        self.settings
            .set(self.settings.get().with_protection_level(level));
    }
}

impl ConfigReader for StaticConfig {
    fn settings(&self) -> Result<Settings> {
        Ok(self.settings.get())
    }
}

/// Mode bits for a fixed set of known paths
///
/// Paths that were never registered behave like missing files.
#[derive(Debug, Clone, Default)]
pub struct MemoryPermissions {
    modes: Rc<RefCell<HashMap<PathBuf, u32>>>,
}

impl MemoryPermissions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a file with its current mode
    pub fn add_file(&self, path: impl Into<PathBuf>, mode: u32) {
        self.modes.borrow_mut().insert(path.into(), mode);
    }

    pub fn mode_of(&self, path: impl AsRef<Path>) -> Option<u32> {
        self.modes.borrow().get(path.as_ref()).copied()
    }
}

impl PermissionOps for MemoryPermissions {
    fn mode(&self, path: &Path) -> Result<u32> {
        self.mode_of(path).ok_or_else(|| LockorError::Permission {
            path: path.display().to_string(),
            message: "no such file".to_string(),
        })
    }

    fn set_mode(&self, path: &Path, mode: u32) -> Result<()> {
        let mut modes = self.modes.borrow_mut();
        match modes.get_mut(path) {
            Some(current) => {
                *current = mode;
                Ok(())
            }
            None => Err(LockorError::Permission {
                path: path.display().to_string(),
                message: "no such file".to_string(),
            }),
        }
    }
}

/// Artifact documents kept in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryArtifactSink {
    documents: Rc<RefCell<HashMap<ArtifactKind, String>>>,
    failing: Rc<RefCell<HashSet<ArtifactKind>>>,
}

impl MemoryArtifactSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make writes and removals of `kind` fail
    pub fn fail_on(&self, kind: ArtifactKind) {
        self.failing.borrow_mut().insert(kind);
    }

    pub fn document(&self, kind: ArtifactKind) -> Option<String> {
        self.documents.borrow().get(&kind).cloned()
    }

    fn check(&self, kind: ArtifactKind) -> Result<()> {
        if self.failing.borrow().contains(&kind) {
            return Err(LockorError::Artifact {
                artifact: kind,
                message: "sink rejected the write".to_string(),
            });
        }
        Ok(())
    }
}

impl ArtifactSink for MemoryArtifactSink {
    fn write(&self, kind: ArtifactKind, content: &str) -> Result<()> {
        self.check(kind)?;
        self.documents
            .borrow_mut()
            .insert(kind, content.to_string());
        Ok(())
    }

    fn remove(&self, kind: ArtifactKind) -> Result<()> {
        self.check(kind)?;
        self.documents.borrow_mut().remove(&kind);
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Recorded {
    notices: Vec<Notice>,
    changes: Vec<LockStateChange>,
    diagnostics: Vec<LockDiagnostic>,
    diagnostics_publications: usize,
}

/// Notifier that records everything it is told
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    recorded: Arc<Mutex<Recorded>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.recorded
            .lock()
            .map(|r| r.notices.clone())
            .unwrap_or_default()
    }

    pub fn changes(&self) -> Vec<LockStateChange> {
        self.recorded
            .lock()
            .map(|r| r.changes.clone())
            .unwrap_or_default()
    }

    /// The most recently published diagnostics set
    pub fn diagnostics(&self) -> Vec<LockDiagnostic> {
        self.recorded
            .lock()
            .map(|r| r.diagnostics.clone())
            .unwrap_or_default()
    }

    pub fn diagnostics_publications(&self) -> usize {
        self.recorded
            .lock()
            .map(|r| r.diagnostics_publications)
            .unwrap_or_default()
    }

    pub fn clear(&self) {
        if let Ok(mut r) = self.recorded.lock() {
            *r = Recorded::default();
        }
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        if let Ok(mut r) = self.recorded.lock() {
            r.notices.push(notice.clone());
        }
    }

    fn lock_state_changed(&self, change: &LockStateChange) {
        if let Ok(mut r) = self.recorded.lock() {
            r.changes.push(change.clone());
        }
    }

    fn publish_diagnostics(&self, diagnostics: &[LockDiagnostic]) {
        if let Ok(mut r) = self.recorded.lock() {
            r.diagnostics = diagnostics.to_vec();
            r.diagnostics_publications += 1;
        }
    }
}
