//! Collaborator interfaces consumed by the lock manager
//!
//! The manager never touches the host editor, the database or the
//! filesystem directly. Each concern is a trait injected at construction:
//!
//! - [`StateStore`]: workspace-scoped key/value persistence
//! - [`ConfigReader`]: fresh configuration on every call
//! - [`PermissionOps`]: file mode bits
//! - [`ArtifactSink`]: generated rule and status documents
//! - [`Notifier`]: notices, lock state observers, diagnostics
//!
//! Concrete filesystem and SQLite adapters live in `lockor-store`; shared
//! in-memory implementations live in [`memory`].

pub mod memory;

use std::path::Path;

use lockor_core_types::ProtectionLevel;
use serde_json::Value;

use crate::errors::{ArtifactKind, Result};
use crate::model::{LockDiagnostic, LockStateChange, Notice, Settings};

/// Workspace-scoped persistent key/value store
pub trait StateStore {
    /// Read a value; `Ok(None)` when the key was never written
    fn get(&self, key: &str) -> Result<Option<Value>>;

    /// Write a value, replacing any previous one
    fn set(&self, key: &str, value: Value) -> Result<()>;

    /// Read a value, falling back to `default` when absent
    fn get_or(&self, key: &str, default: Value) -> Result<Value> {
        Ok(self.get(key)?.unwrap_or(default))
    }
}

/// Source of configuration, consulted on every operation
pub trait ConfigReader {
    fn settings(&self) -> Result<Settings>;

    /// Configured level, or the default when the configuration is unreadable
    fn protection_level(&self) -> ProtectionLevel {
        self.settings()
            .map(|s| s.protection_level)
            .unwrap_or_default()
    }
}

/// File mode primitive (chmod-equivalent)
pub trait PermissionOps {
    fn mode(&self, path: &Path) -> Result<u32>;
    fn set_mode(&self, path: &Path, mode: u32) -> Result<()>;
}

/// Destination for generated artifact documents
pub trait ArtifactSink {
    /// Replace the artifact's content wholesale
    fn write(&self, kind: ArtifactKind, content: &str) -> Result<()>;

    /// Delete the artifact; removing an absent artifact is not an error
    fn remove(&self, kind: ArtifactKind) -> Result<()>;
}

/// Host-side observer capability
///
/// Implementations must not fail: whatever the host cannot display is dropped.
pub trait Notifier: Send + Sync {
    fn notify(&self, notice: &Notice);
    fn lock_state_changed(&self, change: &LockStateChange);
    /// Replace the full diagnostics set
    fn publish_diagnostics(&self, diagnostics: &[LockDiagnostic]);
}

/// Notifier that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopNotifier;

impl Notifier for NoopNotifier {
    fn notify(&self, _notice: &Notice) {}

    fn lock_state_changed(&self, _change: &LockStateChange) {}

    fn publish_diagnostics(&self, _diagnostics: &[LockDiagnostic]) {}
}
