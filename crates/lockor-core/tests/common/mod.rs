use std::path::PathBuf;
use std::sync::Arc;

use lockor_core::ports::memory::{
    MemoryArtifactSink, MemoryPermissions, MemoryStateStore, RecordingNotifier, StaticConfig,
};
use lockor_core::{Collaborators, LockStateManager, ProtectionLevel, Settings};

pub const ROOT: &str = "/proj";

/// A manager wired to in-memory ports, plus handles to inspect them
#[allow(dead_code)]
pub struct Harness {
    pub manager: LockStateManager,
    pub state: MemoryStateStore,
    pub config: StaticConfig,
    pub permissions: MemoryPermissions,
    pub artifacts: MemoryArtifactSink,
    pub notifier: RecordingNotifier,
}

/// Harness with default settings and a workspace root of `/proj`
#[allow(dead_code)]
pub fn harness() -> Harness {
    harness_with(Settings::default(), Some(PathBuf::from(ROOT)))
}

/// Harness at the given protection level
#[allow(dead_code)]
pub fn harness_at(level: ProtectionLevel) -> Harness {
    harness_with(
        Settings::default().with_protection_level(level),
        Some(PathBuf::from(ROOT)),
    )
}

#[allow(dead_code)]
pub fn harness_with(settings: Settings, root: Option<PathBuf>) -> Harness {
    let state = MemoryStateStore::new();
    build(state, settings, root)
}

/// Harness whose store already holds a value, to exercise loading
#[allow(dead_code)]
pub fn harness_with_state(state: MemoryStateStore) -> Harness {
    build(state, Settings::default(), Some(PathBuf::from(ROOT)))
}

fn build(state: MemoryStateStore, settings: Settings, root: Option<PathBuf>) -> Harness {
    let config = StaticConfig::new(settings);
    let permissions = MemoryPermissions::new();
    let artifacts = MemoryArtifactSink::new();
    let notifier = RecordingNotifier::new();

    let manager = LockStateManager::new(
        root,
        Collaborators {
            state: Box::new(state.clone()),
            config: Box::new(config.clone()),
            permissions: Box::new(permissions.clone()),
            artifacts: Box::new(artifacts.clone()),
            notifier: Arc::new(notifier.clone()),
        },
    );

    Harness {
        manager,
        state,
        config,
        permissions,
        artifacts,
        notifier,
    }
}

/// Absolute workspace path for a relative file name
#[allow(dead_code)]
pub fn file(name: &str) -> String {
    format!("{}/{}", ROOT, name)
}
