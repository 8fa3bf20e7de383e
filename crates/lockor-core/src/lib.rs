//! Lockor Core - lock state management for workspace files
//!
//! This crate provides the domain layer of Lockor:
//! - The locked file set and its persisted form
//! - The `LockStateManager` lock/unlock/toggle operations
//! - Save interception and debounced edit warnings
//! - Rendering of the AI rule document, status document and diagnostics
//! - Collaborator traits (ports) for persistence, configuration, file
//!   permissions, artifact output and host notifications
//!
//! No host editor, database or filesystem is touched directly; concrete
//! adapters live in `lockor-store`.

pub mod debounce;
pub mod errors;
pub mod logging_facility;
pub mod manager;
pub mod model;
pub mod ports;
pub mod protection;
pub mod render;
pub mod save_guard;

pub use lockor_core_types::schema;

// Re-export commonly used types
pub use errors::{ArtifactKind, ExError, ExErrorKind, LockorError, Result};
pub use lockor_core_types::ProtectionLevel;
pub use manager::{Collaborators, LevelChangeOutcome, LockOutcome, LockStateManager, LockTransition};
pub use model::{LockStatusInfo, LockedFileSet, Notice, Settings};
pub use ports::{ArtifactSink, ConfigReader, NoopNotifier, Notifier, PermissionOps, StateStore};
pub use save_guard::SaveDecision;
