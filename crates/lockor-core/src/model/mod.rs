//! Domain model for lock state
//!
//! - [`LockedFileSet`]: the set of locked paths and its persisted form
//! - [`Settings`]: configuration read fresh on every operation
//! - [`LockStatusInfo`], [`LockStateChange`], [`Notice`], [`LockDiagnostic`]:
//!   values handed to observers and external queries

pub mod locked_set;
pub mod settings;
pub mod status;

pub use locked_set::{LockedFileSet, LOCKED_FILES_KEY};
pub use settings::Settings;
pub use status::{
    DiagnosticSeverity, LockDiagnostic, LockStateChange, LockStatusInfo, Notice, NoticeAction,
    NoticeLevel,
};
