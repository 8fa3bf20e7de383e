//! Lockor Store - concrete adapters for the core ports
//!
//! Provides:
//! - SQLite workspace state store with a migrations framework
//! - TOML settings file reader and writer
//! - Atomic artifact writer for the rule and status documents
//! - Filesystem permission primitive (chmod)

pub mod artifacts;
pub mod atomic;
pub mod config;
pub mod db;
pub mod errors;
pub mod migrations;
pub mod permissions;
pub mod state_store;

// Re-export key types
pub use artifacts::{FsArtifactSink, RULE_FILE_PATH, STATUS_FILE_PATH};
pub use config::{TomlConfigReader, SETTINGS_FILE_PATH};
pub use errors::Result;
pub use permissions::FsPermissions;
pub use state_store::{SqliteStateStore, STATE_DB_PATH};
