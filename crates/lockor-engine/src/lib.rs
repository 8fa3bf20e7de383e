//! Lockor Engine - Orchestration layer
//!
//! Opens a workspace session over the store adapters and exposes the
//! command surface and host hooks on top of the core lock manager.

pub mod commands;
pub mod session;

pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::engine_query::{
    apply_engine_query, EngineQuery, EngineQueryResult, LockedFileEntry,
};
pub use session::{open_workspace, Session};
