//! Command orchestration layer.
//!
//! Every command and query resolves its target path against the session,
//! delegates to the lock manager and is wrapped in boundary logging.

pub mod engine_command;
pub mod engine_query;
