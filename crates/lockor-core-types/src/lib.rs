//! Core types shared across Lockor facilities
//!
//! This crate provides foundational types used by the manager, the
//! persistence adapters and the logging facility:
//!
//! - **Protection level**: the `soft | ai-aware | hard` enforcement mode
//! - **Schema constants**: Canonical field keys and event names

pub mod protection;
pub mod schema;

pub use protection::{ParseProtectionLevelError, ProtectionLevel};
