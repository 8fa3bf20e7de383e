//! Structured logging facility for Lockor
//!
//! This module provides a canonical logging facility with:
//! - Single initialization point via `init(profile)`
//! - Structured logging macros (`log_op_start!`, `log_op_end!`, `log_op_error!`)
//! - A `log_degraded!` macro for best-effort failures that are swallowed
//! - Test capture mode for deterministic assertions
//!
//! # Usage
//!
//! ```rust
//! use lockor_core::logging_facility::{init, Profile};
//!
//! // Initialize once at application startup
//! init(Profile::Development);
//! ```

pub mod init;
pub mod macros;
pub mod test_capture;

pub use init::{init, Profile};
