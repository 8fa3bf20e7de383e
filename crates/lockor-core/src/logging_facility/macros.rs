//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use lockor_core::log_op_start;
/// log_op_start!("lock_file");
/// log_op_start!("lock_file", path = "/proj/config.js");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use lockor_core::log_op_end;
/// log_op_end!("lock_file", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// Accepts anything convertible into `ExError`.
///
/// # Example
///
/// ```
/// # use lockor_core::{log_op_error, errors::LockorError};
/// let err = LockorError::NoActiveDocument;
/// log_op_error!("lock_file", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            message = ex_err.message(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            message = ex_err.message(),
            $($field)*
        );
    }};
}

/// Log a best-effort failure that was caught and not propagated
///
/// # Example
///
/// ```
/// # use lockor_core::{log_degraded, errors::LockorError};
/// let err = LockorError::Persistence { message: "disk full".to_string() };
/// log_degraded!("persist_locked_files", err, path = "/a");
/// ```
#[macro_export]
macro_rules! log_degraded {
    ($op:expr, $err:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_DEGRADED,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            message = ex_err.message(),
        );
    }};
    ($op:expr, $err:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_DEGRADED,
            err.kind = ?ex_err.kind(),
            err.code = ex_err.code(),
            message = ex_err.message(),
            $($field)*
        );
    }};
}
