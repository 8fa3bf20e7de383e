//! Notices printed to stderr

use lockor_core::model::{LockDiagnostic, LockStateChange, NoticeLevel};
use lockor_core::{Notice, Notifier};

/// Prints notices; status indicator updates and diagnostics have no
/// terminal counterpart and are only traced
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, notice: &Notice) {
        let label = match notice.level {
            NoticeLevel::Info => "info",
            NoticeLevel::Warning => "warning",
            NoticeLevel::Error => "error",
        };
        eprintln!("{}: {}", label, notice.message);
    }

    fn lock_state_changed(&self, change: &LockStateChange) {
        tracing::debug!(
            path = %change.path,
            locked = change.locked,
            locked_count = change.locked_count,
            "lock state changed"
        );
    }

    fn publish_diagnostics(&self, diagnostics: &[LockDiagnostic]) {
        tracing::debug!(count = diagnostics.len(), "diagnostics published");
    }
}
