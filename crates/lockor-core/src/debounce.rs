//! Trailing-edge debounce for edit warnings on locked documents
//!
//! Each path has at most one pending warning. A new edit aborts the pending
//! task and starts a fresh quiet interval, so a burst of edits yields a single
//! warning timed from the last one.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::model::Notice;
use crate::ports::Notifier;

/// Quiet period after the last edit before the warning fires
pub const CHANGE_QUIET_INTERVAL: Duration = Duration::from_secs(2);

pub struct ChangeDebouncer {
    quiet: Duration,
    notifier: Arc<dyn Notifier>,
    pending: HashMap<String, JoinHandle<()>>,
}

impl ChangeDebouncer {
    pub fn new(quiet: Duration, notifier: Arc<dyn Notifier>) -> Self {
        Self {
            quiet,
            notifier,
            pending: HashMap::new(),
        }
    }

    pub fn quiet_interval(&self) -> Duration {
        self.quiet
    }

    /// (Re)schedule `notice` for `path`
    ///
    /// Returns `false` when called outside a tokio runtime; nothing is
    /// scheduled in that case.
    pub fn schedule(&mut self, path: &str, notice: Notice) -> bool {
        let Ok(runtime) = Handle::try_current() else {
            tracing::debug!(path, "no async runtime; change warning not scheduled");
            return false;
        };

        if let Some(previous) = self.pending.remove(path) {
            previous.abort();
        }

        let notifier = Arc::clone(&self.notifier);
        let quiet = self.quiet;
        let task = runtime.spawn(async move {
            tokio::time::sleep(quiet).await;
            notifier.notify(&notice);
        });
        self.pending.insert(path.to_string(), task);
        true
    }

    /// Drop the pending warning for `path`, if any
    pub fn cancel(&mut self, path: &str) -> bool {
        match self.pending.remove(path) {
            Some(task) => {
                task.abort();
                true
            }
            None => false,
        }
    }

    /// Number of warnings still waiting to fire
    pub fn pending(&self) -> usize {
        self.pending.values().filter(|t| !t.is_finished()).count()
    }

    /// Abort every pending warning
    pub fn dispose(&mut self) {
        for (_, task) in self.pending.drain() {
            task.abort();
        }
    }
}

impl Drop for ChangeDebouncer {
    fn drop(&mut self) {
        self.dispose();
    }
}
