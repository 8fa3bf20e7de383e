//! Save interception and edit warnings
//!
//! The host calls [`LockStateManager::will_save`] before persisting a
//! document and [`LockStateManager::document_changed`] on every in-memory
//! edit. Both read the protection level fresh on each call.

use lockor_core_types::ProtectionLevel;

use crate::errors::{LockorError, Result};
use crate::manager::LockStateManager;
use crate::model::{Notice, NoticeAction, Settings};

/// Verdict for one save attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveDecision {
    /// Document is not locked
    Allow,
    /// Locked under `soft`: the save goes through with a warning
    AllowWithWarning { level: ProtectionLevel },
    /// Locked under `ai-aware` or `hard`: the save must not reach disk
    Veto { level: ProtectionLevel },
}

impl SaveDecision {
    pub fn is_allowed(&self) -> bool {
        !matches!(self, SaveDecision::Veto { .. })
    }
}

impl LockStateManager {
    /// Decide a save attempt without emitting anything
    pub fn evaluate_save(&self, path: &str) -> SaveDecision {
        decide(self.is_locked(path), &self.settings())
    }

    /// Save-event hook
    ///
    /// # Errors
    /// Returns `SaveBlocked` when the document is locked under a level that
    /// blocks saves. The host must abandon the write.
    pub fn will_save(&self, path: &str) -> Result<()> {
        let settings = self.settings();
        match decide(self.is_locked(path), &settings) {
            SaveDecision::Allow => Ok(()),
            SaveDecision::AllowWithWarning { level } => {
                tracing::debug!(path, protection_level = %level, "save of locked file allowed");
                self.notice(
                    &settings,
                    Notice::warning(format!(
                        "{} is locked (soft). The save was allowed; consider unlocking it first.",
                        path
                    ))
                    .for_path(path)
                    .with_action(NoticeAction::Unlock),
                );
                Ok(())
            }
            SaveDecision::Veto { level } => {
                tracing::debug!(path, protection_level = %level, "save of locked file vetoed");
                self.notice(
                    &settings,
                    Notice::error(format!(
                        "Cannot save {}: the file is locked ({}).",
                        path, level
                    ))
                    .for_path(path)
                    .with_action(NoticeAction::Unlock),
                );
                Err(LockorError::SaveBlocked {
                    path: path.to_string(),
                    level,
                })
            }
        }
    }

    /// Change-event hook
    ///
    /// Schedules one trailing warning per quiet period for a locked document.
    /// Returns whether a warning is now pending.
    pub fn document_changed(&mut self, path: &str) -> bool {
        if !self.is_locked(path) {
            return false;
        }
        let settings = self.settings();
        if !settings.show_notifications {
            self.debouncer.cancel(path);
            return false;
        }

        let message = if settings.protection_level.blocks_saves() {
            format!("{} is locked; these edits cannot be saved until it is unlocked.", path)
        } else {
            format!("{} is locked; editing it is discouraged.", path)
        };
        let notice = Notice::warning(message)
            .for_path(path)
            .with_action(NoticeAction::Unlock);
        self.debouncer.schedule(path, notice)
    }

    /// Edit warnings waiting for their quiet period to elapse
    pub fn pending_change_warnings(&self) -> usize {
        self.debouncer.pending()
    }
}

fn decide(locked: bool, settings: &Settings) -> SaveDecision {
    if !locked {
        return SaveDecision::Allow;
    }
    let level = settings.protection_level;
    if level.blocks_saves() {
        SaveDecision::Veto { level }
    } else {
        SaveDecision::AllowWithWarning { level }
    }
}
