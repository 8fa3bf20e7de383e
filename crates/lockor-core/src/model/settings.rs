//! Lockor configuration values
//!
//! Keys use the camelCase spelling of the settings file:
//!
//! ```toml
//! protectionLevel = "hard"
//! showNotifications = true
//! showStatusBarItem = true
//! addVisibleMarkers = false
//! ```

use lockor_core_types::ProtectionLevel;
use serde::{Deserialize, Serialize};

pub const KEY_PROTECTION_LEVEL: &str = "protectionLevel";
pub const KEY_SHOW_NOTIFICATIONS: &str = "showNotifications";
pub const KEY_SHOW_STATUS_BAR_ITEM: &str = "showStatusBarItem";
pub const KEY_ADD_VISIBLE_MARKERS: &str = "addVisibleMarkers";

/// Snapshot of the user-facing configuration
///
/// Never cached by the manager: every operation asks its `ConfigReader`
/// for a fresh copy, so external edits apply on the next event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub protection_level: ProtectionLevel,
    /// Info and warning notices; error notices are always shown
    pub show_notifications: bool,
    pub show_status_bar_item: bool,
    /// Publish one diagnostic per locked file
    pub add_visible_markers: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            protection_level: ProtectionLevel::default(),
            show_notifications: true,
            show_status_bar_item: true,
            add_visible_markers: true,
        }
    }
}

impl Settings {
    pub fn with_protection_level(mut self, level: ProtectionLevel) -> Self {
        self.protection_level = level;
        self
    }
}
