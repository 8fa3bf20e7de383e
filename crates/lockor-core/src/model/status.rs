//! Values handed to observers and to external status queries

use lockor_core_types::ProtectionLevel;
use serde::{Deserialize, Serialize};

/// Answer to a lock status query for one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LockStatusInfo {
    /// Document the query was about, if any
    pub file: Option<String>,
    pub is_locked: bool,
    pub protection_level: ProtectionLevel,
    /// Advisory: whether AI assistants may modify the document
    #[serde(rename = "canAIModify")]
    pub can_ai_modify: bool,
    /// Whether a save of the document would go through
    pub can_save: bool,
    pub locked_file_count: usize,
    pub locked_files: Vec<String>,
}

/// Lock state transition pushed to observers (status indicator, context flags)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockStateChange {
    pub path: String,
    pub locked: bool,
    pub locked_count: usize,
    pub show_status_indicator: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Info,
    Warning,
    Error,
}

/// Follow-up the host may offer alongside a notice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeAction {
    Unlock,
}

/// User-facing advisory message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
    pub path: Option<String>,
    pub action: Option<NoticeAction>,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
            path: None,
            action: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            ..Self::info(message)
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            ..Self::info(message)
        }
    }

    pub fn for_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_action(mut self, action: NoticeAction) -> Self {
        self.action = Some(action);
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticSeverity {
    Warning,
    Error,
}

/// Editor diagnostic marking a locked document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LockDiagnostic {
    pub path: String,
    pub line: u32,
    pub character: u32,
    pub severity: DiagnosticSeverity,
    pub message: String,
    pub source: String,
}
