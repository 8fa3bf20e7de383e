//! Protection level configuration value
//!
//! The level decides how strongly a locked file is guarded:
//!
//! | Level      | Human saves          | AI guidance         | OS write bits |
//! |------------|----------------------|---------------------|---------------|
//! | `soft`     | allowed, warned      | advisory only       | untouched     |
//! | `ai-aware` | vetoed               | must not modify     | untouched     |
//! | `hard`     | vetoed               | must not modify     | stripped      |

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enforcement mode applied to every locked file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProtectionLevel {
    /// Saves proceed with a warning; AI guidance is advisory
    Soft,
    /// Saves are vetoed; AI tools are told not to modify
    #[default]
    AiAware,
    /// Saves are vetoed and write permission bits are stripped
    Hard,
}

impl ProtectionLevel {
    /// All levels, weakest first
    pub const ALL: [ProtectionLevel; 3] = [
        ProtectionLevel::Soft,
        ProtectionLevel::AiAware,
        ProtectionLevel::Hard,
    ];

    /// Canonical configuration spelling
    pub fn as_str(&self) -> &'static str {
        match self {
            ProtectionLevel::Soft => "soft",
            ProtectionLevel::AiAware => "ai-aware",
            ProtectionLevel::Hard => "hard",
        }
    }

    /// Whether a save of a locked document is vetoed at this level
    pub fn blocks_saves(&self) -> bool {
        !matches!(self, ProtectionLevel::Soft)
    }

    /// Whether AI assistants are permitted (advisorily) to modify locked files
    pub fn allows_ai_modification(&self) -> bool {
        matches!(self, ProtectionLevel::Soft)
    }

    /// Whether OS-level write permission is removed from locked files
    pub fn strips_write_permission(&self) -> bool {
        matches!(self, ProtectionLevel::Hard)
    }
}

impl fmt::Display for ProtectionLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string does not name a protection level
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseProtectionLevelError {
    value: String,
}

impl ParseProtectionLevelError {
    /// The rejected input
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for ParseProtectionLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown protection level '{}' (expected soft, ai-aware or hard)",
            self.value
        )
    }
}

impl std::error::Error for ParseProtectionLevelError {}

impl FromStr for ProtectionLevel {
    type Err = ParseProtectionLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "soft" => Ok(ProtectionLevel::Soft),
            "ai-aware" | "ai_aware" | "aiaware" => Ok(ProtectionLevel::AiAware),
            "hard" => Ok(ProtectionLevel::Hard),
            _ => Err(ParseProtectionLevelError {
                value: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_ai_aware() {
        assert_eq!(ProtectionLevel::default(), ProtectionLevel::AiAware);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("HARD".parse::<ProtectionLevel>(), Ok(ProtectionLevel::Hard));
        assert_eq!(
            " Ai-Aware ".parse::<ProtectionLevel>(),
            Ok(ProtectionLevel::AiAware)
        );
    }

    #[test]
    fn test_parse_rejects_unknown() {
        let err = "locked".parse::<ProtectionLevel>().unwrap_err();
        assert_eq!(err.value(), "locked");
    }

    #[test]
    fn test_display_matches_serde_spelling() {
        for level in ProtectionLevel::ALL {
            let json = serde_json::to_string(&level).unwrap();
            assert_eq!(json, format!("\"{}\"", level));
        }
    }

    #[test]
    fn test_level_capabilities() {
        assert!(!ProtectionLevel::Soft.blocks_saves());
        assert!(ProtectionLevel::AiAware.blocks_saves());
        assert!(ProtectionLevel::Hard.blocks_saves());
        assert!(ProtectionLevel::Soft.allows_ai_modification());
        assert!(!ProtectionLevel::AiAware.allows_ai_modification());
        assert!(ProtectionLevel::Hard.strips_write_permission());
        assert!(!ProtectionLevel::AiAware.strips_write_permission());
    }
}
