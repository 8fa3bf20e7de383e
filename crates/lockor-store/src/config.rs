//! TOML settings file
//!
//! `<root>/.lockor/settings.toml` holds the camelCase keys of
//! [`Settings`]. The file is read on every call so edits made while a
//! session is open take effect on the next operation. A missing file means
//! defaults.

use std::path::{Path, PathBuf};

use lockor_core::model::settings::KEY_PROTECTION_LEVEL;
use lockor_core::ports::ConfigReader;
use lockor_core::{ProtectionLevel, Settings};

use crate::atomic::atomic_write;
use crate::errors::{invalid_config, io_error, Result};

/// Settings file location relative to the workspace root
pub const SETTINGS_FILE_PATH: &str = ".lockor/settings.toml";

#[derive(Debug, Clone)]
pub struct TomlConfigReader {
    path: PathBuf,
}

impl TomlConfigReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn for_workspace(root: &Path) -> Self {
        Self::new(root.join(SETTINGS_FILE_PATH))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Parse the settings file, or return defaults when it does not exist
    pub fn load(&self) -> Result<Settings> {
        match self.read_text()? {
            None => Ok(Settings::default()),
            Some(text) => toml::from_str(&text).map_err(|e| {
                invalid_config(format!("{}: {}", self.path.display(), e))
                    .with_path(self.path.display().to_string())
            }),
        }
    }

    /// Set `protectionLevel`, keeping every other key in the file
    pub fn write_protection_level(&self, level: ProtectionLevel) -> Result<()> {
        let mut table = match self.read_text()? {
            None => toml::Table::new(),
            Some(text) => text.parse::<toml::Table>().map_err(|e| {
                invalid_config(format!("{}: {}", self.path.display(), e))
                    .with_op("write_settings")
            })?,
        };
        table.insert(
            KEY_PROTECTION_LEVEL.to_string(),
            toml::Value::String(level.as_str().to_string()),
        );

        let text = toml::to_string(&table).map_err(|e| {
            invalid_config(e.to_string()).with_op("write_settings")
        })?;
        atomic_write(&self.path, text.as_bytes())?;
        tracing::debug!(path = %self.path.display(), protection_level = %level, "settings written");
        Ok(())
    }

    fn read_text(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(io_error("read_settings", e)),
        }
    }
}

impl ConfigReader for TomlConfigReader {
    fn settings(&self) -> lockor_core::Result<Settings> {
        Ok(self.load()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_means_defaults() {
        let dir = TempDir::new().unwrap();
        let reader = TomlConfigReader::for_workspace(dir.path());
        assert_eq!(reader.load().unwrap(), Settings::default());
    }

    #[test]
    fn test_unknown_level_is_invalid_config() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.toml");
        std::fs::write(&path, "protectionLevel = \"paranoid\"\n").unwrap();

        let err = TomlConfigReader::new(&path).settings().unwrap_err();
        assert_eq!(err.code(), "ERR_INVALID_CONFIG");
        assert_eq!(
            TomlConfigReader::new(&path).protection_level(),
            ProtectionLevel::AiAware
        );
    }
}
