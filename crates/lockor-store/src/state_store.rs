//! SQLite-backed workspace state
//!
//! One row per key in `workspace_state`; values are stored as JSON text.

use std::path::Path;

use lockor_core::ports::StateStore;
use rusqlite::{Connection, OptionalExtension};
use serde_json::Value;

use crate::db;
use crate::errors::{from_rusqlite, io_error, Result};
use crate::migrations::apply_migrations;

/// Database location relative to the workspace root
pub const STATE_DB_PATH: &str = ".lockor/state.db";

pub struct SqliteStateStore {
    conn: Connection,
}

impl SqliteStateStore {
    /// Open (or create) the database file and bring its schema up to date
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| io_error("create_state_dir", e))?;
        }
        let mut conn = db::open(path)?;
        db::configure(&conn)?;
        apply_migrations(&mut conn)?;
        tracing::debug!(path = %path.display(), "state store opened");
        Ok(Self { conn })
    }

    /// Store for the workspace rooted at `root`
    pub fn for_workspace(root: &Path) -> Result<Self> {
        Self::open(&root.join(STATE_DB_PATH))
    }

    /// In-memory database, used by tests
    pub fn in_memory() -> Result<Self> {
        let mut conn = db::open_in_memory()?;
        apply_migrations(&mut conn)?;
        Ok(Self { conn })
    }

    fn read(&self, key: &str) -> Result<Option<Value>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM workspace_state WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()
            .map_err(from_rusqlite)?;

        match raw {
            None => Ok(None),
            Some(text) => serde_json::from_str(&text).map(Some).map_err(|e| {
                lockor_core::ExError::new(lockor_core::ExErrorKind::Serialization)
                    .with_op("read_workspace_state")
                    .with_message(format!("Invalid JSON under '{}': {}", key, e))
            }),
        }
    }

    fn write(&self, key: &str, value: &Value) -> Result<()> {
        let now = chrono::Utc::now().timestamp_millis();
        self.conn
            .execute(
                "INSERT INTO workspace_state (key, value, updated_at)
                 VALUES (?1, ?2, ?3)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = excluded.updated_at",
                rusqlite::params![key, value.to_string(), now],
            )
            .map_err(from_rusqlite)?;
        Ok(())
    }
}

impl StateStore for SqliteStateStore {
    fn get(&self, key: &str) -> lockor_core::Result<Option<Value>> {
        Ok(self.read(key)?)
    }

    fn set(&self, key: &str, value: Value) -> lockor_core::Result<()> {
        Ok(self.write(key, &value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_missing_key_is_none() {
        let store = SqliteStateStore::in_memory().unwrap();
        assert_eq!(store.get("lockor.lockedFiles").unwrap(), None);
    }

    #[test]
    fn test_set_overwrites() {
        let store = SqliteStateStore::in_memory().unwrap();
        store.set("k", json!(["/a"])).unwrap();
        store.set("k", json!(["/a", "/b"])).unwrap();
        assert_eq!(store.get("k").unwrap(), Some(json!(["/a", "/b"])));
    }
}
