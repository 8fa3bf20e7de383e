use std::collections::BTreeSet;

use serde_json::Value;

/// Workspace state key under which the locked paths are persisted
pub const LOCKED_FILES_KEY: &str = "lockor.lockedFiles";

/// Set of locked file paths
///
/// Membership is exact string equality; no normalization happens here.
/// Iteration is sorted so listings and generated artifacts are stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LockedFileSet {
    paths: BTreeSet<String>,
}

impl LockedFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild from the persisted JSON form
    ///
    /// Accepts an array of strings. Non-string entries are skipped and
    /// duplicates collapse. Any other shape yields `None`.
    pub fn from_json(value: &Value) -> Option<Self> {
        let items = value.as_array()?;
        Some(
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect(),
        )
    }

    /// Persisted JSON form: a sorted array of strings
    pub fn to_json(&self) -> Value {
        Value::Array(self.paths.iter().cloned().map(Value::String).collect())
    }

    pub fn contains(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    /// Insert a path; returns `false` if it was already present
    pub fn insert(&mut self, path: &str) -> bool {
        if self.paths.contains(path) {
            return false;
        }
        self.paths.insert(path.to_string())
    }

    /// Remove a path; returns `false` if it was not present
    pub fn remove(&mut self, path: &str) -> bool {
        self.paths.remove(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.paths.iter().cloned().collect()
    }
}

impl FromIterator<String> for LockedFileSet {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().collect(),
        }
    }
}
