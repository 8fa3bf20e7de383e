//! Generated artifact files under the workspace root

use std::path::{Path, PathBuf};

use lockor_core::errors::{ArtifactKind, LockorError};
use lockor_core::ports::ArtifactSink;

use crate::atomic::{atomic_write, remove_if_exists};

/// AI rule document, relative to the workspace root
pub const RULE_FILE_PATH: &str = ".cursor/rules/lockor-locked-files.mdc";
/// Status document, relative to the workspace root
pub const STATUS_FILE_PATH: &str = ".lockor/status.md";

/// Writes the rule and status documents below a workspace root
///
/// Without a root every write fails with `WorkspaceRootMissing`.
#[derive(Debug, Clone)]
pub struct FsArtifactSink {
    root: Option<PathBuf>,
}

impl FsArtifactSink {
    pub fn new(root: Option<PathBuf>) -> Self {
        Self { root }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Absolute location of a file artifact
    pub fn path_for(&self, kind: ArtifactKind) -> lockor_core::Result<PathBuf> {
        let root = self
            .root
            .as_deref()
            .ok_or(LockorError::WorkspaceRootMissing { artifact: kind })?;
        let relative = match kind {
            ArtifactKind::RuleFile => RULE_FILE_PATH,
            ArtifactKind::StatusFile => STATUS_FILE_PATH,
            ArtifactKind::Diagnostics => {
                return Err(LockorError::Artifact {
                    artifact: kind,
                    message: "diagnostics are published to the host, not written to disk"
                        .to_string(),
                })
            }
        };
        Ok(root.join(relative))
    }
}

impl ArtifactSink for FsArtifactSink {
    fn write(&self, kind: ArtifactKind, content: &str) -> lockor_core::Result<()> {
        let path = self.path_for(kind)?;
        atomic_write(&path, content.as_bytes()).map_err(|e| LockorError::Artifact {
            artifact: kind,
            message: e.to_string(),
        })?;
        tracing::debug!(artifact = kind.as_str(), path = %path.display(), "artifact written");
        Ok(())
    }

    fn remove(&self, kind: ArtifactKind) -> lockor_core::Result<()> {
        let path = self.path_for(kind)?;
        remove_if_exists(&path).map_err(|e| LockorError::Artifact {
            artifact: kind,
            message: e.to_string(),
        })
    }
}
