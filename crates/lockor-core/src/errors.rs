use lockor_core_types::ProtectionLevel;
use thiserror::Error;

/// Result type alias using LockorError
pub type Result<T> = std::result::Result<T, LockorError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code used for programmatic handling,
/// log assertions and CLI output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // State conflicts (informational)
    AlreadyLocked,
    NotLocked,

    // Enforcement
    SaveBlocked,

    // Best-effort side effects
    Persistence,
    Permission,
    Artifact,
    WorkspaceRootMissing,

    // Input/configuration
    InvalidInput,
    InvalidConfig,
    NoActiveDocument,

    // Integration/IO
    Io,
    Serialization,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::AlreadyLocked => "ERR_ALREADY_LOCKED",
            ExErrorKind::NotLocked => "ERR_NOT_LOCKED",
            ExErrorKind::SaveBlocked => "ERR_SAVE_BLOCKED",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Permission => "ERR_PERMISSION",
            ExErrorKind::Artifact => "ERR_ARTIFACT",
            ExErrorKind::WorkspaceRootMissing => "ERR_WORKSPACE_ROOT_MISSING",
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ExErrorKind::NoActiveDocument => "ERR_NO_ACTIVE_DOCUMENT",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }

    /// State conflicts are reported to the user as information, not failure
    pub fn is_informational(&self) -> bool {
        matches!(self, ExErrorKind::AlreadyLocked | ExErrorKind::NotLocked)
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus optional
/// operation and path context for debugging.
#[derive(Debug, Clone, PartialEq)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    path: Option<String>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            path: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add file path context
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the path context, if any
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(path) = &self.path {
            write!(f, " (path: {})", path)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

// ========== End Error Facility ==========

/// Which generated artifact an artifact failure refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArtifactKind {
    /// Directive document read by AI assistants
    RuleFile,
    /// Human-readable workspace status document
    StatusFile,
    /// Editor diagnostics attached to locked documents
    Diagnostics,
}

impl ArtifactKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ArtifactKind::RuleFile => "rule_file",
            ArtifactKind::StatusFile => "status_file",
            ArtifactKind::Diagnostics => "diagnostics",
        }
    }
}

impl std::fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error taxonomy for Lockor operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LockorError {
    // ===== State conflicts =====
    /// Lock requested for a path that is already locked
    #[error("File is already locked: {path}")]
    AlreadyLocked { path: String },

    /// Unlock requested for a path that is not locked
    #[error("File is not locked: {path}")]
    NotLocked { path: String },

    // ===== Enforcement =====
    /// Save vetoed because the document is locked
    #[error("Cannot save locked file {path} (protection level: {level}); unlock it first")]
    SaveBlocked { path: String, level: ProtectionLevel },

    // ===== Best-effort side effects =====
    /// Workspace state could not be read or written
    #[error("Persistence failure: {message}")]
    Persistence { message: String },

    /// File mode bits could not be read or changed
    #[error("Permission change failed for {path}: {message}")]
    Permission { path: String, message: String },

    /// A generated artifact could not be written or removed
    #[error("Failed to update {artifact}: {message}")]
    Artifact {
        artifact: ArtifactKind,
        message: String,
    },

    /// Artifact files need a workspace root and none is open
    #[error("No workspace root available for {artifact}")]
    WorkspaceRootMissing { artifact: ArtifactKind },

    // ===== Input/configuration =====
    /// Path is empty or otherwise unusable as a lock key
    #[error("Invalid file path: '{path}'")]
    InvalidPath { path: String },

    /// Configuration could not be read or holds an invalid value
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// A command needed a document but none was given or active
    #[error("No file specified and no active document")]
    NoActiveDocument,

    // ===== Generic =====
    #[error("I/O error during {op}: {message}")]
    Io { op: String, message: String },

    #[error("Serialization error: {message}")]
    Serialization { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl LockorError {
    /// Stable classification of this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            LockorError::AlreadyLocked { .. } => ExErrorKind::AlreadyLocked,
            LockorError::NotLocked { .. } => ExErrorKind::NotLocked,
            LockorError::SaveBlocked { .. } => ExErrorKind::SaveBlocked,
            LockorError::Persistence { .. } => ExErrorKind::Persistence,
            LockorError::Permission { .. } => ExErrorKind::Permission,
            LockorError::Artifact { .. } => ExErrorKind::Artifact,
            LockorError::WorkspaceRootMissing { .. } => ExErrorKind::WorkspaceRootMissing,
            LockorError::InvalidPath { .. } => ExErrorKind::InvalidInput,
            LockorError::InvalidConfig { .. } => ExErrorKind::InvalidConfig,
            LockorError::NoActiveDocument => ExErrorKind::NoActiveDocument,
            LockorError::Io { .. } => ExErrorKind::Io,
            LockorError::Serialization { .. } => ExErrorKind::Serialization,
            LockorError::Internal { .. } => ExErrorKind::Internal,
        }
    }

    /// Stable error code for this error
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }
}

/// Conversion from LockorError to ExError
impl From<LockorError> for ExError {
    fn from(err: LockorError) -> Self {
        let message = err.to_string();
        let ex = ExError::new(err.kind()).with_message(message);
        match err {
            LockorError::AlreadyLocked { path }
            | LockorError::NotLocked { path }
            | LockorError::SaveBlocked { path, .. }
            | LockorError::InvalidPath { path }
            | LockorError::Permission { path, .. } => ex.with_path(path),
            LockorError::Artifact { artifact, .. }
            | LockorError::WorkspaceRootMissing { artifact } => {
                ex.with_op(format!("write_{}", artifact.as_str()))
            }
            LockorError::Io { op, .. } => ex.with_op(op),
            LockorError::Persistence { .. }
            | LockorError::InvalidConfig { .. }
            | LockorError::NoActiveDocument
            | LockorError::Serialization { .. }
            | LockorError::Internal { .. } => ex,
        }
    }
}

/// Conversion back from ExError, used where an adapter's failure surfaces
/// through a port that speaks LockorError
impl From<ExError> for LockorError {
    fn from(err: ExError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ExErrorKind::Persistence => LockorError::Persistence { message },
            ExErrorKind::InvalidConfig => LockorError::InvalidConfig { message },
            ExErrorKind::Serialization => LockorError::Serialization { message },
            ExErrorKind::NoActiveDocument => LockorError::NoActiveDocument,
            ExErrorKind::Io => LockorError::Io {
                op: err.op().unwrap_or("io").to_string(),
                message,
            },
            ExErrorKind::Permission => LockorError::Permission {
                path: err.path().unwrap_or_default().to_string(),
                message,
            },
            _ => LockorError::Internal { message },
        }
    }
}

impl From<serde_json::Error> for LockorError {
    fn from(err: serde_json::Error) -> Self {
        LockorError::Serialization {
            message: err.to_string(),
        }
    }
}
