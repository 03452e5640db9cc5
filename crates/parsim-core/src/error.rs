//! Error types and exit codes for parsim
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (embedding, export, I/O)
//! - 2: Usage error (bad flags/args, bad config)
//! - 3: Data/input error (empty corpus, duplicate article names)

use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the parsim binary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/input error - empty or inconsistent corpus (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during a parsim run
#[derive(Error, Debug)]
pub enum ParsimError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // Data/input errors (exit code 3)
    #[error("no input articles found in {dir:?}")]
    NoInputFound { dir: PathBuf },

    #[error("duplicate article name: {name}")]
    DuplicateArticle { name: String },

    // Generic failures (exit code 1)
    #[error("embedding unavailable: {reason}")]
    EmbeddingUnavailable { reason: String },

    #[error("embedding {what} mismatch: expected {expected}, got {actual}")]
    DimensionMismatch {
        what: String,
        expected: usize,
        actual: usize,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },
}

impl ParsimError {
    /// Create an error for an unavailable or misbehaving embedding endpoint
    pub fn embedding_unavailable(reason: impl std::fmt::Display) -> Self {
        ParsimError::EmbeddingUnavailable {
            reason: reason.to_string(),
        }
    }

    /// Create an error for a failed operation with a reason
    pub fn failed(operation: &str, reason: impl std::fmt::Display) -> Self {
        ParsimError::FailedOperation {
            operation: operation.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ParsimError::UnknownFormat(_)
            | ParsimError::UsageError(_)
            | ParsimError::InvalidConfig { .. } => ExitCode::Usage,

            ParsimError::NoInputFound { .. } | ParsimError::DuplicateArticle { .. } => {
                ExitCode::Data
            }

            ParsimError::EmbeddingUnavailable { .. }
            | ParsimError::DimensionMismatch { .. }
            | ParsimError::Io(_)
            | ParsimError::Json(_)
            | ParsimError::Toml(_)
            | ParsimError::Csv(_)
            | ParsimError::FailedOperation { .. } => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            ParsimError::UnknownFormat(_) => "unknown_format",
            ParsimError::UsageError(_) => "usage_error",
            ParsimError::InvalidConfig { .. } => "invalid_config",
            ParsimError::NoInputFound { .. } => "no_input_found",
            ParsimError::DuplicateArticle { .. } => "duplicate_article",
            ParsimError::EmbeddingUnavailable { .. } => "embedding_unavailable",
            ParsimError::DimensionMismatch { .. } => "dimension_mismatch",
            ParsimError::Io(_) => "io_error",
            ParsimError::Json(_) => "json_error",
            ParsimError::Toml(_) => "toml_error",
            ParsimError::Csv(_) => "csv_error",
            ParsimError::FailedOperation { .. } => "failed_operation",
        }
    }

    /// Convert error to JSON representation for structured error output
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "error": {
                "code": self.exit_code() as i32,
                "type": self.error_type(),
                "message": self.to_string(),
            }
        })
    }
}

/// Result type alias for parsim operations
pub type Result<T> = std::result::Result<T, ParsimError>;
