//! Error types and exit codes for inkpost
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure (including an unavailable search index)
//! - 2: Usage error (bad flags/args, invalid search arguments)
//! - 3: Data/store error (missing store, unknown post, etc.)

mod macros;

use std::path::PathBuf;
use thiserror::Error;

use crate::search::SearchIndex;

/// Exit codes for the inkpost CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data/store error - missing store, unknown record (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Failures of the ranked merge search.
///
/// Index failures abort the whole search: callers never see a partially
/// merged result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("search index {index} unavailable: {reason}")]
    IndexUnavailable { index: SearchIndex, reason: String },

    #[error("invalid search argument: {0}")]
    InvalidArgument(String),
}

impl SearchError {
    /// Create an index failure for the given index
    pub fn unavailable(index: SearchIndex, reason: impl std::fmt::Display) -> Self {
        SearchError::IndexUnavailable {
            index,
            reason: reason.to_string(),
        }
    }
}

impl From<rusqlite::Error> for InkpostError {
    fn from(err: rusqlite::Error) -> Self {
        InkpostError::Other(err.to_string())
    }
}

/// Errors that can occur during inkpost operations
#[derive(Error, Debug)]
pub enum InkpostError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("no author given (pass --author or set default_author in config.toml)")]
    MissingAuthor,

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data/store errors (exit code 3)
    #[error("store not found (searched from {search_root:?})")]
    StoreNotFound { search_root: PathBuf },

    #[error("invalid store: {reason}")]
    InvalidStore { reason: String },

    #[error("{context} not found: {value}")]
    NotFound { context: String, value: String },

    // Search errors (exit code depends on the kind)
    #[error(transparent)]
    Search(#[from] SearchError),

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("failed to {operation}: {reason}")]
    FailedOperation { operation: String, reason: String },

    #[error("{0}")]
    Other(String),
}

impl InkpostError {
    /// Create an error for a failed database operation
    pub fn db_operation(operation: &str, error: impl std::fmt::Display) -> Self {
        InkpostError::FailedOperation {
            operation: operation.to_string(),
            reason: error.to_string(),
        }
    }

    /// Create an error for a failed field extraction from a database row
    pub fn field_extraction(field: &str, error: impl std::fmt::Display) -> Self {
        InkpostError::FailedOperation {
            operation: format!("get {}", field),
            reason: error.to_string(),
        }
    }

    /// Create an error for an invalid value or argument
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        InkpostError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Create an error for a record that was not found
    pub fn not_found(context: &str, value: impl std::fmt::Display) -> Self {
        InkpostError::NotFound {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            InkpostError::UnknownFormat(_)
            | InkpostError::UsageError(_)
            | InkpostError::MissingAuthor
            | InkpostError::InvalidValue { .. }
            | InkpostError::Search(SearchError::InvalidArgument(_)) => ExitCode::Usage,

            InkpostError::StoreNotFound { .. }
            | InkpostError::InvalidStore { .. }
            | InkpostError::NotFound { .. } => ExitCode::Data,

            InkpostError::Search(SearchError::IndexUnavailable { .. })
            | InkpostError::Io(_)
            | InkpostError::Json(_)
            | InkpostError::Toml(_)
            | InkpostError::FailedOperation { .. }
            | InkpostError::Other(_) => ExitCode::Failure,
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

    /// Get the error type identifier
    fn error_type(&self) -> &'static str {
        match self {
            InkpostError::UnknownFormat(_) => "unknown_format",
            InkpostError::UsageError(_) => "usage_error",
            InkpostError::MissingAuthor => "missing_author",
            InkpostError::InvalidValue { .. } => "invalid_value",
            InkpostError::StoreNotFound { .. } => "store_not_found",
            InkpostError::InvalidStore { .. } => "invalid_store",
            InkpostError::NotFound { .. } => "not_found",
            InkpostError::Search(SearchError::InvalidArgument(_)) => "invalid_argument",
            InkpostError::Search(SearchError::IndexUnavailable { .. }) => "index_unavailable",
            InkpostError::Io(_) => "io_error",
            InkpostError::Json(_) => "json_error",
            InkpostError::Toml(_) => "toml_error",
            InkpostError::FailedOperation { .. } => "failed_operation",
            InkpostError::Other(_) => "other",
        }
    }
}

/// Result type alias for inkpost operations
pub type Result<T> = std::result::Result<T, InkpostError>;
