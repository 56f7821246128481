//! Error types and exit codes for lazypath
//!
//! Exit codes:
//! - 0: Success
//! - 1: Generic failure
//! - 2: Usage error (bad flags/args)
//! - 3: Data error (invalid edge weight, unknown vertex)

mod macros;

use thiserror::Error;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Success (0)
    Success = 0,
    /// Generic failure (1)
    Failure = 1,
    /// Usage error - bad flags/args (2)
    Usage = 2,
    /// Data error - invalid weight, unknown vertex (3)
    Data = 3,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

/// Errors that can occur during lazypath operations
#[derive(Error, Debug)]
pub enum LazypathError {
    // Usage errors (exit code 2)
    #[error("unknown format: {0} (expected: human or json)")]
    UnknownFormat(String),

    #[error("{0}")]
    UsageError(String),

    #[error("invalid {context}: {value}")]
    InvalidValue { context: String, value: String },

    // Data errors (exit code 3)
    /// Edge weight is negative (or not a number)
    #[error("invalid weight {weight} on edge {from} -> {to}: weights must be non-negative")]
    InvalidWeight {
        from: String,
        to: String,
        weight: f64,
    },

    /// Start vertex is not a key of the graph
    #[error("unknown vertex: {vertex}")]
    UnknownVertex { vertex: String },

    // Generic failures (exit code 1)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

impl LazypathError {
    /// Create an error for a negative or NaN edge weight
    pub fn invalid_weight(
        from: impl std::fmt::Display,
        to: impl std::fmt::Display,
        weight: f64,
    ) -> Self {
        LazypathError::InvalidWeight {
            from: from.to_string(),
            to: to.to_string(),
            weight,
        }
    }

    /// Create an error for a vertex that is not part of the graph
    pub fn unknown_vertex(vertex: impl std::fmt::Display) -> Self {
        LazypathError::UnknownVertex {
            vertex: vertex.to_string(),
        }
    }

    /// Create an error for an invalid value or configuration
    pub fn invalid_value(context: &str, value: impl std::fmt::Display) -> Self {
        LazypathError::InvalidValue {
            context: context.to_string(),
            value: value.to_string(),
        }
    }

    /// Get the appropriate exit code for this error
    pub fn exit_code(&self) -> ExitCode {
        match self {
            LazypathError::UnknownFormat(_)
            | LazypathError::UsageError(_)
            | LazypathError::InvalidValue { .. } => ExitCode::Usage,

            LazypathError::InvalidWeight { .. } | LazypathError::UnknownVertex { .. } => {
                ExitCode::Data
            }

            LazypathError::Io(_)
            | LazypathError::Json(_)
            | LazypathError::Toml(_)
            | LazypathError::Other(_) => ExitCode::Failure,
        }
    }

    /// Get the error type identifier
    pub fn error_type(&self) -> &'static str {
        match self {
            LazypathError::UnknownFormat(_) => "unknown_format",
            LazypathError::UsageError(_) => "usage_error",
            LazypathError::InvalidValue { .. } => "invalid_value",
            LazypathError::InvalidWeight { .. } => "invalid_weight",
            LazypathError::UnknownVertex { .. } => "unknown_vertex",
            LazypathError::Io(_) => "io_error",
            LazypathError::Json(_) => "json_error",
            LazypathError::Toml(_) => "toml_error",
            LazypathError::Other(_) => "other",
        }
    }

    /// Convert error to JSON representation for structured error output.
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

/// Result type alias for lazypath operations
pub type Result<T> = std::result::Result<T, LazypathError>;
