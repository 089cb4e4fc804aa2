use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes let scripts tell a malformed payload apart from other failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - the payload was materialized and presented
    Success = 0,
    /// The payload text is not well-formed JSON
    ParseFailure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (file I/O error, config error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }

    /// Picks the exit code for an error surfaced by `run()`.
    pub fn for_error(error: &anyhow::Error) -> Self {
        match error.downcast_ref::<RecordError>() {
            Some(RecordError::Parse { .. }) => ExitCode::ParseFailure,
            _ => ExitCode::ApplicationError,
        }
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ParseFailure => write!(f, "Parse Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while materializing a record.
///
/// Missing, extra and mistyped fields are tolerated, so the only failure a
/// caller of the materializer sees is text that is not JSON at all.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Failed to parse {record} payload as JSON: {source}")]
    Parse {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to encode {record} as JSON: {source}")]
    Encode {
        record: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

impl RecordError {
    pub fn is_parse(&self) -> bool {
        matches!(self, RecordError::Parse { .. })
    }
}

/// Errors raised by the CLI surface around the materializer.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Payload file not found: {path}\n\n💡 Hint: {suggestion}")]
    PayloadNotFound { path: PathBuf, suggestion: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Security violation: {path}\nReason: {reason}\n\n💡 Hint: {hint}")]
    SecurityError {
        path: PathBuf,
        reason: String,
        hint: String,
    },

    #[error("Validation error: {message}")]
    Validation { message: String },
}
