//! Error types for the job-scanner application.

use job_match::MatchError;

/// Top-level error type for a scanner run.
#[derive(Debug, thiserror::Error)]
pub enum ScannerError {
    /// Configuration file or flag error.
    #[error("config error: {0}")]
    Config(String),

    /// Fetching or ranking error from the matching core.
    #[error(transparent)]
    Match(#[from] MatchError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Results could not be serialized.
    #[error("serialize error: {0}")]
    Serialize(String),
}

/// Convenience result type.
pub type Result<T> = std::result::Result<T, ScannerError>;
