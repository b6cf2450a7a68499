//! Error types for the job-match crate.
//!
//! Messages are stable strings suitable for display to users. A failure of a
//! single keyword query is never surfaced through these types by
//! [`crate::scan`]; it is downgraded to a logged warning instead.

/// Errors that can occur while fetching or ranking listings.
#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    /// An HTTP request to the listing source failed or returned a non-success status.
    #[error("HTTP error: {0}")]
    Http(String),

    /// The listing source returned a payload that could not be decoded.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid scan configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for job-match results.
pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_http() {
        let err = MatchError::Http("connection refused".into());
        assert_eq!(err.to_string(), "HTTP error: connection refused");
    }

    #[test]
    fn display_parse() {
        let err = MatchError::Parse("expected value at line 1".into());
        assert_eq!(err.to_string(), "parse error: expected value at line 1");
    }

    #[test]
    fn display_config() {
        let err = MatchError::Config("top_n must be greater than 0".into());
        assert_eq!(err.to_string(), "config error: top_n must be greater than 0");
    }

    #[test]
    fn error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<MatchError>();
    }
}
