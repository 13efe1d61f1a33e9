//! Error taxonomy for the submission pipeline.
//!
//! Every variant is terminal for the current submission attempt — nothing is
//! retried — and carries a human-readable message for the caller.

/// Result type for submission operations.
pub type UploadResult<T> = Result<T, UploadError>;

/// Errors surfaced by a submission attempt.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    /// The request payload was empty; no network call was made.
    #[error("no document selected for analysis")]
    NoFileSelected,

    /// Another submission is already in flight; this one was rejected.
    #[error("a submission is already in progress")]
    SubmissionInProgress,

    /// The cancellation timer elapsed before a response arrived; the
    /// in-flight request was aborted.
    #[error("analysis request timed out after {timeout_ms} ms")]
    Timeout { timeout_ms: u64 },

    /// Transport-level failure (unreachable host, connection reset, ...).
    #[error("network error: {message}")]
    Network { message: String },

    /// The endpoint answered with a non-2xx status.
    #[error("server returned HTTP {status}: {body}")]
    Server { status: u16, body: String },

    /// The response body was absent, unparseable, or missing required fields.
    #[error("malformed analysis response: {message}")]
    MalformedResponse { message: String },
}

impl UploadError {
    /// Create a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a malformed-response error.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedResponse {
            message: message.into(),
        }
    }

    /// Check whether this error came from the cancellation timer.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. })
    }

    /// HTTP status of a server rejection, if that is what this error is.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            UploadError::NoFileSelected.to_string(),
            "no document selected for analysis"
        );
        assert_eq!(
            UploadError::Timeout { timeout_ms: 30_000 }.to_string(),
            "analysis request timed out after 30000 ms"
        );
        assert_eq!(
            UploadError::Server {
                status: 500,
                body: "server exploded".to_string()
            }
            .to_string(),
            "server returned HTTP 500: server exploded"
        );
    }

    #[test]
    fn test_predicates() {
        assert!(UploadError::Timeout { timeout_ms: 1 }.is_timeout());
        assert!(!UploadError::NoFileSelected.is_timeout());
        assert_eq!(
            UploadError::Server {
                status: 503,
                body: String::new()
            }
            .status(),
            Some(503)
        );
        assert_eq!(UploadError::network("refused").status(), None);
    }
}
