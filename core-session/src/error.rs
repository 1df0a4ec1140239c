//! # Session Error Types

use thiserror::Error;

/// Errors surfaced by stream resolution.
#[derive(Error, Debug)]
pub enum SessionError {
    /// The resolver failed while looking up a content id.
    #[error("Stream resolution failed for {id}: {message}")]
    ResolveFailed { id: String, message: String },

    /// Resolution exceeded the configured bound.
    #[error("Stream resolution timed out for {id} after {timeout_ms} ms")]
    ResolveTimeout { id: String, timeout_ms: u64 },

    /// The resolver returned a string that is not a valid URL.
    #[error("Resolver returned an invalid URL for {id}: {source}")]
    InvalidUrl {
        id: String,
        #[source]
        source: url::ParseError,
    },
}

/// Result type for session operations.
pub type Result<T> = std::result::Result<T, SessionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_names_id_and_bound() {
        let err = SessionError::ResolveTimeout {
            id: "dQw4w9WgXcQ".into(),
            timeout_ms: 5_000,
        };
        assert_eq!(
            err.to_string(),
            "Stream resolution timed out for dQw4w9WgXcQ after 5000 ms"
        );
    }
}

