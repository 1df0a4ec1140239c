use thiserror::Error;

/// Errors raised while validating configuration or wiring host capabilities.
#[derive(Error, Debug)]
pub enum Error {
    /// A configuration value failed validation.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The host did not provide a bridge capability a core module requires.
    #[error("Capability missing: {capability} - {message}")]
    CapabilityMissing { capability: String, message: String },
}

/// Result type for runtime operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_piece() {
        let config = Error::Config("event_buffer must be non-zero".into());
        assert_eq!(
            config.to_string(),
            "Configuration error: event_buffer must be non-zero"
        );

        let missing = Error::CapabilityMissing {
            capability: "NotificationSink".into(),
            message: "inject the host adapter".into(),
        };
        assert!(missing.to_string().contains("NotificationSink"));
    }
}
