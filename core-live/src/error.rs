use bridge_traits::BridgeError;
use thiserror::Error;

/// Errors surfaced by the live progress notifier.
#[derive(Error, Debug)]
pub enum LiveError {
    /// The host notification system rejected a post or cancel.
    #[error("Notification error: {0}")]
    Notification(#[from] BridgeError),
}

/// Result type for live progress operations.
pub type Result<T> = std::result::Result<T, LiveError>;
