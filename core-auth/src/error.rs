use bridge_traits::BridgeError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The host secure store or cookie jar failed.
    #[error("Bridge error: {0}")]
    Bridge(#[from] BridgeError),

    /// Stored credentials could not be serialized or parsed.
    #[error("Credential serialization failed: {0}")]
    SerializationFailed(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AuthError>;
