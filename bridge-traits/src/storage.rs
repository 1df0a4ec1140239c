//! Secure Credential Storage
//!
//! Abstracts platform secure storage mechanisms:
//! - macOS/iOS: Keychain
//! - Android: Keystore (hardware-backed when available)
//! - Windows: DPAPI
//! - Linux: Secret Service / libsecret
//!
//! # Security Requirements
//!
//! Implementations MUST:
//! - Encrypt data at rest
//! - Use platform-provided secure storage when available
//! - Never log or expose sensitive data

use async_trait::async_trait;

use crate::error::Result;

/// Secure credential storage trait.
#[async_trait]
pub trait SecureStore: Send + Sync {
    /// Store a secret value, securely overwriting any previous value.
    async fn set_secret(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Retrieve a secret value.
    ///
    /// Returns `Ok(None)` if the key doesn't exist. Returned data should be
    /// handled securely and not logged.
    async fn get_secret(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Delete a secret. Deleting a missing key is a no-op.
    async fn delete_secret(&self, key: &str) -> Result<()>;

    /// Check if a secret exists without retrieving it.
    async fn has_secret(&self, key: &str) -> Result<bool> {
        Ok(self.get_secret(key).await?.is_some())
    }
}
