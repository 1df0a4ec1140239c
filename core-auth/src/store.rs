//! # Session Store
//!
//! Persists captured session credentials through the host's secure storage.
//! Credentials are serialized to JSON with a capture timestamp and stored
//! under a fixed key; saving again overwrites the previous session, clearing
//! removes it. Cookie values are never logged.

use crate::credentials::SessionCredentials;
use crate::error::Result;
use bridge_traits::storage::SecureStore;
use chrono::Utc;
use core_runtime::CoreConfig;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, warn};

const SESSION_KEY: &str = "auth.session_cookies";

/// Serializable wrapper for persisted credentials.
#[derive(Debug, Serialize, Deserialize)]
struct StoredSession {
    cookie_header: String,
    captured_at: i64,
}

/// Secure persistence for session credentials.
#[derive(Clone)]
pub struct SessionStore {
    secure_store: Arc<dyn SecureStore>,
}

impl SessionStore {
    /// Create a store backed by the host's secure storage.
    pub fn new(secure_store: Arc<dyn SecureStore>) -> Self {
        debug!("Initializing SessionStore");
        Self { secure_store }
    }

    /// Create a store from the host configuration, failing fast when the
    /// host provided no secure storage.
    pub fn from_config(config: &CoreConfig) -> core_runtime::Result<Self> {
        Ok(Self::new(config.require_secure_store()?))
    }

    /// Persist credentials, overwriting any previous session.
    pub async fn save(&self, credentials: &SessionCredentials) -> Result<()> {
        let stored = StoredSession {
            cookie_header: credentials.cookie_header().to_string(),
            captured_at: Utc::now().timestamp(),
        };
        let json = serde_json::to_vec(&stored)?;

        self.secure_store.set_secret(SESSION_KEY, &json).await?;
        info!("session credentials stored");
        Ok(())
    }

    /// Retrieve the persisted credentials, if any.
    ///
    /// Corrupted entries are deleted and reported as absent, so a damaged
    /// store degrades to the logged-out state instead of wedging the flow.
    pub async fn load(&self) -> Result<Option<SessionCredentials>> {
        let Some(bytes) = self.secure_store.get_secret(SESSION_KEY).await? else {
            return Ok(None);
        };

        match serde_json::from_slice::<StoredSession>(&bytes) {
            Ok(stored) => Ok(Some(SessionCredentials::new(stored.cookie_header))),
            Err(e) => {
                warn!(error = %e, "stored session is corrupted, clearing it");
                self.secure_store.delete_secret(SESSION_KEY).await?;
                Ok(None)
            }
        }
    }

    /// Whether a session is currently persisted.
    pub async fn is_logged_in(&self) -> Result<bool> {
        self.secure_store
            .has_secret(SESSION_KEY)
            .await
            .map_err(Into::into)
    }

    /// Clear the persisted session on explicit logout.
    pub async fn clear(&self) -> Result<()> {
        self.secure_store.delete_secret(SESSION_KEY).await?;
        info!("session credentials cleared");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use bridge_traits::error::Result as BridgeResult;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        secrets: Mutex<HashMap<String, Vec<u8>>>,
    }

    #[async_trait]
    impl SecureStore for MemoryStore {
        async fn set_secret(&self, key: &str, value: &[u8]) -> BridgeResult<()> {
            self.secrets
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_vec());
            Ok(())
        }

        async fn get_secret(&self, key: &str) -> BridgeResult<Option<Vec<u8>>> {
            Ok(self.secrets.lock().unwrap().get(key).cloned())
        }

        async fn delete_secret(&self, key: &str) -> BridgeResult<()> {
            self.secrets.lock().unwrap().remove(key);
            Ok(())
        }
    }

    #[tokio::test]
    async fn save_load_clear_round_trip() {
        let store = SessionStore::new(Arc::new(MemoryStore::default()));
        assert!(!store.is_logged_in().await.unwrap());

        let creds = SessionCredentials::new("SID=a; HSID=b; SSID=c");
        store.save(&creds).await.unwrap();
        assert!(store.is_logged_in().await.unwrap());
        assert_eq!(store.load().await.unwrap(), Some(creds));

        store.clear().await.unwrap();
        assert!(!store.is_logged_in().await.unwrap());
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn saving_again_overwrites() {
        let store = SessionStore::new(Arc::new(MemoryStore::default()));

        store
            .save(&SessionCredentials::new("SID=old; HSID=old; SSID=old"))
            .await
            .unwrap();
        let newer = SessionCredentials::new("SID=new; HSID=new; SSID=new");
        store.save(&newer).await.unwrap();

        assert_eq!(store.load().await.unwrap(), Some(newer));
    }

    #[tokio::test]
    async fn corrupted_entry_degrades_to_logged_out() {
        let memory = Arc::new(MemoryStore::default());
        memory.set_secret(SESSION_KEY, b"not json").await.unwrap();

        let store = SessionStore::new(memory);
        assert_eq!(store.load().await.unwrap(), None);
        assert!(!store.is_logged_in().await.unwrap());
    }
}
