//! # Core Configuration
//!
//! Host-injected configuration for the playback core. The host shell builds
//! a [`CoreConfig`] at startup, attaches its bridge capability adapters, and
//! hands the config to the core modules it wires up.
//!
//! The core fails fast with [`Error::CapabilityMissing`] when a module needs
//! a capability the host did not provide, instead of failing later at the
//! point of use.
//!
//! ## Usage
//!
//! ```ignore
//! use core_runtime::CoreConfig;
//! use std::sync::Arc;
//!
//! let config = CoreConfig::default()
//!     .with_notification_sink(Arc::new(HostNotificationSink::new()))
//!     .with_secure_store(Arc::new(HostKeystore::new()))
//!     .with_resolve_timeout(Some(Duration::from_secs(15)));
//! config.validate()?;
//! ```

use crate::error::{Error, Result};
use crate::events::EventBus;
use bridge_traits::cookies::CookieJarAccess;
use bridge_traits::notification::{NotificationChannel, NotificationSink};
use bridge_traits::storage::SecureStore;
use std::sync::Arc;
use std::time::Duration;

/// Fixed notification id used for the live progress notification. A single
/// id guarantees at most one progress notification per service lifetime.
pub const PROGRESS_NOTIFICATION_ID: u32 = 0x544c_0001;

/// Default capacity of the core event bus.
pub const DEFAULT_EVENT_BUFFER: usize = 128;

/// Configuration and capability wiring for the playback core.
#[derive(Clone)]
pub struct CoreConfig {
    /// Notification id for the live progress notification.
    pub progress_notification_id: u32,
    /// Channel declaration for progress notifications.
    pub progress_channel: NotificationChannel,
    /// Event bus buffer capacity.
    pub event_buffer: usize,
    /// Per-item bound on stream resolution. `None` disables the bound and an
    /// unresponsive resolver stalls the batch indefinitely.
    pub resolve_timeout: Option<Duration>,
    /// Host notification adapter.
    pub notification_sink: Option<Arc<dyn NotificationSink>>,
    /// Host web cookie store adapter.
    pub cookie_jar: Option<Arc<dyn CookieJarAccess>>,
    /// Host secure storage adapter.
    pub secure_store: Option<Arc<dyn SecureStore>>,
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            progress_notification_id: PROGRESS_NOTIFICATION_ID,
            progress_channel: NotificationChannel::progress(
                "playback.progress",
                "Playback progress",
            ),
            event_buffer: DEFAULT_EVENT_BUFFER,
            resolve_timeout: Some(Duration::from_secs(15)),
            notification_sink: None,
            cookie_jar: None,
            secure_store: None,
        }
    }
}

impl CoreConfig {
    /// Override the progress notification id.
    pub fn with_progress_notification_id(mut self, id: u32) -> Self {
        self.progress_notification_id = id;
        self
    }

    /// Override the progress notification channel.
    pub fn with_progress_channel(mut self, channel: NotificationChannel) -> Self {
        self.progress_channel = channel;
        self
    }

    /// Override the event bus capacity.
    pub fn with_event_buffer(mut self, capacity: usize) -> Self {
        self.event_buffer = capacity;
        self
    }

    /// Set or disable the per-item resolution timeout.
    pub fn with_resolve_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.resolve_timeout = timeout;
        self
    }

    /// Attach the host notification adapter.
    pub fn with_notification_sink(mut self, sink: Arc<dyn NotificationSink>) -> Self {
        self.notification_sink = Some(sink);
        self
    }

    /// Attach the host cookie store adapter.
    pub fn with_cookie_jar(mut self, jar: Arc<dyn CookieJarAccess>) -> Self {
        self.cookie_jar = Some(jar);
        self
    }

    /// Attach the host secure storage adapter.
    pub fn with_secure_store(mut self, store: Arc<dyn SecureStore>) -> Self {
        self.secure_store = Some(store);
        self
    }

    /// Validate structural invariants of the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.event_buffer == 0 {
            return Err(Error::Config("event_buffer must be non-zero".into()));
        }
        if self.progress_channel.id.is_empty() {
            return Err(Error::Config("progress channel id must not be empty".into()));
        }
        if let Some(timeout) = self.resolve_timeout {
            if timeout.is_zero() {
                return Err(Error::Config(
                    "resolve_timeout must be positive when set".into(),
                ));
            }
        }
        Ok(())
    }

    /// Build the core event bus with the configured capacity.
    pub fn event_bus(&self) -> EventBus {
        EventBus::new(self.event_buffer)
    }

    /// Notification sink, or a fail-fast error naming the missing capability.
    pub fn require_notification_sink(&self) -> Result<Arc<dyn NotificationSink>> {
        self.notification_sink
            .clone()
            .ok_or_else(|| missing("NotificationSink"))
    }

    /// Cookie jar, or a fail-fast error naming the missing capability.
    pub fn require_cookie_jar(&self) -> Result<Arc<dyn CookieJarAccess>> {
        self.cookie_jar.clone().ok_or_else(|| missing("CookieJarAccess"))
    }

    /// Secure store, or a fail-fast error naming the missing capability.
    pub fn require_secure_store(&self) -> Result<Arc<dyn SecureStore>> {
        self.secure_store.clone().ok_or_else(|| missing("SecureStore"))
    }
}

fn missing(capability: &str) -> Error {
    Error::CapabilityMissing {
        capability: capability.to_string(),
        message: format!(
            "No {capability} implementation provided. Inject the host adapter \
             through CoreConfig before constructing core modules."
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        assert!(CoreConfig::default().validate().is_ok());
    }

    #[test]
    fn zero_event_buffer_rejected() {
        let config = CoreConfig::default().with_event_buffer(0);
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn zero_timeout_rejected() {
        let config = CoreConfig::default().with_resolve_timeout(Some(Duration::ZERO));
        assert!(matches!(config.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn event_bus_uses_configured_capacity() {
        let bus = CoreConfig::default().with_event_buffer(4).event_bus();
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn missing_capability_is_fail_fast() {
        let config = CoreConfig::default();
        let err = config.require_notification_sink().err().unwrap();
        assert!(matches!(err, Error::CapabilityMissing { .. }));
    }
}
