//! # Host Bridge Traits
//!
//! Platform abstraction traits that must be implemented by each host shell.
//!
//! ## Overview
//!
//! This crate defines the contract between the playback core and the
//! platform-specific host (mobile shell, desktop shell, headless test
//! harness). Each trait represents a capability the core requires but that
//! must be implemented differently per platform:
//!
//! - [`NotificationSink`](notification::NotificationSink) - Posting and
//!   cancelling status notifications, including the "promoted ongoing"
//!   display capability offered by newer hosts
//! - [`CookieJarAccess`](cookies::CookieJarAccess) - Reading cookies from the
//!   host's shared web cookie store after embedded login page loads
//! - [`SecureStore`](storage::SecureStore) - Credential persistence
//!   (Keychain/Keystore/DPAPI)
//!
//! ## Error Handling
//!
//! All bridge traits use [`BridgeError`](error::BridgeError). Host
//! implementations should convert platform-specific errors into it and
//! provide actionable messages.
//!
//! ## Thread Safety
//!
//! All bridge traits require `Send + Sync` so they can be shared across
//! async tasks behind `Arc<dyn Trait>`.

pub mod cookies;
pub mod error;
pub mod notification;
pub mod storage;

pub use error::BridgeError;

// Re-export commonly used types
pub use cookies::CookieJarAccess;
pub use notification::{
    NotificationChannel, NotificationContent, NotificationSink, PROMOTED_ONGOING_EXTRA,
};
pub use storage::SecureStore;
