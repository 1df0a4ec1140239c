//! # Session Authentication
//!
//! Captures and persists web session credentials for the streaming backend.
//!
//! ## Overview
//!
//! The host shell drives a web-based login page in an embedded browser
//! surface. After each page load it calls
//! [`LoginWatcher::on_page_loaded`](watcher::LoginWatcher::on_page_loaded),
//! which reads the shared cookie store and, once the three session-indicating
//! cookies are present, persists them through the host's
//! [`SecureStore`](bridge_traits::storage::SecureStore) exactly once.
//!
//! Credentials are opaque cookie header strings. Nothing beyond the presence
//! of the session cookie names is interpreted, and values are never logged.

pub mod credentials;
pub mod error;
pub mod store;
pub mod watcher;

pub use credentials::{has_session_markers, SessionCredentials, SESSION_COOKIE_NAMES};
pub use error::{AuthError, Result};
pub use store::SessionStore;
pub use watcher::{LoginOutcome, LoginWatcher};
