//! # Login Watcher
//!
//! Observes page loads of the embedded web login flow. After each load the
//! watcher reads the host's shared cookie store for the page URL; once all
//! session-indicating cookies are present, it persists the credentials and
//! reports the sign-in, exactly once per watcher lifetime.
//!
//! A page load without the expected cookies is simply `Pending`: the login
//! surface stays open awaiting a later load. There is no timeout and no
//! user-visible error for a stalled login.

use crate::credentials::{has_session_markers, SessionCredentials};
use crate::error::Result;
use crate::store::SessionStore;
use bridge_traits::cookies::CookieJarAccess;
use core_runtime::CoreConfig;
use std::sync::Arc;
use tracing::{debug, info};

/// Outcome of a single page-load observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Session cookies are not present yet; keep the login surface open.
    Pending,
    /// Session cookies were captured and persisted by this observation.
    SignedIn,
    /// This watcher already captured a session on an earlier load.
    AlreadySignedIn,
}

/// Watches embedded-login page loads for session cookie capture.
pub struct LoginWatcher {
    cookie_jar: Arc<dyn CookieJarAccess>,
    store: SessionStore,
    captured: bool,
}

impl LoginWatcher {
    pub fn new(cookie_jar: Arc<dyn CookieJarAccess>, store: SessionStore) -> Self {
        Self {
            cookie_jar,
            store,
            captured: false,
        }
    }

    /// Create a watcher from the host configuration, failing fast when the
    /// host provided no cookie jar or secure storage.
    pub fn from_config(config: &CoreConfig) -> core_runtime::Result<Self> {
        let cookie_jar = config.require_cookie_jar()?;
        let store = SessionStore::from_config(config)?;
        Ok(Self::new(cookie_jar, store))
    }

    /// Inspect the cookie store after a page load.
    ///
    /// Returns [`LoginOutcome::SignedIn`] at most once; the success
    /// transition saves the credentials and emits no cookie values into
    /// logs.
    pub async fn on_page_loaded(&mut self, url: &str) -> Result<LoginOutcome> {
        if self.captured {
            return Ok(LoginOutcome::AlreadySignedIn);
        }

        let Some(cookie_header) = self.cookie_jar.cookies_for(url).await? else {
            debug!(url, "no cookies for login page yet");
            return Ok(LoginOutcome::Pending);
        };

        if !has_session_markers(&cookie_header) {
            debug!(url, "session cookies not present yet");
            return Ok(LoginOutcome::Pending);
        }

        self.store
            .save(&SessionCredentials::new(cookie_header))
            .await?;
        self.captured = true;
        info!(url, "login detected, session credentials captured");
        Ok(LoginOutcome::SignedIn)
    }
}
