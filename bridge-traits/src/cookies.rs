//! Web Cookie Store Access
//!
//! Abstracts the host's shared web cookie store. The embedded login flow
//! loads the identity provider's pages in a host web view; after each page
//! load the core reads the cookies currently associated with the page URL to
//! decide whether a session has been established.

use async_trait::async_trait;

use crate::error::Result;

/// Read access to the host's shared web cookie store.
#[async_trait]
pub trait CookieJarAccess: Send + Sync {
    /// Return the cookie header for the given URL, as the host web view
    /// would send it (`name=value; name2=value2; ...`).
    ///
    /// Returns `Ok(None)` when no cookies are associated with the URL yet.
    /// Values are credentials and must never be logged.
    async fn cookies_for(&self, url: &str) -> Result<Option<String>>;
}
