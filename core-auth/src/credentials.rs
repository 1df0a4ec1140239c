//! # Session Credentials
//!
//! Opaque cookie-header credentials and the session-marker check that
//! decides when a login flow has produced a signed-in session.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Cookie names whose joint presence indicates a signed-in session.
pub const SESSION_COOKIE_NAMES: [&str; 3] = ["SID", "HSID", "SSID"];

/// Returns `true` when the cookie header carries all session-indicating
/// cookies.
///
/// Names are matched on parsed `name=value` pairs, not raw substrings: a raw
/// scan for `SID=` would also match inside `HSID=` and `SSID=`, reporting a
/// session for headers that lack the `SID` cookie itself.
pub fn has_session_markers(cookie_header: &str) -> bool {
    SESSION_COOKIE_NAMES.iter().all(|name| {
        cookie_header.split(';').any(|pair| {
            pair.split_once('=')
                .is_some_and(|(cookie_name, _)| cookie_name.trim() == *name)
        })
    })
}

/// Captured authentication cookies representing a logged-in state.
///
/// The cookie header is treated as opaque: it is persisted and replayed but
/// never parsed beyond [`has_session_markers`], and never logged.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCredentials {
    cookie_header: String,
}

impl SessionCredentials {
    /// Wrap a captured cookie header.
    pub fn new(cookie_header: impl Into<String>) -> Self {
        Self {
            cookie_header: cookie_header.into(),
        }
    }

    /// Borrow the raw cookie header for replay against the backend.
    pub fn cookie_header(&self) -> &str {
        &self.cookie_header
    }

    /// Whether these credentials carry the session-indicating cookies.
    pub fn has_session_markers(&self) -> bool {
        has_session_markers(&self.cookie_header)
    }
}

// Credentials must never leak through Debug output.
impl fmt::Debug for SessionCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionCredentials")
            .field("cookie_header", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_three_markers_present() {
        assert!(has_session_markers("SID=a; HSID=b; SSID=c"));
        assert!(has_session_markers("OTHER=x;SSID=c;SID=a;HSID=b"));
    }

    #[test]
    fn missing_any_marker_is_not_a_session() {
        assert!(!has_session_markers("SID=a; HSID=b"));
        assert!(!has_session_markers("SID=a; SSID=c"));
        assert!(!has_session_markers(""));
    }

    #[test]
    fn sid_inside_other_names_does_not_count() {
        // HSID and SSID both end in "SID"; a substring scan would wrongly
        // find SID here.
        assert!(!has_session_markers("HSID=b; SSID=c"));
    }

    #[test]
    fn whitespace_around_names_is_tolerated() {
        assert!(has_session_markers("  SID=a ;  HSID=b ; SSID=c "));
    }

    #[test]
    fn debug_output_is_redacted() {
        let creds = SessionCredentials::new("SID=topsecret");
        let debug = format!("{creds:?}");
        assert!(!debug.contains("topsecret"));
        assert!(debug.contains("<redacted>"));
    }
}
