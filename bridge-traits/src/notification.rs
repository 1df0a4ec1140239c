//! Notification Abstractions
//!
//! Provides platform-agnostic types and traits for posting compact status
//! notifications from the core. The host maps these onto its native
//! notification system (status bar notification, system tray entry, toast).
//!
//! ## Promoted ongoing display
//!
//! Newer host OS versions offer a "promoted ongoing" display mode that gives
//! a notification prominent, frequently-updated placement (e.g. a live pill
//! on the lock screen). Support is a static capability of the host, exposed
//! through [`NotificationSink::supports_promoted_ongoing`]. Hosts without the
//! capability receive the same request through the generic
//! [`PROMOTED_ONGOING_EXTRA`] string extra and are free to ignore it.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;

/// Extras key carrying the "promoted ongoing" request for hosts without a
/// native flag. The value is the string `"true"`.
pub const PROMOTED_ONGOING_EXTRA: &str = "tunelink.promotedOngoing";

/// Importance of a notification channel.
///
/// Maps onto the host's channel importance levels. Progress notifications use
/// [`ChannelImportance::Low`] so they never make sound or peek.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelImportance {
    Min,
    Low,
    Default,
    High,
}

/// Lock-screen visibility of notifications posted to a channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChannelVisibility {
    /// Full content shown on the lock screen.
    Public,
    /// Content redacted on the lock screen.
    Private,
    /// Hidden from the lock screen entirely.
    Secret,
}

/// Declaration of a notification channel the host should register once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationChannel {
    /// Stable channel identifier.
    pub id: String,
    /// User-visible channel name.
    pub name: String,
    pub importance: ChannelImportance,
    pub visibility: ChannelVisibility,
    /// Whether notifications on this channel may make sound.
    pub sound: bool,
}

impl NotificationChannel {
    /// Channel preset for silent, frequently-updated progress notifications:
    /// low importance, no sound, public lock-screen visibility.
    pub fn progress(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            importance: ChannelImportance::Low,
            visibility: ChannelVisibility::Public,
            sound: false,
        }
    }
}

/// Renderable content of a single notification.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NotificationContent {
    /// Primary line, typically the track title.
    pub title: String,
    /// Secondary line, typically the artist.
    pub text: String,
    /// Short auxiliary label, typically the remaining-time chip.
    pub sub_text: Option<String>,
    /// Determinate progress in percent, when applicable.
    pub progress_percent: Option<u8>,
    /// Native "promoted ongoing" flag for hosts that support it.
    pub promoted_ongoing: bool,
    /// Generic string extras forwarded verbatim to the host.
    pub extras: HashMap<String, String>,
}

impl NotificationContent {
    /// Create content with the given title and text.
    pub fn new(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Attach a short auxiliary label.
    pub fn with_sub_text(mut self, sub_text: impl Into<String>) -> Self {
        self.sub_text = Some(sub_text.into());
        self
    }

    /// Attach determinate progress.
    pub fn with_progress(mut self, percent: u8) -> Self {
        self.progress_percent = Some(percent);
        self
    }
}

/// Trait for posting notifications through the host's notification system.
///
/// A fixed notification id keyed by the caller ensures single-instance
/// display: posting with an id already on screen replaces the previous
/// rendering, and cancelling removes it.
#[async_trait]
pub trait NotificationSink: Send + Sync {
    /// Post or replace the notification with the given id.
    async fn post(&self, id: u32, content: NotificationContent) -> Result<()>;

    /// Cancel the notification with the given id. Cancelling an id that is
    /// not on screen is a no-op.
    async fn cancel(&self, id: u32) -> Result<()>;

    /// Whether the host natively understands
    /// [`NotificationContent::promoted_ongoing`]. Hosts returning `false`
    /// receive the request through [`PROMOTED_ONGOING_EXTRA`] instead.
    fn supports_promoted_ongoing(&self) -> bool;
}
