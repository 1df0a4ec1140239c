//! # Media Item Model
//!
//! Items queued for playback. An item starts as an opaque content id plus
//! optional display metadata; the stream URL is attached at most once, at
//! resolution time, before the item is handed to the player queue.

use serde::{Deserialize, Serialize};
use std::fmt;
use url::Url;

/// Opaque content identifier understood by the stream resolver.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MediaItemId(String);

impl MediaItemId {
    /// Wrap a raw content id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the raw id.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for MediaItemId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for MediaItemId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// A queued media item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MediaItem {
    /// Content id used for resolution.
    pub id: MediaItemId,
    /// Display title, when known.
    pub title: Option<String>,
    /// Display artist, when known.
    pub artist: Option<String>,
    /// Playable stream URL, present once resolved.
    pub stream_url: Option<Url>,
}

impl MediaItem {
    /// Create an unresolved item from a content id.
    pub fn new(id: impl Into<MediaItemId>) -> Self {
        Self {
            id: id.into(),
            title: None,
            artist: None,
            stream_url: None,
        }
    }

    /// Attach a display title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Attach a display artist.
    pub fn with_artist(mut self, artist: impl Into<String>) -> Self {
        self.artist = Some(artist.into());
        self
    }

    /// Attach a pre-resolved stream URL.
    pub fn with_stream_url(mut self, url: Url) -> Self {
        self.stream_url = Some(url);
        self
    }

    /// Returns `true` once a playable stream URL is attached.
    pub fn is_resolved(&self) -> bool {
        self.stream_url.is_some()
    }
}
