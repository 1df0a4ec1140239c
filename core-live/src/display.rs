//! # Progress Display State
//!
//! Converts raw playback progress into the compact display values shown in
//! the live notification. The derived [`DisplayState`] is an explicit value
//! type so render suppression can be unit-tested without constructing the
//! host notification system.

use std::time::Duration;

/// Playback progress as observed on one position tick. Ephemeral; recomputed
/// on every tick and never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSnapshot {
    /// Track title.
    pub title: String,
    /// Track artist.
    pub artist: String,
    /// Elapsed playback position.
    pub position: Duration,
    /// Total track duration. A zero duration means progress is undefined.
    pub duration: Duration,
    /// Whether the player is currently playing (as opposed to paused).
    pub is_playing: bool,
}

impl ProgressSnapshot {
    /// Create a snapshot for a playing track.
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        position: Duration,
        duration: Duration,
        is_playing: bool,
    ) -> Self {
        Self {
            title: title.into(),
            artist: artist.into(),
            position,
            duration,
            is_playing,
        }
    }
}

/// The last-rendered display values: integer percentage, remaining-time
/// label, and title. Two snapshots mapping to the same `DisplayState` render
/// identically, so the second is suppressed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayState {
    /// Progress percentage clamped to `[0, 100]`.
    pub percent: u8,
    /// Short remaining-time label: whole minutes when at least one minute
    /// remains (`"2m"`), else whole seconds (`"5s"`).
    pub remaining: String,
    /// Track title as rendered.
    pub title: String,
}

impl DisplayState {
    /// Derive display values from a snapshot.
    ///
    /// Returns `None` when the duration is zero, since progress is undefined
    /// without a duration; callers treat that as a no-op update.
    pub fn from_snapshot(snapshot: &ProgressSnapshot) -> Option<Self> {
        if snapshot.duration.is_zero() {
            return None;
        }

        let percent =
            (snapshot.position.as_millis() * 100 / snapshot.duration.as_millis()).min(100) as u8;
        let remaining = snapshot.duration.saturating_sub(snapshot.position);

        Some(Self {
            percent,
            remaining: remaining_label(remaining),
            title: snapshot.title.clone(),
        })
    }
}

/// Format a remaining duration as a short chip label.
pub fn remaining_label(remaining: Duration) -> String {
    let secs = remaining.as_secs();
    if secs >= 60 {
        format!("{}m", secs / 60)
    } else {
        format!("{secs}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(position_ms: u64, duration_ms: u64) -> ProgressSnapshot {
        ProgressSnapshot::new(
            "Track",
            "Artist",
            Duration::from_millis(position_ms),
            Duration::from_millis(duration_ms),
            true,
        )
    }

    #[test]
    fn fifteen_percent_with_minutes_remaining() {
        let state = DisplayState::from_snapshot(&snapshot(30_000, 200_000)).unwrap();
        assert_eq!(state.percent, 15);
        assert_eq!(state.remaining, "2m");
    }

    #[test]
    fn seconds_label_below_one_minute() {
        let state = DisplayState::from_snapshot(&snapshot(195_000, 200_000)).unwrap();
        assert_eq!(state.remaining, "5s");
    }

    #[test]
    fn zero_duration_has_no_display_state() {
        assert!(DisplayState::from_snapshot(&snapshot(30_000, 0)).is_none());
    }

    #[test]
    fn percent_clamps_at_one_hundred() {
        let state = DisplayState::from_snapshot(&snapshot(250_000, 200_000)).unwrap();
        assert_eq!(state.percent, 100);
        assert_eq!(state.remaining, "0s");
    }

    #[test]
    fn exactly_one_minute_uses_minutes() {
        assert_eq!(remaining_label(Duration::from_secs(60)), "1m");
        assert_eq!(remaining_label(Duration::from_secs(59)), "59s");
        assert_eq!(remaining_label(Duration::from_secs(170)), "2m");
    }
}
