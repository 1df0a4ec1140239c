//! # Event Bus
//!
//! Event-driven communication between core modules using
//! `tokio::sync::broadcast`. The playback session emits playback events, the
//! live progress notifier consumes position ticks, and the auth flow emits
//! sign-in/sign-out transitions.
//!
//! ## Usage
//!
//! ```rust
//! use core_runtime::events::{EventBus, CoreEvent, PlaybackEvent};
//! use std::time::Duration;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let bus = EventBus::new(128);
//! let mut stream = bus.subscribe();
//!
//! bus.emit(CoreEvent::Playback(PlaybackEvent::PositionChanged {
//!     title: "Track".into(),
//!     artist: "Artist".into(),
//!     position: Duration::from_secs(30),
//!     duration: Duration::from_secs(200),
//!     is_playing: true,
//! }))
//! .ok();
//!
//! let event = stream.recv().await.unwrap();
//! assert!(matches!(event, CoreEvent::Playback(_)));
//! # }
//! ```
//!
//! Subscribers that fall behind observe `RecvError::Lagged(n)` and should
//! resynchronize from the next event; the bus never blocks producers.

use std::time::Duration;
use tokio::sync::broadcast;

/// Playback lifecycle and progress events.
#[derive(Debug, Clone, PartialEq)]
pub enum PlaybackEvent {
    /// A new item started playing.
    Started { title: String, artist: String },
    Paused,
    Resumed,
    /// Playback stopped; any live progress display must be torn down.
    Stopped,
    /// Periodic position tick from the player's position observer.
    PositionChanged {
        title: String,
        artist: String,
        position: Duration,
        duration: Duration,
        is_playing: bool,
    },
    /// Player surfaced a playback error (e.g. an unresolved item).
    Error { message: String },
}

/// Authentication flow events.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthEvent {
    /// Session credentials were captured and persisted.
    SignedIn,
    /// Credentials were cleared on explicit logout.
    SignedOut,
}

/// Top-level event type carried by the bus.
#[derive(Debug, Clone, PartialEq)]
pub enum CoreEvent {
    Playback(PlaybackEvent),
    Auth(AuthEvent),
}

/// Central broadcast channel for core events.
#[derive(Debug, Clone)]
pub struct EventBus {
    sender: broadcast::Sender<CoreEvent>,
}

impl EventBus {
    /// Create an event bus buffering up to `capacity` events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event to all current subscribers.
    ///
    /// Returns the number of subscribers that received the event. Emitting
    /// with no subscribers is not an error for callers; the returned
    /// `SendError` only signals that nobody was listening.
    pub fn emit(&self, event: CoreEvent) -> Result<usize, broadcast::error::SendError<CoreEvent>> {
        self.sender.send(event)
    }

    /// Subscribe to all events published after this call.
    pub fn subscribe(&self) -> broadcast::Receiver<CoreEvent> {
        self.sender.subscribe()
    }

    /// Number of active subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}
