//! # Progress Driver
//!
//! Feeds the [`LiveProgressNotifier`] from the core event bus. Running the
//! notifier from one task gives the single serialized call path its state
//! handling requires, and guarantees the notification is hidden when the
//! owning service tears the bus down.

use crate::display::ProgressSnapshot;
use crate::notifier::LiveProgressNotifier;
use core_runtime::events::{CoreEvent, PlaybackEvent};
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::broadcast::Receiver;
use tokio::task::JoinHandle;
use tracing::{debug, warn};

/// Event-bus consumer driving a [`LiveProgressNotifier`].
pub struct ProgressDriver {
    notifier: LiveProgressNotifier,
}

impl ProgressDriver {
    pub fn new(notifier: LiveProgressNotifier) -> Self {
        Self { notifier }
    }

    /// Consume events until the bus closes. Position ticks become progress
    /// updates; `Stopped` hides the notification; bus closure hides it as a
    /// final teardown step so no notification outlives the service.
    pub async fn run(mut self, mut events: Receiver<CoreEvent>) {
        loop {
            match events.recv().await {
                Ok(CoreEvent::Playback(PlaybackEvent::PositionChanged {
                    title,
                    artist,
                    position,
                    duration,
                    is_playing,
                })) => {
                    let snapshot =
                        ProgressSnapshot::new(title, artist, position, duration, is_playing);
                    if let Err(e) = self.notifier.update(&snapshot).await {
                        warn!(error = %e, "failed to render progress notification");
                    }
                }
                Ok(CoreEvent::Playback(PlaybackEvent::Stopped)) => {
                    if let Err(e) = self.notifier.hide().await {
                        warn!(error = %e, "failed to hide progress notification");
                    }
                }
                Ok(_) => {}
                Err(RecvError::Lagged(missed)) => {
                    // Ticks are idempotent snapshots; resynchronize from the
                    // next one.
                    debug!(missed, "progress driver lagged behind the event bus");
                }
                Err(RecvError::Closed) => break,
            }
        }

        if let Err(e) = self.notifier.hide().await {
            warn!(error = %e, "failed to hide progress notification on shutdown");
        }
    }

    /// Spawn [`Self::run`] onto the current runtime.
    pub fn spawn(self, events: Receiver<CoreEvent>) -> JoinHandle<()> {
        tokio::spawn(self.run(events))
    }
}
