//! # Live Progress Notifier
//!
//! Owns the `{Hidden} -> {Showing} -> {Hidden}` lifecycle of the progress
//! notification and suppresses redundant renders caused by high-frequency
//! position polling.
//!
//! The "promoted ongoing" display mode is requested through a
//! capability-checked strategy chosen once at construction: hosts that
//! support the native flag get it directly, all others receive the generic
//! [`PROMOTED_ONGOING_EXTRA`] string extra and may ignore it. Either way the
//! request degrades to a plain notification rather than failing the update.
//!
//! Callers must serialize calls to [`LiveProgressNotifier::update`]; the
//! notifier is designed to be driven from a single position-observation
//! stream (see [`crate::driver::ProgressDriver`]).

use crate::display::{DisplayState, ProgressSnapshot};
use crate::error::Result;
use bridge_traits::notification::{NotificationContent, NotificationSink, PROMOTED_ONGOING_EXTRA};
use core_runtime::CoreConfig;
use std::sync::Arc;
use tracing::{debug, trace};

/// How the "promoted ongoing" request is conveyed to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PromotedMode {
    /// Host understands the native flag.
    Native,
    /// Host predates the native flag; request travels as a string extra.
    ExtrasFallback,
}

impl PromotedMode {
    fn for_sink(sink: &dyn NotificationSink) -> Self {
        if sink.supports_promoted_ongoing() {
            Self::Native
        } else {
            Self::ExtrasFallback
        }
    }

    fn apply(self, content: &mut NotificationContent) {
        match self {
            Self::Native => content.promoted_ongoing = true,
            Self::ExtrasFallback => {
                content
                    .extras
                    .insert(PROMOTED_ONGOING_EXTRA.to_string(), "true".to_string());
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum NotifierState {
    Hidden,
    Showing(DisplayState),
}

/// Renders playback progress into a single host notification.
pub struct LiveProgressNotifier {
    sink: Arc<dyn NotificationSink>,
    notification_id: u32,
    mode: PromotedMode,
    state: NotifierState,
}

impl LiveProgressNotifier {
    /// Create a hidden notifier posting under the given fixed notification
    /// id. The promoted-display strategy is selected here, once.
    pub fn new(sink: Arc<dyn NotificationSink>, notification_id: u32) -> Self {
        let mode = PromotedMode::for_sink(sink.as_ref());
        if mode == PromotedMode::ExtrasFallback {
            debug!("host lacks native promoted-ongoing support, using extras fallback");
        }
        Self {
            sink,
            notification_id,
            mode,
            state: NotifierState::Hidden,
        }
    }

    /// Create a notifier from the host configuration, failing fast when the
    /// host provided no notification sink.
    pub fn from_config(config: &CoreConfig) -> core_runtime::Result<Self> {
        let sink = config.require_notification_sink()?;
        Ok(Self::new(sink, config.progress_notification_id))
    }

    /// Whether a notification is currently on screen.
    pub fn is_showing(&self) -> bool {
        matches!(self.state, NotifierState::Showing(_))
    }

    /// Render a progress update.
    ///
    /// No-op when the snapshot's duration is zero, and when the derived
    /// `(percent, label, title)` display state matches the last render. On a
    /// sink failure the previous state is kept, so the next tick retries the
    /// render.
    pub async fn update(&mut self, snapshot: &ProgressSnapshot) -> Result<()> {
        let Some(next) = DisplayState::from_snapshot(snapshot) else {
            trace!(title = %snapshot.title, "progress update without duration, skipping");
            return Ok(());
        };

        if let NotifierState::Showing(last) = &self.state {
            if *last == next {
                trace!(
                    percent = next.percent,
                    playing = snapshot.is_playing,
                    "display state unchanged, suppressing render"
                );
                return Ok(());
            }
        }

        let mut content = NotificationContent::new(next.title.clone(), snapshot.artist.clone())
            .with_sub_text(next.remaining.clone())
            .with_progress(next.percent);
        self.mode.apply(&mut content);

        self.sink.post(self.notification_id, content).await?;
        self.state = NotifierState::Showing(next);
        Ok(())
    }

    /// Hide the notification.
    ///
    /// Idempotent: the underlying cancel is issued exactly once per
    /// `Showing -> Hidden` transition.
    pub async fn hide(&mut self) -> Result<()> {
        if matches!(self.state, NotifierState::Hidden) {
            return Ok(());
        }
        self.sink.cancel(self.notification_id).await?;
        self.state = NotifierState::Hidden;
        debug!("live progress notification hidden");
        Ok(())
    }
}
