//! Integration tests for the live progress notifier state machine and the
//! event-driven progress driver.

use async_trait::async_trait;
use bridge_traits::error::{BridgeError, Result as BridgeResult};
use bridge_traits::notification::{NotificationContent, NotificationSink, PROMOTED_ONGOING_EXTRA};
use core_live::{LiveProgressNotifier, ProgressDriver, ProgressSnapshot};
use core_runtime::events::{CoreEvent, EventBus, PlaybackEvent};
use core_runtime::CoreConfig;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

const NOTIFICATION_ID: u32 = 77;

/// Sink recording every post and counting cancels.
struct RecordingSink {
    posts: Mutex<Vec<(u32, NotificationContent)>>,
    cancels: AtomicUsize,
    supports_promoted: bool,
    fail_posts: bool,
}

impl RecordingSink {
    fn new(supports_promoted: bool) -> Arc<Self> {
        Arc::new(Self {
            posts: Mutex::new(Vec::new()),
            cancels: AtomicUsize::new(0),
            supports_promoted,
            fail_posts: false,
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            posts: Mutex::new(Vec::new()),
            cancels: AtomicUsize::new(0),
            supports_promoted: true,
            fail_posts: true,
        })
    }

    fn post_count(&self) -> usize {
        self.posts.lock().unwrap().len()
    }

    fn last_post(&self) -> (u32, NotificationContent) {
        self.posts.lock().unwrap().last().cloned().expect("a post")
    }

    fn cancel_count(&self) -> usize {
        self.cancels.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NotificationSink for RecordingSink {
    async fn post(&self, id: u32, content: NotificationContent) -> BridgeResult<()> {
        if self.fail_posts {
            return Err(BridgeError::OperationFailed("post rejected".into()));
        }
        self.posts.lock().unwrap().push((id, content));
        Ok(())
    }

    async fn cancel(&self, _id: u32) -> BridgeResult<()> {
        self.cancels.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    fn supports_promoted_ongoing(&self) -> bool {
        self.supports_promoted
    }
}

fn snapshot(position_ms: u64, duration_ms: u64) -> ProgressSnapshot {
    ProgressSnapshot::new(
        "Track",
        "Artist",
        Duration::from_millis(position_ms),
        Duration::from_millis(duration_ms),
        true,
    )
}

#[tokio::test]
async fn zero_duration_update_makes_no_sink_call() {
    let sink = RecordingSink::new(true);
    let mut notifier = LiveProgressNotifier::new(sink.clone(), NOTIFICATION_ID);

    notifier.update(&snapshot(30_000, 0)).await.unwrap();

    assert_eq!(sink.post_count(), 0);
    assert!(!notifier.is_showing());
}

#[tokio::test]
async fn identical_updates_render_once() {
    let sink = RecordingSink::new(true);
    let mut notifier = LiveProgressNotifier::new(sink.clone(), NOTIFICATION_ID);

    // Two polls within the same second of playback map to the same
    // (percent, label, title) and must not flicker.
    notifier.update(&snapshot(30_000, 200_000)).await.unwrap();
    notifier.update(&snapshot(30_400, 200_000)).await.unwrap();

    assert_eq!(sink.post_count(), 1);

    // A later position changes the display state and renders again.
    notifier.update(&snapshot(60_000, 200_000)).await.unwrap();
    assert_eq!(sink.post_count(), 2);
}

#[tokio::test]
async fn rendered_content_matches_worked_examples() {
    let sink = RecordingSink::new(true);
    let mut notifier = LiveProgressNotifier::new(sink.clone(), NOTIFICATION_ID);

    notifier.update(&snapshot(30_000, 200_000)).await.unwrap();
    let (id, content) = sink.last_post();
    assert_eq!(id, NOTIFICATION_ID);
    assert_eq!(content.title, "Track");
    assert_eq!(content.text, "Artist");
    assert_eq!(content.progress_percent, Some(15));
    assert_eq!(content.sub_text.as_deref(), Some("2m"));

    notifier.update(&snapshot(195_000, 200_000)).await.unwrap();
    let (_, content) = sink.last_post();
    assert_eq!(content.sub_text.as_deref(), Some("5s"));
}

#[tokio::test]
async fn hide_twice_cancels_once() {
    let sink = RecordingSink::new(true);
    let mut notifier = LiveProgressNotifier::new(sink.clone(), NOTIFICATION_ID);

    notifier.update(&snapshot(30_000, 200_000)).await.unwrap();
    assert!(notifier.is_showing());

    notifier.hide().await.unwrap();
    notifier.hide().await.unwrap();

    assert_eq!(sink.cancel_count(), 1);
    assert!(!notifier.is_showing());
}

#[tokio::test]
async fn hide_while_hidden_never_cancels() {
    let sink = RecordingSink::new(true);
    let mut notifier = LiveProgressNotifier::new(sink.clone(), NOTIFICATION_ID);

    notifier.hide().await.unwrap();

    assert_eq!(sink.cancel_count(), 0);
}

#[tokio::test]
async fn show_hide_show_renders_and_cancels_per_transition() {
    let sink = RecordingSink::new(true);
    let mut notifier = LiveProgressNotifier::new(sink.clone(), NOTIFICATION_ID);

    notifier.update(&snapshot(30_000, 200_000)).await.unwrap();
    notifier.hide().await.unwrap();
    // Same display state after re-show still renders: the previous render
    // was cancelled.
    notifier.update(&snapshot(30_000, 200_000)).await.unwrap();
    notifier.hide().await.unwrap();

    assert_eq!(sink.post_count(), 2);
    assert_eq!(sink.cancel_count(), 2);
}

#[tokio::test]
async fn supporting_host_gets_native_flag() {
    let sink = RecordingSink::new(true);
    let mut notifier = LiveProgressNotifier::new(sink.clone(), NOTIFICATION_ID);

    notifier.update(&snapshot(30_000, 200_000)).await.unwrap();

    let (_, content) = sink.last_post();
    assert!(content.promoted_ongoing);
    assert!(!content.extras.contains_key(PROMOTED_ONGOING_EXTRA));
}

#[tokio::test]
async fn legacy_host_gets_extras_fallback() {
    let sink = RecordingSink::new(false);
    let mut notifier = LiveProgressNotifier::new(sink.clone(), NOTIFICATION_ID);

    notifier.update(&snapshot(30_000, 200_000)).await.unwrap();

    let (_, content) = sink.last_post();
    assert!(!content.promoted_ongoing);
    assert_eq!(
        content.extras.get(PROMOTED_ONGOING_EXTRA).map(String::as_str),
        Some("true")
    );
}

#[tokio::test]
async fn failed_post_keeps_notifier_hidden_and_retryable() {
    let sink = RecordingSink::failing();
    let mut notifier = LiveProgressNotifier::new(sink.clone(), NOTIFICATION_ID);

    assert!(notifier.update(&snapshot(30_000, 200_000)).await.is_err());
    assert!(!notifier.is_showing());

    // Hide after a failed post must not cancel anything.
    notifier.hide().await.unwrap();
    assert_eq!(sink.cancel_count(), 0);
}

#[tokio::test]
async fn from_config_requires_a_notification_sink() {
    let bare = CoreConfig::default();
    assert!(LiveProgressNotifier::from_config(&bare).is_err());

    let sink = RecordingSink::new(true);
    let wired = CoreConfig::default().with_notification_sink(sink);
    assert!(LiveProgressNotifier::from_config(&wired).is_ok());
}

#[tokio::test]
async fn driver_updates_stops_and_tears_down() {
    let sink = RecordingSink::new(true);
    let notifier = LiveProgressNotifier::new(sink.clone(), NOTIFICATION_ID);

    let bus = EventBus::new(32);
    let handle = ProgressDriver::new(notifier).spawn(bus.subscribe());

    let tick = |position_ms: u64| {
        CoreEvent::Playback(PlaybackEvent::PositionChanged {
            title: "Track".into(),
            artist: "Artist".into(),
            position: Duration::from_millis(position_ms),
            duration: Duration::from_millis(200_000),
            is_playing: true,
        })
    };

    bus.emit(tick(30_000)).unwrap();
    bus.emit(tick(30_400)).unwrap(); // same display state, suppressed
    bus.emit(CoreEvent::Playback(PlaybackEvent::Stopped)).unwrap();
    drop(bus);

    handle.await.unwrap();

    assert_eq!(sink.post_count(), 1);
    // One cancel for Stopped; the teardown hide finds the notifier already
    // hidden and must not cancel again.
    assert_eq!(sink.cancel_count(), 1);
}

#[tokio::test]
async fn driver_hides_on_bus_closure() {
    let sink = RecordingSink::new(true);
    let notifier = LiveProgressNotifier::new(sink.clone(), NOTIFICATION_ID);

    let bus = EventBus::new(32);
    let handle = ProgressDriver::new(notifier).spawn(bus.subscribe());

    bus.emit(CoreEvent::Playback(PlaybackEvent::PositionChanged {
        title: "Track".into(),
        artist: "Artist".into(),
        position: Duration::from_millis(30_000),
        duration: Duration::from_millis(200_000),
        is_playing: true,
    }))
    .unwrap();
    drop(bus);

    handle.await.unwrap();

    assert_eq!(sink.post_count(), 1);
    assert_eq!(sink.cancel_count(), 1);
}
