//! # Live Progress Notifications
//!
//! Renders playback progress as a compact, frequently-updated status
//! notification, distinct from the main playback-controls notification.
//!
//! ## Overview
//!
//! - [`display::ProgressSnapshot`] - ephemeral per-tick playback progress
//! - [`display::DisplayState`] - the derived `(percent, label, title)` value
//!   used to suppress redundant renders
//! - [`notifier::LiveProgressNotifier`] - the `Hidden -> Showing -> Hidden`
//!   state machine posting through a [`bridge_traits::NotificationSink`]
//! - [`driver::ProgressDriver`] - single-call-path task feeding the notifier
//!   from the core event bus

pub mod display;
pub mod driver;
pub mod error;
pub mod notifier;

pub use display::{DisplayState, ProgressSnapshot};
pub use driver::ProgressDriver;
pub use error::{LiveError, Result};
pub use notifier::LiveProgressNotifier;
