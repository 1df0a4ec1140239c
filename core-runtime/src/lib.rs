//! # Core Runtime
//!
//! Shared runtime infrastructure for the playback core:
//!
//! - Configuration ([`config::CoreConfig`]) injected by the host at startup
//! - Event bus ([`events::EventBus`]) for decoupled communication between
//!   the playback session, the live progress notifier, and the auth flow
//! - Logging bootstrap ([`logging::init_logging`]) over `tracing`

pub mod config;
pub mod error;
pub mod events;
pub mod logging;

pub use config::CoreConfig;
pub use error::{Error, Result};
pub use events::{AuthEvent, CoreEvent, EventBus, PlaybackEvent};
