//! # Playback Session
//!
//! Bridges the player's "add media items" request to a resolved, playable
//! item list.
//!
//! ## Overview
//!
//! Items arrive carrying only an opaque content id; before they reach the
//! player queue, each item lacking a stream URL is resolved through the
//! injected [`StreamResolver`]. Resolution failures are non-fatal: the
//! affected item passes through unresolved and the player surfaces the
//! eventual playback error downstream.
//!
//! ## Usage
//!
//! ```ignore
//! use core_session::{MediaItem, SessionService};
//! use std::sync::Arc;
//!
//! let service = SessionService::new(Arc::new(MyResolver::new()));
//! let prepared = service
//!     .prepare(vec![MediaItem::new("dQw4w9WgXcQ")])
//!     .await;
//! ```

pub mod error;
pub mod item;
pub mod resolver;
pub mod service;

pub use error::{Result, SessionError};
pub use item::{MediaItem, MediaItemId};
pub use resolver::StreamResolver;
pub use service::SessionService;
