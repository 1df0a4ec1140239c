//! # Session Service
//!
//! Prepares batches of media items for the player queue by resolving stream
//! URLs for items that lack one.
//!
//! ## Contract
//!
//! - Items already carrying a stream URL are never sent to the resolver.
//! - Per-item resolution runs concurrently; the batch is returned only after
//!   every resolution has settled (no partial return).
//! - Output preserves input order and length exactly.
//! - Resolution failure, a `None` result, or a timeout downgrades the
//!   affected item to pass-through unresolved; the batch itself never fails.

use crate::error::SessionError;
use crate::item::MediaItem;
use crate::resolver::StreamResolver;
use core_runtime::CoreConfig;
use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Resolves media item batches ahead of playback.
#[derive(Clone)]
pub struct SessionService {
    resolver: Arc<dyn StreamResolver>,
    resolve_timeout: Option<Duration>,
}

impl SessionService {
    /// Create a service with no resolution bound; an unresponsive resolver
    /// stalls the batch indefinitely.
    pub fn new(resolver: Arc<dyn StreamResolver>) -> Self {
        Self {
            resolver,
            resolve_timeout: None,
        }
    }

    /// Bound each item's resolution. On expiry the item passes through
    /// unresolved.
    pub fn with_resolve_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.resolve_timeout = timeout;
        self
    }

    /// Create a service with the host-configured resolution bound.
    pub fn from_config(resolver: Arc<dyn StreamResolver>, config: &CoreConfig) -> Self {
        Self::new(resolver).with_resolve_timeout(config.resolve_timeout)
    }

    /// Resolve every unresolved item of the batch.
    ///
    /// Returns the full batch in input order once all resolutions have
    /// settled. Items that could not be resolved are returned unchanged.
    pub async fn prepare(&self, items: Vec<MediaItem>) -> Vec<MediaItem> {
        let batch_len = items.len();
        let prepared = join_all(items.into_iter().map(|item| self.resolve_item(item))).await;

        debug!(
            batch_len,
            resolved = prepared.iter().filter(|i| i.is_resolved()).count(),
            "prepared media item batch"
        );
        prepared
    }

    async fn resolve_item(&self, mut item: MediaItem) -> MediaItem {
        if item.is_resolved() {
            return item;
        }

        let resolution = match self.resolve_timeout {
            Some(timeout) => {
                match tokio::time::timeout(timeout, self.resolver.resolve(&item.id)).await {
                    Ok(result) => result,
                    Err(_) => Err(SessionError::ResolveTimeout {
                        id: item.id.to_string(),
                        timeout_ms: timeout.as_millis() as u64,
                    }),
                }
            }
            None => self.resolver.resolve(&item.id).await,
        };

        match resolution {
            Ok(Some(url)) => {
                debug!(id = %item.id, "stream resolved");
                item.stream_url = Some(url);
            }
            Ok(None) => {
                warn!(id = %item.id, "resolver returned no stream, passing item through unresolved");
            }
            Err(e) => {
                warn!(id = %item.id, error = %e, "stream resolution failed, passing item through unresolved");
            }
        }
        item
    }
}
