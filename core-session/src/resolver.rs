//! # Stream Resolver Abstraction
//!
//! Maps a content id to a playable stream URL. The actual extraction logic
//! lives outside this workspace (network-backed extraction service or
//! library); the core only defines the seam so resolution can be substituted
//! deterministically in tests (fixed mappings, simulated failures, simulated
//! delays).

use crate::error::Result;
use crate::item::MediaItemId;
use async_trait::async_trait;
use url::Url;

/// Trait for asynchronous content-id to stream-URL resolution.
///
/// ## Contract
///
/// - `Ok(Some(url))` - the id resolved to a playable URL
/// - `Ok(None)` - the resolver has no stream for this id (not an error)
/// - `Err(_)` - the lookup itself failed
///
/// Implementations must be cheap to share (`Send + Sync`); the session
/// service issues concurrent calls for independent items of a batch.
#[async_trait]
pub trait StreamResolver: Send + Sync {
    /// Resolve a content id to a playable stream URL.
    async fn resolve(&self, id: &MediaItemId) -> Result<Option<Url>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    struct FixedResolver {
        mapping: HashMap<String, Url>,
    }

    #[async_trait]
    impl StreamResolver for FixedResolver {
        async fn resolve(&self, id: &MediaItemId) -> Result<Option<Url>> {
            Ok(self.mapping.get(id.as_str()).cloned())
        }
    }

    #[tokio::test]
    async fn fixed_mapping_resolves() {
        let url = Url::parse("https://cdn.example.com/a").unwrap();
        let resolver = FixedResolver {
            mapping: HashMap::from([("a".to_string(), url.clone())]),
        };

        assert_eq!(resolver.resolve(&"a".into()).await.unwrap(), Some(url));
        assert_eq!(resolver.resolve(&"missing".into()).await.unwrap(), None);
    }
}
