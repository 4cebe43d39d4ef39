//! Error types for cache-aside lookups.

use super::ports::RemoteCacheError;
use std::sync::Arc;
use thiserror::Error;

/// Errors surfaced by [`HybridCache`](super::HybridCache) operations.
///
/// All variants are infrastructure failures; the cache never converts them
/// into an absent value.
#[derive(Debug, Clone, Error)]
pub enum CacheError {
    /// The remote tier failed.
    #[error(transparent)]
    Remote(#[from] RemoteCacheError),

    /// A cached payload could not be encoded or decoded.
    #[error("cache codec failure for key '{0}': {1}")]
    Codec(String, Arc<serde_json::Error>),

    /// The caller-supplied fetch capability failed.
    #[error("cache source fetch failure: {0}")]
    Source(Arc<dyn std::error::Error + Send + Sync>),
}

impl CacheError {
    /// Wraps a fetch-capability failure, preserving the original diagnostic.
    pub fn source(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Source(Arc::new(err))
    }

    pub(super) fn codec(key: &str, err: serde_json::Error) -> Self {
        Self::Codec(key.to_owned(), Arc::new(err))
    }
}
