//! Remote cache tier port.
//!
//! The shared tier keeps a process fleet coherent at the cost of one network
//! hop. Only its observable contract is specified here: keyed string
//! payloads with a per-entry time-to-live. Transport and on-wire encoding
//! belong to the implementing adapter.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Result type for remote cache tier operations.
pub type RemoteCacheResult<T> = Result<T, RemoteCacheError>;

/// Shared remote cache tier contract.
#[async_trait]
pub trait RemoteCache: Send + Sync {
    /// Returns the payload stored under `key`, or `None` when the key is
    /// absent or its time-to-live has elapsed.
    async fn get(&self, key: &str) -> RemoteCacheResult<Option<String>>;

    /// Stores `payload` under `key` for at most `ttl`.
    async fn set(&self, key: &str, payload: String, ttl: Duration) -> RemoteCacheResult<()>;

    /// Evicts `key` unconditionally. Removing an absent key is not an error.
    async fn remove(&self, key: &str) -> RemoteCacheResult<()>;
}

/// Errors returned by remote cache tier implementations.
#[derive(Debug, Clone, Error)]
pub enum RemoteCacheError {
    /// The backing store failed or was unreachable.
    #[error("remote cache backend failure: {0}")]
    Backend(Arc<dyn std::error::Error + Send + Sync>),
}

impl RemoteCacheError {
    /// Wraps a backend error.
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Backend(Arc::new(err))
    }
}
