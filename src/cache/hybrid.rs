//! Cache-aside orchestration over a local and a remote tier.

use super::{CacheError, RemoteCache};
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use mockable::Clock;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::any::Any;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Uniform time-to-live applied to both tiers.
///
/// A fixed deployment parameter rather than a runtime computation: the cache
/// has no invalidation signal from the store beyond explicit
/// [`HybridCache::remove`].
const DEFAULT_TTL: Duration = Duration::from_secs(300);

/// Typed value held by the local tier until `expires_at`.
struct LocalEntry {
    value: Arc<dyn Any + Send + Sync>,
    expires_at: DateTime<Utc>,
}

/// Two-tier cache-aside cache.
///
/// The local tier trades memory for avoiding network round-trips on hot keys
/// within one process; the remote tier keeps a fleet coherent. The local
/// tier holds typed values directly; serialization happens only at the
/// remote-tier boundary.
///
/// Safe for concurrent use from multiple in-flight requests; no external
/// locking is required.
pub struct HybridCache<R, C>
where
    R: RemoteCache,
    C: Clock + Send + Sync,
{
    local: DashMap<String, LocalEntry>,
    remote: Arc<R>,
    clock: Arc<C>,
    ttl: Duration,
}

impl<R, C> HybridCache<R, C>
where
    R: RemoteCache,
    C: Clock + Send + Sync,
{
    /// Creates a cache over the given remote tier with the default
    /// time-to-live.
    #[must_use]
    pub fn new(remote: Arc<R>, clock: Arc<C>) -> Self {
        Self::with_ttl(remote, clock, DEFAULT_TTL)
    }

    /// Creates a cache with an explicit uniform time-to-live.
    #[must_use]
    pub fn with_ttl(remote: Arc<R>, clock: Arc<C>, ttl: Duration) -> Self {
        Self {
            local: DashMap::new(),
            remote,
            clock,
            ttl,
        }
    }

    /// Looks up `key` through both tiers, falling back to `fetch` on a full
    /// miss.
    ///
    /// A local-tier hit returns without further I/O. A remote-tier hit
    /// repopulates the local tier. A fetched value populates both tiers; an
    /// absent fetch result populates neither (no negative caching).
    ///
    /// # Errors
    ///
    /// Returns [`CacheError`] when a tier fails, a payload cannot be encoded
    /// or decoded, or `fetch` itself fails. Failures are never masked as an
    /// absent value.
    pub async fn get_or_set<T, F, Fut>(&self, key: &str, fetch: F) -> Result<Option<T>, CacheError>
    where
        T: Clone + Serialize + DeserializeOwned + Send + Sync + 'static,
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Option<T>, CacheError>>,
    {
        if let Some(value) = self.local_get::<T>(key) {
            debug!(key, tier = "local", "cache hit");
            return Ok(Some(value));
        }

        if let Some(payload) = self.remote.get(key).await? {
            let value: T =
                serde_json::from_str(&payload).map_err(|err| CacheError::codec(key, err))?;
            debug!(key, tier = "remote", "cache hit");
            self.local_set(key, value.clone());
            return Ok(Some(value));
        }

        debug!(key, "cache miss");
        let Some(value) = fetch().await? else {
            return Ok(None);
        };

        let payload = serde_json::to_string(&value).map_err(|err| CacheError::codec(key, err))?;
        self.remote.set(key, payload, self.ttl).await?;
        self.local_set(key, value.clone());
        Ok(Some(value))
    }

    /// Evicts `key` from both tiers unconditionally.
    ///
    /// Write paths must call this after a committed store write so readers
    /// never observe a stale value once the write has returned.
    ///
    /// # Errors
    ///
    /// Returns [`CacheError::Remote`] when the remote tier eviction fails.
    pub async fn remove(&self, key: &str) -> Result<(), CacheError> {
        self.local.remove(key);
        self.remote.remove(key).await?;
        debug!(key, "cache invalidated");
        Ok(())
    }

    fn local_get<T>(&self, key: &str) -> Option<T>
    where
        T: Clone + Send + Sync + 'static,
    {
        let now = self.clock.utc();
        let entry = self.local.get(key)?;
        if entry.expires_at <= now {
            drop(entry);
            self.local.remove(key);
            return None;
        }
        entry.value.downcast_ref::<T>().cloned()
    }

    fn local_set<T>(&self, key: &str, value: T)
    where
        T: Send + Sync + 'static,
    {
        self.local.insert(
            key.to_owned(),
            LocalEntry {
                value: Arc::new(value),
                expires_at: self.clock.utc() + self.ttl,
            },
        );
    }
}
