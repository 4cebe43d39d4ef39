//! In-memory implementation of the remote cache tier.
//!
//! Provides a thread-safe adapter for tests and single-process wiring
//! without a network dependency. Time-to-live is evaluated against the
//! injected clock so tier aging is deterministic under test.

use crate::cache::ports::{RemoteCache, RemoteCacheResult};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::DashMap;
use mockable::Clock;
use std::time::Duration;

struct StoredPayload {
    payload: String,
    expires_at: DateTime<Utc>,
}

/// In-memory implementation of [`RemoteCache`].
pub struct InMemoryRemoteCache<C>
where
    C: Clock + Send + Sync,
{
    entries: DashMap<String, StoredPayload>,
    clock: C,
}

impl<C> InMemoryRemoteCache<C>
where
    C: Clock + Send + Sync,
{
    /// Creates an empty adapter with the given clock.
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            entries: DashMap::new(),
            clock,
        }
    }

    /// Returns the number of live (non-expired) entries.
    #[must_use]
    pub fn len(&self) -> usize {
        let now = self.clock.utc();
        self.entries
            .iter()
            .filter(|entry| entry.expires_at > now)
            .count()
    }

    /// Returns `true` when no live entries are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl<C> RemoteCache for InMemoryRemoteCache<C>
where
    C: Clock + Send + Sync,
{
    async fn get(&self, key: &str) -> RemoteCacheResult<Option<String>> {
        let now = self.clock.utc();
        let Some(entry) = self.entries.get(key) else {
            return Ok(None);
        };
        if entry.expires_at <= now {
            drop(entry);
            self.entries.remove(key);
            return Ok(None);
        }
        Ok(Some(entry.payload.clone()))
    }

    async fn set(&self, key: &str, payload: String, ttl: Duration) -> RemoteCacheResult<()> {
        self.entries.insert(
            key.to_owned(),
            StoredPayload {
                payload,
                expires_at: self.clock.utc() + ttl,
            },
        );
        Ok(())
    }

    async fn remove(&self, key: &str) -> RemoteCacheResult<()> {
        self.entries.remove(key);
        Ok(())
    }
}
