//! Two-tier cache-aside cache.
//!
//! Reads traverse a fast in-process tier, then a shared remote tier, then
//! the caller-supplied fetch capability; writes to the underlying store
//! invalidate both tiers. The module follows hexagonal architecture:
//!
//! - The remote-tier contract in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The cache-aside orchestration in [`hybrid`]

pub mod adapters;
mod error;
pub mod hybrid;
pub mod ports;

pub use error::CacheError;
pub use hybrid::HybridCache;
pub use ports::{RemoteCache, RemoteCacheError, RemoteCacheResult};
