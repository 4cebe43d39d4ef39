//! Port contracts for the cache module.
//!
//! Ports define infrastructure-agnostic interfaces used by the hybrid cache.

pub mod remote;

pub use remote::{RemoteCache, RemoteCacheError, RemoteCacheResult};
