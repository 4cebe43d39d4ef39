//! Adapter implementations of the cache ports.

pub mod memory;

pub use memory::InMemoryRemoteCache;
