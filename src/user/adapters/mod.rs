//! Adapter implementations of the user ports.

pub mod memory;

pub use memory::InMemoryUserRepository;
