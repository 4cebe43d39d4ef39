//! Task lifecycle management.
//!
//! Implements the task aggregate with its strict lifecycle state machine
//! (Pending, InProgress, Completed, Cancelled), deadline validation, and the
//! application service that orchestrates validation, persistence, and cache
//! invalidation. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
