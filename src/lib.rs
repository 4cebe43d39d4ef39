//! Tasklane: task and user management core.
//!
//! This crate provides the application core of a task/user management
//! backend: domain entities guarded by a strict task lifecycle state
//! machine, application services that validate input and orchestrate
//! persistence, and a two-tier cache-aside cache fronting every read path.
//!
//! # Architecture
//!
//! Tasklane follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (in-memory stores)
//! - **Services**: Orchestration over ports, returning discriminated
//!   operation outcomes
//!
//! # Modules
//!
//! - [`task`]: Task lifecycle, deadline validation, and task services
//! - [`user`]: User identity, display name validation, and user services
//! - [`cache`]: Two-tier cache-aside cache and its remote-tier port
//! - [`outcome`]: The shared service operation result shape
//!
//! # Concurrency
//!
//! Services hold no mutable state beyond the local cache tier, which is a
//! concurrent map safe for simultaneous in-flight requests. Operations are
//! plain futures; dropping one cancels its pending I/O cooperatively.

pub mod cache;
pub mod outcome;
pub mod task;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;
