//! Port contracts for owner-scoped task queries.
//!
//! Ports define infrastructure-agnostic interfaces used by task services.

pub mod store;

pub use store::{TaskStore, TaskStoreError, TaskStoreResult};

#[cfg(test)]
pub use store::MockTaskStore;
