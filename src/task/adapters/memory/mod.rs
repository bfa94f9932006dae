//! In-memory adapters for owner-scoped task queries.

mod store;

pub use store::InMemoryTaskStore;
