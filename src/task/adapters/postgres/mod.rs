//! `PostgreSQL` adapters for owner-scoped task queries.

mod models;
mod schema;
mod store;

pub use store::{PostgresTaskStore, TaskPgPool};
