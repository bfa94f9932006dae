//! Application services for owner-scoped task retrieval.

mod query;

pub use query::{TaskQueryError, TaskQueryResult, TaskQueryService};
