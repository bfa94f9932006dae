//! Shared world state for task query BDD scenarios.

use std::sync::Arc;

use rstest::fixture;
use taskboard::task::{
    adapters::memory::InMemoryTaskStore,
    domain::Task,
    services::{TaskQueryError, TaskQueryService},
};

/// Service type used by the BDD world.
pub type TestQueryService = TaskQueryService<InMemoryTaskStore>;

/// Scenario world for task query behaviour tests.
pub struct QueryWorld {
    pub store: InMemoryTaskStore,
    pub service: TestQueryService,
    pub last_listing: Option<Result<Vec<Task>, TaskQueryError>>,
    pub last_lookup: Option<Result<Task, TaskQueryError>>,
}

impl QueryWorld {
    /// Creates a world with an empty store and no recorded results.
    #[must_use]
    pub fn new() -> Self {
        let store = InMemoryTaskStore::new();
        let service = TaskQueryService::new(Arc::new(store.clone()));
        Self {
            store,
            service,
            last_listing: None,
            last_lookup: None,
        }
    }
}

impl Default for QueryWorld {
    fn default() -> Self {
        Self::new()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> QueryWorld {
    QueryWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
