//! In-memory task store for tests and local wiring.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::task::{
    domain::{Task, TaskFilter, TaskId, UserId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};

/// Thread-safe in-memory task store.
///
/// Tasks are seeded through [`InMemoryTaskStore::insert`]; the store port
/// itself exposes only owner-scoped reads. Listings are ordered by creation
/// time (identifier as tie-breaker) for deterministic results.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskStore {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a task, replacing any existing task with the same identifier.
    ///
    /// Task authoring lives outside the query surface; this helper exists so
    /// fixtures and local wiring can populate the store.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the store lock is
    /// poisoned.
    pub fn insert(&self, task: Task) -> TaskStoreResult<()> {
        let mut state = self.state.write().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        state.insert(task.id().clone(), task);
        Ok(())
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn get_tasks(
        &self,
        filter: &TaskFilter,
        owner_id: &UserId,
    ) -> TaskStoreResult<Vec<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let mut tasks: Vec<Task> = state
            .values()
            .filter(|task| task.owner_id() == owner_id && filter.matches(task))
            .cloned()
            .collect();
        tasks.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });
        Ok(tasks)
    }

    async fn find_one(&self, id: &TaskId, owner_id: &UserId) -> TaskStoreResult<Option<Task>> {
        let state = self.state.read().map_err(|err| {
            TaskStoreError::persistence(std::io::Error::other(err.to_string()))
        })?;
        let task = state
            .get(id)
            .filter(|task| task.owner_id() == owner_id)
            .cloned();
        Ok(task)
    }
}
