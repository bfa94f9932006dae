//! Service layer for owner-scoped task retrieval.

use crate::task::{
    domain::{Task, TaskFilter, TaskId, User},
    ports::{TaskStore, TaskStoreError},
};
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for task query operations.
#[derive(Debug, Error)]
pub enum TaskQueryError {
    /// No task with the requested identifier belongs to the acting user.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Store lookup failed; the underlying error is propagated verbatim.
    #[error(transparent)]
    Store(#[from] TaskStoreError),
}

/// Result type for task query service operations.
pub type TaskQueryResult<T> = Result<T, TaskQueryError>;

/// Owner-scoped task query service.
///
/// A pure pass-through policy layer: filter composition and owner scoping
/// are the store's responsibility, and the service's only decision is
/// translating an absent single-record lookup into [`TaskQueryError::NotFound`].
/// The service holds no mutable state; concurrent calls never interfere.
#[derive(Clone)]
pub struct TaskQueryService<S>
where
    S: TaskStore,
{
    store: Arc<S>,
}

impl<S> TaskQueryService<S>
where
    S: TaskStore,
{
    /// Creates a new task query service over the given store.
    #[must_use]
    pub const fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    /// Lists the acting user's tasks matching the filter.
    ///
    /// Returns exactly the sequence the store yields, including the empty
    /// sequence when nothing matches. Never fails with
    /// [`TaskQueryError::NotFound`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::Store`] when the store lookup fails; the
    /// store error is not inspected, retried, or downgraded.
    pub async fn list_tasks(
        &self,
        filter: &TaskFilter,
        acting_user: &User,
    ) -> TaskQueryResult<Vec<Task>> {
        Ok(self.store.get_tasks(filter, acting_user.id()).await?)
    }

    /// Retrieves one of the acting user's tasks by identifier.
    ///
    /// The lookup is scoped by owner at the store boundary, so a returned
    /// task always belongs to the acting user; no post-hoc ownership check
    /// is performed here.
    ///
    /// # Errors
    ///
    /// Returns [`TaskQueryError::NotFound`] carrying the requested
    /// identifier when the store reports no matching record, or
    /// [`TaskQueryError::Store`] when the lookup itself fails.
    pub async fn get_task_by_id(&self, id: &TaskId, acting_user: &User) -> TaskQueryResult<Task> {
        self.store
            .find_one(id, acting_user.id())
            .await?
            .ok_or_else(|| TaskQueryError::NotFound(id.clone()))
    }
}
