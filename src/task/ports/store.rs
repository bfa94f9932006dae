//! Store port for owner-scoped task lookup.

use crate::task::domain::{Task, TaskFilter, TaskId, UserId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for task store operations.
pub type TaskStoreResult<T> = Result<T, TaskStoreError>;

/// Owner-scoped task lookup contract.
///
/// Implementations compose the filter and constrain every lookup to the
/// given owner; callers above this port never see another user's tasks.
/// Absence of a record is `Ok(None)`, never an error: the store reports
/// failures only for persistence-level problems.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Returns the owner's tasks matching the filter.
    ///
    /// An empty vector is a valid result when nothing matches.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the lookup itself fails.
    async fn get_tasks(
        &self,
        filter: &TaskFilter,
        owner_id: &UserId,
    ) -> TaskStoreResult<Vec<Task>>;

    /// Finds the owner's task with the given identifier.
    ///
    /// Returns `None` when no task with that identifier belongs to the
    /// owner, including when the identifier exists under a different owner.
    ///
    /// # Errors
    ///
    /// Returns [`TaskStoreError::Persistence`] when the lookup itself fails.
    async fn find_one(&self, id: &TaskId, owner_id: &UserId) -> TaskStoreResult<Option<Task>>;
}

/// Errors returned by task store implementations.
#[derive(Debug, Clone, Error)]
pub enum TaskStoreError {
    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl TaskStoreError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
