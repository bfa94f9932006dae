//! `PostgreSQL` store implementation for owner-scoped task queries.

use super::{models::TaskRow, schema::tasks};
use crate::task::{
    domain::{PersistedTaskData, Task, TaskFilter, TaskId, TaskStatus, UserId},
    ports::{TaskStore, TaskStoreError, TaskStoreResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by task adapters.
pub type TaskPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task store.
///
/// Read-only: task records are authored by collaborators writing to the
/// same table; this adapter implements exactly the two lookup operations of
/// the store port, constraining every query by owner.
#[derive(Debug, Clone)]
pub struct PostgresTaskStore {
    pool: TaskPgPool,
}

impl PostgresTaskStore {
    /// Creates a new store from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: TaskPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> TaskStoreResult<T>
    where
        F: FnOnce(&mut PgConnection) -> TaskStoreResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(TaskStoreError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(TaskStoreError::persistence)?
    }
}

#[async_trait]
impl TaskStore for PostgresTaskStore {
    async fn get_tasks(
        &self,
        filter: &TaskFilter,
        owner_id: &UserId,
    ) -> TaskStoreResult<Vec<Task>> {
        let owner_value = owner_id.as_str().to_owned();
        let status_value = filter.status().map(TaskStatus::as_str);
        let search_pattern = filter.search().map(|needle| format!("%{needle}%"));

        self.run_blocking(move |connection| {
            let mut query = tasks::table
                .select(TaskRow::as_select())
                .filter(tasks::owner_id.eq(owner_value))
                .order(tasks::created_at.asc())
                .into_boxed();

            if let Some(status) = status_value {
                query = query.filter(tasks::status.eq(status));
            }
            if let Some(pattern) = search_pattern {
                query = query.filter(
                    tasks::title
                        .ilike(pattern.clone())
                        .or(tasks::description.ilike(pattern)),
                );
            }

            let rows = query
                .load::<TaskRow>(connection)
                .map_err(TaskStoreError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn find_one(&self, id: &TaskId, owner_id: &UserId) -> TaskStoreResult<Option<Task>> {
        let id_value = id.as_str().to_owned();
        let owner_value = owner_id.as_str().to_owned();

        self.run_blocking(move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id_value))
                .filter(tasks::owner_id.eq(owner_value))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(TaskStoreError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }
}

fn row_to_task(row: TaskRow) -> TaskStoreResult<Task> {
    let TaskRow {
        id,
        title,
        description,
        status: persisted_status,
        owner_id,
        created_at,
        updated_at,
    } = row;

    let status =
        TaskStatus::try_from(persisted_status.as_str()).map_err(TaskStoreError::persistence)?;
    let data = PersistedTaskData {
        id: TaskId::new(id).map_err(TaskStoreError::persistence)?,
        title,
        description,
        status,
        owner_id: UserId::new(owner_id).map_err(TaskStoreError::persistence)?,
        created_at,
        updated_at,
    };
    Ok(Task::from_persisted(data))
}
