//! Domain model for owner-scoped task queries.
//!
//! The task domain models the read side of a per-user task tracker: task
//! records with a progress status, the acting user on whose behalf queries
//! run, and the filter value object used to narrow listings. All
//! infrastructure concerns stay outside the domain boundary.

mod error;
mod filter;
mod ids;
mod task;
mod user;

pub use error::{ParseTaskStatusError, TaskDomainError};
pub use filter::TaskFilter;
pub use ids::{TaskId, UserId};
pub use task::{PersistedTaskData, Task, TaskStatus};
pub use user::{Credential, User};
