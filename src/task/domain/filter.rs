//! Filter value object used to narrow task listings.

use super::{Task, TaskStatus};
use serde::{Deserialize, Serialize};

/// Optional status/search predicate for a task listing.
///
/// An absent status matches every status; an absent search matches every
/// task. The filter is constructed per request and carries no identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskFilter {
    status: Option<TaskStatus>,
    search: Option<String>,
}

impl TaskFilter {
    /// Creates a filter that matches every task.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            status: None,
            search: None,
        }
    }

    /// Restricts the filter to tasks with the given status.
    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Restricts the filter to tasks whose title or description contains the
    /// given text (case-insensitive).
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Returns the status predicate, if any.
    #[must_use]
    pub const fn status(&self) -> Option<TaskStatus> {
        self.status
    }

    /// Returns the search predicate, if any.
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Reports whether the task satisfies both predicates.
    ///
    /// This is the canonical filter semantics: status is an exact match and
    /// search is a case-insensitive substring match against title or
    /// description. SQL-backed stores mirror these semantics in the query
    /// they compose.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        let status_matches = self
            .status
            .is_none_or(|status| task.status() == status);
        let search_matches = self.search.as_deref().is_none_or(|needle| {
            let lowered = needle.to_lowercase();
            task.title().to_lowercase().contains(&lowered)
                || task.description().to_lowercase().contains(&lowered)
        });
        status_matches && search_matches
    }
}
