//! Acting-user identity consumed by the query service.

use super::{TaskDomainError, UserId};
use std::fmt;

/// Opaque credential material carried on a user record.
///
/// The query surface never interprets credentials; the value is held only
/// because the identity subsystem hands over whole user records. Debug
/// output is redacted, and the type deliberately has no serde support so
/// credential material cannot leak through a serialized user.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wraps opaque credential material.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// Authenticated user on whose behalf queries run.
///
/// Users are created and destroyed by an external identity subsystem; this
/// crate reads only the identifier to scope store lookups. Authentication
/// has already happened by the time a `User` reaches the query service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    username: String,
    credential: Credential,
}

impl User {
    /// Creates a user record.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyUsername`] when the username is empty
    /// after trimming.
    pub fn new(
        id: UserId,
        username: impl Into<String>,
        credential: Credential,
    ) -> Result<Self, TaskDomainError> {
        let username_value = username.into();
        if username_value.trim().is_empty() {
            return Err(TaskDomainError::EmptyUsername);
        }
        Ok(Self {
            id,
            username: username_value,
            credential,
        })
    }

    /// Returns the user identifier.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Returns the username.
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }
}
