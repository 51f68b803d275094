//! Domain Layer - User records.

use std::sync::Arc;

use serde::{Deserialize, Serialize, Serializer};

/// A single user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
}

impl User {
    /// Create a new user.
    #[must_use]
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// Read-only set of users shared across requests.
///
/// Cloning shares the underlying records rather than copying them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserDirectory {
    users: Arc<[User]>,
}

impl UserDirectory {
    /// Build a directory from the given users, keeping their order.
    #[must_use]
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: users.into(),
        }
    }

    /// The fixed directory the service serves.
    #[must_use]
    pub fn seeded() -> Self {
        Self::new(vec![User::new(1, "Alice"), User::new(2, "Bob")])
    }

    /// All users in insertion order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Number of users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Whether the directory has no users.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

/// Serializes as a plain JSON array of records.
impl Serialize for UserDirectory {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.users().serialize(serializer)
    }
}
