//! User entity definition.

use serde::{Deserialize, Serialize};

/// A user record stored in the system.
///
/// The `id` is the lookup key and never changes once the record exists;
/// only `name` is mutable. Both fields are non-empty for every stored
/// record; the store rejects anything else.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, chosen by the caller.
    pub id: String,
    /// Display name.
    pub name: String,
}

impl User {
    /// Creates a new user record.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}
