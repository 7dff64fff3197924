//! In-memory user store implementation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::{User, UserStore, UserStoreError, UserStoreResult};

/// In-memory user store.
///
/// The map is guarded by an `RwLock`: reads hold the read lock so they never
/// observe a partial mutation, and every read-modify-write sequence holds
/// the write lock for its whole duration. Concurrent creates of the same id
/// therefore resolve to exactly one success.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    /// Creates a new, empty in-memory user store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given users.
    ///
    /// Intended for tests and demos; records are keyed by their id, later
    /// duplicates replacing earlier ones. Records with an empty id or name
    /// are skipped, since the store never admits them.
    pub fn with_users(users: impl IntoIterator<Item = User>) -> Self {
        Self {
            users: RwLock::new(
                users
                    .into_iter()
                    .filter(|u| !u.id.is_empty() && !u.name.is_empty())
                    .map(|u| (u.id.clone(), u))
                    .collect(),
            ),
        }
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create_user(&self, user: User) -> UserStoreResult<User> {
        if user.id.is_empty() {
            return Err(UserStoreError::empty_field("id"));
        }
        if user.name.is_empty() {
            return Err(UserStoreError::empty_field("name"));
        }

        let mut users = self.users.write().await;
        if users.contains_key(&user.id) {
            return Err(UserStoreError::already_exists(&user.id));
        }
        users.insert(user.id.clone(), user.clone());

        tracing::debug!(user_id = %user.id, "user created");
        Ok(user)
    }

    async fn get_user(&self, id: &str) -> UserStoreResult<Option<User>> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn list_users(&self) -> UserStoreResult<Vec<User>> {
        let users = self.users.read().await;
        let mut result: Vec<User> = users.values().cloned().collect();
        // Map iteration order is arbitrary; ordering is imposed here.
        result.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(result)
    }

    async fn update_user_name(&self, id: &str, name: &str) -> UserStoreResult<User> {
        let mut users = self.users.write().await;
        // Absence is resolved before the name is validated.
        let user = users
            .get_mut(id)
            .ok_or_else(|| UserStoreError::not_found(id))?;
        if name.is_empty() {
            return Err(UserStoreError::empty_field("name"));
        }
        user.name = name.to_string();

        tracing::debug!(user_id = %id, "user updated");
        Ok(user.clone())
    }

    async fn delete_user(&self, id: &str) -> UserStoreResult<()> {
        let mut users = self.users.write().await;
        if users.remove(id).is_none() {
            return Err(UserStoreError::not_found(id));
        }

        tracing::debug!(user_id = %id, "user deleted");
        Ok(())
    }
}
