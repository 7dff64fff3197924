//! User store trait.

use async_trait::async_trait;

use crate::{User, UserStoreResult};

/// Trait for user storage operations.
///
/// All access to the collection goes through this trait; implementations
/// own their internal map and expose no direct access to it. From the
/// caller's perspective every operation is atomic with respect to other
/// operations on the same store.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Creates a new user.
    ///
    /// Fails with [`EmptyField`](crate::UserStoreError::EmptyField) if `id`
    /// or `name` is empty and with
    /// [`AlreadyExists`](crate::UserStoreError::AlreadyExists) if a record
    /// with that id is already present.
    async fn create_user(&self, user: User) -> UserStoreResult<User>;

    /// Gets a user by id. Pure read; `None` if absent.
    async fn get_user(&self, id: &str) -> UserStoreResult<Option<User>>;

    /// Lists all users, sorted ascending by id.
    ///
    /// Returns a snapshot copy; later mutations do not affect it. An empty
    /// store yields an empty vec.
    async fn list_users(&self) -> UserStoreResult<Vec<User>>;

    /// Replaces a user's name in place. The id never changes.
    ///
    /// An absent id reports [`NotFound`](crate::UserStoreError::NotFound)
    /// before the name is validated; an empty `name` is rejected without
    /// touching the stored record.
    async fn update_user_name(&self, id: &str, name: &str) -> UserStoreResult<User>;

    /// Deletes a user by id.
    async fn delete_user(&self, id: &str) -> UserStoreResult<()>;
}
