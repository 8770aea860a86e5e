use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::ServiceError;
use crate::user::models::User;

/// In-memory, read-mostly user store. Users are owned by an external
/// identity source; this store only holds the records handed to it at
/// seeding time and serves lookups during generation.
#[derive(Default)]
pub struct UserStore {
    inner: RwLock<Vec<User>>,
}

impl UserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// All users in insertion order.
    pub fn list(&self) -> Vec<User> {
        self.inner.read().clone()
    }

    pub fn get(&self, id: Uuid) -> Result<User, ServiceError> {
        self.inner
            .read()
            .iter()
            .find(|user| user.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::NotFound(format!("User '{}' not found", id)))
    }

    pub fn insert(&self, user: User) -> User {
        self.inner.write().push(user.clone());
        user
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }
}
