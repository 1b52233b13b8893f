//! In-memory user store.
//!
//! Note: Saved users are lost on process restart.

use async_trait::async_trait;
use tokio::sync::RwLock;

use signin_core::domain::User;
use signin_core::error::StoreError;
use signin_core::ports::UserStore;

/// In-memory user store backed by a `Vec` behind an async RwLock.
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
    read_only: bool,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            read_only: false,
        }
    }

    /// A store that rejects every write.
    pub fn read_only() -> Self {
        Self {
            users: RwLock::new(Vec::new()),
            read_only: true,
        }
    }

    /// Snapshot of every user saved so far, oldest first.
    pub async fn saved_users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn save_user(&self, user: &User) -> Result<(), StoreError> {
        if self.read_only {
            tracing::warn!(user = %user.full_name(), "Store is read-only");
            return Err(StoreError::Rejected("store is read-only".to_string()));
        }

        let mut users = self.users.write().await;
        users.push(user.clone());
        tracing::debug!(user = %user.full_name(), total = users.len(), "User saved");

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_save_and_list() {
        let store = InMemoryUserStore::new();
        store.save_user(&User::new("Rahim", "Ben")).await.unwrap();
        store.save_user(&User::new("Toto", "Titi")).await.unwrap();

        let users = store.saved_users().await;
        assert_eq!(users.len(), 2);
        assert_eq!(users[0].full_name(), "Rahim Ben");
    }

    #[tokio::test]
    async fn test_read_only_rejects_writes() {
        let store = InMemoryUserStore::read_only();
        let result = store.save_user(&User::new("Rahim", "Ben")).await;

        assert!(matches!(result, Err(StoreError::Rejected(_))));
        assert!(store.saved_users().await.is_empty());
    }
}
