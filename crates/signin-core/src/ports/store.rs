//! Persistence port.

use async_trait::async_trait;

use crate::domain::User;
use crate::error::StoreError;

/// Saves the user once the network has signed them in.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist the user. Completes exactly once.
    async fn save_user(&self, user: &User) -> Result<(), StoreError>;
}
