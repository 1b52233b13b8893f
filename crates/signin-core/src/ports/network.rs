//! Network port - remote sign-in.

use async_trait::async_trait;

use crate::domain::User;

/// Network port - signs a user in against the remote backend.
#[async_trait]
pub trait Network: Send + Sync {
    /// Resolve the user behind these credentials.
    ///
    /// Completes exactly once. `None` means the backend returned no user.
    async fn sign_in_user(&self, email: &str, password: &str) -> Option<User>;
}
