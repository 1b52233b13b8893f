//! Canned network backend.

use async_trait::async_trait;

use signin_core::domain::User;
use signin_core::ports::Network;

/// Network stub that answers every sign-in with the same result.
///
/// No request leaves the process.
#[derive(Debug, Clone)]
pub struct StubNetwork {
    user: Option<User>,
}

impl StubNetwork {
    /// Always signs in as `user`.
    pub fn new(user: User) -> Self {
        Self { user: Some(user) }
    }

    /// Never returns a user.
    pub fn offline() -> Self {
        Self { user: None }
    }
}

impl Default for StubNetwork {
    fn default() -> Self {
        Self::new(User::new("Rahim", "Ben"))
    }
}

#[async_trait]
impl Network for StubNetwork {
    async fn sign_in_user(&self, email: &str, _password: &str) -> Option<User> {
        tracing::debug!(email, found = self.user.is_some(), "Stub network sign-in");
        self.user.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_default_user() {
        let network = StubNetwork::default();
        let user = network.sign_in_user("toto@toto.fr", "dozkdozkdoz").await;
        assert_eq!(user, Some(User::new("Rahim", "Ben")));
    }

    #[tokio::test]
    async fn test_offline_returns_no_user() {
        let network = StubNetwork::offline();
        assert_eq!(network.sign_in_user("toto@toto.fr", "dozkdozkdoz").await, None);
    }
}
