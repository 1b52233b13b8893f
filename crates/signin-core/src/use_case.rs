//! Sign-in use case - sequences validation, network and persistence.

use std::fmt;
use std::sync::Arc;

use tracing::instrument;

use crate::error::{SignInError, SignInFailure};
use crate::ports::{Network, SignInOutput, UserStore};
use crate::validation::validate;

/// Where a sign-in attempt currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignInStage {
    Idle,
    Validating,
    AwaitingNetwork,
    AwaitingPersistence,
    Failed,
    Succeeded,
}

impl SignInStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::AwaitingNetwork => "awaiting_network",
            Self::AwaitingPersistence => "awaiting_persistence",
            Self::Failed => "failed",
            Self::Succeeded => "succeeded",
        }
    }
}

impl fmt::Display for SignInStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Orchestrates one sign-in attempt per call.
///
/// Holds no per-attempt state, so a single instance can serve concurrent calls.
/// The output boundary is borrowed for the duration of a call and never stored.
#[derive(Clone)]
pub struct SignInUseCase {
    network: Arc<dyn Network>,
    store: Arc<dyn UserStore>,
}

impl SignInUseCase {
    pub fn new(network: Arc<dyn Network>, store: Arc<dyn UserStore>) -> Self {
        Self { network, store }
    }

    /// Run the flow and report exactly one outcome to `output`.
    ///
    /// `None` for either field means it was not provided at all, which is
    /// reported as an unclassified error. Returns the terminal stage.
    #[instrument(skip(self, password, output))]
    pub async fn sign_in(
        &self,
        email: Option<&str>,
        password: Option<&str>,
        output: &dyn SignInOutput,
    ) -> SignInStage {
        tracing::debug!(stage = %SignInStage::Idle, "Sign-in requested");
        let (Some(email), Some(password)) = (email, password) else {
            tracing::warn!(stage = %SignInStage::Failed, "Credentials not provided");
            output.show_error(None);
            return SignInStage::Failed;
        };

        tracing::debug!(stage = %SignInStage::Validating);
        if let Some(error) = validate(email, password) {
            tracing::warn!(stage = %SignInStage::Failed, error = ?error, "Validation failed");
            output.show_error(Some(&SignInFailure::SignIn(error)));
            return SignInStage::Failed;
        }

        tracing::debug!(stage = %SignInStage::AwaitingNetwork);
        let Some(user) = self.network.sign_in_user(email, password).await else {
            tracing::warn!(stage = %SignInStage::Failed, "Network returned no user");
            output.show_error(Some(&SignInFailure::SignIn(SignInError::Unknown)));
            return SignInStage::Failed;
        };

        tracing::debug!(stage = %SignInStage::AwaitingPersistence);
        if let Err(e) = self.store.save_user(&user).await {
            tracing::warn!(stage = %SignInStage::Failed, error = %e, "Failed to save user");
            output.show_error(Some(&SignInFailure::Store(e)));
            return SignInStage::Failed;
        }

        tracing::info!(stage = %SignInStage::Succeeded, user = %user.full_name(), "Signed in");
        output.display_user_name(&user);
        output.prepare_dashboard();
        SignInStage::Succeeded
    }
}
