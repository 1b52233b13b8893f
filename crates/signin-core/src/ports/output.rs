//! Output boundary - how the use case reports outcomes to the presentation layer.

use crate::domain::User;
use crate::error::SignInFailure;

/// Receives the single outcome of a sign-in attempt.
///
/// A successful attempt calls `display_user_name` then `prepare_dashboard`.
/// A failed attempt calls `show_error` once.
pub trait SignInOutput: Send + Sync {
    /// Show the signed-in user's name.
    fn display_user_name(&self, user: &User);

    /// Navigate to the dashboard.
    fn prepare_dashboard(&self);

    /// Present a failure. `None` means the failure is unclassified.
    fn show_error(&self, error: Option<&SignInFailure>);
}
