//! Domain-level error types.

use thiserror::Error;

/// Classified sign-in failures.
///
/// The display strings are what the presentation layer shows verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SignInError {
    #[error("Missing Email")]
    MissingEmail,

    #[error("missingPassword")]
    MissingPassword,

    #[error("badEmailFormat")]
    BadEmailFormat,

    #[error("badPasswordFormat")]
    BadPasswordFormat,

    /// Network returned no user.
    #[error("")]
    Unknown,
}

/// Persistence-level errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Write rejected: {0}")]
    Rejected(String),
}

/// Everything the use case can report through `SignInOutput::show_error`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignInFailure {
    #[error(transparent)]
    SignIn(#[from] SignInError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl SignInFailure {
    /// The classified error, if this failure carries one.
    pub fn classified(&self) -> Option<SignInError> {
        match self {
            Self::SignIn(e) => Some(*e),
            Self::Store(_) => None,
        }
    }
}
