//! Credential validation.

use crate::error::SignInError;

/// Minimum password length, counted in characters rather than bytes.
pub const MIN_PASSWORD_CHARS: usize = 5;

/// Check the credentials in a fixed order and return the first failure.
///
/// Only emptiness is checked for presence, so whitespace-only values pass.
pub fn validate(email: &str, password: &str) -> Option<SignInError> {
    if email.is_empty() {
        return Some(SignInError::MissingEmail);
    }
    if password.is_empty() {
        return Some(SignInError::MissingPassword);
    }

    if !email.contains('@') {
        return Some(SignInError::BadEmailFormat);
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Some(SignInError::BadPasswordFormat);
    }

    None
}
