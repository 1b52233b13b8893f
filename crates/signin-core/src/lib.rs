//! # Sign-in Core
//!
//! The domain layer of the sign-in flow.
//! This crate contains the credential validator, the ports the flow depends on,
//! and the use case that sequences them. It has zero infrastructure dependencies.

pub mod domain;
pub mod error;
pub mod ports;
pub mod use_case;
pub mod validation;

pub use error::{SignInError, SignInFailure, StoreError};
pub use use_case::{SignInStage, SignInUseCase};
pub use validation::validate;
