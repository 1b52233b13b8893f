//! Application configuration loaded from command-line flags and environment variables.

use clap::builder::FalseyValueParser;
use clap::{Parser, ValueEnum};

use signin_core::domain::User;

/// Credentials the demo run signs in with.
pub const DEMO_EMAIL: &str = "toto@toto.fr";
pub const DEMO_PASSWORD: &str = "dozkdozkdoz";

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Application configuration.
#[derive(Debug, Clone, Parser)]
#[command(name = "signin-cli", version, about = "Run one sign-in attempt against stub collaborators")]
pub struct AppConfig {
    /// Email field. Leave unset to submit the form without an email.
    #[arg(long, env = "SIGNIN_EMAIL")]
    pub email: Option<String>,

    /// Password field. Leave unset to submit the form without a password.
    #[arg(long, env = "SIGNIN_PASSWORD")]
    pub password: Option<String>,

    /// Fill unset fields with the demo credentials.
    #[arg(long)]
    pub demo: bool,

    /// First name of the user the stub network signs in as.
    #[arg(long, env = "SIGNIN_STUB_FIRST_NAME", default_value = "Rahim")]
    pub first_name: String,

    /// Last name of the user the stub network signs in as.
    #[arg(long, env = "SIGNIN_STUB_LAST_NAME", default_value = "Ben")]
    pub last_name: String,

    /// Make the stub network return no user.
    #[arg(long, env = "SIGNIN_NETWORK_OFFLINE", value_parser = FalseyValueParser::new())]
    pub network_offline: bool,

    /// Make the stub store reject every write.
    #[arg(long, env = "SIGNIN_STORE_READ_ONLY", value_parser = FalseyValueParser::new())]
    pub store_read_only: bool,

    /// Log output format.
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Pretty)]
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Email as submitted by the form.
    pub fn email(&self) -> Option<&str> {
        match (&self.email, self.demo) {
            (Some(email), _) => Some(email.as_str()),
            (None, true) => Some(DEMO_EMAIL),
            (None, false) => None,
        }
    }

    /// Password as submitted by the form.
    pub fn password(&self) -> Option<&str> {
        match (&self.password, self.demo) {
            (Some(password), _) => Some(password.as_str()),
            (None, true) => Some(DEMO_PASSWORD),
            (None, false) => None,
        }
    }

    /// User the stub network answers with.
    pub fn stub_user(&self) -> User {
        User::new(self.first_name.clone(), self.last_name.clone())
    }
}
