//! Console output boundary and the presenter that formats its lines.

use std::io::{self, Stdout, Write};
use std::sync::Mutex;

use signin_core::SignInFailure;
use signin_core::domain::User;
use signin_core::ports::SignInOutput;

const GENERIC_ERROR: &str = "generic error";

pub fn user_name_line(user: &User) -> String {
    format!("complete user Name : {}", user.full_name())
}

pub fn dashboard_line() -> &'static str {
    "prepare dashboard view"
}

/// Only classified sign-in errors get a specific message.
pub fn error_line(error: Option<&SignInFailure>) -> String {
    let message = match error.and_then(SignInFailure::classified) {
        Some(classified) => classified.to_string(),
        None => GENERIC_ERROR.to_string(),
    };
    format!("error : {message}")
}

/// Output boundary that prints each outcome as one line.
pub struct ConsoleView<W = Stdout> {
    out: Mutex<W>,
}

impl ConsoleView<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write + Send> ConsoleView<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> W {
        match self.out.into_inner() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    fn write_line(&self, line: &str) {
        let mut out = match self.out.lock() {
            Ok(out) => out,
            Err(poisoned) => poisoned.into_inner(),
        };
        if let Err(e) = writeln!(out, "{line}") {
            tracing::error!(error = %e, "Failed to write view output");
        }
    }
}

impl<W: Write + Send> SignInOutput for ConsoleView<W> {
    fn display_user_name(&self, user: &User) {
        self.write_line(&user_name_line(user));
    }

    fn prepare_dashboard(&self) {
        self.write_line(dashboard_line());
    }

    fn show_error(&self, error: Option<&SignInFailure>) {
        self.write_line(&error_line(error));
    }
}
