#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

/// Authentication-flow state shared across the signup and recovery pages.
///
/// There is no real session; the only thing the flow carries between
/// screens is the email address a code was (nominally) sent to.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub pending_email: Option<String>,
}

impl AuthState {
    /// The address shown on the verification screens.
    pub fn display_email(&self) -> String {
        self.pending_email
            .clone()
            .unwrap_or_else(|| "your email".to_owned())
    }
}
