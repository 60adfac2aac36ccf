//! Auth feature state.

use parlor_core::auth::Session;

/// Authentication lifecycle for the screen.
#[derive(Debug)]
pub enum AuthState {
    /// No sign-in running; the form is interactive.
    Idle,
    /// A sign-in task is pending.
    SigningIn,
    /// Signed in; the confirmation view is shown.
    SignedIn(Session),
}

impl AuthState {
    pub fn is_signing_in(&self) -> bool {
        matches!(self, AuthState::SigningIn)
    }

    pub fn is_signed_in(&self) -> bool {
        matches!(self, AuthState::SignedIn(_))
    }
}
