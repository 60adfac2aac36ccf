//! Application state composition.
//!
//! Top-level state for the TUI:
//!
//! ```text
//! AppState
//! ├── form: FormState       (fields, focus, per-field errors)
//! ├── toasts: ToastStack    (notifications, TTL expiry)
//! ├── auth: AuthState       (idle, signing in, signed in)
//! └── config: Config
//! ```

use parlor_core::config::Config;

use crate::auth::AuthState;
use crate::form::FormState;
use crate::toast::ToastStack;

/// Application state for the TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Sign-in form state.
    pub form: FormState,
    /// Toast notification stack.
    pub toasts: ToastStack,
    /// Authentication state.
    pub auth: AuthState,
    /// Client configuration.
    pub config: Config,
    /// Spinner animation frame counter (for the pending sign-in).
    pub spinner_frame: usize,
}

impl AppState {
    /// Creates a new `AppState` from configuration.
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            form: FormState::default(),
            toasts: ToastStack::new(config.toast_ttl()),
            auth: AuthState::Idle,
            config,
            spinner_frame: 0,
        }
    }
}
