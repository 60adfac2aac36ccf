//! Authentication: credential validation and session persistence.

mod session;
mod validate;

pub use session::{Session, SessionStore, User};
pub use validate::{Field, FieldError, ValidationErrors, validate_credentials};

/// Credentials entered by the user for one sign-in attempt.
///
/// Ephemeral: lives for the duration of a single submission and is
/// never persisted or logged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}
