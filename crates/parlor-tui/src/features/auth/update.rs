//! Auth feature reducer: applies the outcome of a sign-in task.

use parlor_core::auth::Session;

use crate::features::form;
use crate::features::toast::Toast;
use crate::mutations::{FormMutation, StateMutation, ToastMutation};

use super::state::AuthState;

/// Handles the result event emitted by the sign-in handler.
///
/// On success the session is already persisted; the screen switches to the
/// signed-in view. On failure the form stays as-is with no field errors and
/// the generic failure toast is shown.
pub fn handle_sign_in_result(
    auth: &mut AuthState,
    result: Result<Session, String>,
) -> Vec<StateMutation> {
    match result {
        Ok(session) => {
            let name = session.user.name.clone();
            *auth = AuthState::SignedIn(session);
            vec![
                StateMutation::Form(FormMutation::SetSubmitting(false)),
                StateMutation::Toast(ToastMutation::Push(Toast::success(
                    "Signed in",
                    &format!("Welcome back, {name}."),
                ))),
            ]
        }
        Err(error) => {
            tracing::warn!(%error, "sign-in failed");
            *auth = AuthState::Idle;
            vec![
                StateMutation::Form(FormMutation::SetSubmitting(false)),
                StateMutation::Toast(ToastMutation::Push(form::failure_toast())),
            ]
        }
    }
}
