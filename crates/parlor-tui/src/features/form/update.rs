//! Form feature reducer.
//!
//! Handles field editing, focus movement, and the submit flow:
//! clear stale errors, validate everything, then (and only then) hand the
//! credentials to the sign-in effect.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use parlor_core::auth::validate_credentials;

use super::state::FormState;
use crate::effects::UiEffect;
use crate::mutations::{AuthMutation, StateMutation, ToastMutation};
use crate::toast::Toast;

/// Result type for key handlers.
type KeyResult = (Vec<UiEffect>, Vec<StateMutation>);

/// Handles a key event for the sign-in form.
pub fn handle_key(form: &mut FormState, key: KeyEvent) -> KeyResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        // Two fields, so forward and backward cycling coincide.
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => {
            form.cycle_focus();
            (vec![], vec![])
        }
        KeyCode::Enter => submit(form),
        KeyCode::Backspace => {
            form.focused_mut().backspace();
            (vec![], vec![])
        }
        KeyCode::Delete => {
            form.focused_mut().delete();
            (vec![], vec![])
        }
        KeyCode::Left => {
            form.focused_mut().move_left();
            (vec![], vec![])
        }
        KeyCode::Right => {
            form.focused_mut().move_right();
            (vec![], vec![])
        }
        KeyCode::Home => {
            form.focused_mut().move_home();
            (vec![], vec![])
        }
        KeyCode::End => {
            form.focused_mut().move_end();
            (vec![], vec![])
        }
        // Readline-style line editing
        KeyCode::Char('a') if ctrl => {
            form.focused_mut().move_home();
            (vec![], vec![])
        }
        KeyCode::Char('e') if ctrl => {
            form.focused_mut().move_end();
            (vec![], vec![])
        }
        KeyCode::Char('u') if ctrl => {
            form.focused_mut().kill_to_start();
            (vec![], vec![])
        }
        KeyCode::Char('k') if ctrl => {
            form.focused_mut().kill_to_end();
            (vec![], vec![])
        }
        KeyCode::Char(c) if !ctrl => {
            form.focused_mut().insert(c);
            (vec![], vec![])
        }
        _ => (vec![], vec![]),
    }
}

/// The submit flow.
///
/// Order matters: stale errors are cleared first, then validation runs to
/// completion over all fields. The sign-in effect is emitted only when the
/// whole set of inputs is valid, so a partially valid form never reaches
/// the network.
fn submit(form: &mut FormState) -> KeyResult {
    if form.submitting {
        // A sign-in is already pending; Enter is a no-op.
        return (vec![], vec![]);
    }

    form.clear_errors();

    let credentials = form.credentials();
    match validate_credentials(&credentials) {
        Ok(()) => {
            form.submitting = true;
            (
                vec![UiEffect::SubmitSignIn { credentials }],
                vec![StateMutation::Auth(AuthMutation::SetSigningIn)],
            )
        }
        Err(errors) => {
            form.set_errors(&errors);
            (
                vec![],
                vec![StateMutation::Toast(ToastMutation::Push(failure_toast()))],
            )
        }
    }
}

/// The generic failure toast, shared by validation and auth failures.
///
/// Deliberately does not say which credential (or field) was wrong.
pub fn failure_toast() -> Toast {
    Toast::error(
        "Authentication error",
        "Could not sign in, check your credentials.",
    )
}
