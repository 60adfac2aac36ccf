//! Top-level rendering: picks the active view, then draws toasts on top.

use ratatui::Frame;

use crate::features::{auth, form, toast};
use crate::state::AppState;

/// Renders the whole frame from state.
pub fn render(state: &AppState, frame: &mut Frame) {
    let area = frame.area();

    match &state.auth {
        auth::AuthState::SignedIn(session) => auth::render_signed_in(frame, area, session),
        _ => form::render(frame, area, &state.form, state.spinner_frame),
    }

    // Toasts always render last so they sit above the active view.
    toast::render(frame, area, &state.toasts);
}
