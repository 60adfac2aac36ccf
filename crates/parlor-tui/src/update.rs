//! Main reducer.
//!
//! Pure function from (state, event) to effects. All I/O happens in the
//! runtime; this module only mutates state and decides what should run next.

use crossterm::event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::{auth, form};
use crate::mutations::{AuthMutation, FormMutation, StateMutation, ToastMutation};
use crate::state::AppState;

/// Processes a single event and returns effects for the runtime to execute.
pub fn update(state: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            state.spinner_frame = state.spinner_frame.wrapping_add(1);
            state.toasts.expire();
            vec![]
        }
        UiEvent::Terminal(terminal_event) => handle_terminal_event(state, terminal_event),
        UiEvent::SignInResult { result } => {
            let mutations = auth::handle_sign_in_result(&mut state.auth, result);
            apply_mutations(state, mutations);
            vec![]
        }
    }
}

fn handle_terminal_event(state: &mut AppState, event: CrosstermEvent) -> Vec<UiEffect> {
    match event {
        CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Ctrl+C quits from anywhere, even mid sign-in.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.should_quit = true;
        return vec![UiEffect::Quit];
    }

    if state.auth.is_signed_in() {
        return match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
                state.should_quit = true;
                vec![UiEffect::Quit]
            }
            _ => vec![],
        };
    }

    if key.code == KeyCode::Esc {
        state.should_quit = true;
        return vec![UiEffect::Quit];
    }

    let (effects, mutations) = form::handle_key(&mut state.form, key);
    apply_mutations(state, mutations);
    effects
}

/// Applies cross-slice mutations requested by feature reducers.
fn apply_mutations(state: &mut AppState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::Toast(ToastMutation::Push(toast)) => state.toasts.push(toast),
            StateMutation::Form(FormMutation::SetSubmitting(submitting)) => {
                state.form.submitting = submitting;
            }
            StateMutation::Auth(AuthMutation::SetSigningIn) => {
                state.auth = auth::AuthState::SigningIn;
            }
        }
    }
}
