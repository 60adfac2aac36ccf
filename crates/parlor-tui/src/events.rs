//! UI event types.
//!
//! All external inputs (terminal, async results) are converted to `UiEvent`
//! before being processed by the reducer.
//!
//! ## Inbox Pattern
//!
//! Async operations send events directly to the runtime's event inbox.
//! Results arrive as separate events; the reducer never awaits anything.

use crossterm::event::Event as CrosstermEvent;
use parlor_core::auth::Session;

/// Unified event enum for the TUI.
///
/// All inputs to the TUI are converted to this type before processing.
/// The reducer (`update`) pattern-matches on these events to update state.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (spinner animation, toast expiry).
    Tick,

    /// Terminal input event (key, paste, resize).
    Terminal(CrosstermEvent),

    /// Async sign-in completed.
    ///
    /// `Err` carries a log-worthy message; the UI only ever shows the
    /// generic failure toast.
    SignInResult { result: Result<Session, String> },
}
