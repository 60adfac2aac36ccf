//! Full-screen terminal UI for Parlor sign-in.
//!
//! Elm-style architecture: a pure reducer (`update`) mutates state and
//! returns effects; the runtime owns the terminal, executes effects, and
//! feeds async results back as events through an inbox channel.

pub mod effects;
pub mod events;
mod features;
pub mod mutations;
mod render;
mod runtime;
pub mod state;
mod terminal;
pub mod update;

pub use features::{auth, form, toast};

use anyhow::Result;
use parlor_core::config::Config;

/// Runs the sign-in screen until the user quits.
///
/// Must be called within a tokio runtime: async sign-in work is spawned
/// onto it.
///
/// # Errors
/// Returns an error if the terminal cannot be set up or the event loop
/// fails.
pub fn run(config: Config) -> Result<()> {
    let mut runtime = runtime::TuiRuntime::new(config)?;
    runtime.run()
}
