//! Effect handler implementations.
//!
//! Handlers are pure async functions that return a `UiEvent`. The runtime
//! spawns them via `spawn_effect` and the result lands in the inbox.

use anyhow::Result;
use parlor_core::api::ApiClient;
use parlor_core::auth::{Credentials, Session, SessionStore};
use parlor_core::config::Config;

use crate::events::UiEvent;

/// Runs the sign-in request and persists the session on success.
///
/// The error string is for logging only; the UI shows a generic toast and
/// never surfaces it.
pub async fn sign_in(config: Config, credentials: Credentials) -> UiEvent {
    let result = run_sign_in(&config, credentials)
        .await
        .map_err(|e| format!("{e:#}"));
    UiEvent::SignInResult { result }
}

async fn run_sign_in(config: &Config, credentials: Credentials) -> Result<Session> {
    let client = ApiClient::new(config)?;
    let session = client.sign_in(&credentials).await?;
    SessionStore::save(&session)?;
    Ok(session)
}
