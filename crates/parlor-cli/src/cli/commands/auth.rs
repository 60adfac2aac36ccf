//! Auth command handlers.
//!
//! Non-interactive sign-in mirrors the interactive flow: validate
//! everything first, talk to the API only when the whole input is valid,
//! and keep failure output generic.

use std::io::Read;

use anyhow::{Context, Result};
use parlor_core::api::ApiClient;
use parlor_core::auth::{Credentials, SessionStore, validate_credentials};
use parlor_core::config::Config;

/// Signs in with the given e-mail and a password read from stdin.
///
/// Validation violations are printed per field before the command fails;
/// network and auth failures stay generic.
pub async fn login(config: &Config, email: &str, password_stdin: bool) -> Result<()> {
    if !password_stdin {
        anyhow::bail!("Pass --password-stdin and pipe the password on stdin");
    }

    let mut password = String::new();
    std::io::stdin()
        .read_to_string(&mut password)
        .context("read password from stdin")?;
    let password = password.trim_end_matches(['\r', '\n']).to_string();

    let credentials = Credentials {
        email: email.to_string(),
        password,
    };

    if let Err(errors) = validate_credentials(&credentials) {
        for error in errors.errors() {
            eprintln!("{}: {}", error.field.label(), error.message);
        }
        anyhow::bail!("Could not sign in, check your credentials.");
    }

    let client = ApiClient::new(config)?;
    let session = match client.sign_in(&credentials).await {
        Ok(session) => session,
        Err(error) => {
            tracing::warn!(error = %format!("{error:#}"), "sign-in failed");
            anyhow::bail!("Could not sign in, check your credentials.");
        }
    };

    SessionStore::save(&session)?;
    println!("Signed in as {} <{}>", session.user.name, session.user.email);
    Ok(())
}

/// Clears the stored session. Idempotent.
pub fn logout() -> Result<()> {
    if SessionStore::clear()? {
        println!("Signed out.");
    } else {
        println!("No session to clear.");
    }
    Ok(())
}

/// Prints the signed-in user, or fails if there is no session.
pub fn whoami() -> Result<()> {
    match SessionStore::load()? {
        Some(session) => {
            println!("{} <{}>", session.user.name, session.user.email);
            Ok(())
        }
        None => anyhow::bail!("Not signed in. Run `parlor` or `parlor login` first."),
    }
}
