//! HTTP client for the Parlor API.
//!
//! Sign-in posts the credentials to `{base_url}/sessions` and expects a
//! session (`user` + `token`) back. Failures stay opaque: callers get an
//! error chain suitable for logs, never a per-credential diagnosis.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::auth::{Credentials, Session, User};
use crate::config::Config;

/// Client for the Parlor API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct SessionRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
struct SessionResponse {
    user: User,
    token: String,
}

impl ApiClient {
    /// Creates a client from the configuration.
    ///
    /// # Errors
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &Config) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Authenticates against the sessions endpoint.
    ///
    /// # Errors
    /// Returns an error on transport failure or any non-success status.
    /// The error never echoes the submitted credentials.
    pub async fn sign_in(&self, credentials: &Credentials) -> Result<Session> {
        let url = format!("{}/sessions", self.base_url);
        tracing::debug!(%url, "sign-in request");

        let response = self
            .http
            .post(&url)
            .json(&SessionRequest {
                email: &credentials.email,
                password: &credentials.password,
            })
            .send()
            .await
            .context("Failed to send sign-in request")?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::debug!(%status, "sign-in rejected");
            anyhow::bail!("Sign-in failed (HTTP {status})");
        }

        let data: SessionResponse = response
            .json()
            .await
            .context("Failed to parse session response")?;

        Ok(Session {
            user: data.user,
            token: data.token,
            created_at: chrono::Utc::now(),
        })
    }
}
