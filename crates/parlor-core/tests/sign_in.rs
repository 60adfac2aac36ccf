//! Integration tests for the sign-in client against a mock server.

use parlor_core::api::ApiClient;
use parlor_core::auth::Credentials;
use parlor_core::config::Config;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config_for(server: &MockServer) -> Config {
    Config {
        base_url: server.uri(),
        ..Default::default()
    }
}

fn credentials() -> Credentials {
    Credentials {
        email: "ana@example.com".to_string(),
        password: "hunter2".to_string(),
    }
}

/// Successful sign-in posts the exact payload and parses the session.
#[tokio::test]
async fn test_sign_in_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sessions"))
        .and(body_json(serde_json::json!({
            "email": "ana@example.com",
            "password": "hunter2",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": { "id": "7c1f", "name": "Ana", "email": "ana@example.com" },
            "token": "jwt-token",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = ApiClient::new(&config_for(&server)).unwrap();
    let session = client.sign_in(&credentials()).await.unwrap();

    assert_eq!(session.user.name, "Ana");
    assert_eq!(session.token, "jwt-token");
}

/// Rejected credentials surface as an opaque error carrying only the status.
#[tokio::test]
async fn test_sign_in_unauthorized_is_opaque() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({ "error": "bad credentials" })),
        )
        .mount(&server)
        .await;

    let client = ApiClient::new(&config_for(&server)).unwrap();
    let err = client.sign_in(&credentials()).await.unwrap_err();

    let message = format!("{err:#}");
    assert!(message.contains("401"), "got: {message}");
    assert!(!message.contains("hunter2"), "credentials leaked: {message}");
}

/// A malformed success body is a parse error, not a panic.
#[tokio::test]
async fn test_sign_in_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let client = ApiClient::new(&config_for(&server)).unwrap();
    let err = client.sign_in(&credentials()).await.unwrap_err();
    assert!(format!("{err:#}").contains("parse session response"));
}

/// Trailing slash in the configured base URL does not double the separator.
#[tokio::test]
async fn test_base_url_trailing_slash() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/sessions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "user": { "id": "1", "name": "Ana", "email": "ana@example.com" },
            "token": "t",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = Config {
        base_url: format!("{}/", server.uri()),
        ..Default::default()
    };
    let client = ApiClient::new(&config).unwrap();
    assert!(client.sign_in(&credentials()).await.is_ok());
}
