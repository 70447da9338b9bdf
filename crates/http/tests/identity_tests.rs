//! Integration tests for the identity provider client

#![cfg(feature = "client")]

use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine as _};
use serde_json::json;
use todo_core::IdentityConfig;
use todo_http::client::{error::ClientError, IdentityClient};
use wiremock::matchers::{body_json, header, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn jwt(claims: serde_json::Value) -> String {
    format!(
        "{}.{}.signature",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"RS256","kid":"test"}"#),
        URL_SAFE_NO_PAD.encode(claims.to_string())
    )
}

fn client(server: &MockServer) -> IdentityClient {
    IdentityClient::new(&IdentityConfig {
        region: "us-east-1".to_string(),
        client_id: "app-client".to_string(),
        endpoint: Some(format!("{}/", server.uri())),
    })
    .unwrap()
}

#[test]
fn test_client_requires_client_id() {
    let result = IdentityClient::new(&IdentityConfig {
        region: "us-east-1".to_string(),
        client_id: String::new(),
        endpoint: None,
    });
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_login_assembles_session() {
    let mock_server = MockServer::start().await;
    let access_token = jwt(json!({
        "username": "alice-sub",
        "exp": 1_900_000_000,
        "token_use": "access"
    }));
    let id_token = jwt(json!({"name": "Alice", "email": "alice@example.com"}));

    Mock::given(method("POST"))
        .and(header("content-type", "application/x-amz-json-1.1"))
        .and(header(
            "x-amz-target",
            "AWSCognitoIdentityProviderService.InitiateAuth",
        ))
        .and(body_json(json!({
            "AuthFlow": "USER_PASSWORD_AUTH",
            "ClientId": "app-client",
            "AuthParameters": {"USERNAME": "alice@example.com", "PASSWORD": "hunter2hunter2"}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "AuthenticationResult": {
                "AccessToken": access_token,
                "IdToken": id_token,
                "RefreshToken": "refresh-token",
                "ExpiresIn": 3600,
                "TokenType": "Bearer"
            },
            "ChallengeParameters": {}
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let session = client(&mock_server)
        .login("alice@example.com", "hunter2hunter2")
        .await
        .unwrap();

    assert_eq!(session.user_id, "alice-sub");
    assert_eq!(session.expiry, Some(1_900_000_000));
    assert_eq!(session.name.as_deref(), Some("Alice"));
    assert_eq!(session.access_token, access_token);
    assert_eq!(session.id_token, id_token);
    assert_eq!(session.refresh_token, "refresh-token");
}

#[tokio::test]
async fn test_login_failure_message_is_verbatim() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "__type": "NotAuthorizedException",
            "message": "Incorrect username or password."
        })))
        .mount(&mock_server)
        .await;

    let error = client(&mock_server)
        .login("alice@example.com", "wrong-password")
        .await
        .unwrap_err();

    match &error {
        ClientError::Identity { code, message } => {
            assert_eq!(code, "NotAuthorizedException");
            assert_eq!(message, "Incorrect username or password.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(error.to_string(), "Incorrect username or password.");
}

#[tokio::test]
async fn test_login_challenge_is_an_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "ChallengeName": "NEW_PASSWORD_REQUIRED",
            "Session": "opaque",
            "ChallengeParameters": {}
        })))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).login("alice@example.com", "temporary1").await;
    assert!(matches!(result, Err(ClientError::Challenge(name)) if name == "NEW_PASSWORD_REQUIRED"));
}

#[tokio::test]
async fn test_login_with_malformed_tokens() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "AuthenticationResult": {"AccessToken": "garbage", "IdToken": "garbage"}
        })))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server).login("alice@example.com", "password1").await;
    assert!(matches!(result, Err(ClientError::Session(_))));
}

#[tokio::test]
async fn test_sign_up_sends_name_attribute() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(header(
            "x-amz-target",
            "AWSCognitoIdentityProviderService.SignUp",
        ))
        .and(body_json(json!({
            "ClientId": "app-client",
            "Username": "bob@example.com",
            "Password": "password123",
            "UserAttributes": [{"Name": "name", "Value": "Bob Builder"}]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "UserConfirmed": false,
            "UserSub": "5f1c-sub"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let response = client(&mock_server)
        .sign_up("bob@example.com", "password123", "Bob Builder")
        .await
        .unwrap();
    assert_eq!(response.user_sub, "5f1c-sub");
    assert!(!response.user_confirmed);
}

#[tokio::test]
async fn test_sign_up_rejection_without_error_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_string("Service Unavailable"))
        .mount(&mock_server)
        .await;

    let result = client(&mock_server)
        .sign_up("bob@example.com", "password123", "Bob")
        .await;
    assert!(matches!(
        result,
        Err(ClientError::ServerError { status: 503, .. })
    ));
}
