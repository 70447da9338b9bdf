//! Integration tests for the todo API client

#![cfg(feature = "client")]

use serde_json::json;
use todo_core::{TaskId, Todo};
use todo_http::client::{error::ClientError, AuthenticatedTodoClient, TypedClientBuilder};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> AuthenticatedTodoClient {
    TypedClientBuilder::new()
        .base_url(server.uri())
        .build_authenticated("id-token")
        .unwrap()
}

#[tokio::test]
async fn test_client_builder() {
    let client = TypedClientBuilder::new()
        .base_url("http://localhost:8080/")
        .build_authenticated("token");

    assert!(client.is_ok());
    assert_eq!(client.unwrap().base_url(), "http://localhost:8080");
}

#[tokio::test]
async fn test_client_builder_requires_base_url_and_token() {
    let result = TypedClientBuilder::new().build_authenticated("token");
    assert!(matches!(result, Err(ClientError::Configuration(_))));

    let result = AuthenticatedTodoClient::new("http://localhost:8080", "");
    assert!(matches!(result, Err(ClientError::Configuration(_))));
}

#[tokio::test]
async fn test_fetch_todos_sends_bearer_and_user() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fetchTodo"))
        .and(header("authorization", "Bearer id-token"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"userId": "alice"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": [
                {"userId": "alice", "taskId": "1", "taskDetails": "write report", "completed": false},
                {"userId": "alice", "taskId": "2", "taskDetails": "water plants", "completed": true}
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let todos = client(&mock_server).fetch_todos("alice").await.unwrap().unwrap();
    assert_eq!(todos.len(), 2);
    assert_eq!(todos[0].task_details, "write report");
    assert!(todos[1].completed);
}

#[tokio::test]
async fn test_fetch_todos_without_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/fetchTodo"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": null})))
        .mount(&mock_server)
        .await;

    let todos = client(&mock_server).fetch_todos("alice").await.unwrap();
    assert!(todos.is_none());
}

#[tokio::test]
async fn test_add_todo_posts_full_record() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/addTodo"))
        .and(header("authorization", "Bearer id-token"))
        .and(body_json(json!({
            "userId": "alice",
            "taskId": "1700000000",
            "taskDetails": "buy milk",
            "completed": false
        })))
        .respond_with(ResponseTemplate::new(200).set_body_string("created"))
        .expect(1)
        .mount(&mock_server)
        .await;

    let todo = Todo::new("alice", TaskId::from_epoch_secs(1_700_000_000), "buy milk");
    client(&mock_server).add_todo(&todo).await.unwrap();
}

#[tokio::test]
async fn test_update_and_delete_payloads() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/updateTodo"))
        .and(body_json(json!({"userId": "alice", "taskId": "7", "completed": true})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/updateTodo"))
        .and(body_json(json!({
            "userId": "alice",
            "taskId": "8",
            "completed": false,
            "taskDetails": "call carol"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/deleteTodo"))
        .and(body_json(json!({"userId": "alice", "taskId": "7"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    client
        .update_todo("alice", &TaskId::from("7"), true, None)
        .await
        .unwrap();
    client
        .update_todo("alice", &TaskId::from("8"), false, Some("call carol"))
        .await
        .unwrap();
    client.delete_todo("alice", &TaskId::from("7")).await.unwrap();
}

#[tokio::test]
async fn test_error_handling() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/addTodo"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Unauthorized"))
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/deleteTodo"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad gateway"))
        .mount(&mock_server)
        .await;

    let client = client(&mock_server);
    let todo = Todo::new("alice", TaskId::from("1"), "x");

    let result = client.add_todo(&todo).await;
    assert!(matches!(result, Err(ClientError::AuthenticationFailed(_))));

    let result = client.delete_todo("alice", &TaskId::from("1")).await;
    assert!(matches!(
        result,
        Err(ClientError::ServerError { status: 502, .. })
    ));
}

#[tokio::test]
async fn test_unreachable_backend_is_a_request_error() {
    let client = AuthenticatedTodoClient::new("http://127.0.0.1:9", "token").unwrap();
    let result = client.fetch_todos("alice").await;
    assert!(matches!(result, Err(ClientError::Request(_))));
}
