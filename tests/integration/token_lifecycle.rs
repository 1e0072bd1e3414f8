//! Integration tests for session token acquisition and reset

use mockito::Matcher;
use serde_json::json;
use std::time::Duration;
use trivia_question_client::client::{ClientError, TriviaClient};

fn test_client(server: &mockito::ServerGuard) -> TriviaClient {
    TriviaClient::new()
        .with_base_url(server.url())
        .with_min_interval(Duration::from_millis(1))
}

#[tokio::test]
async fn test_request_token_stores_and_returns_it() {
    let mut server = mockito::Server::new_async().await;

    let token_mock = server
        .mock("GET", "/api_token.php")
        .match_query(Matcher::UrlEncoded("command".into(), "request".into()))
        .with_status(200)
        .with_body(
            json!({
                "response_code": 0,
                "response_message": "Token Generated Successfully!",
                "token": "TOK123"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server);
    assert!(!client.has_token().await);

    let token = client.request_token().await.unwrap();
    assert_eq!(token, "TOK123");
    assert!(client.has_token().await);
    assert_eq!(client.token().await.as_deref(), Some("TOK123"));

    token_mock.assert_async().await;
}

#[tokio::test]
async fn test_acquire_failure_carries_code_and_message() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/api_token.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({"response_code": 5, "response_message": "slow down"}).to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server);
    let result = client.request_token().await;

    match result {
        Err(ClientError::TokenAcquisitionFailed { code, message }) => {
            assert_eq!(code, 5);
            assert_eq!(message.as_deref(), Some("slow down"));
        }
        other => panic!("Expected TokenAcquisitionFailed, got {other:?}"),
    }
    assert!(!client.has_token().await);
}

#[tokio::test]
async fn test_acquire_success_without_token_field_fails() {
    let mut server = mockito::Server::new_async().await;

    // A success code with no usable token is still a failed acquisition
    server
        .mock("GET", "/api_token.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"response_code": 0}).to_string())
        .create_async()
        .await;

    let client = test_client(&server);
    let result = client.request_token().await;

    assert!(matches!(
        result,
        Err(ClientError::TokenAcquisitionFailed { code: 0, .. })
    ));
    assert!(!client.has_token().await);
}

#[tokio::test]
async fn test_acquire_empty_token_string_is_rejected() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/api_token.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(json!({"response_code": 0, "token": ""}).to_string())
        .create_async()
        .await;

    let client = test_client(&server);
    let result = client.request_token().await;

    // The token is either absent or non-empty, never empty
    assert!(matches!(
        result,
        Err(ClientError::TokenAcquisitionFailed { code: 0, .. })
    ));
    assert!(!client.has_token().await);
}

#[tokio::test]
async fn test_reset_without_token_makes_no_network_call() {
    let mut server = mockito::Server::new_async().await;

    let token_mock = server
        .mock("GET", "/api_token.php")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = test_client(&server);
    let result = client.reset_token().await;

    assert!(matches!(result, Err(ClientError::NoTokenToReset)));
    token_mock.assert_async().await;
}

#[tokio::test]
async fn test_reset_keeps_the_token_value() {
    let mut server = mockito::Server::new_async().await;

    let acquire_mock = server
        .mock("GET", "/api_token.php")
        .match_query(Matcher::UrlEncoded("command".into(), "request".into()))
        .with_status(200)
        .with_body(json!({"response_code": 0, "token": "T1"}).to_string())
        .create_async()
        .await;

    let reset_mock = server
        .mock("GET", "/api_token.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("command".into(), "reset".into()),
            Matcher::UrlEncoded("token".into(), "T1".into()),
        ]))
        .with_status(200)
        .with_body(json!({"response_code": 0}).to_string())
        .create_async()
        .await;

    let client = test_client(&server);
    client.request_token().await.unwrap();
    client.reset_token().await.unwrap();

    // The server cleared its seen-question record; the handle is unchanged
    assert_eq!(client.token().await.as_deref(), Some("T1"));

    acquire_mock.assert_async().await;
    reset_mock.assert_async().await;
}

#[tokio::test]
async fn test_reset_failure_surfaces_code() {
    let mut server = mockito::Server::new_async().await;

    server
        .mock("GET", "/api_token.php")
        .match_query(Matcher::UrlEncoded("command".into(), "request".into()))
        .with_status(200)
        .with_body(json!({"response_code": 0, "token": "T1"}).to_string())
        .create_async()
        .await;

    server
        .mock("GET", "/api_token.php")
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("command".into(), "reset".into()),
            Matcher::UrlEncoded("token".into(), "T1".into()),
        ]))
        .with_status(200)
        .with_body(json!({"response_code": 4}).to_string())
        .create_async()
        .await;

    let client = test_client(&server);
    client.request_token().await.unwrap();

    let result = client.reset_token().await;
    assert!(matches!(
        result,
        Err(ClientError::TokenResetFailed { code: 4, .. })
    ));
}

#[tokio::test]
async fn test_clear_token_drops_locally() {
    let mut server = mockito::Server::new_async().await;

    let token_mock = server
        .mock("GET", "/api_token.php")
        .match_query(Matcher::UrlEncoded("command".into(), "request".into()))
        .with_status(200)
        .with_body(json!({"response_code": 0, "token": "T1"}).to_string())
        .create_async()
        .await;

    let client = test_client(&server);
    client.request_token().await.unwrap();
    assert!(client.has_token().await);

    client.clear_token().await;
    assert!(!client.has_token().await);
    assert_eq!(client.token().await, None);

    // Only the acquire hit the network
    token_mock.assert_async().await;
}
