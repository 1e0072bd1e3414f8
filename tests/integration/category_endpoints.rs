//! Integration tests for the category and count endpoints
//!
//! These endpoints carry no response-code protocol: they decode or fail as
//! network/decode errors, and they never pass through the rate gate.

use mockito::Matcher;
use serde_json::json;
use std::time::{Duration, Instant};
use trivia_question_client::client::{ClientError, TriviaClient};
use trivia_question_client::QuestionRequest;

fn test_client(server: &mockito::ServerGuard) -> TriviaClient {
    TriviaClient::new()
        .with_base_url(server.url())
        .with_min_interval(Duration::from_millis(1))
}

#[tokio::test]
async fn test_categories_decode_in_server_order() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api_category.php")
        .with_status(200)
        .with_body(
            json!({
                "trivia_categories": [
                    {"id": 9, "name": "General Knowledge"},
                    {"id": 10, "name": "Entertainment: Books"},
                    {"id": 17, "name": "Science &amp; Nature"}
                ]
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server);
    let categories = client.categories().await.unwrap();

    assert_eq!(categories.len(), 3);
    assert_eq!(categories[0].id, 9);
    assert_eq!(categories[1].name, "Entertainment: Books");
    assert_eq!(categories[2].name, "Science &amp; Nature");
    assert!(categories.iter().all(|c| c.validate().is_ok()));

    mock.assert_async().await;
}

#[tokio::test]
async fn test_category_question_count() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api_count.php")
        .match_query(Matcher::UrlEncoded("category".into(), "9".into()))
        .with_status(200)
        .with_body(
            json!({
                "category_id": 9,
                "category_question_count": {
                    "total_question_count": 298,
                    "total_easy_question_count": 116,
                    "total_medium_question_count": 123,
                    "total_hard_question_count": 59
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server);
    let counts = client.category_question_count(9).await.unwrap();

    assert_eq!(counts.category_id, 9);
    assert_eq!(counts.category_question_count.total_question_count, 298);
    assert_eq!(counts.category_question_count.total_hard_question_count, 59);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_category_count_rejects_the_any_category_sentinel() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api_count.php")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let client = test_client(&server);
    let result = client.category_question_count(0).await;

    assert!(matches!(result, Err(ClientError::InvalidRequest(_))));
    mock.assert_async().await;
}

#[tokio::test]
async fn test_global_question_count() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/api_count_global.php")
        .with_status(200)
        .with_body(
            json!({
                "overall": {
                    "total_num_of_questions": 6238,
                    "total_num_of_pending_questions": 891,
                    "total_num_of_verified_questions": 4297,
                    "total_num_of_rejected_questions": 1050
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = test_client(&server);
    let overall = client.global_question_count().await.unwrap();

    assert_eq!(overall.total_num_of_questions, 6238);
    assert_eq!(overall.total_num_of_verified_questions, 4297);

    mock.assert_async().await;
}

#[tokio::test]
async fn test_category_calls_bypass_the_rate_gate() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api.php")
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(
            json!({
                "response_code": 0,
                "results": [{
                    "category": "General Knowledge",
                    "type": "boolean",
                    "difficulty": "easy",
                    "question": "Q",
                    "correct_answer": "True",
                    "incorrect_answers": ["False"]
                }]
            })
            .to_string(),
        )
        .create_async()
        .await;
    server
        .mock("GET", "/api_category.php")
        .with_status(200)
        .with_body(json!({"trivia_categories": []}).to_string())
        .create_async()
        .await;

    let interval = Duration::from_millis(500);
    let client = TriviaClient::new()
        .with_base_url(server.url())
        .with_min_interval(interval);

    client.fetch_questions(&QuestionRequest::new(1)).await.unwrap();
    let fetch_completed = Instant::now();

    client.categories().await.unwrap();
    assert!(fetch_completed.elapsed() < interval);
}

#[tokio::test]
async fn test_non_success_status_maps_to_network_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api_category.php")
        .with_status(500)
        .with_body("internal error")
        .create_async()
        .await;

    let client = test_client(&server);
    let result = client.categories().await;

    assert!(matches!(result, Err(ClientError::NetworkError(_))));
}

#[tokio::test]
async fn test_malformed_body_maps_to_decode_error() {
    let mut server = mockito::Server::new_async().await;
    server
        .mock("GET", "/api_count_global.php")
        .with_status(200)
        .with_body(json!({"unexpected": "shape"}).to_string())
        .create_async()
        .await;

    let client = test_client(&server);
    let result = client.global_question_count().await;

    assert!(matches!(result, Err(ClientError::DecodeError(_))));
}
