//! Integration tests for homework-api crate.
//!
//! These tests run the client against a local mock of the homework endpoint
//! and push its answers through validation and interpretation.

use homework_api::{check_response, parse_status, HomeworkSource, PracticumClient};
use homework_common::test_utils::{api_fixtures, init_test_logging};
use homework_common::HomeworkError;
use homework_config::PracticumConfig;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const STATUSES_PATH: &str = "/api/user_api/homework_statuses/";

fn test_client(server: &MockServer) -> PracticumClient {
    let config = PracticumConfig {
        token: "test-token".to_string(),
        endpoint: format!("{}{}", server.uri(), STATUSES_PATH),
    };
    PracticumClient::new(&config).unwrap()
}

#[tokio::test]
async fn test_request_carries_token_and_window() {
    init_test_logging();
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .and(header("Authorization", "OAuth test-token"))
        .and(query_param("from_date", "1700000000"))
        .respond_with(ResponseTemplate::new(200).set_body_json(api_fixtures::empty_response()))
        .expect(1)
        .mount(&server)
        .await;

    let answer = test_client(&server).get_api_answer(1_700_000_000).await.unwrap();
    let batch = check_response(answer).unwrap();
    assert!(batch.is_empty());
}

#[tokio::test]
async fn test_answer_flows_into_status_message() {
    init_test_logging();
    let server = MockServer::start().await;

    let body = api_fixtures::response_with(
        vec![
            api_fixtures::homework("user__hw_api.zip", "approved"),
            api_fixtures::homework("user__hw_bot.zip", "rejected"),
        ],
        1_705_330_000,
    );

    Mock::given(method("GET"))
        .and(path(STATUSES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(&server)
        .await;

    let answer = test_client(&server).get_api_answer(0).await.unwrap();
    let batch = check_response(answer).unwrap();
    assert_eq!(batch.current_date, Some(1_705_330_000));

    let message = parse_status(batch.latest().unwrap().as_ref()).unwrap();
    assert_eq!(
        message,
        "Изменился статус проверки работы \"user__hw_api.zip\". Работа проверена: ревьюеру всё понравилось. Ура!"
    );
}

#[tokio::test]
async fn test_non_ok_status_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "code": "not_authenticated",
            "message": "Учетные данные не были предоставлены."
        })))
        .mount(&server)
        .await;

    let err = test_client(&server).get_api_answer(0).await.unwrap_err();
    assert!(matches!(err, HomeworkError::UnexpectedStatus { status: 401 }));
}

#[tokio::test]
async fn test_server_error_is_unexpected_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = test_client(&server).get_api_answer(0).await.unwrap_err();
    assert!(matches!(err, HomeworkError::UnexpectedStatus { status: 503 }));
}

#[tokio::test]
async fn test_non_json_body_is_decode_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server).get_api_answer(0).await.unwrap_err();
    assert!(matches!(err, HomeworkError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_endpoint_is_connection_error() {
    // Bind and release a port so nothing is listening on it.
    let port = std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port();
    let client = PracticumClient::new(&PracticumConfig {
        token: "test-token".to_string(),
        endpoint: format!("http://127.0.0.1:{port}{STATUSES_PATH}"),
    })
    .unwrap();

    let err = client.get_api_answer(0).await.unwrap_err();
    assert!(matches!(err, HomeworkError::Connection { .. }));
}

#[tokio::test]
async fn test_unexpected_shape_is_rejected_after_fetch() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "homeworks": "none"
        })))
        .mount(&server)
        .await;

    let answer = test_client(&server).get_api_answer(0).await.unwrap();
    let err = check_response(answer).unwrap_err();
    assert!(matches!(err, HomeworkError::Type { .. }));
}

#[tokio::test]
async fn test_junk_after_latest_record_is_tolerated() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "homeworks": [
                { "homework_name": "hw", "status": "approved" },
                "junk"
            ]
        })))
        .mount(&server)
        .await;

    let answer = test_client(&server).get_api_answer(0).await.unwrap();
    let batch = check_response(answer).unwrap();
    let message = parse_status(batch.latest().unwrap().as_ref()).unwrap();
    assert_eq!(
        message,
        "Изменился статус проверки работы \"hw\". Работа проверена: ревьюеру всё понравилось. Ура!"
    );
}
