//! Delegation client tests against HTTP stand-ins for the remote agent

use std::time::Duration;

use axum::{routing::post, Json, Router};
use mockito::Matcher;
use serde_json::{json, Value};
use tokio::net::TcpListener;
use tower_a2a_agent::{client::DelegationClient, protocol::error::DelegationError};

fn envelope(parts: Value) -> String {
    json!({
        "id": "task-1",
        "sessionId": "session-1",
        "status": {
            "state": "completed",
            "message": {"role": "agent", "parts": parts},
            "timestamp": "2024-01-01T00:00:00"
        },
        "artifacts": [],
        "history": []
    })
    .to_string()
}

#[tokio::test]
async fn test_delegate_returns_reply_text() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/send_task")
        .match_header("content-type", "application/json")
        .match_body(Matcher::PartialJson(json!({
            "message": {"role": "user", "parts": [{"type": "text", "text": "hello"}]}
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(json!([{"type": "text", "text": "X"}])))
        .create_async()
        .await;

    let reply = DelegationClient::new()
        .delegate(&format!("{}/", server.url()), "hello")
        .await
        .unwrap();

    assert_eq!(reply, "X");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delegate_url_without_trailing_slash() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/send_task")
        .with_status(200)
        .with_body(envelope(json!([{"type": "text", "text": "ok"}])))
        .create_async()
        .await;

    let reply = DelegationClient::new()
        .delegate(&server.url(), "hello")
        .await
        .unwrap();

    assert_eq!(reply, "ok");
    mock.assert_async().await;
}

#[tokio::test]
async fn test_delegate_non_success_status() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/send_task")
        .with_status(500)
        .with_body("boom")
        .create_async()
        .await;

    let err = DelegationClient::new()
        .delegate(&server.url(), "hello")
        .await
        .unwrap_err();

    match &err {
        DelegationError::Status { status, body } => {
            assert_eq!(*status, 500);
            assert_eq!(body, "boom");
        }
        other => panic!("Expected status error, got {other:?}"),
    }
    let message = err.to_string();
    assert!(message.contains("500"));
    assert!(message.contains("boom"));
}

#[tokio::test]
async fn test_delegate_empty_parts_is_malformed() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/send_task")
        .with_status(200)
        .with_body(envelope(json!([])))
        .create_async()
        .await;

    let err = DelegationClient::new()
        .delegate(&server.url(), "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, DelegationError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_delegate_non_text_first_part_is_malformed() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/send_task")
        .with_status(200)
        .with_body(envelope(json!([
            {"type": "data", "data": {"x": 1}},
            {"type": "text", "text": "late"}
        ])))
        .create_async()
        .await;

    let err = DelegationClient::new()
        .delegate(&server.url(), "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, DelegationError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_delegate_missing_status_is_malformed() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/send_task")
        .with_status(200)
        .with_body(json!({"id": "task-1"}).to_string())
        .create_async()
        .await;

    let err = DelegationClient::new()
        .delegate(&server.url(), "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, DelegationError::MalformedResponse(_)));
}

#[tokio::test]
async fn test_delegate_connection_refused_is_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = DelegationClient::new()
        .delegate(&format!("http://{addr}/"), "hello")
        .await
        .unwrap_err();

    assert!(matches!(err, DelegationError::Transport(_)));
}

#[tokio::test]
async fn test_delegate_times_out() {
    let slow = Router::new().route(
        "/send_task",
        post(|| async {
            tokio::time::sleep(Duration::from_secs(10)).await;
            Json(json!({}))
        }),
    );
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, slow).await.unwrap();
    });

    let timeout = Duration::from_millis(200);
    let started = std::time::Instant::now();
    let err = DelegationClient::new()
        .with_timeout(timeout)
        .delegate(&format!("http://{addr}/"), "hello")
        .await
        .unwrap_err();

    assert!(err.is_timeout());
    assert!(matches!(err, DelegationError::Timeout(t) if t == timeout));
    assert!(started.elapsed() < Duration::from_secs(5));
}
