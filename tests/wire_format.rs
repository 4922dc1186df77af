//! Wire format tests
//!
//! These tests pin the JSON shapes exchanged between agents.

use serde_json::json;
use tower_a2a_agent::protocol::{
    AgentCard, AgentSkill, Artifact, Message, MessagePart, TaskRequest, TaskResponse,
    TaskState, TaskStatus,
};

#[test]
fn test_role_serialization() {
    let json = serde_json::to_value(Message::user("Hello")).unwrap();
    assert_eq!(json["role"], "user");

    let json = serde_json::to_value(Message::agent("Hi there")).unwrap();
    assert_eq!(json["role"], "agent");
}

#[test]
fn test_text_part_is_type_tagged() {
    let json = serde_json::to_value(MessagePart::text("Hello, world!")).unwrap();

    assert_eq!(json, json!({"type": "text", "text": "Hello, world!"}));
}

#[test]
fn test_file_part_nested_content() {
    let json = serde_json::to_value(MessagePart::file("doc.pdf", "https://example.com/doc.pdf"))
        .unwrap();

    assert_eq!(json["type"], "file");
    assert_eq!(json["file"]["name"], "doc.pdf");
    assert_eq!(json["file"]["uri"], "https://example.com/doc.pdf");
    assert!(json["file"].get("mimeType").is_none());
}

#[test]
fn test_unknown_part_type_is_rejected() {
    let result: Result<MessagePart, _> =
        serde_json::from_value(json!({"type": "video", "url": "x"}));

    assert!(result.is_err());
}

#[test]
fn test_delegation_request_shape() {
    let request = TaskRequest::new(Message::user(r#"{"noi": 1}"#));
    let json = serde_json::to_value(&request).unwrap();

    assert_eq!(
        json,
        json!({
            "message": {"role": "user", "parts": [{"type": "text", "text": "{\"noi\": 1}"}]},
            "artifacts": [],
            "history": []
        })
    );
}

#[test]
fn test_minimal_request_parses() {
    let request: TaskRequest = serde_json::from_value(json!({
        "message": {"role": "user", "parts": [{"type": "text", "text": "hi"}]}
    }))
    .unwrap();

    assert!(request.id.is_none());
    assert!(request.session_id.is_none());
    assert!(request.artifacts.is_empty());
    assert!(request.history.is_empty());
}

#[test]
fn test_message_extensions_survive() {
    let message: Message = serde_json::from_value(json!({
        "role": "user",
        "parts": [{"type": "text", "text": "hi"}],
        "messageId": "m-1",
        "metadata": {"trace": 7}
    }))
    .unwrap();

    let json = serde_json::to_value(&message).unwrap();
    assert_eq!(json["messageId"], "m-1");
    assert_eq!(json["metadata"]["trace"], 7);
}

#[test]
fn test_completed_response_shape() {
    let response = TaskResponse {
        id: "task-1".into(),
        session_id: "session-1".into(),
        status: TaskStatus::completed("done", "2024-01-01T00:00:00+00:00"),
        artifacts: Vec::<Artifact>::new(),
        history: vec![Message::user("go")],
    };

    let json = serde_json::to_value(&response).unwrap();

    assert_eq!(json["id"], "task-1");
    assert_eq!(json["sessionId"], "session-1");
    assert_eq!(json["status"]["state"], "completed");
    assert_eq!(json["status"]["message"]["role"], "agent");
    assert_eq!(json["status"]["message"]["parts"][0]["text"], "done");
    assert_eq!(json["status"]["timestamp"], "2024-01-01T00:00:00+00:00");
    assert_eq!(json["artifacts"], json!([]));
    assert_eq!(json["history"][0]["role"], "user");
}

#[test]
fn test_task_states() {
    let state: TaskState = serde_json::from_value(json!("input-required")).unwrap();
    assert_eq!(state, TaskState::InputRequired);
    assert!(!state.is_terminal());
    assert!(TaskState::Completed.is_terminal());
}

#[test]
fn test_capability_card_shape() {
    let card = AgentCard::new(
        "Visualization Agent",
        "Generates HTML visualizations from structured data",
        "http://localhost:10002/",
    )
    .with_skill(
        AgentSkill::new(
            "html-visualization",
            "HTML Visualizer",
            "Generates HTML table visualizations from JSON data",
        )
        .with_tags(["visualization", "html", "table"]),
    );

    let json = serde_json::to_value(&card).unwrap();

    assert_eq!(json["version"], "1.0.0");
    assert_eq!(
        json["capabilities"],
        json!({"streaming": false, "pushNotifications": false, "stateTransitionHistory": false})
    );
    assert_eq!(json["defaultInputModes"], json!(["text"]));
    assert_eq!(json["defaultOutputModes"], json!(["text"]));
    assert_eq!(json["skills"][0]["id"], "html-visualization");
    assert_eq!(json["skills"][0]["inputModes"], json!(["text"]));
    assert_eq!(json["skills"][0]["outputModes"], json!(["text"]));
}
