//! HTTP binding of the agent core, powered by axum.
//!
//! Serves:
//! - `GET  /`          capability card
//! - `POST /send_task` task submission

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::{
    protocol::{
        agent::AgentCard,
        error::A2AError,
        task::{TaskRequest, TaskResponse},
    },
    server::core::AgentCore,
};

/// Build the axum router for one agent.
pub fn build_router(core: AgentCore) -> Router {
    Router::new()
        .route("/", get(get_agent_card))
        .route("/send_task", post(send_task))
        .layer(TraceLayer::new_for_http())
        .with_state(core)
}

/// GET / returns the capability card.
async fn get_agent_card(State(core): State<AgentCore>) -> Json<AgentCard> {
    Json(core.card().clone())
}

/// POST /send_task runs one task to completion.
async fn send_task(
    State(core): State<AgentCore>,
    payload: Result<Json<TaskRequest>, JsonRejection>,
) -> Result<Json<TaskResponse>, A2AError> {
    let Json(request) = payload.map_err(|rejection| A2AError::Validation(rejection.body_text()))?;
    let response = core.submit_task(request).await?;
    Ok(Json(response))
}

impl A2AError {
    /// HTTP status this error is reported with
    pub fn status_code(&self) -> StatusCode {
        match self {
            A2AError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for A2AError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        (status, Json(json!({ "detail": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use axum::{body::Body, http::Request};
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::{
        protocol::{
            error::HandlerError,
            message::Message,
            task::Artifact,
            AgentSkill,
        },
        server::handler::TaskHandler,
    };

    use super::*;

    struct Echo;

    #[async_trait]
    impl TaskHandler for Echo {
        async fn handle(
            &self,
            message: &Message,
            _artifacts: &[Artifact],
            _history: &[Message],
        ) -> Result<String, HandlerError> {
            match message.first_text() {
                Some("fail") => Err(HandlerError::other("handler blew up")),
                Some(text) => Ok(text.to_string()),
                None => Err(HandlerError::invalid_input("no text part")),
            }
        }
    }

    fn router() -> Router {
        let card = AgentCard::new("Echo Agent", "Echoes text", "http://localhost:10003/")
            .with_skill(AgentSkill::new("echo", "Echo", "Repeats the input"));
        build_router(AgentCore::new(card, Echo))
    }

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        serde_json::from_slice(&bytes).expect("json body")
    }

    fn post_task(body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri("/send_task")
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .expect("request")
    }

    #[tokio::test]
    async fn test_agent_card_endpoint() {
        let req = Request::builder().uri("/").body(Body::empty()).expect("request");

        let resp = router().oneshot(req).await.expect("response");
        assert_eq!(resp.status(), StatusCode::OK);

        let card = body_json(resp).await;
        assert_eq!(card["name"], "Echo Agent");
        assert_eq!(card["url"], "http://localhost:10003/");
        assert_eq!(card["skills"][0]["id"], "echo");
        assert_eq!(card["capabilities"]["streaming"], false);
    }

    #[tokio::test]
    async fn test_send_task_endpoint() {
        let req = post_task(serde_json::json!({
            "id": "task-1",
            "message": {"role": "user", "parts": [{"type": "text", "text": "ping"}]},
            "history": [{"role": "agent", "parts": [{"type": "text", "text": "earlier"}]}]
        }));

        let resp = router().oneshot(req).await.expect("response");
        assert_eq!(resp.status(), StatusCode::OK);

        let task = body_json(resp).await;
        assert_eq!(task["id"], "task-1");
        assert!(task["sessionId"].as_str().is_some_and(|s| !s.is_empty()));
        assert_eq!(task["status"]["state"], "completed");
        assert_eq!(task["status"]["message"]["parts"][0]["text"], "ping");
        assert_eq!(task["artifacts"], serde_json::json!([]));
        assert_eq!(task["history"][0]["parts"][0]["text"], "earlier");
        assert_eq!(task["history"][1]["parts"][0]["text"], "ping");
    }

    #[tokio::test]
    async fn test_handler_failure_is_500_with_detail() {
        let req = post_task(serde_json::json!({
            "message": {"role": "user", "parts": [{"type": "text", "text": "fail"}]}
        }));

        let resp = router().oneshot(req).await.expect("response");
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(resp).await["detail"], "handler blew up");
    }

    #[tokio::test]
    async fn test_missing_message_is_422() {
        let req = post_task(serde_json::json!({"id": "task-1"}));

        let resp = router().oneshot(req).await.expect("response");
        assert_eq!(resp.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let detail = body_json(resp).await["detail"].as_str().unwrap().to_string();
        assert!(detail.starts_with("Validation error:"));
    }
}
