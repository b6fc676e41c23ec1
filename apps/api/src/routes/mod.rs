pub mod health;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};

use crate::dispatch::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(ui::index_handler))
        .route("/health", get(health::health_handler))
        .route("/api/chat", post(handlers::handle_chat))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::dispatch::templates::{TemplateKind, PROCESSING_ERROR};

    async fn post_chat(body: impl Into<Body>, content_type: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().method("POST").uri("/api/chat");
        if let Some(ct) = content_type {
            builder = builder.header(header::CONTENT_TYPE, ct);
        }
        let response = build_router(AppState::default())
            .oneshot(builder.body(body.into()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json"
        );
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn chat_body(messages: Value) -> String {
        json!({ "messages": messages }).to_string()
    }

    #[tokio::test]
    async fn test_chat_returns_assistant_reply() {
        let body = chat_body(json!([
            {"id": "1", "role": "user", "content": "What makes a resume ATS-friendly?"}
        ]));
        let (status, reply) = post_chat(body, Some("application/json")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply["role"], "assistant");
        assert!(reply["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert!(reply["content"]
            .as_str()
            .unwrap()
            .starts_with("Making Your Resume ATS-Friendly:"));
    }

    #[tokio::test]
    async fn test_chat_uses_only_last_message() {
        let body = chat_body(json!([
            {"id": "1", "role": "user", "content": "How long should my resume be?"},
            {"id": "2", "role": "assistant", "content": "Resume Length Guidelines: ..."},
            {"id": "3", "role": "user", "content": "hello"}
        ]));
        let (status, reply) = post_chat(body, Some("application/json")).await;

        assert_eq!(status, StatusCode::OK);
        assert!(reply["content"]
            .as_str()
            .unwrap()
            .starts_with("Hello! I'm Nitesh's Resume Validation Assistant."));
    }

    #[tokio::test]
    async fn test_chat_empty_history_returns_greeting() {
        let (status, reply) = post_chat(chat_body(json!([])), Some("application/json")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(reply["content"].as_str().unwrap().starts_with("Hello!"));
    }

    #[tokio::test]
    async fn test_chat_parses_body_without_content_type() {
        let body = chat_body(json!([
            {"id": "1", "role": "user", "content": "Please analyze and validate my resume:\n\nJane Doe"}
        ]));
        let (status, reply) = post_chat(body, None).await;

        assert_eq!(status, StatusCode::OK);
        assert!(reply["content"]
            .as_str()
            .unwrap()
            .starts_with("Resume Analysis Complete:"));
    }

    #[tokio::test]
    async fn test_chat_tolerates_unknown_roles_in_history() {
        let body = chat_body(json!([
            {"id": "0", "role": "system", "content": "x"},
            {"id": "1", "role": "user", "content": "ats"}
        ]));
        let (status, reply) = post_chat(body, Some("application/json")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply["content"], TemplateKind::AtsFriendly.text());
    }

    #[tokio::test]
    async fn test_chat_tolerates_numeric_ids() {
        let body = chat_body(json!([{"id": 1, "role": "user", "content": "ats"}]));
        let (status, reply) = post_chat(body, Some("application/json")).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(reply["content"], TemplateKind::AtsFriendly.text());
    }

    #[tokio::test]
    async fn test_last_entry_without_content_returns_500() {
        let body = chat_body(json!([
            {"id": "1", "role": "user", "content": "ats"},
            {"id": "2", "role": "user"}
        ]));
        let (status, body) = post_chat(body, Some("application/json")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], PROCESSING_ERROR);
    }

    #[tokio::test]
    async fn test_malformed_json_returns_500() {
        let (status, body) = post_chat("{\"messages\": [", Some("application/json")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": PROCESSING_ERROR }));
    }

    #[tokio::test]
    async fn test_missing_messages_field_returns_500() {
        let (status, body) = post_chat("{\"history\": []}", Some("application/json")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["error"], PROCESSING_ERROR);
    }

    #[tokio::test]
    async fn test_empty_body_returns_500() {
        let (status, _) = post_chat(Body::empty(), Some("application/json")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_health_reports_ok() {
        let response = build_router(AppState::default())
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert_eq!(body["dispatch_rules"], 6);
    }

    #[tokio::test]
    async fn test_index_serves_chat_page() {
        let response = build_router(AppState::default())
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let html = String::from_utf8(bytes.to_vec()).unwrap();
        assert!(html.contains("/api/chat"));
    }
}
