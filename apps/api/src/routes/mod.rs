pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers::handle_analyze;
use crate::chat::handlers::handle_chat;
use crate::export::handlers::handle_export;
use crate::state::AppState;

/// Uploads and JSON bodies above this size are rejected.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/test", get(health::test_handler))
        .route("/analyze", post(handle_analyze))
        .route("/ai-chat", post(handle_chat))
        .route("/export-analysis", post(handle_export))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{header::CONTENT_TYPE, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::config::Config;
    use crate::llm_client::testing::StubBackend;
    use crate::llm_client::ChatBackend;
    use crate::skills::{ExtractorOptions, SkillExtractor};

    const JOB: &str = "Requires: Python, Docker, AWS";
    const RESUME: &str = "I have 5 years of Python and AWS experience building data pipelines.";
    const BOUNDARY: &str = "compass-test-boundary";

    fn app(llm: Option<Arc<dyn ChatBackend>>) -> Router {
        build_router(AppState {
            config: Config::default(),
            extractor: Arc::new(SkillExtractor::new(ExtractorOptions::default())),
            llm,
        })
    }

    fn json_request(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn multipart_request(job: &str, file_name: &str, file: &str) -> Request<Body> {
        let body = format!(
            "--{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"jobDescription\"\r\n\r\n\
             {job}\r\n\
             --{BOUNDARY}\r\n\
             Content-Disposition: form-data; name=\"resume\"; filename=\"{file_name}\"\r\n\
             Content-Type: text/plain\r\n\r\n\
             {file}\r\n\
             --{BOUNDARY}--\r\n"
        );
        Request::builder()
            .method("POST")
            .uri("/analyze")
            .header(CONTENT_TYPE, format!("multipart/form-data; boundary={BOUNDARY}"))
            .body(Body::from(body))
            .unwrap()
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_health() {
        let request = Request::builder().uri("/health").body(Body::empty()).unwrap();
        let (status, body) = send(app(None), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn test_endpoint_listing() {
        let request = Request::builder().uri("/test").body(Body::empty()).unwrap();
        let (status, body) = send(app(None), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["endpoints"]["aiChat"], "POST /ai-chat");
    }

    #[tokio::test]
    async fn test_analyze_json_without_llm() {
        let request = json_request("/analyze", json!({"jobDescription": JOB, "resumeText": RESUME}));
        let (status, body) = send(app(None), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 6.7);
        assert_eq!(body["matchLevel"], "Good Fit");
        assert_eq!(body["skills"]["missing"][0]["name"], "Docker");
        assert_eq!(body["metadata"]["modelUsed"], "fallback_keyword_analysis");
        assert!(body["summary"]
            .as_str()
            .unwrap()
            .starts_with("Basic analysis completed."));
    }

    #[tokio::test]
    async fn test_analyze_accepts_job_desc_alias() {
        let request = json_request("/analyze", json!({"jobDesc": JOB, "resumeText": RESUME}));
        let (status, _) = send(app(None), request).await;
        assert_eq!(status, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_analyze_rejects_short_inputs() {
        let request = json_request("/analyze", json!({"jobDescription": "Rust", "resumeText": RESUME}));
        let (status, body) = send(app(None), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "validation_error");

        let request = json_request("/analyze", json!({"jobDescription": JOB, "resumeText": "Python"}));
        let (status, body) = send(app(None), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "validation_error");
    }

    #[tokio::test]
    async fn test_analyze_multipart_text_file() {
        let (status, body) = send(app(None), multipart_request(JOB, "resume.txt", RESUME)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["skills"]["present"].as_array().unwrap().len(), 2);
        assert_eq!(body["metadata"]["resumeLength"], RESUME.chars().count());
    }

    #[tokio::test]
    async fn test_analyze_multipart_short_file_is_extraction_error() {
        let (status, body) =
            send(app(None), multipart_request(JOB, "resume.txt", "Python and AWS only")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "extraction_error");
        assert!(body["error"]
            .as_str()
            .unwrap()
            .ends_with("Try pasting text instead."));
    }

    #[tokio::test]
    async fn test_analyze_with_llm_narrative() {
        let reply = json!({
            "score": 9,
            "skills": {"present": [], "missing": []},
            "summary": "Strong data engineering background; Docker is the main gap."
        })
        .to_string();
        let llm: Arc<dyn ChatBackend> = Arc::new(StubBackend::text(reply));

        let request = json_request("/analyze", json!({"jobDescription": JOB, "resumeText": RESUME}));
        let (status, body) = send(app(Some(llm)), request).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 6.7);
        assert_eq!(body["metadata"]["modelUsed"], "stub-model");
        assert_eq!(
            body["summary"],
            "Strong data engineering background; Docker is the main gap."
        );
    }

    #[tokio::test]
    async fn test_chat_routes() {
        let (status, body) = send(app(None), json_request("/ai-chat", json!({"userMessage": ""}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["source"], "validation");
        assert_eq!(body["success"], false);

        let (status, body) = send(app(None), json_request("/ai-chat", json!({"userMessage": "hello"}))).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "greeting-response");

        let llm: Arc<dyn ChatBackend> =
            Arc::new(StubBackend::text("Focus on containers first, then cloud deployment."));
        let (status, body) = send(
            app(Some(llm)),
            json_request("/ai-chat", json!({"userMessage": "What should I do next?"})),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["source"], "llm");
        assert_eq!(body["response"], "Focus on containers first, then cloud deployment.");
    }

    #[tokio::test]
    async fn test_export_requires_analysis() {
        let (status, body) = send(app(None), json_request("/export-analysis", json!({"format": "txt"}))).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["type"], "validation_error");
        assert_eq!(body["error"], "No analysis data provided");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
        let response = app(None).oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
