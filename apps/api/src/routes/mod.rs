pub mod health;

use axum::{
    http::Uri,
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::errors::AppError;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {uri}"))
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::health_handler))
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/analise", post(handlers::handle_analyze))
        .route("/api/v1/analysis", post(handlers::handle_analyze))
        .fallback(not_found)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::{AnalysisProvider, ProviderError};
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::{json, Value};
    use std::sync::Arc;
    use tower::ServiceExt;

    struct FixedReply(&'static str);

    #[async_trait]
    impl AnalysisProvider for FixedReply {
        async fn generate(&self, _prompt: &str) -> Result<String, ProviderError> {
            Ok(self.0.to_string())
        }
    }

    fn app(provider: Option<Arc<dyn AnalysisProvider>>) -> Router {
        build_router(AppState { provider })
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    fn post_json(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_health_on_root_and_health() {
        for uri in ["/", "/health"] {
            let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
            let (status, body) = send(app(None), request).await;
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body["status"], "Code-Mentor AI API está no ar!");
        }
    }

    #[tokio::test]
    async fn test_analyse_without_provider_is_still_ok() {
        let request = post_json("/analise", r#"{"code": "x = 1"}"#);
        let (status, body) = send(app(None), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            body,
            json!({
                "score": 0.0,
                "suggestions": ["Modelo de IA não configurado."],
                "refactoredCode": "x = 1"
            })
        );
    }

    #[tokio::test]
    async fn test_analyse_normalizes_provider_reply() {
        let provider: Arc<dyn AnalysisProvider> = Arc::new(FixedReply(
            "Claro!\n```json\n{\"pontuacao\": \"7,5\", \"sugestoes\": [\"a\", \"b\"], \"codigo_refatorado\": \"y = 2\"}\n```",
        ));
        let request = post_json(
            "/api/v1/analysis",
            r#"{"codigo": "y=2", "linguagem": "python"}"#,
        );
        let (status, body) = send(app(Some(provider)), request).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["score"], 7.5);
        assert_eq!(body["suggestions"], json!(["a", "b"]));
        assert_eq!(body["refactoredCode"], "y = 2");
    }

    #[tokio::test]
    async fn test_unreadable_body_is_rejected() {
        let request = post_json("/analise", r#"{"language": "python"}"#);
        let (status, body) = send(app(None), request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let request = Request::builder().uri("/nope").body(Body::empty()).unwrap();
        let (status, body) = send(app(None), request).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"]["code"], "NOT_FOUND");
    }
}
