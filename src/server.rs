//! Router assembly (spec §2.1). Mirrors the teacher's `build_router` +
//! `AppState` shape: a thin state struct, a routes table, and shared
//! middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api;

/// No shared mutable state is needed today; kept as a struct (rather
/// than a bare `Router`) so handlers can grow request-scoped
/// dependencies (e.g. a metrics recorder) without changing signatures.
#[derive(Clone, Default)]
pub struct AppState;

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/api/styles", get(api::list_styles))
        .route(
            "/api/style-transfer-advanced",
            post(api::style_transfer_advanced),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(AppState)
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[tokio::test]
    async fn health_endpoint_reports_ok() {
        let app = build_router();
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/health")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&body[..], b"{\"status\":\"ok\"}");
    }

    #[tokio::test]
    async fn styles_endpoint_lists_all_tags() {
        let app = build_router();
        let response = app
            .oneshot(
                axum::http::Request::builder()
                    .uri("/api/styles")
                    .body(axum::body::Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), axum::http::StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let tags: Vec<String> = serde_json::from_slice(&body).unwrap();
        assert_eq!(tags.len(), crate::models::StyleTag::ALL.len());
    }
}
