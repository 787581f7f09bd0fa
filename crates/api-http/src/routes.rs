//! API route definitions

use axum::{
    http::{header, HeaderValue, Method},
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    error::ApiError,
    handlers::{job_posts, probes},
    state::AppState,
};

/// CORS policy admitting exactly one browser origin
pub fn cors_layer(origin: &str) -> Result<CorsLayer, ApiError> {
    let origin = HeaderValue::from_str(origin)
        .map_err(|_| ApiError::InvalidOrigin(origin.to_string()))?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]))
}

/// Job post routes plus probes, with CORS and request tracing
pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    Router::new()
        // Registry
        .route("/jobPosts", get(job_posts::list))
        .route("/JobPost/:id", get(job_posts::get))
        .route("/JobPost", post(job_posts::create).put(job_posts::update))
        .route("/jobPost/:id", delete(job_posts::delete))
        // Probes
        .route("/livez", get(probes::livez))
        .route("/healthz", get(probes::healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, http::StatusCode};
    use tower::ServiceExt;

    fn ping_router(origin: &str) -> Router {
        Router::new()
            .route("/ping", get(|| async { "pong" }))
            .layer(cors_layer(origin).unwrap())
    }

    #[test]
    fn test_invalid_origin_rejected() {
        let err = cors_layer("http://bad\norigin").unwrap_err();
        assert!(matches!(err, ApiError::InvalidOrigin(_)));
    }

    #[tokio::test]
    async fn test_allowed_origin_echoed() {
        let response = ping_router("http://localhost:3000")
            .oneshot(
                Request::builder()
                    .uri("/ping")
                    .header(header::ORIGIN, "http://localhost:3000")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "http://localhost:3000"
        );
    }

    #[tokio::test]
    async fn test_other_origin_not_echoed() {
        let response = ping_router("http://localhost:3000")
            .oneshot(
                Request::builder()
                    .uri("/ping")
                    .header(header::ORIGIN, "http://evil.example")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert!(response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .is_none());
    }
}
