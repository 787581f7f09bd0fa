//! Shared fixtures for the end-to-end tests

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, Response};
use axum::Router;
use jobboard_api_http::{build_router, routes::cors_layer, AppState};
use jobboard_core::application::JobBoardService;
use jobboard_infra_memory::InMemoryJobPostRepository;

pub const TEST_ORIGIN: &str = "http://localhost:3000";

/// Router over a freshly seeded registry, plus the repository for inspection
pub fn seeded_app() -> (Router, Arc<InMemoryJobPostRepository>) {
    let repo = Arc::new(InMemoryJobPostRepository::seeded());
    let service = JobBoardService::new(repo.clone());
    let cors = cors_layer(TEST_ORIGIN).expect("static origin is valid");
    (build_router(AppState::new(service), cors), repo)
}

pub fn request(method: Method, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

pub fn json_request(method: Method, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body")
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).expect("JSON body")
}
