//! Integration tests for health and readiness probes
mod common;

use crate::common::{create_test_app_state, get_request, read_json};

use axum::http::StatusCode;
use http_body_util::BodyExt;
use tower::ServiceExt;

use pl_server::build_router;

#[tokio::test]
async fn test_health_reports_components() {
    let state = create_test_app_state().await;

    let response = build_router(state.clone())
        .oneshot(get_request("/health", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let json = read_json(response).await;
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["components"]["database"], "operational");
    assert!(json["version"].as_str().is_some());
}

#[tokio::test]
async fn test_liveness_and_readiness() {
    let state = create_test_app_state().await;

    let response = build_router(state.clone())
        .oneshot(get_request("/live", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"OK");

    let response = build_router(state.clone())
        .oneshot(get_request("/ready", None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&body[..], b"Ready");
}
