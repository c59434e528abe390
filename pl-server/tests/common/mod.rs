#![allow(dead_code)]

//! Test infrastructure for pl-server API tests

use pl_auth::{PasswordService, TokenService};
use pl_server::{AppState, build_router};

use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode, header},
    response::Response,
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

/// Signing secret shared by the test state and hand-crafted tokens
pub const TEST_JWT_SECRET: &[u8] = b"test-secret-0123456789-0123456789-ab";

pub const TEST_TOKEN_TTL_SECS: u64 = 3600;

/// Create AppState for testing backed by in-memory SQLite
pub async fn create_test_app_state() -> AppState {
    let pool = pl_db::connect_in_memory()
        .await
        .expect("Failed to create test database");

    AppState {
        pool,
        tokens: Arc::new(TokenService::with_hs256(TEST_JWT_SECRET, TEST_TOKEN_TTL_SECS)),
        passwords: Arc::new(PasswordService::new()),
    }
}

/// Collect a response body and parse it as JSON
pub async fn read_json(response: Response) -> Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap_or_else(|e| {
        panic!(
            "Response body was not JSON: {} ({:?})",
            e,
            String::from_utf8_lossy(&body)
        )
    })
}

/// Build a JSON request with an optional bearer token
pub fn json_request(method: &str, uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::from(body.to_string())).unwrap()
}

/// Build a bodyless GET request with an optional bearer token
pub fn get_request(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(uri);

    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    builder.body(Body::empty()).unwrap()
}

/// Register a user through the API; returns (token, user body)
pub async fn signup_user(state: &AppState, email: &str, first_name: &str) -> (String, Value) {
    let body = json!({
        "email": email,
        "password": "hunter42",
        "firstName": first_name,
        "lastName": "Tester",
    });

    let request = json_request("POST", "/api/users/signup", None, &body);
    let response = build_router(state.clone()).oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = read_json(response).await;
    let token = json["token"]
        .as_str()
        .expect("token in signup response")
        .to_string();

    (token, json["user"].clone())
}

/// Hand-craft a token with chosen claims, bypassing TokenService.
/// Lets tests manufacture expired or otherwise odd tokens.
pub fn create_raw_token(sub: &str, email: &str, iat: i64, exp: i64) -> String {
    #[derive(serde::Serialize)]
    struct RawClaims<'a> {
        sub: &'a str,
        email: &'a str,
        exp: i64,
        iat: i64,
    }

    jsonwebtoken::encode(
        &jsonwebtoken::Header::new(jsonwebtoken::Algorithm::HS256),
        &RawClaims {
            sub,
            email,
            exp,
            iat,
        },
        &jsonwebtoken::EncodingKey::from_secret(TEST_JWT_SECRET),
    )
    .expect("Failed to encode test token")
}
