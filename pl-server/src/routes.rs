use crate::api::users::users::{
    connect, get_current_user, get_user, list_users, login, signup, update_user,
};
use crate::{AppState, health};

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};

/// Build the application router with all endpoints
///
/// Static segments win over `{id}`, so `/api/users/me` and
/// `/api/users/connect` never collide with the single-user routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Authentication endpoints
        .route("/api/users/signup", post(signup))
        .route("/api/users/login", post(login))
        .route("/api/users/me", get(get_current_user))
        .route("/api/users/connect", post(connect))
        // Public directory endpoints
        .route("/api/users", get(list_users))
        .route("/api/users/{id}", get(get_user).put(update_user))
        // Health check endpoints
        .route("/health", get(health::health))
        .route("/live", get(health::liveness))
        .route("/ready", get(health::readiness))
        // Add shared state
        .with_state(state)
        // CORS middleware (allow all origins; the API is public)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}
