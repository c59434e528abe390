//! Axum extractor for REST API authentication

use crate::{ApiError, AppState};

use std::future::Future;
use std::panic::Location;

use axum::http::header::AUTHORIZATION;
use axum::{extract::FromRequestParts, http::request::Parts};
use error_location::ErrorLocation;
use uuid::Uuid;

/// Extracts the authenticated user id from the `Authorization` header.
///
/// Verifies the bearer token against the process-wide signing secret.
/// Missing header, wrong scheme, bad signature, expiry, and malformed
/// claims all collapse into the same 401 rejection.
pub struct AuthUser(pub Uuid);

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let header = parts
                .headers
                .get(AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .ok_or_else(unauthorized)?;

            let token = header.strip_prefix("Bearer ").ok_or_else(unauthorized)?;

            let claims = state.tokens.verify(token)?;

            let user_id = Uuid::parse_str(&claims.sub).map_err(|e| {
                log::warn!("Token carried a malformed subject: {}", e);
                unauthorized()
            })?;

            Ok(AuthUser(user_id))
        }
    }
}

#[track_caller]
fn unauthorized() -> ApiError {
    ApiError::Unauthorized {
        location: ErrorLocation::from(Location::caller()),
    }
}
