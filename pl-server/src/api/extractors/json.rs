use crate::ApiError;

use axum::extract::FromRequest;

/// Strict JSON body extractor.
///
/// Wraps `axum::Json` so that every malformed, missing-field, or
/// unknown-field body comes back as a 400 with the uniform error body
/// instead of axum's plain-text default rejection.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct AppJson<T>(pub T);
