use pl_auth::{PasswordService, TokenService};

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared state handed to every request handler.
///
/// Everything here is established once at startup; handlers treat the pool
/// and the signing material as read-only.
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub tokens: Arc<TokenService>,
    pub passwords: Arc<PasswordService>,
}
