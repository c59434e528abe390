pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::auth_user::AuthUser,
    extractors::json::AppJson,
    users::{
        auth_response::AuthResponse,
        connect_request::ConnectRequest,
        connect_response::ConnectResponse,
        login_request::LoginRequest,
        signup_request::SignupRequest,
        update_user_request::UpdateUserRequest,
        user_dto::UserDto,
        user_response::UserResponse,
        users::{connect, get_current_user, get_user, list_users, login, signup, update_user},
    },
};

pub use crate::app_state::AppState;
pub use crate::error::ServerError;
pub use crate::routes::build_router;
