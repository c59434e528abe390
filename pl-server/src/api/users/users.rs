//! User REST API handlers
//!
//! The full authentication endpoint set: registration, login, token-scoped
//! reads and updates, the public directory, and connections.

use crate::{
    ApiError, ApiResult, AppJson, AppState, AuthResponse, AuthUser, ConnectRequest,
    ConnectResponse, LoginRequest, SignupRequest, UpdateUserRequest, UserDto, UserResponse,
};

use pl_core::{
    ProfileUpdate, User, normalize_email, validate_email, validate_name, validate_password,
};
use pl_db::UserRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use error_location::ErrorLocation;
use uuid::Uuid;

// =============================================================================
// Handlers
// =============================================================================

/// POST /api/users/signup
///
/// Register a new user: validate input, hash the password, store the
/// record, and issue a token so the client is logged in immediately.
pub async fn signup(
    State(state): State<AppState>,
    AppJson(req): AppJson<SignupRequest>,
) -> ApiResult<(StatusCode, Json<AuthResponse>)> {
    validate_email(&req.email)?;
    validate_password(&req.password)?;
    validate_name("firstName", &req.first_name)?;
    validate_name("lastName", &req.last_name)?;

    let email = normalize_email(&req.email);
    let password_hash = state.passwords.hash(&req.password)?;

    let user = User::new(
        email,
        password_hash,
        req.first_name.trim().to_string(),
        req.last_name.trim().to_string(),
    );

    let repo = UserRepository::new(state.pool.clone());
    repo.create(&user).await?;

    let token = state.tokens.issue(&user.id.to_string(), &user.email)?;

    log::info!("New user registered: {}", user.id);

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

/// POST /api/users/login
///
/// Unknown email and wrong password take different paths internally but
/// produce the same failure; the response must not reveal which.
pub async fn login(
    State(state): State<AppState>,
    AppJson(req): AppJson<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let repo = UserRepository::new(state.pool.clone());

    let Some(user) = repo.find_by_email(&req.email).await? else {
        return Err(invalid_credentials());
    };

    if !state.passwords.verify(&req.password, &user.password_hash) {
        return Err(invalid_credentials());
    }

    let token = state.tokens.issue(&user.id.to_string(), &user.email)?;

    log::info!("User logged in: {}", user.id);

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// GET /api/users/me
///
/// The identity behind the presented token. A valid token whose user has
/// since disappeared is still a 401, never a 500.
pub async fn get_current_user(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
) -> ApiResult<Json<UserDto>> {
    let repo = UserRepository::new(state.pool.clone());

    let user = repo.find_by_id(user_id).await?.ok_or_else(|| {
        log::warn!("Valid token for missing user {}", user_id);
        ApiError::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    Ok(Json(user.into()))
}

/// GET /api/users
///
/// Public directory listing. Deliberately unauthenticated; the DTO strips
/// the credential hash.
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserDto>>> {
    let repo = UserRepository::new(state.pool.clone());
    let users = repo.find_all().await?;

    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

/// GET /api/users/{id}
///
/// Public single-user lookup
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserDto>> {
    let user_id = Uuid::parse_str(&id)?;

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(user.into()))
}

/// PUT /api/users/{id}
///
/// Profile update, restricted to the token holder. The ownership check
/// runs before anything about the target is revealed.
pub async fn update_user(
    State(state): State<AppState>,
    AuthUser(auth_id): AuthUser,
    Path(id): Path<String>,
    AppJson(req): AppJson<UpdateUserRequest>,
) -> ApiResult<Json<UserResponse>> {
    let target_id = Uuid::parse_str(&id)?;

    if auth_id != target_id {
        return Err(ApiError::Forbidden {
            message: "You can only update your own profile".to_string(),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    if let Some(first_name) = &req.first_name {
        validate_name("firstName", first_name)?;
    }
    if let Some(last_name) = &req.last_name {
        validate_name("lastName", last_name)?;
    }

    let update: ProfileUpdate = req.into();

    let repo = UserRepository::new(state.pool.clone());
    let user = repo
        .update_profile(target_id, &update)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// POST /api/users/connect
///
/// Set-insert the target into the caller's connections. Calling again with
/// the same target is a no-op with the same response.
pub async fn connect(
    State(state): State<AppState>,
    AuthUser(user_id): AuthUser,
    AppJson(req): AppJson<ConnectRequest>,
) -> ApiResult<Json<ConnectResponse>> {
    let target_id = Uuid::parse_str(&req.target_id).map_err(|e| ApiError::Validation {
        message: format!("Invalid targetId: {}", e),
        field: Some("targetId".to_string()),
        location: ErrorLocation::from(Location::caller()),
    })?;

    if target_id == user_id {
        return Err(ApiError::Validation {
            message: "Cannot connect to yourself".to_string(),
            field: Some("targetId".to_string()),
            location: ErrorLocation::from(Location::caller()),
        });
    }

    let repo = UserRepository::new(state.pool.clone());

    repo.find_by_id(target_id)
        .await?
        .ok_or_else(|| ApiError::NotFound {
            message: format!("User {} not found", req.target_id),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let added = repo.add_connection(user_id, target_id).await?.ok_or_else(|| {
        log::warn!("Valid token for missing user {}", user_id);
        ApiError::Unauthorized {
            location: ErrorLocation::from(Location::caller()),
        }
    })?;

    if added {
        log::info!("User {} connected to {}", user_id, target_id);
    }

    Ok(Json(ConnectResponse { connected: true }))
}

#[track_caller]
fn invalid_credentials() -> ApiError {
    ApiError::InvalidCredentials {
        location: ErrorLocation::from(Location::caller()),
    }
}
