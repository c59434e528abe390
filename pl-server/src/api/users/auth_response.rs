use crate::UserDto;

use serde::Serialize;

/// Token plus public view, returned by signup and login
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserDto,
}
