use crate::UserDto;

use serde::Serialize;

/// Single user response wrapper
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub user: UserDto,
}
