use pl_core::User;

use serde::Serialize;
use uuid::Uuid;

/// Public view of a user for JSON serialization.
///
/// The only shape a user ever takes on the wire: camelCase fields, one
/// canonical `id`, and no credential hash.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    pub can_teach: Vec<String>,
    pub want_to_learn: Vec<String>,
    pub connections: Vec<String>,
    pub coins: i64,
    pub reputation: i64,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<User> for UserDto {
    fn from(u: User) -> Self {
        Self {
            id: u.id.to_string(),
            email: u.email,
            first_name: u.first_name,
            last_name: u.last_name,
            bio: u.bio,
            can_teach: u.can_teach,
            want_to_learn: u.want_to_learn,
            connections: u.connections.iter().map(Uuid::to_string).collect(),
            coins: u.coins,
            reputation: u.reputation,
            created_at: u.created_at.timestamp(),
            updated_at: u.updated_at.timestamp(),
        }
    }
}
