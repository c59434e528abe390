//! User entity - one record per registered identity.

use chrono::{DateTime, Utc};
use std::fmt;
use uuid::Uuid;

/// A registered user. The credential hash lives on the entity but must never
/// leave the process boundary; API responses go through `UserDto`, which
/// drops it, and `Debug` redacts it.
#[derive(Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    /// Login key, stored trimmed and lowercased. Unique case-insensitively.
    pub email: String,
    /// Salted one-way hash in PHC string form. Never the plaintext.
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub bio: Option<String>,
    /// Subjects this user offers to teach
    pub can_teach: Vec<String>,
    /// Subjects this user wants to learn
    pub want_to_learn: Vec<String>,
    /// Ids of users this user has connected with (set semantics)
    pub connections: Vec<Uuid>,
    pub coins: i64,
    pub reputation: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new user with default profile values.
    /// Expects an already-normalized email and an already-hashed credential.
    pub fn new(email: String, password_hash: String, first_name: String, last_name: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            first_name,
            last_name,
            bio: None,
            can_teach: Vec::new(),
            want_to_learn: Vec::new(),
            connections: Vec::new(),
            coins: 0,
            reputation: 0,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check whether a connection to `other` already exists
    pub fn is_connected_to(&self, other: Uuid) -> bool {
        self.connections.contains(&other)
    }

    /// Set-insert a connection. Returns false when it was already present.
    pub fn add_connection(&mut self, other: Uuid) -> bool {
        if self.is_connected_to(other) {
            return false;
        }
        self.connections.push(other);
        self.updated_at = Utc::now();
        true
    }
}

impl fmt::Debug for User {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password_hash", &"<redacted>")
            .field("first_name", &self.first_name)
            .field("last_name", &self.last_name)
            .field("bio", &self.bio)
            .field("can_teach", &self.can_teach)
            .field("want_to_learn", &self.want_to_learn)
            .field("connections", &self.connections)
            .field("coins", &self.coins)
            .field("reputation", &self.reputation)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
