//! User repository - the credential store.
//!
//! Uses plain `sqlx::query` (not the checked macros) so the crate builds
//! without a live database or offline metadata. Queries are small enough to
//! review by eye.
//!
//! List-valued columns (`can_teach`, `want_to_learn`, `connections`) are
//! stored as JSON arrays in TEXT; SQLite never inspects them.

use crate::{DbError, Result as DbErrorResult};

use pl_core::{ProfileUpdate, User, normalize_email};

use std::panic::Location;

use chrono::DateTime;
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new user record.
    ///
    /// Concurrent signups with the same email serialize on the unique email
    /// index; the constraint violation surfaces as `DuplicateEmail`, never
    /// as a generic database failure.
    pub async fn create(&self, user: &User) -> DbErrorResult<()> {
        let id = user.id.to_string();
        let can_teach = encode_list("users.can_teach", &user.can_teach)?;
        let want_to_learn = encode_list("users.want_to_learn", &user.want_to_learn)?;
        let connections = encode_uuid_list("users.connections", &user.connections)?;
        let created_at = user.created_at.timestamp();
        let updated_at = user.updated_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO users (
                    id, email, password_hash, first_name, last_name, bio,
                    can_teach, want_to_learn, connections, coins, reputation,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.bio)
        .bind(&can_teach)
        .bind(&want_to_learn)
        .bind(&connections)
        .bind(user.coins)
        .bind(user.reputation)
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => {
                Err(DbError::DuplicateEmail {
                    email: user.email.clone(),
                    location: ErrorLocation::from(Location::caller()),
                })
            }
            Err(e) => Err(DbError::from(e)),
        }
    }

    /// Case-insensitive lookup by login key.
    pub async fn find_by_email(&self, email: &str) -> DbErrorResult<Option<User>> {
        let normalized = normalize_email(email);

        let row = sqlx::query("SELECT * FROM users WHERE email = ?")
            .bind(&normalized)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<User>> {
        let id_str = id.to_string();

        let row = sqlx::query("SELECT * FROM users WHERE id = ?")
            .bind(&id_str)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| row_to_user(&r)).transpose()
    }

    pub async fn find_all(&self) -> DbErrorResult<Vec<User>> {
        let rows = sqlx::query("SELECT * FROM users ORDER BY created_at, id")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(row_to_user).collect()
    }

    /// Apply an allow-listed profile change set. Only profile columns are in
    /// the UPDATE; email and the credential hash cannot travel this path.
    /// Returns the merged record, or `None` when the user does not exist.
    pub async fn update_profile(
        &self,
        id: Uuid,
        update: &ProfileUpdate,
    ) -> DbErrorResult<Option<User>> {
        let Some(mut user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        update.apply(&mut user);

        let can_teach = encode_list("users.can_teach", &user.can_teach)?;
        let want_to_learn = encode_list("users.want_to_learn", &user.want_to_learn)?;
        let updated_at = user.updated_at.timestamp();
        let id_str = user.id.to_string();

        sqlx::query(
            r#"
                UPDATE users
                SET first_name = ?, last_name = ?, bio = ?,
                    can_teach = ?, want_to_learn = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.bio)
        .bind(&can_teach)
        .bind(&want_to_learn)
        .bind(updated_at)
        .bind(&id_str)
        .execute(&self.pool)
        .await?;

        Ok(Some(user))
    }

    /// Set-insert `target` into the user's connections.
    /// `Some(false)` means the connection already existed (no write).
    /// `None` means the user does not exist.
    pub async fn add_connection(&self, id: Uuid, target: Uuid) -> DbErrorResult<Option<bool>> {
        let Some(mut user) = self.find_by_id(id).await? else {
            return Ok(None);
        };

        if !user.add_connection(target) {
            return Ok(Some(false));
        }

        let connections = encode_uuid_list("users.connections", &user.connections)?;
        let updated_at = user.updated_at.timestamp();
        let id_str = user.id.to_string();

        sqlx::query("UPDATE users SET connections = ?, updated_at = ? WHERE id = ?")
            .bind(&connections)
            .bind(updated_at)
            .bind(&id_str)
            .execute(&self.pool)
            .await?;

        Ok(Some(true))
    }
}

// =============================================================================
// Row mapping
// =============================================================================

fn row_to_user(row: &SqliteRow) -> DbErrorResult<User> {
    let id: String = try_column(row, "id")?;
    let connections_raw: String = try_column(row, "connections")?;
    let can_teach_raw: String = try_column(row, "can_teach")?;
    let want_to_learn_raw: String = try_column(row, "want_to_learn")?;
    let created_at: i64 = try_column(row, "created_at")?;
    let updated_at: i64 = try_column(row, "updated_at")?;

    Ok(User {
        id: parse_uuid("users.id", &id)?,
        email: try_column(row, "email")?,
        password_hash: try_column(row, "password_hash")?,
        first_name: try_column(row, "first_name")?,
        last_name: try_column(row, "last_name")?,
        bio: try_column(row, "bio")?,
        can_teach: decode_list("users.can_teach", &can_teach_raw)?,
        want_to_learn: decode_list("users.want_to_learn", &want_to_learn_raw)?,
        connections: decode_uuid_list("users.connections", &connections_raw)?,
        coins: try_column(row, "coins")?,
        reputation: try_column(row, "reputation")?,
        created_at: parse_timestamp("users.created_at", created_at)?,
        updated_at: parse_timestamp("users.updated_at", updated_at)?,
    })
}

#[track_caller]
fn try_column<'r, T>(row: &'r SqliteRow, column: &str) -> DbErrorResult<T>
where
    T: sqlx::Decode<'r, sqlx::Sqlite> + sqlx::Type<sqlx::Sqlite>,
{
    row.try_get(column)
        .map_err(|e| DbError::invalid_column(column, e.to_string()))
}

#[track_caller]
fn parse_uuid(column: &str, value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::invalid_column(column, format!("not a UUID: {}", e)))
}

#[track_caller]
fn parse_timestamp(column: &str, value: i64) -> DbErrorResult<chrono::DateTime<chrono::Utc>> {
    DateTime::from_timestamp(value, 0)
        .ok_or_else(|| DbError::invalid_column(column, "timestamp out of range"))
}

#[track_caller]
fn encode_list(column: &str, values: &[String]) -> DbErrorResult<String> {
    serde_json::to_string(values)
        .map_err(|e| DbError::invalid_column(column, format!("cannot encode as JSON: {}", e)))
}

#[track_caller]
fn encode_uuid_list(column: &str, values: &[Uuid]) -> DbErrorResult<String> {
    let as_strings: Vec<String> = values.iter().map(Uuid::to_string).collect();
    encode_list(column, &as_strings)
}

#[track_caller]
fn decode_list(column: &str, raw: &str) -> DbErrorResult<Vec<String>> {
    serde_json::from_str(raw)
        .map_err(|e| DbError::invalid_column(column, format!("not a JSON list: {}", e)))
}

#[track_caller]
fn decode_uuid_list(column: &str, raw: &str) -> DbErrorResult<Vec<Uuid>> {
    decode_list(column, raw)?
        .iter()
        .map(|s| parse_uuid(column, s))
        .collect()
}
