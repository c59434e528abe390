//! Registration input validation rules.

use crate::{CoreError, Result};

/// Minimum plaintext password length accepted at registration
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Canonical form of an email for storage and lookup: trimmed, lowercased.
pub fn normalize_email(raw: &str) -> String {
    raw.trim().to_ascii_lowercase()
}

/// An email must be non-empty and shaped `local@domain` with both parts
/// present. Anything stricter is the mail server's problem.
#[track_caller]
pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(CoreError::validation("Email is required", Some("email")));
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => Ok(()),
        _ => Err(CoreError::validation(
            format!("Invalid email address: {}", email),
            Some("email"),
        )),
    }
}

#[track_caller]
pub fn validate_password(password: &str) -> Result<()> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(CoreError::validation(
            format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            ),
            Some("password"),
        ));
    }
    Ok(())
}

/// Name parts (first/last) must be non-empty after trimming.
#[track_caller]
pub fn validate_name(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(CoreError::validation(
            format!("{} is required", field),
            Some(field),
        ));
    }
    Ok(())
}
