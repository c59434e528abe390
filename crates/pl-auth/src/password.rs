use crate::{AuthError, Result as AuthErrorResult};

use std::panic::Location;

use argon2::{Argon2, PasswordHasher, PasswordVerifier};
use error_location::ErrorLocation;
use password_hash::{PasswordHash, SaltString};

/// Salted one-way password hashing (Argon2id, PHC string output).
///
/// The PHC string is self-describing, so the cost parameters can change later
/// without invalidating hashes already on disk.
#[derive(Default)]
pub struct PasswordService {
    argon2: Argon2<'static>,
}

impl PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Hash a plaintext password with a fresh random salt.
    /// The same input hashes to a different string on every call.
    #[track_caller]
    pub fn hash(&self, plaintext: &str) -> AuthErrorResult<String> {
        let mut salt_bytes = [0u8; 16];
        getrandom::getrandom(&mut salt_bytes).map_err(|e| AuthError::PasswordHash {
            message: format!("Salt generation failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;
        let salt = SaltString::encode_b64(&salt_bytes).map_err(|e| AuthError::PasswordHash {
            message: format!("Salt encoding failed: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

        let phc = self
            .argon2
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| AuthError::PasswordHash {
                message: format!("Hashing failed: {}", e),
                location: ErrorLocation::from(Location::caller()),
            })?
            .to_string();

        Ok(phc)
    }

    /// Verify a candidate password against a stored PHC hash.
    ///
    /// Uses the library's constant-time comparison. Returns false for a
    /// mismatch or an unparseable hash; this path never errors.
    pub fn verify(&self, plaintext: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed) => self
                .argon2
                .verify_password(plaintext.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }
}
