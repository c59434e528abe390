use crate::{AuthError, Claims, Result as AuthErrorResult};

use std::panic::Location;

use chrono::Utc;
use error_location::ErrorLocation;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// Issues and verifies bearer tokens (JWT, HS256).
///
/// Both halves share one process-wide secret. Tokens are integrity-checked,
/// not encrypted: holders can read the claims but cannot forge them.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    header: Header,
    ttl_secs: u64,
}

impl TokenService {
    /// Create a service signing with HS256 (symmetric secret).
    /// `ttl_secs` is the validity window attached to every issued token.
    pub fn with_hs256(secret: &[u8], ttl_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = 30; // 30 second clock skew tolerance

        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            validation,
            header: Header::new(Algorithm::HS256),
            ttl_secs,
        }
    }

    pub fn ttl_secs(&self) -> u64 {
        self.ttl_secs
    }

    /// Issue a signed token for an identity.
    /// Claims carry the id, email, issue time and expiry; nothing else.
    #[track_caller]
    pub fn issue(&self, user_id: &str, email: &str) -> AuthErrorResult<String> {
        let now = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id.to_string(),
            email: email.to_string(),
            exp: now + self.ttl_secs as i64,
            iat: now,
        };
        claims.validate()?;

        encode(&self.header, &claims, &self.encoding_key).map_err(|e| AuthError::JwtEncode {
            source: e,
            location: ErrorLocation::from(Location::caller()),
        })
    }

    /// Verify a token and return its claims.
    ///
    /// Bad signature, malformed structure and elapsed expiry come back as
    /// distinct variants; the HTTP layer collapses them all into a single
    /// "not authorized" so callers cannot probe which check failed.
    #[track_caller]
    pub fn verify(&self, token: &str) -> AuthErrorResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                use jsonwebtoken::errors::ErrorKind;
                match e.kind() {
                    ErrorKind::ExpiredSignature => AuthError::TokenExpired {
                        location: ErrorLocation::from(Location::caller()),
                    },
                    _ => AuthError::JwtDecode {
                        source: e,
                        location: ErrorLocation::from(Location::caller()),
                    },
                }
            })?;

        // Additional claim validation beyond the signature check
        token_data.claims.validate()?;

        Ok(token_data.claims)
    }
}
