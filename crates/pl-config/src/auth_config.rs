use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_SECS, Environment, MIN_JWT_SECRET_LENGTH};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret. Optional in development (a built-in fallback is
    /// used with a warning); required in production.
    pub jwt_secret: Option<String>,
    /// Validity window attached to every issued token
    pub token_ttl_secs: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_secs: DEFAULT_TOKEN_TTL_SECS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self, environment: Environment) -> ConfigErrorResult<()> {
        match &self.jwt_secret {
            Some(secret) => {
                if secret.chars().count() < MIN_JWT_SECRET_LENGTH {
                    return Err(ConfigError::auth(format!(
                        "auth.jwt_secret must be at least {} characters",
                        MIN_JWT_SECRET_LENGTH
                    )));
                }
            }
            None => {
                // Fail closed: production must never run on the fallback secret
                if environment.is_production() {
                    return Err(ConfigError::auth(
                        "auth.jwt_secret is required when server.environment is 'production'",
                    ));
                }
            }
        }

        if self.token_ttl_secs == 0 {
            return Err(ConfigError::auth("auth.token_ttl_secs must be > 0"));
        }

        Ok(())
    }
}
