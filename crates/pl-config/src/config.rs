use crate::{
    AuthConfig, ConfigError, ConfigErrorResult, DatabaseConfig, LoggingConfig, ServerConfig,
};

use std::path::PathBuf;

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration: `config.toml` under the config directory when
    /// present, built-in defaults otherwise, then `PL_*` environment
    /// overrides on top. Validation is separate; call
    /// [`Config::validate`] after loading.
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join("config.toml");

        let mut config = match std::fs::read_to_string(&config_path) {
            Ok(contents) => toml::from_str(&contents).map_err(|e| ConfigError::Toml {
                path: config_path.clone(),
                source: e,
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Config::default(),
            Err(e) => {
                return Err(ConfigError::Io {
                    path: config_path,
                    source: e,
                });
            }
        };

        config.apply_env_overrides();

        Ok(config)
    }

    /// Configuration directory: `$PL_CONFIG_DIR` when set, `./.pl`
    /// relative to the working directory otherwise.
    pub fn config_dir() -> Result<PathBuf, ConfigError> {
        match std::env::var("PL_CONFIG_DIR") {
            Ok(dir) => Ok(PathBuf::from(dir)),
            Err(_) => {
                let cwd = std::env::current_dir().map_err(|_| {
                    ConfigError::config("Cannot determine current working directory")
                })?;

                Ok(cwd.join(".pl"))
            }
        }
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.auth.validate(self.server.environment)?;

        // Validate database path doesn't escape config dir
        let db_path = std::path::Path::new(&self.database.path);
        if db_path.is_absolute() || self.database.path.contains("..") {
            return Err(ConfigError::database(
                "database.path must be relative and cannot contain '..'",
            ));
        }
        if self.database.path.trim().is_empty() {
            return Err(ConfigError::database("database.path must not be empty"));
        }

        Ok(())
    }

    /// Get absolute path to database file.
    pub fn database_path(&self) -> Result<PathBuf, ConfigError> {
        let config_dir = Self::config_dir()?;
        Ok(config_dir.join(&self.database.path))
    }

    /// Get bind address as string.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log configuration summary (NEVER logs secrets).
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  server: {}:{} ({})",
            self.server.host, self.server.port, self.server.environment
        );
        info!("  database: {}", self.database.path);

        info!(
            "  auth: secret {}, token ttl {}s",
            if self.auth.jwt_secret.is_some() {
                "configured"
            } else {
                "not set (development fallback)"
            },
            self.auth.token_ttl_secs
        );

        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("off")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("PL_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("PL_SERVER_PORT", &mut self.server.port);
        Self::apply_env_parse("PL_ENV", &mut self.server.environment);

        // Database
        Self::apply_env_string("PL_DATABASE_PATH", &mut self.database.path);

        // Auth
        Self::apply_env_option_string("PL_JWT_SECRET", &mut self.auth.jwt_secret);
        Self::apply_env_parse("PL_TOKEN_TTL_SECS", &mut self.auth.token_ttl_secs);

        // Logging
        Self::apply_env_parse("PL_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("PL_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("PL_LOG_FILE", &mut self.logging.file);
        Self::apply_env_string("PL_LOG_DIR", &mut self.logging.dir);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
