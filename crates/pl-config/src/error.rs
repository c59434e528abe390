use std::panic::Location;
use std::path::PathBuf;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error as ThisError;

/// One variant per configuration section, so a startup failure names the
/// part of the file (or environment) that needs fixing.
#[derive(ThisError, Debug)]
pub enum ConfigError {
    #[error("Invalid [server] config: {message} {location}")]
    Server {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid [database] config: {message} {location}")]
    Database {
        message: String,
        location: ErrorLocation,
    },

    #[error("Invalid [auth] config: {message} {location}")]
    Auth {
        message: String,
        location: ErrorLocation,
    },

    #[error("Config error: {message} {location}")]
    Config {
        message: String,
        location: ErrorLocation,
    },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TOML parse error in {path}: {source}")]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn server<S: Into<String>>(message: S) -> Self {
        ConfigError::Server {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn database<S: Into<String>>(message: S) -> Self {
        ConfigError::Database {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn auth<S: Into<String>>(message: S) -> Self {
        ConfigError::Auth {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn config<S: Into<String>>(message: S) -> Self {
        ConfigError::Config {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type ConfigErrorResult<T> = StdResult<T, ConfigError>;
