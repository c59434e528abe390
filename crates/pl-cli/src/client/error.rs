use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors surfaced by the HTTP client and the session layer built on it.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request never produced a usable response
    #[error("HTTP error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    /// The server answered with a structured error body
    #[error("API error ({code}): {message} {location}")]
    Api {
        code: String,
        message: String,
        location: ErrorLocation,
    },

    /// The response body was not the JSON we expected
    #[error("JSON error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },

    /// The session file could not be read or written
    #[error("IO error: {message} {location}")]
    Io {
        message: String,
        location: ErrorLocation,
        #[source]
        source: std::io::Error,
    },

    /// The session is not in a state that allows the operation
    #[error("Session error: {message} {location}")]
    Session {
        message: String,
        location: ErrorLocation,
    },
}

impl ClientError {
    #[track_caller]
    pub fn from_reqwest(source: reqwest::Error) -> Self {
        ClientError::Http {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn api_error(code: String, message: String) -> Self {
        ClientError::Api {
            code,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn from_json(source: serde_json::Error) -> Self {
        ClientError::Json {
            message: source.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        ClientError::Io {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
            source,
        }
    }

    #[track_caller]
    pub fn session(message: impl Into<String>) -> Self {
        ClientError::Session {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<reqwest::Error> for ClientError {
    #[track_caller]
    fn from(source: reqwest::Error) -> Self {
        ClientError::from_reqwest(source)
    }
}

impl From<serde_json::Error> for ClientError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        ClientError::from_json(source)
    }
}

impl From<std::io::Error> for ClientError {
    #[track_caller]
    fn from(source: std::io::Error) -> Self {
        ClientError::io(source.to_string(), source)
    }
}

pub type Result<T> = std::result::Result<T, ClientError>;
