use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

/// Errors that can occur while talking to the directory service.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("HTTP request error: {message} {location}")]
    Http {
        message: String,
        location: ErrorLocation,
        #[source]
        source: reqwest::Error,
    },

    #[error("Directory API error: {message} (status: {status}) {location}")]
    Api {
        status: u16,
        message: String,
        location: ErrorLocation,
    },

    #[error("Directory rejected the member attributes: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON parse error: {message} {location}")]
    Json {
        message: String,
        location: ErrorLocation,
        #[source]
        source: serde_json::Error,
    },
}

impl DirectoryError {
    #[track_caller]
    pub fn api(status: u16, message: String) -> Self {
        DirectoryError::Api {
            status,
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn validation(message: String) -> Self {
        DirectoryError::Validation {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Whether the failure is a rejected save rather than a transport fault.
    pub fn is_validation(&self) -> bool {
        matches!(self, DirectoryError::Validation { .. })
    }
}

impl From<reqwest::Error> for DirectoryError {
    #[track_caller]
    fn from(err: reqwest::Error) -> Self {
        DirectoryError::Http {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

impl From<serde_json::Error> for DirectoryError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        DirectoryError::Json {
            message: err.to_string(),
            location: ErrorLocation::from(Location::caller()),
            source: err,
        }
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
