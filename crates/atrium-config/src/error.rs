use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {name} {location}")]
    MissingVar {
        name: &'static str,
        location: ErrorLocation,
    },

    #[error("Invalid configuration: {message} {location}")]
    Invalid {
        message: String,
        location: ErrorLocation,
    },
}

impl ConfigError {
    #[track_caller]
    pub fn missing_var(name: &'static str) -> Self {
        ConfigError::MissingVar {
            name,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn invalid(message: String) -> Self {
        ConfigError::Invalid {
            message,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ConfigError>;
