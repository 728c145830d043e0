use atrium_directory::DirectoryError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The confirmation token bought nothing. Carries the user-facing
    /// message; deliberately distinct from transient lookup faults, which
    /// are never surfaced.
    #[error("Sorry: user credentials not recognised. {location}")]
    CredentialsNotRecognized { location: ErrorLocation },

    #[error("Directory error during confirmation: {source} {location}")]
    Directory {
        #[source]
        source: DirectoryError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn credentials_not_recognized() -> Self {
        AuthError::CredentialsNotRecognized {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, AuthError::CredentialsNotRecognized { .. })
    }
}

impl From<DirectoryError> for AuthError {
    #[track_caller]
    fn from(source: DirectoryError) -> Self {
        AuthError::Directory {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
