use crate::DEFAULT_DIRECTORY_TIMEOUT_SECS;
use crate::error::{ConfigError, Result as ConfigErrorResult};

/// How to reach the member directory.
#[derive(Debug, Clone)]
pub struct DirectoryConfig {
    /// Directory base URL (e.g., "https://directory.example.com")
    pub base_url: String,

    /// Per-request timeout in seconds (default: 10)
    pub timeout_secs: u64,
}

/// Configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Short name of the consuming service; namespaces permission codes as
    /// "<service>.login" and "<service>.admin"
    pub service_name: String,

    pub directory: DirectoryConfig,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> ConfigErrorResult<Self> {
        let service_name =
            std::env::var("SERVICE_NAME").map_err(|_| ConfigError::missing_var("SERVICE_NAME"))?;

        let base_url = std::env::var("DIRECTORY_BASE_URL")
            .map_err(|_| ConfigError::missing_var("DIRECTORY_BASE_URL"))?;

        let config = Self {
            service_name,
            directory: DirectoryConfig {
                base_url,
                timeout_secs: std::env::var("DIRECTORY_TIMEOUT_SECS")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(DEFAULT_DIRECTORY_TIMEOUT_SECS),
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.service_name.is_empty() {
            return Err(ConfigError::invalid(
                "SERVICE_NAME must not be empty".to_string(),
            ));
        }
        if !self.directory.base_url.starts_with("http") {
            return Err(ConfigError::invalid(format!(
                "DIRECTORY_BASE_URL does not look like a URL: {}",
                self.directory.base_url
            )));
        }
        if self.directory.timeout_secs == 0 {
            log::warn!("DIRECTORY_TIMEOUT_SECS is 0; directory calls will never time out");
        }
        Ok(())
    }

    /// Permission code members need before they may sign in here.
    pub fn login_permission(&self) -> String {
        format!("{}.login", self.service_name)
    }

    /// Permission code marking members as administrators of this service.
    pub fn admin_permission(&self) -> String {
        format!("{}.admin", self.service_name)
    }
}
