mod config;
mod error;

pub use config::{Config, DirectoryConfig};
pub use error::{ConfigError, Result as ConfigErrorResult};

const DEFAULT_DIRECTORY_TIMEOUT_SECS: u64 = 10;
