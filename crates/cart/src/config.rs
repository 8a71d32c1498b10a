//! Cart storage configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `BASKET_STORAGE_DIR` - Directory for persisted payload files
//!   (default: `<platform local data dir>/basket`)

use std::path::PathBuf;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
    #[error("No local data directory on this platform; set BASKET_STORAGE_DIR")]
    NoDataDir,
}

/// Cart storage configuration.
#[derive(Debug, Clone)]
pub struct CartConfig {
    /// Directory holding persisted payload files.
    pub storage_dir: PathBuf,
}

impl CartConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `BASKET_STORAGE_DIR` is set but unusable, or
    /// is unset on a platform with no local data directory.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_dir = match std::env::var("BASKET_STORAGE_DIR") {
            Ok(dir) if !dir.trim().is_empty() => PathBuf::from(dir),
            Ok(_) => {
                return Err(ConfigError::InvalidEnvVar(
                    "BASKET_STORAGE_DIR".to_owned(),
                    "must not be empty".to_owned(),
                ));
            }
            Err(std::env::VarError::NotPresent) => default_storage_dir()?,
            Err(e) => {
                return Err(ConfigError::InvalidEnvVar(
                    "BASKET_STORAGE_DIR".to_owned(),
                    e.to_string(),
                ));
            }
        };

        Ok(Self { storage_dir })
    }
}

/// Platform-local data directory for the app.
fn default_storage_dir() -> Result<PathBuf, ConfigError> {
    dirs::data_local_dir()
        .map(|dir| dir.join("basket"))
        .ok_or(ConfigError::NoDataDir)
}
