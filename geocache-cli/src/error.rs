//! CLI error type.

use geocache::app::AppError;
use geocache::config::ConfigError;
use geocache::geocoding::GeocodingError;
use geocache::logging::LoggingError;
use thiserror::Error;

/// Errors surfaced to the user by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Config(String),

    #[error(transparent)]
    ConfigFile(#[from] ConfigError),

    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Logging(#[from] LoggingError),

    #[error("Failed to create Tokio runtime: {0}")]
    Runtime(String),

    #[error("Lookup failed: {0}")]
    Lookup(#[from] GeocodingError),
}

impl CliError {
    /// Error for a missing positionstack access key.
    pub fn missing_access_key() -> Self {
        CliError::Config(
            "No positionstack access key configured. \
             Set provider.access_key with 'geocache config set', \
             export GEOCACHE_ACCESS_KEY or pass --access-key"
                .to_string(),
        )
    }
}
