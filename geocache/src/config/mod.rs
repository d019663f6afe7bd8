//! User configuration stored at `~/.geocache/config.ini`.

mod file;
mod keys;

use std::path::PathBuf;

use thiserror::Error;

pub use file::{
    config_file_path, ConfigFile, LoggingSettings, ProviderSettings, ServerSettings, DEFAULT_BIND,
    DEFAULT_LOG_LEVEL,
};
pub use keys::ConfigKey;

/// Errors reading, writing or editing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Invalid value '{value}' for {key}: {reason}")]
    InvalidValue {
        key: String,
        value: String,
        reason: String,
    },

    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),
}
