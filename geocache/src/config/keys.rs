//! Addressable configuration keys for `config get|set|list`.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;

use super::file::ConfigFile;
use super::ConfigError;

/// Accepted `logging.level` values.
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// One `section.key` setting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    ServerBind,
    ProviderBaseUrl,
    ProviderAccessKey,
    ProviderTimeout,
    LoggingLevel,
    LoggingFile,
}

impl ConfigKey {
    /// Every key, grouped by section in file order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::ServerBind,
            ConfigKey::ProviderBaseUrl,
            ConfigKey::ProviderAccessKey,
            ConfigKey::ProviderTimeout,
            ConfigKey::LoggingLevel,
            ConfigKey::LoggingFile,
        ]
    }

    pub fn section(&self) -> &'static str {
        match self {
            ConfigKey::ServerBind => "server",
            ConfigKey::ProviderBaseUrl
            | ConfigKey::ProviderAccessKey
            | ConfigKey::ProviderTimeout => "provider",
            ConfigKey::LoggingLevel | ConfigKey::LoggingFile => "logging",
        }
    }

    pub fn key_name(&self) -> &'static str {
        match self {
            ConfigKey::ServerBind => "bind",
            ConfigKey::ProviderBaseUrl => "base_url",
            ConfigKey::ProviderAccessKey => "access_key",
            ConfigKey::ProviderTimeout => "timeout",
            ConfigKey::LoggingLevel => "level",
            ConfigKey::LoggingFile => "file",
        }
    }

    /// Dotted name, e.g. `provider.timeout`.
    pub fn name(&self) -> String {
        format!("{}.{}", self.section(), self.key_name())
    }

    /// Whether the value should be masked when displayed.
    pub fn is_secret(&self) -> bool {
        matches!(self, ConfigKey::ProviderAccessKey)
    }

    /// Current value as text; empty when unset.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::ServerBind => config.server.bind.to_string(),
            ConfigKey::ProviderBaseUrl => config.provider.base_url.clone(),
            ConfigKey::ProviderAccessKey => config.provider.access_key.clone(),
            ConfigKey::ProviderTimeout => config.provider.timeout_secs.to_string(),
            ConfigKey::LoggingLevel => config.logging.level.clone(),
            ConfigKey::LoggingFile => config
                .logging
                .file
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_default(),
        }
    }

    /// Validate `value` and store it.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = |reason: &str| ConfigError::InvalidValue {
            key: self.name(),
            value: value.to_string(),
            reason: reason.to_string(),
        };

        match self {
            ConfigKey::ServerBind => {
                config.server.bind = value
                    .parse::<SocketAddr>()
                    .map_err(|_| invalid("expected host:port, e.g. 127.0.0.1:8080"))?;
            }
            ConfigKey::ProviderBaseUrl => {
                let url = reqwest::Url::parse(value).map_err(|e| invalid(&e.to_string()))?;
                if !matches!(url.scheme(), "http" | "https") {
                    return Err(invalid("expected an http or https URL"));
                }
                config.provider.base_url = value.trim_end_matches('/').to_string();
            }
            ConfigKey::ProviderAccessKey => {
                config.provider.access_key = value.to_string();
            }
            ConfigKey::ProviderTimeout => {
                config.provider.timeout_secs = value
                    .parse::<u64>()
                    .ok()
                    .filter(|secs| *secs > 0)
                    .ok_or_else(|| invalid("expected a positive number of seconds"))?;
            }
            ConfigKey::LoggingLevel => {
                let level = value.to_ascii_lowercase();
                if !LOG_LEVELS.contains(&level.as_str()) {
                    return Err(invalid("expected one of trace, debug, info, warn, error"));
                }
                config.logging.level = level;
            }
            ConfigKey::LoggingFile => {
                config.logging.file = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
        }
        Ok(())
    }
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name())
    }
}

impl FromStr for ConfigKey {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ConfigError::UnknownKey(s.to_string()))
    }
}
