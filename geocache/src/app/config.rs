//! Application configuration for GeocacheApp.
//!
//! `AppConfig` collects everything needed to bootstrap the service: where
//! to listen and how to reach the upstream provider.

use std::net::SocketAddr;

use crate::config::{ConfigFile, ProviderSettings, ServerSettings};
use crate::provider::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECS};

/// Top-level configuration passed to `GeocacheApp::new()`.
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    /// Listen address.
    pub bind: SocketAddr,

    /// positionstack base URL.
    pub base_url: String,

    /// positionstack access key.
    pub access_key: String,

    /// Upstream request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind: ServerSettings::default().bind,
            base_url: DEFAULT_BASE_URL.to_string(),
            access_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl AppConfig {
    /// Create a config for the given access key with default settings.
    pub fn new(access_key: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            ..Self::default()
        }
    }

    /// Create application config from the user configuration file.
    ///
    /// Command-line overrides are applied afterwards with the `with_*`
    /// builders.
    pub fn from_config_file(config: &ConfigFile) -> Self {
        let ProviderSettings {
            base_url,
            access_key,
            timeout_secs,
        } = config.provider.clone();
        Self {
            bind: config.server.bind,
            base_url,
            access_key,
            timeout_secs,
        }
    }

    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_access_key(mut self, access_key: impl Into<String>) -> Self {
        self.access_key = access_key.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}
