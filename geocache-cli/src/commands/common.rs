//! Common types and utilities shared across CLI commands.

use std::path::PathBuf;

use clap::Args;
use geocache::app::AppConfig;
use geocache::config::ConfigFile;
use geocache::logging::{self, LoggingGuard};

use crate::error::CliError;

/// Upstream provider overrides accepted by `serve` and `lookup`.
#[derive(Debug, Clone, Default, Args)]
pub struct ProviderArgs {
    /// positionstack access key (overrides provider.access_key)
    #[arg(long, env = "GEOCACHE_ACCESS_KEY", hide_env_values = true)]
    pub access_key: Option<String>,

    /// positionstack base URL (overrides provider.base_url)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Upstream request timeout in seconds (overrides provider.timeout)
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

/// Logging overrides.
#[derive(Debug, Clone, Default, Args)]
pub struct LogArgs {
    /// Log level or filter directive (overrides logging.level)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Also write logs to this file (overrides logging.file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Resolve application settings: CLI flags first, then the config file.
pub fn resolve_app_config(
    config: &ConfigFile,
    provider: &ProviderArgs,
) -> Result<AppConfig, CliError> {
    let mut app_config = AppConfig::from_config_file(config);

    if let Some(key) = &provider.access_key {
        app_config = app_config.with_access_key(key.trim());
    }
    if let Some(base_url) = &provider.base_url {
        app_config = app_config.with_base_url(base_url.trim_end_matches('/'));
    }
    if let Some(timeout) = provider.timeout {
        app_config = app_config.with_timeout_secs(timeout);
    }

    if app_config.access_key.is_empty() {
        return Err(CliError::missing_access_key());
    }
    Ok(app_config)
}

/// Install logging from CLI flags and the config file.
pub fn init_logging(config: &ConfigFile, args: &LogArgs) -> Result<LoggingGuard, CliError> {
    let level = args.log_level.as_deref().unwrap_or(&config.logging.level);
    let file = args.log_file.as_ref().or(config.logging.file.as_ref());
    Ok(logging::init_logging(level, file.map(PathBuf::as_path))?)
}

/// Create the Tokio runtime used by async commands.
pub fn runtime() -> Result<tokio::runtime::Runtime, CliError> {
    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .map_err(|e| CliError::Runtime(e.to_string()))
}
