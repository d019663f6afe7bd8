//! `geocache serve`: run the HTTP server.

use std::net::SocketAddr;

use clap::Args;
use geocache::app::GeocacheApp;
use geocache::config::ConfigFile;
use geocache::server::shutdown_signal;
use tracing::info;

use super::common::{init_logging, resolve_app_config, runtime, LogArgs, ProviderArgs};
use crate::error::CliError;

/// Arguments for `serve`.
#[derive(Debug, Args)]
pub struct ServeArgs {
    /// Listen address (overrides server.bind)
    #[arg(long)]
    pub bind: Option<SocketAddr>,

    #[command(flatten)]
    pub provider: ProviderArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Serve until Ctrl-C.
pub fn run(args: ServeArgs) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let _log_guard = init_logging(&config, &args.log)?;

    let mut app_config = resolve_app_config(&config, &args.provider)?;
    if let Some(bind) = args.bind {
        app_config = app_config.with_bind(bind);
    }

    let runtime = runtime()?;
    runtime.block_on(async {
        let app = GeocacheApp::new(app_config)?;
        let listener = app.bind().await?;
        info!(addr = %app.config().bind, "Starting geocache server");
        app.serve(listener, shutdown_signal()).await?;
        Ok(())
    })
}
