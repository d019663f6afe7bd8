//! `geocache lookup`: one-shot lookups without starting the server.

use clap::{Args, Subcommand};
use geocache::app::GeocacheApp;
use geocache::config::ConfigFile;

use super::common::{init_logging, resolve_app_config, runtime, LogArgs, ProviderArgs};
use crate::error::CliError;

/// Lookup direction.
#[derive(Debug, Subcommand)]
pub enum LookupCommands {
    /// Resolve an address to coordinates
    Forward {
        /// Free-text address, e.g. "1600 Amphitheatre Parkway"
        address: String,
    },

    /// Resolve coordinates to the first numeric token of the address
    Reverse {
        /// Latitude in degrees
        #[arg(allow_negative_numbers = true)]
        latitude: f64,

        /// Longitude in degrees
        #[arg(allow_negative_numbers = true)]
        longitude: f64,
    },
}

/// Arguments for `lookup`.
#[derive(Debug, Args)]
pub struct LookupArgs {
    #[command(subcommand)]
    pub command: LookupCommands,

    #[command(flatten)]
    pub provider: ProviderArgs,

    #[command(flatten)]
    pub log: LogArgs,
}

/// Run one lookup and print the answer.
pub fn run(args: LookupArgs) -> Result<(), CliError> {
    let config = ConfigFile::load()?;
    let _log_guard = init_logging(&config, &args.log)?;
    let app_config = resolve_app_config(&config, &args.provider)?;

    let runtime = runtime()?;
    let answer = runtime.block_on(async {
        let app = GeocacheApp::new(app_config)?;
        let service = app.service();
        let answer = match args.command {
            LookupCommands::Forward { address } => {
                if address.trim().is_empty() {
                    return Err(CliError::Config("Address must not be blank".to_string()));
                }
                service.geocode(&address).await?
            }
            LookupCommands::Reverse {
                latitude,
                longitude,
            } => {
                if !latitude.is_finite() || !longitude.is_finite() {
                    return Err(CliError::Config(
                        "Latitude and longitude must be finite numbers".to_string(),
                    ));
                }
                service.reverse_geocode(latitude, longitude).await?
            }
        };
        Ok::<_, CliError>(answer)
    })?;

    println!("{}", answer);
    Ok(())
}
