//! Geocache CLI - Command-line interface
//!
//! Runs the caching geocoding server, performs one-shot lookups and edits
//! `~/.geocache/config.ini`.

mod commands;
mod error;

use clap::{Parser, Subcommand};

use commands::config::ConfigCommands;
use commands::lookup::LookupArgs;
use commands::serve::ServeArgs;
use error::CliError;

#[derive(Debug, Parser)]
#[command(name = "geocache", version, about = "Caching HTTP façade for positionstack geocoding")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run a single forward or reverse lookup
    Lookup(LookupArgs),

    /// View or modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Serve(args) => commands::serve::run(args),
        Commands::Lookup(args) => commands::lookup::run(args),
        Commands::Config { command } => commands::config::run(command),
    }
}
