//! hazard - command line CDS curve calibration and valuation
//!
//! # Commands
//!
//! - `hazard calibrate --market-data <file>` - Bootstrap the hazard curve
//! - `hazard price --market-data <file> [--allow-negative-hazard]` - Value the trades in a market data file
//! - `hazard check` - Print and validate the configuration
//!
//! # Architecture
//!
//! Service layer over `credit_core`, `credit_models`, and `credit_optimiser`.
//! The binary owns configuration, file formats, and the tracing subscriber;
//! the library crates only emit events.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod market;

use commands::price::OutputFormat;
use config::CliConfig;
pub use error::{CliError, Result};

/// CDS hazard-curve calibration CLI
#[derive(Parser)]
#[command(name = "hazard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "hazard.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Bootstrap the hazard curve from market quotes
    Calibrate {
        /// Path to market data file (TOML)
        #[arg(short, long)]
        market_data: PathBuf,

        /// Write the curve snapshot as JSON
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Calibrate, then value the trades in the market data file
    Price {
        /// Path to market data file (TOML)
        #[arg(short, long)]
        market_data: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Price against a curve with negative hazards instead of failing
        #[arg(long)]
        allow_negative_hazard: bool,
    },

    /// Print and validate the configuration
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // `check` reports validation problems itself.
    let config = match cli.command {
        Commands::Check => CliConfig::load_or_default(&cli.config)?.with_env_override(),
        _ => CliConfig::load_with_env_and_validate(&cli.config)?,
    };

    let level = if cli.verbose {
        "debug"
    } else {
        config.log_level.as_str()
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .init();

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Calibrate {
            market_data,
            output,
        } => commands::calibrate::run(&config, &market_data, output.as_deref()),
        Commands::Price {
            market_data,
            format,
            allow_negative_hazard,
        } => commands::price::run(&config, &market_data, format, allow_negative_hazard),
        Commands::Check => commands::check::run(&config, &cli.config),
    }
}
