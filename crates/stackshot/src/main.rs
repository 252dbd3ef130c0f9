//! Stackshot CLI - pixel-wise image averaging for long-exposure style
//! composites.
//!
//! Stackshot reads every qualifying image in a directory, sums their
//! pixel values, and writes the mean as a single output image.
//!
//! # Usage
//!
//! ```bash
//! # Average every .png in a directory into ./result.png
//! stackshot stack ./screens
//!
//! # Custom output path and a JSON run report
//! stackshot stack ./screens --output composite.png --report report.json
//!
//! # View configuration
//! stackshot config show
//! ```

use clap::{Parser, Subcommand};

mod cli;
mod logging;

/// Stackshot - average a directory of images into one composite.
#[derive(Parser, Debug)]
#[command(name = "stackshot")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose (debug) logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output logs in JSON format
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Average every qualifying image in a directory
    Stack(cli::stack::StackArgs),

    /// View and manage configuration
    Config(cli::config::ConfigArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging from config, with CLI verbose override.
    // Note: logging isn't initialized yet, so use eprintln for config warnings.
    let config = match stackshot_core::Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Failed to load config: {e}\n  \
                 Using default configuration. Check your config file with `stackshot config path`."
            );
            stackshot_core::Config::default()
        }
    };
    logging::init(&config.logging, cli.verbose, cli.json_logs);

    tracing::debug!("stackshot v{}", stackshot_core::VERSION);

    match cli.command {
        Commands::Stack(args) => cli::stack::execute(args, config),
        Commands::Config(args) => cli::config::execute(args),
    }
}
