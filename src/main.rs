//! provgen - Provisioning config generator for FTTH and voice VLANs
//!
//! Interactive questionnaires that print ready-to-paste Cisco, MikroTik
//! and Kea configuration.

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use provgen::cli::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity. Logs go to stderr; stdout carries
    // only prompts and the rendered configuration.
    let log_level = if cli.verbose {
        Level::DEBUG
    } else if cli.quiet {
        Level::ERROR
    } else {
        Level::INFO
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_thread_ids(false)
        .without_time()
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    // Execute command
    match cli.command {
        Commands::Ftth => provgen::commands::ftth::run(&cli.config),
        Commands::Voice => provgen::commands::voice::run(&cli.config),
        Commands::Version => {
            println!("provgen {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
