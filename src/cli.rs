//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "provgen")]
#[command(author, version, about = "Provisioning config generator for FTTH and voice VLANs")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Policy file path
    #[arg(short, long, default_value = "/etc/provgen/policy.yaml", global = true)]
    pub config: PathBuf,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug output)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Provision an FTTH town (Cisco static routes + MikroTik script)
    Ftth,

    /// Provision a voice VLAN (Cisco sub-interface + Kea subnet)
    Voice,

    /// Show version
    Version,
}
