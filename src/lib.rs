//! # provgen - Provisioning config generator for FTTH and voice VLANs
//!
//! An interactive operator tool for turning up broadband towns and voice
//! VLANs on Metro's network. Each flow asks a fixed sequence of addressing
//! questions, validates every answer against the address policy tables,
//! and prints ready-to-paste configuration for the routers involved.
//!
//! ## Features
//!
//! - **Validated input** - Every answer is checked against Metro's address
//!   plan before it can reach a template; bad lines re-prompt in place
//! - **Byte-stable output** - Renderers are pure string builders, so the
//!   emitted configuration is safe to diff against previous turn-ups
//! - **Three dialects** - Cisco IOS XR stanzas, a MikroTik RouterOS
//!   script, and a Kea DHCPv4 subnet fragment
//! - **Overridable policy** - Address tables load from YAML, so lab
//!   environments run the same tool against test space
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                       provgen                        │
//! ├──────────────────────────────────────────────────────┤
//! │  CLI (clap)                                          │
//! │    └── Commands: ftth, voice, version                │
//! ├──────────────────────────────────────────────────────┤
//! │  Policy (serde_yaml)                                 │
//! │    └── Supernets, gateways, VLAN whitelists          │
//! ├──────────────────────────────────────────────────────┤
//! │  Collector (Console trait)                           │
//! │    └── Prompt, validate, re-prompt per field         │
//! ├──────────────────────────────────────────────────────┤
//! │  Renderers (pure string builders)                    │
//! │    ├── cisco: static routes, voice sub-interface     │
//! │    ├── routeros: FTTH provisioning script            │
//! │    └── kea: voice DHCPv4 subnet                      │
//! └──────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example Usage
//!
//! ```no_run
//! use provgen::policy::Policy;
//! use provgen::prompt::StdioConsole;
//!
//! fn main() -> anyhow::Result<()> {
//!     let policy = Policy::default();
//!     let mut console = StdioConsole::new();
//!
//!     // Walks the voice questionnaire on the terminal, then returns the
//!     // rendered Cisco and Kea configuration in one string
//!     let output = provgen::commands::voice::generate(&mut console, &policy)?;
//!     println!("{}", output);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Modules
//!
//! - [`cli`] - Command-line interface definitions
//! - [`collector`] - Interactive prompt loops, one per questionnaire field
//! - [`commands`] - CLI command implementations
//! - [`error`] - Input rejection taxonomy
//! - [`policy`] - Address tables and their YAML overrides
//! - [`prompt`] - Console abstraction over stdin/stdout
//! - [`render`] - Per-dialect configuration renderers
//! - [`subnet`] - Usable-host derivations over networks
//! - [`validation`] - Per-field validation rules

pub mod cli;
pub mod collector;
pub mod commands;
pub mod error;
pub mod policy;
pub mod prompt;
pub mod render;
pub mod subnet;
pub mod validation;

pub use cli::{Cli, Commands};
pub use error::ValidationError;
pub use policy::Policy;
