//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for Mailroom using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// Exit code for a completed command
pub const EXIT_OK: i32 = 0;
/// Exit code for a transfer that was validated and denied
pub const EXIT_DENIED: i32 = 1;
/// Exit code for configuration problems
pub const EXIT_CONFIG_ERROR: i32 = 2;
/// Exit code for anything else
pub const EXIT_FATAL: i32 = 5;

/// Mailroom - mail container transfer tool
#[derive(Parser, Debug)]
#[command(name = "mailroom")]
#[command(version, about, long_about = None)]
#[command(author = "Mailroom Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "mailroom.toml", env = "MAILROOM_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MAILROOM_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Transfer mail items out of a container
    Transfer(commands::transfer::TransferArgs),

    /// Show a mail container from the selected data store
    Show(commands::show::ShowArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}
