//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// DNS Switch: Windows DNS configuration tool
///
/// Enumerates active network adapters and assigns or resets their DNS
/// resolver configuration through netsh. Run without a subcommand to
/// start the interactive session. Changing DNS settings requires an
/// elevated (administrator) shell.
#[derive(Debug, Parser)]
#[command(name = "dns-switch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Fallback encoding for command output that is not valid UTF-8
    #[arg(long = "fallback-encoding", value_name = "LABEL", global = true)]
    pub fallback_encoding: Option<String>,

    /// Timeout for each external command, in seconds
    #[arg(long, value_name = "SECS", global = true)]
    pub timeout: Option<u64>,

    /// Path to the DNS presets file
    #[arg(long, short, global = true)]
    pub presets: Option<PathBuf>,

    /// Only offer adapters whose name matches this regex
    #[arg(long = "match", value_name = "PATTERN", global = true)]
    pub match_pattern: Option<String>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for dns-switch
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List active network adapters
    List,

    /// Show current DNS settings for an adapter
    Show {
        /// Adapter name as printed by `list`
        adapter: String,
    },

    /// Set static DNS servers on an adapter
    Set {
        /// Adapter name as printed by `list`
        adapter: String,
        /// Primary DNS server address, or the name of a preset
        primary: String,
        /// Secondary DNS server address
        secondary: Option<String>,
    },

    /// Reset an adapter to automatic (DHCP) DNS assignment
    Reset {
        /// Adapter name as printed by `list`
        adapter: String,
    },

    /// Generate a default presets file
    Init {
        /// Output path for the presets file
        #[arg(long, short, default_value = "presets.toml")]
        output: PathBuf,
    },
}

impl Cli {
    /// Parses CLI arguments from the command line.
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Parses CLI arguments from an iterator (useful for testing).
    pub fn parse_from_iter<I, T>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Self::parse_from(iter)
    }
}
