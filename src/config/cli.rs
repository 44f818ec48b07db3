//! CLI argument parsing using clap.
//!
//! Defines the command-line interface with all options and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use super::defaults;
use crate::render::OutputFormat;

/// netbios-conf: NetBIOS-over-TCP/IP configurator
///
/// Reads and sets the NetBIOS mode of the IP-enabled network adapters
/// on a Windows host through WMI.
#[derive(Debug, Parser)]
#[command(name = "netbios-conf")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, global = true)]
    pub format: Option<FormatArg>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    pub verbose: bool,
}

/// Subcommands for netbios-conf
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the NetBIOS setting of every IP-enabled adapter
    Get {
        /// Adapter connection name (accepted, but all adapters are reported)
        interface: Option<String>,
    },

    /// Set NetBIOS on every IP-enabled adapter
    Set {
        /// New setting: default, enabled, or disabled
        setting: String,

        /// Adapter connection name (accepted, but all adapters are changed)
        interface: Option<String>,
    },

    /// List connection names of adapters with networking enabled
    Interfaces,

    /// Generate a default configuration file
    Init {
        /// Output path for the configuration file
        #[arg(long, short, default_value = defaults::CONFIG_FILE)]
        output: PathBuf,
    },
}

/// Output format argument for CLI parsing
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Pretty-printed JSON
    Json,
    /// One line per adapter
    Text,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Json => Self::Json,
            FormatArg::Text => Self::Text,
        }
    }
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

    /// Returns true if this is the init command.
    #[must_use]
    pub const fn is_init(&self) -> bool {
        matches!(self.command, Command::Init { .. })
    }
}
