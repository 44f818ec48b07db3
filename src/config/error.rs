//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

/// Error type for configuration operations.
///
/// Covers errors from parsing, validation, and file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the configuration file.
    #[error("Failed to read config file '{}': {source}", path.display())]
    FileRead {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the TOML configuration.
    #[error("Failed to parse TOML config: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write configuration file (for init command).
    #[error("Failed to write config file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the config file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Invalid output format value.
    #[error("Invalid output format '{value}': expected json or text")]
    InvalidFormat {
        /// The invalid value provided
        value: String,
    },

    /// Invalid WMI namespace.
    #[error("Invalid WMI namespace '{value}': {reason}")]
    InvalidNamespace {
        /// The invalid namespace
        value: String,
        /// Reason for invalidity
        reason: &'static str,
    },
}
