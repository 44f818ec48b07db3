//! TOML configuration file parsing.
//!
//! Defines the structure of the configuration file with serde.

use std::path::Path;

use serde::Deserialize;

use super::ConfigError;

/// Root configuration structure from TOML file.
///
/// All fields are optional to allow partial configuration
/// that can be merged with CLI arguments.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    /// Output configuration section
    #[serde(default)]
    pub output: OutputSection,

    /// WMI connection configuration
    #[serde(default)]
    pub wmi: WmiSection,

    /// Logging configuration
    #[serde(default)]
    pub log: LogSection,
}

/// Output configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputSection {
    /// Output format: "json" or "text"
    pub format: Option<String>,
}

/// WMI connection configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WmiSection {
    /// WMI namespace holding `Win32_NetworkAdapterConfiguration`
    pub namespace: Option<String>,
}

/// Logging configuration section.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogSection {
    /// Enable verbose logging
    #[serde(default)]
    pub verbose: bool,
}

impl TomlConfig {
    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }
}

/// Generates a default configuration file with comments.
#[must_use]
pub fn default_config_template() -> String {
    r#"# netbios-conf Configuration File

[output]
# Output format: "json" (default) or "text"
# Can be overridden by the --format CLI flag
format = "json"

[wmi]
# WMI namespace holding Win32_NetworkAdapterConfiguration (default: ROOT\CIMV2)
# namespace = 'ROOT\CIMV2'

[log]
# Enable debug logging (same as --verbose)
# verbose = false
"#
    .to_string()
}
