//! Validated configuration after merging CLI and TOML sources.
//!
//! This module contains the final, validated configuration that is used
//! by the application. All validation is performed during construction.

use std::fmt;
use std::path::Path;

use crate::render::OutputFormat;

use super::cli::Cli;
use super::defaults;
use super::error::ConfigError;
use super::toml::TomlConfig;

/// Fully validated configuration ready for use by the application.
///
/// # Construction
///
/// Use [`ValidatedConfig::from_raw`] to create from CLI args and optional TOML config.
/// The function validates all inputs and returns errors for invalid configurations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedConfig {
    /// Output format for results
    pub format: OutputFormat,

    /// WMI namespace to connect to
    pub namespace: String,

    /// Verbose logging enabled
    pub verbose: bool,
}

impl fmt::Display for ValidatedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Config {{ format: {}, namespace: {}, verbose: {} }}",
            self.format, self.namespace, self.verbose,
        )
    }
}

impl ValidatedConfig {
    /// Creates a validated configuration from CLI arguments and optional TOML config.
    ///
    /// CLI arguments take precedence over TOML config values.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The TOML output format is not `json` or `text`
    /// - The WMI namespace is empty or not rooted at `ROOT`
    pub fn from_raw(cli: &Cli, toml: Option<&TomlConfig>) -> Result<Self, ConfigError> {
        let format = Self::resolve_format(cli, toml)?;
        let namespace = Self::resolve_namespace(toml)?;

        // Flags only enable, never disable
        let verbose = cli.verbose || toml.is_some_and(|t| t.log.verbose);

        Ok(Self {
            format,
            namespace,
            verbose,
        })
    }

    /// Loads and merges configuration from CLI and optional config file.
    ///
    /// If `cli.config` is set, loads the TOML file from that path.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The config file cannot be read or parsed
    /// - The merged configuration is invalid
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let toml = if let Some(ref path) = cli.config {
            Some(TomlConfig::load(path)?)
        } else {
            None
        };

        Self::from_raw(cli, toml.as_ref())
    }

    fn resolve_format(cli: &Cli, toml: Option<&TomlConfig>) -> Result<OutputFormat, ConfigError> {
        // CLI takes precedence
        if let Some(format) = cli.format {
            return Ok(format.into());
        }

        let format_str = toml
            .and_then(|t| t.output.format.as_deref())
            .unwrap_or(defaults::FORMAT);

        parse_format(format_str)
    }

    fn resolve_namespace(toml: Option<&TomlConfig>) -> Result<String, ConfigError> {
        let namespace = toml
            .and_then(|t| t.wmi.namespace.as_deref())
            .unwrap_or(defaults::NAMESPACE)
            .trim();

        if namespace.is_empty() {
            return Err(ConfigError::InvalidNamespace {
                value: namespace.to_string(),
                reason: "must not be empty",
            });
        }

        if !is_rooted(namespace) {
            return Err(ConfigError::InvalidNamespace {
                value: namespace.to_string(),
                reason: "must start with ROOT",
            });
        }

        Ok(namespace.to_string())
    }
}

/// Writes the default configuration template to a file.
///
/// # Errors
///
/// Returns an error if the file cannot be written.
pub fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let template = super::toml::default_config_template();
    std::fs::write(path, template).map_err(|e| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Returns true for `ROOT` itself or any namespace below it.
fn is_rooted(namespace: &str) -> bool {
    namespace.split_at_checked(4).is_some_and(|(prefix, rest)| {
        prefix.eq_ignore_ascii_case("root") && (rest.is_empty() || rest.starts_with('\\'))
    })
}

fn parse_format(s: &str) -> Result<OutputFormat, ConfigError> {
    match s.to_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "text" => Ok(OutputFormat::Text),
        _ => Err(ConfigError::InvalidFormat {
            value: s.to_string(),
        }),
    }
}
