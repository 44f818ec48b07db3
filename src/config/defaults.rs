//! Default values for configuration options.
//!
//! Centralized constants to avoid magic strings scattered across the codebase.

/// Default output format.
pub const FORMAT: &str = "json";

/// Default WMI namespace holding the network adapter classes.
pub const NAMESPACE: &str = r"ROOT\CIMV2";

/// Default path written by the `init` subcommand.
pub const CONFIG_FILE: &str = "netbios-conf.toml";
