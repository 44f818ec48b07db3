//! Command execution.
//!
//! Turns a parsed command into one configurator call and wraps the
//! result in a [`Report`] for printing.

use thiserror::Error;

use netbios_conf::config::ValidatedConfig;
use netbios_conf::netbios::reboot::RebootRecorder;
use netbios_conf::netbios::{ManagementProvider, NetbiosConfigurator};
use netbios_conf::render::Report;

#[cfg(test)]
#[path = "run_tests.rs"]
mod tests;

/// Error type for runtime execution failures.
#[derive(Debug, Error)]
pub enum RunError {
    /// The configurator cannot run on this host.
    #[cfg(not(all(windows, feature = "wmi")))]
    #[error("{0}")]
    Unavailable(&'static str),

    /// A configurator operation failed.
    #[error("NetBIOS operation failed: {0}")]
    Netbios(#[from] netbios_conf::netbios::Error),

    /// Rendering the result failed.
    #[error("Failed to render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// A configurator operation selected on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation<'a> {
    /// Report the NetBIOS mode of every IP-enabled adapter.
    Get {
        /// Interface argument, passed through unfiltered.
        interface: Option<&'a str>,
    },
    /// Apply a NetBIOS mode to every IP-enabled adapter.
    Set {
        /// Requested setting name.
        setting: &'a str,
        /// Interface argument, passed through unfiltered.
        interface: Option<&'a str>,
    },
    /// List connection names of enabled adapters.
    Interfaces,
}

/// Runs one operation against the given configurator.
///
/// # Errors
///
/// Returns [`RunError::Netbios`] if the provider fails.
pub fn dispatch<P, R>(
    configurator: &NetbiosConfigurator<P, R>,
    operation: Operation<'_>,
) -> Result<Report, RunError>
where
    P: ManagementProvider,
    R: RebootRecorder,
{
    tracing::debug!("Running {operation:?}");

    let report = match operation {
        Operation::Get { interface } => Report::Adapters(configurator.get(interface)?),
        Operation::Set { setting, interface } => {
            Report::Set(configurator.set(setting, interface)?)
        }
        Operation::Interfaces => Report::Interfaces(configurator.list_interfaces()?),
    };

    Ok(report)
}

/// Executes an operation against the host's WMI provider.
///
/// # Errors
///
/// Returns an error if the provider fails.
#[cfg(all(windows, feature = "wmi"))]
pub fn execute(config: &ValidatedConfig, operation: Operation<'_>) -> Result<Report, RunError> {
    use netbios_conf::netbios::platform::PlatformProvider;

    let configurator = NetbiosConfigurator::new(PlatformProvider::new(config.namespace.as_str()));
    dispatch(&configurator, operation)
}

/// Executes an operation on a host without a WMI provider.
///
/// # Errors
///
/// Always returns [`RunError::Unavailable`].
#[cfg(not(all(windows, feature = "wmi")))]
pub fn execute(config: &ValidatedConfig, operation: Operation<'_>) -> Result<Report, RunError> {
    use netbios_conf::netbios::{Availability, REASON_WRONG_OS};

    tracing::debug!("No provider for {operation:?} with {config}");
    Err(RunError::Unavailable(
        Availability::detect().reason().unwrap_or(REASON_WRONG_OS),
    ))
}
