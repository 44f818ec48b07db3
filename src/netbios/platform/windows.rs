//! Windows management provider backed by WMI.

use serde::{Deserialize, Serialize};
use windows::Win32::Foundation::{RPC_E_CHANGED_MODE, RPC_E_TOO_LATE};
use windows::Win32::System::Com::{
    COINIT_MULTITHREADED, CoInitializeEx, CoInitializeSecurity, CoUninitialize, EOAC_NONE,
    RPC_C_AUTHN_LEVEL_DEFAULT, RPC_C_IMP_LEVEL_IMPERSONATE,
};
use wmi::{COMLibrary, WMIConnection};

use crate::config::defaults;
use crate::netbios::{
    AdapterConfiguration, ManagementProvider, ManagementSession, NetbiosMode, ProviderError,
};

const IP_ENABLED_QUERY: &str =
    "SELECT * FROM Win32_NetworkAdapterConfiguration WHERE IPEnabled = TRUE";

const NET_ENABLED_QUERY: &str =
    "SELECT NetConnectionID FROM Win32_NetworkAdapter WHERE NetEnabled = TRUE";

const SET_TCPIP_NETBIOS: &str = "SetTcpipNetbios";

#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_NetworkAdapterConfiguration")]
#[serde(rename_all = "PascalCase")]
struct Win32NetworkAdapterConfiguration {
    #[serde(rename = "__Path")]
    path: String,
    description: Option<String>,
    index: u32,
    tcpip_netbios_options: Option<u32>,
}

#[derive(Debug, Deserialize)]
#[serde(rename = "Win32_NetworkAdapter")]
struct Win32NetworkAdapter {
    #[serde(rename = "NetConnectionID")]
    net_connection_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SetTcpipNetbiosInput {
    tcpip_netbios_options: u32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct SetTcpipNetbiosOutput {
    return_value: u32,
}

/// Windows implementation of [`ManagementProvider`] using WMI.
///
/// # Example
///
/// ```no_run
/// use netbios_conf::netbios::{NetbiosConfigurator, platform::WmiProvider};
///
/// let configurator = NetbiosConfigurator::new(WmiProvider::default());
/// for entry in configurator.get(None).expect("Failed to query adapters") {
///     println!("{}: {}", entry.description, entry.details.netbios);
/// }
/// ```
#[derive(Debug, Clone)]
pub struct WmiProvider {
    namespace: String,
}

impl WmiProvider {
    /// Creates a provider connecting to the given WMI namespace.
    #[must_use]
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// Returns the WMI namespace this provider connects to.
    #[must_use]
    pub fn namespace(&self) -> &str {
        &self.namespace
    }
}

impl Default for WmiProvider {
    fn default() -> Self {
        Self::new(defaults::NAMESPACE)
    }
}

impl ManagementProvider for WmiProvider {
    type Session = WmiSession;

    fn open(&self) -> Result<WmiSession, ProviderError> {
        let com = ComGuard::init()?;
        // SAFETY: `com` keeps COM initialized on this thread and is stored in
        // the session after the connection, so it outlives every use of `com_lib`.
        let com_lib = unsafe { COMLibrary::assume_initialized() };
        let connection = WMIConnection::with_namespace_path(&self.namespace, com_lib)?;
        tracing::debug!("Opened WMI session on {}", self.namespace);

        Ok(WmiSession {
            connection,
            _com: com,
        })
    }
}

/// An open WMI connection inside an initialized COM apartment.
///
/// Dropping the session closes the connection, then uninitializes COM.
pub struct WmiSession {
    // Field order matters: the connection must be released before COM.
    connection: WMIConnection,
    _com: ComGuard,
}

impl std::fmt::Debug for WmiSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WmiSession").finish_non_exhaustive()
    }
}

impl ManagementSession for WmiSession {
    fn ip_enabled_configurations(&self) -> Result<Vec<AdapterConfiguration>, ProviderError> {
        let rows: Vec<Win32NetworkAdapterConfiguration> =
            self.connection.raw_query(IP_ENABLED_QUERY)?;

        rows.into_iter().map(into_configuration).collect()
    }

    fn set_tcpip_netbios(
        &self,
        config: &AdapterConfiguration,
        mode: NetbiosMode,
    ) -> Result<u32, ProviderError> {
        let input = SetTcpipNetbiosInput {
            tcpip_netbios_options: mode.ordinal(),
        };
        let output: SetTcpipNetbiosOutput = self
            .connection
            .exec_instance_method::<Win32NetworkAdapterConfiguration, _>(
                &config.path,
                SET_TCPIP_NETBIOS,
                input,
            )
            .map_err(|e| ProviderError::Invocation {
                method: SET_TCPIP_NETBIOS,
                index: config.index,
                message: e.to_string(),
            })?;

        Ok(output.return_value)
    }

    fn connected_interfaces(&self) -> Result<Vec<String>, ProviderError> {
        let rows: Vec<Win32NetworkAdapter> = self.connection.raw_query(NET_ENABLED_QUERY)?;

        Ok(rows
            .into_iter()
            .filter_map(|row| row.net_connection_id)
            .collect())
    }
}

fn into_configuration(
    row: Win32NetworkAdapterConfiguration,
) -> Result<AdapterConfiguration, ProviderError> {
    let description = row.description.unwrap_or_default();
    let ordinal = row.tcpip_netbios_options.ok_or_else(|| ProviderError::Query {
        message: format!("adapter '{description}' has no TcpipNetbiosOptions value"),
    })?;

    Ok(AdapterConfiguration::new(
        description,
        row.index,
        ordinal,
        row.path,
    ))
}

/// Keeps COM initialized on the current thread for the guard's lifetime.
struct ComGuard {
    owns_init: bool,
}

impl ComGuard {
    fn init() -> Result<Self, ProviderError> {
        // SAFETY: CoInitializeEx has no pointer arguments here; every
        // successful call (S_OK or S_FALSE) is balanced in Drop.
        let hr = unsafe { CoInitializeEx(None, COINIT_MULTITHREADED) };

        // Already initialized with another apartment model by the caller.
        if hr == RPC_E_CHANGED_MODE {
            return Ok(Self { owns_init: false });
        }
        hr.ok()?;

        let guard = Self { owns_init: true };
        init_security()?;
        Ok(guard)
    }
}

/// Sets process-wide impersonation so WMI can run instance methods.
///
/// Security can be initialized only once per process; a second attempt
/// reports `RPC_E_TOO_LATE` and keeps the existing settings.
fn init_security() -> Result<(), ProviderError> {
    // SAFETY: All pointer arguments are `None`; the call only configures
    // process-wide COM security defaults.
    let result = unsafe {
        CoInitializeSecurity(
            None,
            -1,
            None,
            None,
            RPC_C_AUTHN_LEVEL_DEFAULT,
            RPC_C_IMP_LEVEL_IMPERSONATE,
            None,
            EOAC_NONE,
            None,
        )
    };

    match result {
        Err(e) if e.code() == RPC_E_TOO_LATE => Ok(()),
        other => other.map_err(ProviderError::from),
    }
}

impl Drop for ComGuard {
    fn drop(&mut self) {
        if self.owns_init {
            // SAFETY: Balances the successful CoInitializeEx in `init`.
            unsafe { CoUninitialize() };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_provider_uses_cimv2() {
        assert_eq!(WmiProvider::default().namespace(), r"ROOT\CIMV2");
    }

    #[test]
    fn into_configuration_copies_fields() {
        let row = Win32NetworkAdapterConfiguration {
            path: "path".to_string(),
            description: Some("nic".to_string()),
            index: 4,
            tcpip_netbios_options: Some(2),
        };

        let config = into_configuration(row).unwrap();

        assert_eq!(config, AdapterConfiguration::new("nic", 4, 2, "path"));
    }

    #[test]
    fn into_configuration_requires_netbios_value() {
        let row = Win32NetworkAdapterConfiguration {
            path: "path".to_string(),
            description: Some("nic".to_string()),
            index: 4,
            tcpip_netbios_options: None,
        };

        assert!(matches!(
            into_configuration(row),
            Err(ProviderError::Query { .. })
        ));
    }

    #[test]
    fn com_guard_is_reentrant() {
        let outer = ComGuard::init().unwrap();
        let inner = ComGuard::init().unwrap();
        drop(inner);
        drop(outer);
    }

    // Integration test: queries the live WMI provider.
    #[test]
    fn ip_enabled_configurations_have_known_modes() {
        let session = WmiProvider::default().open().expect("open() failed");
        let configs = session
            .ip_enabled_configurations()
            .expect("enumeration failed");

        for config in &configs {
            assert!(
                NetbiosMode::from_ordinal(config.netbios_ordinal).is_some(),
                "Unexpected ordinal: {config:?}"
            );
        }
    }

    // Integration test: re-applies each adapter's current mode, which leaves
    // the host unchanged, and checks that the method call itself succeeds.
    #[test]
    fn set_tcpip_netbios_returns_code_for_current_mode() {
        let session = WmiProvider::default().open().expect("open() failed");
        let configs = session
            .ip_enabled_configurations()
            .expect("enumeration failed");

        for config in &configs {
            let mode = NetbiosMode::from_ordinal(config.netbios_ordinal)
                .expect("adapter reports a known mode");
            let result = session.set_tcpip_netbios(config, mode);

            assert!(
                result.is_ok(),
                "SetTcpipNetbios failed on {config:?}: {:?}",
                result.err()
            );
        }
    }

    #[test]
    fn connected_interfaces_succeeds() {
        let session = WmiProvider::default().open().expect("open() failed");
        let result = session.connected_interfaces();

        assert!(result.is_ok(), "connected_interfaces() failed: {:?}", result.err());
    }

    #[test]
    fn sessions_can_be_reopened() {
        let provider = WmiProvider::default();
        drop(provider.open().expect("first open() failed"));
        drop(provider.open().expect("second open() failed"));
    }
}
