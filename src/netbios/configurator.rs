//! Reading and applying NetBIOS modes across IP-enabled adapters.

use super::outcome::SetOutcome;
use super::reboot::{ProcessRebootFlag, RebootRecorder};
use super::{
    AdapterConfiguration, AdapterEntry, Error, ManagementProvider, ManagementSession,
    NetbiosDetails, NetbiosMode, SetDetails, SetEntry, SetResponse,
};

/// Queries and mutates the NetBIOS mode of adapter configurations.
///
/// Stateless: every operation opens its own management session, which is
/// released when the operation returns, whether it succeeded or not.
///
/// # Interface selection
///
/// `get` and `set` accept an `interface` argument but do not filter on it.
/// Every IP-enabled adapter is read or mutated regardless of its value.
#[derive(Debug)]
pub struct NetbiosConfigurator<P, R = ProcessRebootFlag> {
    provider: P,
    reboot: R,
}

impl<P: ManagementProvider> NetbiosConfigurator<P> {
    /// Creates a configurator that records pending reboots process-wide.
    #[must_use]
    pub const fn new(provider: P) -> Self {
        Self {
            provider,
            reboot: ProcessRebootFlag,
        }
    }
}

impl<P: ManagementProvider, R: RebootRecorder> NetbiosConfigurator<P, R> {
    /// Creates a configurator with a custom reboot recorder.
    #[must_use]
    pub const fn with_reboot_recorder(provider: P, reboot: R) -> Self {
        Self { provider, reboot }
    }

    /// Reports the NetBIOS mode of every IP-enabled adapter.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Provider`] if the session or enumeration fails, and
    /// [`Error::UnknownOrdinal`] if an adapter reports an unmapped value.
    pub fn get(&self, interface: Option<&str>) -> Result<Vec<AdapterEntry>, Error> {
        note_unfiltered("get", interface);

        let session = self.provider.open()?;
        let configs = session.ip_enabled_configurations()?;
        tracing::debug!("Found {} IP-enabled adapter configuration(s)", configs.len());

        configs.into_iter().map(describe).collect()
    }

    /// Applies `setting` to every IP-enabled adapter.
    ///
    /// Returns [`SetResponse::Rejected`] without touching the provider if
    /// `setting` is not one of `default`, `enabled`, or `disabled`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Provider`] if the session, the enumeration, or a
    /// `SetTcpipNetbios` call fails outright. Non-zero return codes are
    /// reported in the entries instead.
    pub fn set(&self, setting: &str, interface: Option<&str>) -> Result<SetResponse, Error> {
        let Ok(mode) = setting.parse::<NetbiosMode>() else {
            tracing::warn!("Rejected NetBIOS setting '{setting}'");
            return Ok(SetResponse::Rejected);
        };
        note_unfiltered("set", interface);

        let session = self.provider.open()?;
        let configs = session.ip_enabled_configurations()?;

        let mut entries = Vec::with_capacity(configs.len());
        for config in &configs {
            let code = session.set_tcpip_netbios(config, mode)?;
            let outcome = SetOutcome::from_code(code);
            self.log_outcome(config, mode, outcome);

            entries.push(SetEntry::new(
                config.description.clone(),
                SetDetails {
                    index: config.index,
                    result: outcome.message(mode),
                },
            ));
        }

        Ok(SetResponse::Applied(entries))
    }

    /// Lists the connection IDs of adapters with networking enabled.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Provider`] if the session or enumeration fails.
    pub fn list_interfaces(&self) -> Result<Vec<String>, Error> {
        let session = self.provider.open()?;
        Ok(session.connected_interfaces()?)
    }

    fn log_outcome(&self, config: &AdapterConfiguration, mode: NetbiosMode, outcome: SetOutcome) {
        match outcome {
            SetOutcome::Applied => {
                tracing::info!("Set NetBIOS to {mode} on '{}'", config.description);
            }
            SetOutcome::RebootRequired => {
                tracing::info!(
                    "Set NetBIOS to {mode} on '{}', reboot required",
                    config.description
                );
                self.reboot.record_reboot();
            }
            SetOutcome::DhcpNotEnabled => {
                tracing::warn!(
                    "Cannot set NetBIOS to default on '{}': DHCP not enabled",
                    config.description
                );
            }
            SetOutcome::Failed(code) => {
                tracing::warn!(
                    "SetTcpipNetbios on '{}' returned {code}",
                    config.description
                );
            }
        }
    }
}

fn describe(config: AdapterConfiguration) -> Result<AdapterEntry, Error> {
    let netbios =
        NetbiosMode::from_ordinal(config.netbios_ordinal).ok_or_else(|| Error::UnknownOrdinal {
            description: config.description.clone(),
            ordinal: config.netbios_ordinal,
        })?;
    tracing::debug!(
        "Adapter '{}' (index {}) NetBIOS {netbios}",
        config.description,
        config.index
    );

    Ok(AdapterEntry::new(
        config.description,
        NetbiosDetails {
            index: config.index,
            netbios,
        },
    ))
}

fn note_unfiltered(operation: &str, interface: Option<&str>) {
    if let Some(name) = interface {
        tracing::warn!("{operation}: interface '{name}' is not used for selection, acting on all adapters");
    }
}
