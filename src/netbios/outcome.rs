//! Mapping of `SetTcpipNetbios` return codes to per-adapter outcomes.

use super::NetbiosMode;

/// Return code for a change applied immediately.
pub const CODE_SUCCESS: u32 = 0;

/// Return code for a change that takes effect after a reboot.
pub const CODE_REBOOT_REQUIRED: u32 = 1;

/// Return code for `default` requested on an adapter without DHCP.
pub const CODE_DHCP_NOT_ENABLED: u32 = 100;

/// Classified result of one `SetTcpipNetbios` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetOutcome {
    /// Applied immediately.
    Applied,
    /// Applied, pending a reboot.
    RebootRequired,
    /// DHCP is not enabled on the adapter, so `default` cannot be applied.
    DhcpNotEnabled,
    /// Any other return code.
    Failed(u32),
}

impl SetOutcome {
    /// Classifies a raw provider return code.
    #[must_use]
    pub const fn from_code(code: u32) -> Self {
        match code {
            CODE_SUCCESS => Self::Applied,
            CODE_REBOOT_REQUIRED => Self::RebootRequired,
            CODE_DHCP_NOT_ENABLED => Self::DhcpNotEnabled,
            other => Self::Failed(other),
        }
    }

    /// Renders the message reported for an adapter.
    #[must_use]
    pub fn message(self, mode: NetbiosMode) -> String {
        match self {
            Self::Applied => format!("Success. Set NetBIOS to {mode}."),
            Self::RebootRequired => format!("Success. Set NetBIOS to {mode}. Reboot required."),
            Self::DhcpNotEnabled => "DHCP not enabled. Cannot set to default.".to_string(),
            Self::Failed(code) => format!("Failed to set NetBIOS. Error code: {code}"),
        }
    }
}
