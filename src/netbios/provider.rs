//! Management provider seam and error types.

use thiserror::Error;

use super::{AdapterConfiguration, NetbiosMode};

/// Error type for management provider operations.
///
/// Describes what went wrong without dictating recovery strategy.
/// The configurator never catches these; they reach the caller as-is.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// WMI query or method call failed.
    #[cfg(all(windows, feature = "wmi"))]
    #[error("WMI error: {0}")]
    Wmi(#[from] wmi::WMIError),

    /// The management session could not be opened.
    #[error("Failed to open management session: {message}")]
    Session {
        /// Error message describing the failure.
        message: String,
    },

    /// Enumerating adapter configurations failed.
    #[error("Failed to enumerate adapter configurations: {message}")]
    Query {
        /// Error message describing the failure.
        message: String,
    },

    /// Invoking a provider method failed before it produced a return code.
    #[error("Failed to invoke {method} on adapter {index}: {message}")]
    Invocation {
        /// Provider method name.
        method: &'static str,
        /// Index of the targeted adapter configuration.
        index: u32,
        /// Error message describing the failure.
        message: String,
    },
}

/// Opens scoped sessions against the OS management subsystem.
///
/// # Design
///
/// - The session type owns every native resource acquired by [`open`]
/// - Dropping the session releases those resources, on success and error paths alike
/// - Enables dependency injection for testing with mock implementations
///
/// [`open`]: ManagementProvider::open
pub trait ManagementProvider {
    /// Session handle released on drop.
    type Session: ManagementSession;

    /// Acquires a new management session.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the subsystem cannot be initialized or connected.
    fn open(&self) -> Result<Self::Session, ProviderError>;
}

/// Operations available while a management session is open.
pub trait ManagementSession {
    /// Returns every adapter configuration with IP enabled, in provider order.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the enumeration fails.
    fn ip_enabled_configurations(&self) -> Result<Vec<AdapterConfiguration>, ProviderError>;

    /// Calls `SetTcpipNetbios` on one configuration and returns the raw return code.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the call cannot be made at all.
    /// A non-zero return code is not an error.
    fn set_tcpip_netbios(
        &self,
        config: &AdapterConfiguration,
        mode: NetbiosMode,
    ) -> Result<u32, ProviderError>;

    /// Returns the connection IDs of all adapters with networking enabled.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] if the enumeration fails.
    fn connected_interfaces(&self) -> Result<Vec<String>, ProviderError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_error_displays_message() {
        let error = ProviderError::Session {
            message: "CoInitializeEx failed".to_string(),
        };
        assert!(error.to_string().contains("CoInitializeEx failed"));
    }

    #[test]
    fn query_error_displays_message() {
        let error = ProviderError::Query {
            message: "access denied".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to enumerate adapter configurations: access denied"
        );
    }

    #[test]
    fn invocation_error_names_method_and_index() {
        let error = ProviderError::Invocation {
            method: "SetTcpipNetbios",
            index: 12,
            message: "RPC unavailable".to_string(),
        };
        let text = error.to_string();
        assert!(text.contains("SetTcpipNetbios"));
        assert!(text.contains("12"));
        assert!(text.contains("RPC unavailable"));
    }
}
