//! Error type for configurator operations.

use thiserror::Error;

use super::ProviderError;

/// Error returned by [`NetbiosConfigurator`](super::NetbiosConfigurator) operations.
///
/// Per-adapter mutation failures are not errors; they are reported as
/// result messages. Only failures of the provider itself end up here.
#[derive(Debug, Error)]
pub enum Error {
    /// The management provider failed.
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The provider reported a NetBIOS ordinal outside the known range.
    #[error("Adapter '{description}' reports unknown NetBIOS option {ordinal}")]
    UnknownOrdinal {
        /// Description of the offending adapter.
        description: String,
        /// The raw ordinal.
        ordinal: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_is_transparent() {
        let error = Error::from(ProviderError::Query {
            message: "timeout".to_string(),
        });
        assert_eq!(
            error.to_string(),
            "Failed to enumerate adapter configurations: timeout"
        );
    }

    #[test]
    fn unknown_ordinal_names_adapter_and_value() {
        let error = Error::UnknownOrdinal {
            description: "eth0".to_string(),
            ordinal: 9,
        };
        let text = error.to_string();
        assert!(text.contains("eth0"));
        assert!(text.contains('9'));
    }
}
