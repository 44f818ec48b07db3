//! Adapter configuration records and the result shapes built from them.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::NetbiosMode;

/// One IP-enabled adapter configuration as reported by the provider.
///
/// Values are read fresh on every call and never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterConfiguration {
    /// Adapter description (e.g. "Intel(R) Ethernet Connection I219-V").
    pub description: String,
    /// Provider index of the configuration.
    pub index: u32,
    /// Raw `TcpipNetbiosOptions` ordinal.
    pub netbios_ordinal: u32,
    /// Provider object path used to address the configuration for mutation.
    pub path: String,
}

impl AdapterConfiguration {
    /// Creates a new adapter configuration record.
    #[must_use]
    pub fn new(
        description: impl Into<String>,
        index: u32,
        netbios_ordinal: u32,
        path: impl Into<String>,
    ) -> Self {
        Self {
            description: description.into(),
            index,
            netbios_ordinal,
            path: path.into(),
        }
    }
}

/// Details reported by `get` for one adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetbiosDetails {
    /// Provider index of the configuration.
    #[serde(rename = "Index")]
    pub index: u32,
    /// Current NetBIOS mode.
    #[serde(rename = "NetBIOS")]
    pub netbios: NetbiosMode,
}

/// Details reported by `set` for one adapter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SetDetails {
    /// Provider index of the configuration.
    #[serde(rename = "Index")]
    pub index: u32,
    /// Human-readable outcome of the mutation.
    #[serde(rename = "Result")]
    pub result: String,
}

/// A result entry keyed by adapter description.
///
/// Serializes as a single-key map: `{"<description>": <details>}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyed<T> {
    /// Adapter description used as the map key.
    pub description: String,
    /// Per-adapter details.
    pub details: T,
}

impl<T> Keyed<T> {
    /// Creates a new keyed entry.
    #[must_use]
    pub fn new(description: impl Into<String>, details: T) -> Self {
        Self {
            description: description.into(),
            details,
        }
    }
}

impl<T: Serialize> Serialize for Keyed<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.description, &self.details)?;
        map.end()
    }
}

/// Entry returned by `get`.
pub type AdapterEntry = Keyed<NetbiosDetails>;

/// Entry returned by `set`.
pub type SetEntry = Keyed<SetDetails>;

/// Outcome of a `set` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetResponse {
    /// The setting was applied (or attempted) on every IP-enabled adapter.
    Applied(Vec<SetEntry>),
    /// The setting name was not recognised; nothing was touched.
    Rejected,
}

impl SetResponse {
    /// Returns `true` if the setting name was rejected.
    #[must_use]
    pub const fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected)
    }

    /// Returns the per-adapter entries, empty for a rejection.
    #[must_use]
    pub fn entries(&self) -> &[SetEntry] {
        match self {
            Self::Applied(entries) => entries,
            Self::Rejected => &[],
        }
    }
}

impl Serialize for SetResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Applied(entries) => entries.serialize(serializer),
            Self::Rejected => serializer.serialize_bool(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn adapter_entry_serializes_as_single_key_map() {
        let entry = AdapterEntry::new(
            "Ethernet Adapter",
            NetbiosDetails {
                index: 7,
                netbios: NetbiosMode::Enabled,
            },
        );

        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            value,
            json!({"Ethernet Adapter": {"Index": 7, "NetBIOS": "enabled"}})
        );
    }

    #[test]
    fn set_entry_serializes_result_message() {
        let entry = SetEntry::new(
            "Wi-Fi Adapter",
            SetDetails {
                index: 3,
                result: "Success. Set NetBIOS to disabled.".to_string(),
            },
        );

        let value = serde_json::to_value(&entry).unwrap();

        assert_eq!(
            value,
            json!({"Wi-Fi Adapter": {"Index": 3, "Result": "Success. Set NetBIOS to disabled."}})
        );
    }

    #[test]
    fn rejected_set_serializes_as_false() {
        let value = serde_json::to_value(SetResponse::Rejected).unwrap();
        assert_eq!(value, json!(false));
    }

    #[test]
    fn applied_set_serializes_as_list() {
        let response = SetResponse::Applied(vec![]);
        assert_eq!(serde_json::to_value(&response).unwrap(), json!([]));
        assert!(!response.is_rejected());
    }

    #[test]
    fn rejected_has_no_entries() {
        assert!(SetResponse::Rejected.entries().is_empty());
        assert!(SetResponse::Rejected.is_rejected());
    }

    #[test]
    fn configuration_new_sets_fields() {
        let config = AdapterConfiguration::new("eth", 1, 2, "path");
        assert_eq!(config.description, "eth");
        assert_eq!(config.index, 1);
        assert_eq!(config.netbios_ordinal, 2);
        assert_eq!(config.path, "path");
    }
}
