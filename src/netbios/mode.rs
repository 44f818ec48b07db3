//! NetBIOS-over-TCP/IP mode and its ordinal encoding.

use std::fmt;
use std::str::FromStr;

use serde::{Serialize, Serializer};
use thiserror::Error;

/// NetBIOS-over-TCP/IP setting of a single adapter configuration.
///
/// The discriminants are the values `Win32_NetworkAdapterConfiguration`
/// reports in `TcpipNetbiosOptions` and accepts in `SetTcpipNetbios`.
/// Their order is part of the provider contract and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum NetbiosMode {
    /// Use the NetBIOS setting handed out by the DHCP server.
    Default = 0,
    /// Force NetBIOS over TCP/IP on.
    Enabled = 1,
    /// Force NetBIOS over TCP/IP off.
    Disabled = 2,
}

/// Error returned when a string does not name a [`NetbiosMode`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid NetBIOS setting '{value}': expected default, enabled, or disabled")]
pub struct ParseModeError {
    /// The rejected input.
    pub value: String,
}

impl NetbiosMode {
    /// All modes, indexed by ordinal.
    pub const ALL: [Self; 3] = [Self::Default, Self::Enabled, Self::Disabled];

    /// Returns the mode for a provider ordinal, or `None` if out of range.
    #[must_use]
    pub fn from_ordinal(ordinal: u32) -> Option<Self> {
        usize::try_from(ordinal)
            .ok()
            .and_then(|idx| Self::ALL.get(idx).copied())
    }

    /// Returns the ordinal passed to the provider.
    #[must_use]
    pub const fn ordinal(self) -> u32 {
        self as u32
    }

    /// Returns the lowercase name used on the command line and in results.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Enabled => "enabled",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for NetbiosMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NetbiosMode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| ParseModeError {
                value: s.to_string(),
            })
    }
}

impl Serialize for NetbiosMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod ordinals {
        use super::*;

        #[test]
        fn ordinals_follow_provider_encoding() {
            assert_eq!(NetbiosMode::Default.ordinal(), 0);
            assert_eq!(NetbiosMode::Enabled.ordinal(), 1);
            assert_eq!(NetbiosMode::Disabled.ordinal(), 2);
        }

        #[test]
        fn all_is_indexed_by_ordinal() {
            for (idx, mode) in NetbiosMode::ALL.iter().enumerate() {
                assert_eq!(mode.ordinal() as usize, idx);
            }
        }

        #[test]
        fn from_ordinal_maps_known_values() {
            assert_eq!(NetbiosMode::from_ordinal(0), Some(NetbiosMode::Default));
            assert_eq!(NetbiosMode::from_ordinal(1), Some(NetbiosMode::Enabled));
            assert_eq!(NetbiosMode::from_ordinal(2), Some(NetbiosMode::Disabled));
        }

        #[test]
        fn from_ordinal_rejects_out_of_range() {
            assert_eq!(NetbiosMode::from_ordinal(3), None);
            assert_eq!(NetbiosMode::from_ordinal(u32::MAX), None);
        }
    }

    mod parsing {
        use super::*;

        #[test]
        fn parses_lowercase_names() {
            assert_eq!("default".parse::<NetbiosMode>(), Ok(NetbiosMode::Default));
            assert_eq!("enabled".parse::<NetbiosMode>(), Ok(NetbiosMode::Enabled));
            assert_eq!("disabled".parse::<NetbiosMode>(), Ok(NetbiosMode::Disabled));
        }

        #[test]
        fn rejects_unknown_names() {
            let err = "bogus".parse::<NetbiosMode>().unwrap_err();
            assert_eq!(err.value, "bogus");
            assert!(err.to_string().contains("bogus"));
        }

        #[test]
        fn names_are_case_sensitive() {
            assert!("Enabled".parse::<NetbiosMode>().is_err());
        }

        #[test]
        fn display_matches_parse_input() {
            for mode in NetbiosMode::ALL {
                assert_eq!(mode.to_string().parse::<NetbiosMode>(), Ok(mode));
            }
        }
    }

    #[test]
    fn serializes_as_name() {
        let json = serde_json::to_string(&NetbiosMode::Disabled).unwrap();
        assert_eq!(json, "\"disabled\"");
    }
}
