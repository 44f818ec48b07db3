//! Load-time capability gate.

use std::fmt;

/// Reason reported when the host is not Windows.
pub const REASON_WRONG_OS: &str = "Module netbios: Only available on Windows";

/// Reason reported when the WMI binding is not compiled in.
pub const REASON_MISSING_DEPENDENCIES: &str = "Module netbios: Missing dependencies";

/// Whether the NetBIOS configurator can run on this host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Availability {
    /// All prerequisites are present.
    Available,
    /// A prerequisite is missing; carries a human-readable reason.
    Unavailable(&'static str),
}

impl Availability {
    /// Evaluates the gate for the current build and host.
    #[must_use]
    pub const fn detect() -> Self {
        Self::evaluate(cfg!(windows), cfg!(feature = "wmi"))
    }

    /// Evaluates the gate from explicit facts.
    ///
    /// The OS check takes precedence over the binding check.
    #[must_use]
    pub const fn evaluate(is_windows: bool, has_binding: bool) -> Self {
        if !is_windows {
            return Self::Unavailable(REASON_WRONG_OS);
        }
        if !has_binding {
            return Self::Unavailable(REASON_MISSING_DEPENDENCIES);
        }
        Self::Available
    }

    /// Returns true if the configurator can run.
    #[must_use]
    pub const fn is_available(self) -> bool {
        matches!(self, Self::Available)
    }

    /// Returns the unavailability reason, if any.
    #[must_use]
    pub const fn reason(self) -> Option<&'static str> {
        match self {
            Self::Available => None,
            Self::Unavailable(reason) => Some(reason),
        }
    }
}

impl fmt::Display for Availability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Available => f.write_str("available"),
            Self::Unavailable(reason) => write!(f, "unavailable: {reason}"),
        }
    }
}
