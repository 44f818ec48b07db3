//! NetBIOS-over-TCP/IP configuration for network adapters.
//!
//! This module provides types and traits for:
//! - The ordinal-significant NetBIOS mode ([`NetbiosMode`])
//! - Adapter configuration records and result entries ([`AdapterConfiguration`], [`AdapterEntry`], [`SetEntry`])
//! - The management provider seam ([`ManagementProvider`], [`ManagementSession`])
//! - Reading and applying modes ([`NetbiosConfigurator`])
//! - Load-time capability gating ([`Availability`])
//! - The process-wide reboot marker ([`reboot`])
//! - Platform-specific implementations ([`platform`])

mod adapter;
mod availability;
mod configurator;
mod error;
mod mode;
pub mod outcome;
pub mod platform;
mod provider;
pub mod reboot;


pub use adapter::{
    AdapterConfiguration, AdapterEntry, Keyed, NetbiosDetails, SetDetails, SetEntry, SetResponse,
};
pub use availability::{Availability, REASON_MISSING_DEPENDENCIES, REASON_WRONG_OS};
pub use configurator::NetbiosConfigurator;
pub use error::Error;
pub use mode::{NetbiosMode, ParseModeError};
pub use provider::{ManagementProvider, ManagementSession, ProviderError};
