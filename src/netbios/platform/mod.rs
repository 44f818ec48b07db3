//! Platform-specific management provider implementations.
//!
//! This module provides conditional compilation for platform-specific
//! implementations of the [`ManagementProvider`](super::ManagementProvider) trait.
//!
//! # Platform Support
//!
//! - **Windows**: Uses WMI (`Win32_NetworkAdapterConfiguration`) via the `wmi` crate,
//!   with COM initialization scoped through the `windows` crate.
//! - Other platforms have no NetBIOS-over-TCP/IP setting to manage.

#[cfg(all(windows, feature = "wmi"))]
mod windows;

#[cfg(all(windows, feature = "wmi"))]
pub use windows::{WmiProvider, WmiSession};

// Re-export platform-specific provider as PlatformProvider for convenience
#[cfg(all(windows, feature = "wmi"))]
pub use windows::WmiProvider as PlatformProvider;
