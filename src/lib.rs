//! netbios-conf: NetBIOS-over-TCP/IP configurator
//!
//! A library for reading and setting the NetBIOS-over-TCP/IP mode of
//! Windows network adapters through WMI.

pub mod config;
pub mod netbios;
pub mod render;
