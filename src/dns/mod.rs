//! DNS configuration control.
//!
//! This module provides types for:
//! - Resolver address pairs ([`DnsServers`])
//! - Reading and writing adapter DNS configuration ([`DnsController`])

mod controller;
mod servers;

#[cfg(test)]
mod controller_tests;

pub use controller::{DnsController, DnsError};
pub use servers::{DnsServers, ServersError};
