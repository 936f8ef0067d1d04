//! DNS Switch: Windows DNS Configuration Tool
//!
//! A library for enumerating active network adapters and switching their
//! DNS resolver configuration through netsh, with tiered discovery
//! fallback and encoding-robust external command invocation.

pub mod command;
pub mod config;
pub mod discovery;
pub mod dns;
