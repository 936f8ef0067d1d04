//! External command invocation layer.
//!
//! This module provides types and traits for:
//! - Two-tier output decoding ([`DecodePolicy`])
//! - Abstracting command execution ([`CommandRunner`])
//! - Production command runner over `tokio::process` ([`SystemRunner`])
//! - Captured command results ([`CommandOutput`])

mod decode;
mod runner;

#[cfg(test)]
mod runner_tests;

pub use decode::DecodePolicy;
pub use runner::{CommandError, CommandOutput, CommandRunner, SystemRunner};
