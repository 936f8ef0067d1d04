//! Adapter discovery with tiered fallback.
//!
//! This module provides types and traits for:
//! - Representing discovered adapters ([`Adapter`])
//! - The structured-query seam ([`AdapterQuery`], [`AdapterRecord`])
//! - Positional parsing of netsh output ([`parse_interface_table`], [`find_field`])
//! - Two-tier discovery ([`AdapterDirectory`])
//! - Platform-specific structured sources ([`platform`])

mod adapter;
mod directory;
mod parse;
pub mod platform;
mod query;


pub use adapter::{Adapter, UNKNOWN_INDEX, UNKNOWN_KIND};
pub use directory::AdapterDirectory;
pub use parse::{InterfaceRow, find_field, parse_interface_table};
pub use query::{AdapterQuery, AdapterRecord, QueryError};
