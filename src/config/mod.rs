//! Configuration layer for DNS Switch.
//!
//! This module provides:
//! - CLI argument parsing ([`Cli`], [`Command`])
//! - DNS provider presets ([`DnsPreset`], [`load_presets`], [`builtin_presets`])
//! - Presets file generation ([`write_default_presets`])
//! - Validated runtime settings ([`Settings`])
//! - Default values ([`defaults`])
//!
//! # Priority
//!
//! CLI arguments > presets file > built-in defaults. The presets file only
//! carries resolver presets; everything else (fallback encoding, timeout,
//! adapter match pattern) is CLI-or-default.

mod cli;
pub mod defaults;
mod error;
mod presets;
mod settings;


pub use cli::{Cli, Command};
pub use error::ConfigError;
pub use presets::{
    DnsPreset, builtin_presets, default_presets_path, default_presets_template, load_presets,
    write_default_presets,
};
pub use settings::Settings;
