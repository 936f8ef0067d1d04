//! Error types for configuration parsing and validation.

use std::path::PathBuf;

use thiserror::Error;

use crate::dns::ServersError;

/// Error type for configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read the presets file.
    #[error("Failed to read presets file '{}': {source}", path.display())]
    FileRead {
        /// Path to the presets file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse the presets TOML.
    #[error("Failed to parse presets file: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Failed to write the presets file (for init command).
    #[error("Failed to write presets file '{}': {source}", path.display())]
    FileWrite {
        /// Path to the presets file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Unknown fallback encoding label.
    #[error("Unknown fallback encoding '{label}': expected a WHATWG encoding label such as 'gbk'")]
    UnknownEncoding {
        /// The label that could not be resolved
        label: String,
    },

    /// Invalid adapter match pattern.
    #[error("Invalid adapter match pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The invalid pattern
        pattern: String,
        /// Underlying regex error
        #[source]
        source: regex::Error,
    },

    /// A preset entry failed validation.
    #[error("Invalid preset '{name}': {source}")]
    InvalidPreset {
        /// Name of the offending preset
        name: String,
        /// Underlying validation error
        #[source]
        source: ServersError,
    },

    /// Command timeout must be greater than zero.
    #[error("Invalid timeout: must be greater than zero")]
    ZeroTimeout,
}
