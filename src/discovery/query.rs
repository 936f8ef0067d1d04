//! Structured adapter query seam and raw record type.

use thiserror::Error;

/// Raw adapter record from the structured system-management source.
///
/// Fields mirror what the OS reports and may individually be absent.
/// Validation happens in the directory, which skips incomplete records
/// instead of failing the whole enumeration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdapterRecord {
    /// Whether the adapter is administratively enabled and connected.
    pub enabled: Option<bool>,
    /// Connection identifier usable in netsh `name=` arguments.
    pub connection_id: Option<String>,
    /// Friendly description of the adapter hardware.
    pub description: Option<String>,
    /// Interface index as reported by the OS.
    pub interface_index: Option<u32>,
}

/// Error type for structured adapter queries.
///
/// A failing query is never fatal to discovery; the directory logs it and
/// falls through to netsh text parsing.
#[derive(Debug, Error)]
pub enum QueryError {
    /// Windows API call failed.
    #[cfg(windows)]
    #[error("Windows API error: {0}")]
    WindowsApi(#[from] windows::core::Error),

    /// No structured adapter source exists on this platform.
    #[error("structured adapter queries are not supported on {os}")]
    Unsupported {
        /// The host operating system.
        os: &'static str,
    },
}

/// Trait for querying the structured adapter source.
///
/// # Design
///
/// - Seam for dependency injection: tests provide scripted records
/// - Platform-specific implementations provided in [`super::platform`]
/// - Implementations return ALL records; validation and enabled-state
///   filtering are done by the directory
pub trait AdapterQuery: Send + Sync {
    /// Returns raw records for every adapter the source knows about.
    ///
    /// # Errors
    ///
    /// Returns [`QueryError`] when the source itself is unreachable; an
    /// individual malformed record is represented by `None` fields, not
    /// by an error.
    fn records(&self) -> Result<Vec<AdapterRecord>, QueryError>;
}
