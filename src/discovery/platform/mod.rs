//! Platform-specific structured adapter sources.
//!
//! # Platform Support
//!
//! - **Windows**: `GetAdaptersAddresses` via the `windows` crate.
//! - Other platforms have no structured source; the stub fails the query
//!   so discovery falls straight through to netsh parsing (which will
//!   also fail off-Windows, ending in the empty-list outcome the session
//!   refuses to proceed on).

#[cfg(windows)]
mod windows;

#[cfg(windows)]
pub use windows::WindowsAdapterQuery;

// Re-export the platform-specific query as PlatformQuery for convenience
#[cfg(windows)]
pub use windows::WindowsAdapterQuery as PlatformQuery;

#[cfg(not(windows))]
mod unsupported;

#[cfg(not(windows))]
pub use unsupported::UnsupportedQuery;

#[cfg(not(windows))]
pub use unsupported::UnsupportedQuery as PlatformQuery;
