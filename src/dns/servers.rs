//! Resolver address pairs.

use std::fmt;

use thiserror::Error;

/// Error type for invalid server specifications.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServersError {
    /// A primary address is required and must be non-empty.
    #[error("primary DNS server must not be empty")]
    EmptyPrimary,
}

/// An ordered primary/secondary resolver address pair.
///
/// Only non-emptiness of the primary is enforced here. Address syntax is
/// validated by netsh itself; a malformed address surfaces as a command
/// failure when the configuration is applied, not as a rejection here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsServers {
    primary: String,
    secondary: Option<String>,
}

impl DnsServers {
    /// Creates a server pair. A blank secondary counts as absent.
    ///
    /// # Errors
    ///
    /// Returns [`ServersError::EmptyPrimary`] when the primary address is
    /// empty or whitespace.
    pub fn new(
        primary: impl Into<String>,
        secondary: Option<String>,
    ) -> Result<Self, ServersError> {
        let primary = primary.into();
        if primary.trim().is_empty() {
            return Err(ServersError::EmptyPrimary);
        }
        let secondary = secondary.filter(|addr| !addr.trim().is_empty());
        Ok(Self { primary, secondary })
    }

    /// The primary resolver address.
    #[must_use]
    pub fn primary(&self) -> &str {
        &self.primary
    }

    /// The secondary resolver address, if configured.
    #[must_use]
    pub fn secondary(&self) -> Option<&str> {
        self.secondary.as_deref()
    }
}

impl fmt::Display for DnsServers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.secondary {
            Some(secondary) => write!(f, "{}, {secondary}", self.primary),
            None => write!(f, "{}", self.primary),
        }
    }
}
