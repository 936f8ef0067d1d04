//! Stub structured source for non-Windows builds.

use crate::discovery::{AdapterQuery, AdapterRecord, QueryError};

/// Always-failing [`AdapterQuery`] for platforms without a structured
/// adapter source.
#[derive(Debug, Clone, Default)]
pub struct UnsupportedQuery {
    _private: (),
}

impl UnsupportedQuery {
    /// Creates the stub query.
    #[must_use]
    pub const fn new() -> Self {
        Self { _private: () }
    }
}

impl AdapterQuery for UnsupportedQuery {
    fn records(&self) -> Result<Vec<AdapterRecord>, QueryError> {
        Err(QueryError::Unsupported {
            os: std::env::consts::OS,
        })
    }
}
