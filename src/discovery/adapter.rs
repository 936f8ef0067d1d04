//! Adapter identity as used by netsh.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel for an interface index that could not be determined.
pub const UNKNOWN_INDEX: &str = "unknown";

/// Sentinel for an adapter type that could not be determined.
pub const UNKNOWN_KIND: &str = "Unknown";

/// A network adapter discovered in one enumeration pass.
///
/// `name` is the identifier netsh accepts in `name=` arguments and is the
/// operation key for every later DNS command. Only adapters that are
/// administratively enabled and connected are ever represented by this
/// type; a list of adapters is valid only until the next refresh and is
/// never cached across DNS changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Adapter {
    /// Connection identifier accepted by netsh (`NetConnectionID` equivalent).
    pub name: String,
    /// Human-friendly label; equals `name` when discovered via text parsing,
    /// which carries no independent friendly name.
    pub description: String,
    /// Interface index, best effort ([`UNKNOWN_INDEX`] when undetermined).
    pub index: String,
    /// Adapter media type, best effort ([`UNKNOWN_KIND`] when undetermined).
    pub kind: String,
}

impl Adapter {
    /// Creates a new adapter.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        index: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            index: index.into(),
            kind: kind.into(),
        }
    }
}

impl fmt::Display for Adapter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Type: {})", self.name, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_creates_adapter_with_correct_fields() {
        let adapter = Adapter::new("Ethernet", "Ethernet NIC", "12", "Dedicated");

        assert_eq!(adapter.name, "Ethernet");
        assert_eq!(adapter.description, "Ethernet NIC");
        assert_eq!(adapter.index, "12");
        assert_eq!(adapter.kind, "Dedicated");
    }

    #[test]
    fn display_shows_name_and_kind() {
        let adapter = Adapter::new("Wi-Fi", "Wi-Fi", UNKNOWN_INDEX, "Dedicated");
        assert_eq!(format!("{adapter}"), "Wi-Fi (Type: Dedicated)");
    }

    #[test]
    fn sentinels_are_distinct_values() {
        assert_ne!(UNKNOWN_INDEX, UNKNOWN_KIND);
    }
}
