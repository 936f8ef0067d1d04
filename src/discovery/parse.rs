//! Positional parsing of netsh text output.
//!
//! `netsh interface show interface` emits a fixed three-line header
//! followed by whitespace-aligned columns. There is no structured output
//! mode, so rows are tokenized positionally and anything that does not
//! fit the expected shape is dropped rather than treated as an error.

/// Fixed header lines before the first data row.
const HEADER_LINES: usize = 3;

/// Minimum token count for a valid interface row.
const MIN_ROW_TOKENS: usize = 4;

/// One parsed row of `netsh interface show interface` output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceRow {
    /// Administrative state column (`Enabled` / `Disabled`).
    pub admin_state: String,
    /// Connection state column (`Connected` / `Disconnected`).
    pub connect_state: String,
    /// Interface type column (e.g. `Dedicated`).
    pub kind: String,
    /// Interface name; all remaining tokens rejoined with single spaces.
    pub name: String,
}

impl InterfaceRow {
    /// Row is usable only when administratively enabled and connected.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.admin_state.eq_ignore_ascii_case("enabled")
            && self.connect_state.eq_ignore_ascii_case("connected")
    }
}

/// Parses the interface table, skipping the header and malformed rows.
///
/// Rows with fewer than four whitespace tokens (including blank lines)
/// are silently dropped.
#[must_use]
pub fn parse_interface_table(output: &str) -> Vec<InterfaceRow> {
    output
        .lines()
        .skip(HEADER_LINES)
        .filter_map(parse_interface_row)
        .collect()
}

fn parse_interface_row(line: &str) -> Option<InterfaceRow> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_ROW_TOKENS {
        return None;
    }
    Some(InterfaceRow {
        admin_state: tokens[0].to_owned(),
        connect_state: tokens[1].to_owned(),
        kind: tokens[2].to_owned(),
        name: tokens[3..].join(" "),
    })
}

/// Extracts a field value from a netsh detail view.
///
/// Scans for the first line containing `key` and returns the trimmed text
/// after the last colon on that line (netsh renders detail views as
/// `Key : Value` pairs). Returns `None` when no line matches.
#[must_use]
pub fn find_field(output: &str, key: &str) -> Option<String> {
    output
        .lines()
        .find(|line| line.contains(key))
        .and_then(|line| line.rsplit(':').next())
        .map(|value| value.trim().to_owned())
}
