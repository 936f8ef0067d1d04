//! Default values for configuration options.
//!
//! Centralized constants to avoid magic numbers scattered across the codebase.

use std::time::Duration;

/// Default fallback encoding label for command output that is not UTF-8.
pub const FALLBACK_ENCODING: &str = "gbk";

/// Default per-command execution timeout in seconds.
pub const COMMAND_TIMEOUT_SECS: u64 = 30;

/// Directory name under the user configuration directory.
pub const CONFIG_DIR_NAME: &str = "dns-switch";

/// File name of the presets file under the configuration directory.
pub const PRESETS_FILE_NAME: &str = "presets.toml";

/// Default command timeout as Duration.
#[must_use]
pub const fn command_timeout() -> Duration {
    Duration::from_secs(COMMAND_TIMEOUT_SECS)
}
