//! Validated runtime settings merged from CLI arguments and defaults.

use std::time::Duration;

use regex::Regex;

use super::{Cli, ConfigError, DnsPreset, defaults, load_presets};
use crate::command::DecodePolicy;

/// Validated, ready-to-use settings for one invocation.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Decode policy for external command output.
    pub decode: DecodePolicy,
    /// Per-command execution timeout.
    pub timeout: Duration,
    /// Optional adapter-name filter for listings.
    pub match_filter: Option<Regex>,
    /// Resolver presets offered by the session.
    pub presets: Vec<DnsPreset>,
    /// Verbose logging requested.
    pub verbose: bool,
}

impl Settings {
    /// Builds settings from parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an unknown encoding label, a zero
    /// timeout, an invalid match pattern, or an unloadable presets file.
    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let label = cli
            .fallback_encoding
            .as_deref()
            .unwrap_or(defaults::FALLBACK_ENCODING);
        let decode =
            DecodePolicy::from_label(label).ok_or_else(|| ConfigError::UnknownEncoding {
                label: label.to_owned(),
            })?;

        let timeout = match cli.timeout {
            Some(0) => return Err(ConfigError::ZeroTimeout),
            Some(secs) => Duration::from_secs(secs),
            None => defaults::command_timeout(),
        };

        let match_filter = cli
            .match_pattern
            .as_deref()
            .map(|pattern| {
                Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
                    pattern: pattern.to_owned(),
                    source,
                })
            })
            .transpose()?;

        let presets = load_presets(cli.presets.as_deref())?;

        Ok(Self {
            decode,
            timeout,
            match_filter,
            presets,
            verbose: cli.verbose,
        })
    }
}
