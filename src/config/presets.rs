//! DNS provider presets, built in and from the presets file.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ConfigError, defaults};
use crate::dns::DnsServers;

/// One named resolver pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DnsPreset {
    /// Display name shown in the menu and accepted by `set`.
    pub name: String,
    /// Primary resolver address.
    pub primary: String,
    /// Optional secondary resolver address.
    pub secondary: Option<String>,
}

impl DnsPreset {
    /// Converts the preset to a validated server pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidPreset`] when the primary address is
    /// empty.
    pub fn servers(&self) -> Result<DnsServers, ConfigError> {
        DnsServers::new(self.primary.clone(), self.secondary.clone()).map_err(|source| {
            ConfigError::InvalidPreset {
                name: self.name.clone(),
                source,
            }
        })
    }
}

/// Root structure of the presets file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct PresetsFile {
    /// `[[preset]]` entries
    #[serde(default, rename = "preset")]
    presets: Vec<DnsPreset>,
}

/// Well-known public resolvers offered when no presets file exists.
#[must_use]
pub fn builtin_presets() -> Vec<DnsPreset> {
    let preset = |name: &str, primary: &str, secondary: &str| DnsPreset {
        name: name.to_owned(),
        primary: primary.to_owned(),
        secondary: Some(secondary.to_owned()),
    };
    vec![
        preset("Google", "8.8.8.8", "8.8.4.4"),
        preset("Cloudflare", "1.1.1.1", "1.0.0.1"),
        preset("OpenDNS", "208.67.222.222", "208.67.220.220"),
        preset("AliDNS", "223.5.5.5", "223.6.6.6"),
        preset("114DNS", "114.114.114.114", "114.114.115.115"),
    ]
}

/// Default presets file location under the user configuration directory.
#[must_use]
pub fn default_presets_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| {
        dir.join(defaults::CONFIG_DIR_NAME)
            .join(defaults::PRESETS_FILE_NAME)
    })
}

/// Loads presets from `path`, or from the default location when `path` is
/// `None`, falling back to the built-in table when no file exists.
///
/// A missing file at an *explicitly given* path is an error; a missing
/// file at the default location is not.
///
/// # Errors
///
/// Returns [`ConfigError`] on read failures, TOML parse failures, or
/// preset entries with an empty primary address.
pub fn load_presets(path: Option<&Path>) -> Result<Vec<DnsPreset>, ConfigError> {
    let (path, explicit) = match path {
        Some(path) => (path.to_path_buf(), true),
        None => match default_presets_path() {
            Some(path) => (path, false),
            None => return Ok(builtin_presets()),
        },
    };
    if !explicit && !path.exists() {
        return Ok(builtin_presets());
    }

    let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::FileRead {
        path: path.clone(),
        source,
    })?;
    let file: PresetsFile = toml::from_str(&text)?;
    for preset in &file.presets {
        preset.servers()?;
    }

    if file.presets.is_empty() {
        Ok(builtin_presets())
    } else {
        Ok(file.presets)
    }
}

/// Returns the commented presets template written by `init`.
#[must_use]
pub fn default_presets_template() -> String {
    let mut template = String::from(
        "# DNS presets for dns-switch.\n\
         #\n\
         # Each [[preset]] entry names a resolver pair selectable in the\n\
         # interactive menu or via `dns-switch set <adapter> <preset-name>`.\n\
         # `secondary` may be omitted.\n",
    );
    for preset in builtin_presets() {
        template.push_str(&format!(
            "\n[[preset]]\nname = \"{}\"\nprimary = \"{}\"\n",
            preset.name, preset.primary
        ));
        if let Some(secondary) = &preset.secondary {
            template.push_str(&format!("secondary = \"{secondary}\"\n"));
        }
    }
    template
}

/// Writes the presets template (the `init` subcommand).
///
/// # Errors
///
/// Returns [`ConfigError::FileWrite`] when the file cannot be written.
pub fn write_default_presets(path: &Path) -> Result<(), ConfigError> {
    std::fs::write(path, default_presets_template()).map_err(|source| ConfigError::FileWrite {
        path: path.to_path_buf(),
        source,
    })
}
