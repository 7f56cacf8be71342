use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{PassKeeperError, Result};

/// Generator defaults, loaded from `passkeeper.toml` in the working
/// directory.
///
/// Every field has a default so everything works without any config
/// file at all.  The `randgen` CLI and the editor's password generator
/// consult these when no explicit length is given.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Digits in a generated PIN (default: 4).
    #[serde(default = "default_pin_length")]
    pub pin_length: usize,

    /// Characters in a generated password (default: 12).
    #[serde(default = "default_password_length")]
    pub password_length: usize,

    /// Bytes in a generated hex key (default: 16).
    #[serde(default = "default_hex_bytes")]
    pub hex_bytes: usize,

    /// Minimum syllables in a generated name (default: 2).
    #[serde(default = "default_name_syllables_min")]
    pub name_syllables_min: u32,

    /// Maximum syllables in a generated name (default: 5).
    #[serde(default = "default_name_syllables_max")]
    pub name_syllables_max: u32,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_pin_length() -> usize {
    4
}

fn default_password_length() -> usize {
    12
}

fn default_hex_bytes() -> usize {
    16
}

fn default_name_syllables_min() -> u32 {
    2
}

fn default_name_syllables_max() -> u32 {
    5
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            pin_length: default_pin_length(),
            password_length: default_password_length(),
            hex_bytes: default_hex_bytes(),
            name_syllables_min: default_name_syllables_min(),
            name_syllables_max: default_name_syllables_max(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = "passkeeper.toml";

    /// Load settings from `<dir>/passkeeper.toml`.
    ///
    /// A missing file yields the defaults; a file that exists but does
    /// not parse is an error.
    pub fn load(dir: &Path) -> Result<Self> {
        let config_path = dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassKeeperError::Config(format!("failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }
}

// ── Tests ────────────────────────────────────────────────────────────
