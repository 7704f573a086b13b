/// User settings for the command-line front end.
///
/// Read from `config.toml` in the platform config directory
/// (`~/.config/bytecode-complete/` on Linux, located with `etcetera`).
/// A missing file is not an error; every key is optional.
///
/// ```toml
/// log_filter = "bytecode_complete=debug"
/// snapshot = "/home/me/symbols.toml"
/// ```
use std::path::{Path, PathBuf};

use etcetera::BaseStrategy;
use serde::Deserialize;

use crate::error::{LoadError, Result};

const APP_DIR: &str = "bytecode-complete";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// `tracing_subscriber::EnvFilter` directive used when neither the
    /// command line nor `RUST_LOG` sets one.
    pub log_filter: Option<String>,
    /// Snapshot used when none is given on the command line.
    pub snapshot: Option<PathBuf>,
}

impl Settings {
    /// Location of the settings file, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        let strategy = etcetera::choose_base_strategy().ok()?;
        Some(strategy.config_dir().join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load settings from the default location, falling back to defaults
    /// when there is no config dir or no file.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_or_default(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load settings from `path`; a missing file yields the defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        let text = match std::fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::trace!(path = %path.display(), "no settings file");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(LoadError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        toml::from_str(&text).map_err(|source| LoadError::Toml {
            path: path.to_path_buf(),
            source,
        })
    }
}
