//! Optional TOML settings file.
//!
//! Command-line flags always win over values read here.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// File picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "divscan.toml";

/// Directory used when neither flags nor settings name a source.
pub const DEFAULT_DATA_DIR: &str = "data";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Directory holding the category files.
    pub data_dir: Option<PathBuf>,
    /// Base URL serving the category files. `data_dir` wins when both are set.
    pub base_url: Option<String>,
    /// Codes excluded from the high-yield report. `None` keeps the built-in list.
    pub blacklist: Option<Vec<String>>,
    /// Default gift list for the `gifts` command.
    pub gift_file: Option<PathBuf>,
}

impl Settings {
    /// Loads settings from a specific path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        let settings = toml::from_str(&content)
            .with_context(|| format!("parse config {}", path.display()))?;
        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Loads `explicit` when given, otherwise [`DEFAULT_CONFIG_FILE`] in the
    /// working directory if it exists. A missing default file yields defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => {
                let path = Path::new(DEFAULT_CONFIG_FILE);
                if path.is_file() {
                    Self::load_from(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }
}
