use anyhow::{bail, Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::model::KeyWrap;

const APP_DIR: &str = "scytale";
const CONFIG_FILE: &str = "config.json";

/// User settings read from `config.json`. Every field may be omitted.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Remove spaces from results before they are written (transposition
    /// output is always left alone).
    pub strip_spaces: bool,
    pub key_wrap: KeyWrap,
    /// Where results go when `--output` is not given.
    pub default_output: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            strip_spaces: true,
            key_wrap: KeyWrap::KeyLength,
            default_output: None,
        }
    }
}

pub fn get_config_file_path() -> Result<PathBuf> {
    let mut path = dirs::config_dir().context("Could not find configuration directory")?;
    path.push(APP_DIR);
    path.push(CONFIG_FILE);
    Ok(path)
}

impl Settings {
    /// Loads settings from `explicit`, or from the per-user config file.
    ///
    /// A missing per-user file yields the defaults; a missing explicit file
    /// is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => {
                if !path.is_file() {
                    bail!("Config file {} does not exist", path.display());
                }
                path.to_path_buf()
            }
            None => match get_config_file_path() {
                Ok(path) if path.is_file() => path,
                _ => {
                    debug!("No config file found, using defaults");
                    return Ok(Self::default());
                }
            },
        };
        Self::from_file(&path)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let settings: Settings = serde_json::from_str(&content)
            .with_context(|| format!("Malformed config file {}", path.display()))?;
        if settings.key_wrap == KeyWrap::Fixed(0) {
            bail!("key_wrap must be at least 1 in {}", path.display());
        }
        debug!("Loaded settings from {}: {:?}", path.display(), settings);
        Ok(settings)
    }
}
