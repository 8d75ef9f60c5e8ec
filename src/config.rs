mod config_validator;
pub mod constants;
pub mod raw_config;

use std::{
    io,
    path::{Path, PathBuf},
};

pub use config_validator::find_binding_problems;
pub use raw_config::RawConfig;
use serde::{Deserialize, Deserializer, Serialize};

use crate::domain::{Mode, text::KeyMap};
use constants::{
    APP_NAME, CONFIG_NAME, CONFIG_PATH_ENV, DEFAULT_SEMI_VOICED_MARK_KEY,
    DEFAULT_VOICED_MARK_KEY,
};

/// One key added to, or overridden in, the built-in layout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct KeyBinding {
    pub key: char,
    pub glyph: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Config {
    pub start_in_kana: bool,
    pub voiced_mark_key: char,
    pub semi_voiced_mark_key: char,

    // Arrays of tables must serialize after plain values.
    pub extra_bindings: Vec<KeyBinding>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_in_kana: true,
            voiced_mark_key: DEFAULT_VOICED_MARK_KEY,
            semi_voiced_mark_key: DEFAULT_SEMI_VOICED_MARK_KEY,
            extra_bindings: Vec::new(),
        }
    }
}

pub fn config_path() -> io::Result<PathBuf> {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return Ok(PathBuf::from(path));
    }

    confy::get_configuration_file_path(APP_NAME, CONFIG_NAME).map_err(confy_err)
}

fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    let Some(dir) = path.parent() else {
        return Ok(());
    };
    std::fs::create_dir_all(dir)
}

fn confy_err(e: confy::ConfyError) -> io::Error {
    io::Error::other(e)
}

pub fn load() -> io::Result<Config> {
    load_from(&config_path()?)
}

/// Loads the config at `path`, writing the defaults there first if it is missing.
pub fn load_from(path: &Path) -> io::Result<Config> {
    ensure_parent_dir(path)?;
    confy::load_path(path).map_err(confy_err)
}

pub fn save(cfg: &Config) -> io::Result<()> {
    save_to(&config_path()?, cfg)
}

pub fn save_to(path: &Path, cfg: &Config) -> io::Result<()> {
    cfg.validate()
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;
    ensure_parent_dir(path)?;
    confy::store_path(path, cfg).map_err(confy_err)
}

impl TryFrom<RawConfig> for Config {
    type Error = String;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        let cfg = Self {
            start_in_kana: raw.start_in_kana,
            voiced_mark_key: raw.voiced_mark_key,
            semi_voiced_mark_key: raw.semi_voiced_mark_key,
            extra_bindings: raw.extra_bindings,
        };
        cfg.validate()?;
        Ok(cfg)
    }
}

impl<'de> Deserialize<'de> for Config {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = RawConfig::deserialize(deserializer)?;
        Self::try_from(raw).map_err(serde::de::Error::custom)
    }
}

impl Config {
    pub fn initial_mode(&self) -> Mode {
        if self.start_in_kana {
            Mode::Kana
        } else {
            Mode::Latin
        }
    }

    /// Built-in layout with the extra bindings and mark keys applied.
    pub fn key_map(&self) -> KeyMap {
        self.extra_bindings
            .iter()
            .fold(KeyMap::oadg_109(), |map, binding| {
                map.with_binding(binding.key, binding.glyph.clone())
            })
            .with_mark_keys(self.voiced_mark_key, self.semi_voiced_mark_key)
    }
}
