use serde::Deserialize;

use super::{
    KeyBinding,
    constants::{DEFAULT_SEMI_VOICED_MARK_KEY, DEFAULT_VOICED_MARK_KEY},
};

/// Config as read from disk, before validation.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfig {
    #[serde(default = "default_start_in_kana")]
    pub start_in_kana: bool,

    #[serde(default = "default_voiced_mark_key")]
    pub voiced_mark_key: char,

    #[serde(default = "default_semi_voiced_mark_key")]
    pub semi_voiced_mark_key: char,

    #[serde(default)]
    pub extra_bindings: Vec<KeyBinding>,
}

fn default_start_in_kana() -> bool {
    true
}

fn default_voiced_mark_key() -> char {
    DEFAULT_VOICED_MARK_KEY
}

fn default_semi_voiced_mark_key() -> char {
    DEFAULT_SEMI_VOICED_MARK_KEY
}
