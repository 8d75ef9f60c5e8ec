pub const APP_NAME: &str = "kana-remap";
pub const CONFIG_NAME: &str = "config";

/// Overrides the config file location when set.
pub const CONFIG_PATH_ENV: &str = "KANA_REMAP_CONFIG";

pub const DEFAULT_VOICED_MARK_KEY: char = '@';
pub const DEFAULT_SEMI_VOICED_MARK_KEY: char = '[';
