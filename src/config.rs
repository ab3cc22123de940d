use crate::NAME;
use crate::brightness::ClampMode;
use crate::cli::Format;
use serde::Deserialize;
use std::env;
use tracing::{debug, warn};
use universal_config::ConfigLoader;

const CONFIG_ENV: &str = "GENESIS_CONFIG";

#[derive(Debug, Deserialize, Default, Clone, Copy, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Upper bound policy applied to computed brightness values.
    ///
    /// **Valid options**: `legacy`, `device`
    /// <br>
    /// **Default**: `legacy`
    pub clamp: ClampMode,

    /// Output format used when `--format` is not passed.
    ///
    /// **Valid options**: `plain`, `json`
    /// <br>
    /// **Default**: `plain`
    pub format: Format,
}

impl Config {
    /// Loads the config from the path in `GENESIS_CONFIG`,
    /// or searches the user config dir.
    ///
    /// Falls back to the default config if neither works.
    pub fn load() -> Self {
        Self::load_from(env::var(CONFIG_ENV).ok())
    }

    fn load_from(path: Option<String>) -> Self {
        path.map_or_else(
            || {
                ConfigLoader::new(NAME).find_and_load().unwrap_or_else(|err| {
                    debug!("No config loaded, using defaults: {err}");
                    Self::default()
                })
            },
            |path| {
                ConfigLoader::load(&path).unwrap_or_else(|err| {
                    warn!("Failed to load config from '{path}': {err}");
                    warn!("Falling back to the default config");
                    Self::default()
                })
            },
        )
    }
}
