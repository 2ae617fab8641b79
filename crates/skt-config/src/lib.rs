//! # skt-config
//!
//! Layered configuration loading for Skilltrack using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SKT_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.skilltrack/config.toml`
//! 4. User-level `~/.config/skilltrack/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! `SKT_API__BASE_URL` -> `api.base_url`, `SKT_UI__DEBOUNCE_MS` -> `ui.debounce_ms`.
//!
//! # Usage
//!
//! ```no_run
//! use skt_config::SktConfig;
//!
//! let config = SktConfig::load_with_dotenv(None).expect("config");
//! println!("API: {}", config.api.normalized_base_url());
//! ```

mod api;
mod error;
mod theme;
mod ui;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use theme::ThemeConfig;
pub use ui::UiConfig;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SktConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub theme: ThemeConfig,
}

impl SktConfig {
    /// Load configuration from TOML files and environment variables.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a source fails to parse or a value is
    /// out of range.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// See [`Self::load`].
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".skilltrack/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("SKT_").split("__"))
    }

    /// Check cross-field constraints figment cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()?;
        self.ui.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("skilltrack").join("config.toml"))
    }
}
