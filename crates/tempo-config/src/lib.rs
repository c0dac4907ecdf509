//! # tempo-config
//!
//! Layered configuration loading for Tempo using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`TEMPO_*` prefix, `__` as separator)
//! 2. Project-level `.tempo/config.toml`
//! 3. User-level `~/.config/tempo/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `TEMPO_BACKEND__BASE_URL` -> `backend.base_url`,
//! `TEMPO_GENERAL__EXPORT_DIR` -> `general.export_dir`, and so on. The
//! `__` (double underscore) separates nested config sections.
//!
//! ```no_run
//! use tempo_config::TempoConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = TempoConfig::load_with_dotenv().expect("config");
//! println!("backend: {}", config.backend.base_url);
//! ```

mod backend;
mod error;
mod general;

pub use backend::BackendConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TempoConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl TempoConfig {
    /// Load configuration from all sources (TOML files + environment
    /// variables).
    ///
    /// Does NOT call `dotenvy` — use [`TempoConfig::load_with_dotenv`]
    /// if `.env` file loading is needed.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Figment`] when extraction fails and
    /// [`ConfigError::InvalidValue`] when the extracted values are
    /// unusable.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support. The typical entry
    /// point for the CLI.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`TempoConfig::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv_from_workspace();
        Self::load()
    }

    /// Reject values figment can extract but the client cannot use: an
    /// empty backend URL or a zero request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.backend.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "backend.base_url".to_string(),
                reason: "must not be empty".to_string(),
            });
        }
        if self.backend.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "backend.timeout_secs".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = PathBuf::from(".tempo/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("TEMPO_").split("__"))
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("tempo").join("config.toml"))
    }

    /// Load `.env` from the workspace root.
    ///
    /// Walks up from `CARGO_MANIFEST_DIR` (if available) or the current
    /// directory looking for a `.env` file. Silently does nothing if no
    /// `.env` is found.
    fn load_dotenv_from_workspace() {
        if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
            let mut dir = PathBuf::from(manifest_dir);
            for _ in 0..3 {
                let env_path = dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                    return;
                }
                if !dir.pop() {
                    break;
                }
            }
        }

        let _ = dotenvy::dotenv();
    }
}
