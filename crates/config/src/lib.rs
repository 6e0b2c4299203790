//! Marquee configuration system
//!
//! Configuration is assembled from, lowest to highest precedence:
//!
//! 1. built-in defaults,
//! 2. an optional `config.toml` in the platform config directory,
//! 3. environment variables (a `.env` file is loaded into the environment
//!    by the binary before this crate reads it).
//!
//! The config file is only ever read. Credentials are wrapped in [`Secret`]
//! so they never show up in `Debug` output or logs.
//!
//! # Example
//!
//! ```rust,no_run
//! use marquee_config::ConfigManager;
//!
//! let manager = ConfigManager::new().expect("Failed to locate config dir");
//! let config = manager.load_with_env_overrides().expect("Invalid configuration");
//! println!("Debounce: {} ms", config.ui.debounce_ms);
//! ```

mod error;
mod manager;
mod secret;
mod validation;

// Config sections
pub mod app_config;
pub mod catalog_config;
pub mod trending_config;
pub mod ui_config;

pub use error::{ConfigError, ConfigResult, ValidationError};
pub use manager::{apply_env_overrides, ConfigManager, ENV_PREFIX};
pub use secret::Secret;
pub use validation::{ConfigSection, Validator};

// Re-export config sections
pub use app_config::{AppConfig, LogLevel};
pub use catalog_config::CatalogConfig;
pub use trending_config::TrendingConfig;
pub use ui_config::{ColorScheme, UiConfig};

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    /// Movie catalog API
    pub catalog: CatalogConfig,

    /// Trending search store
    pub trending: TrendingConfig,

    /// Terminal UI behavior
    pub ui: UiConfig,

    /// Logging and other application-level settings
    pub app: AppConfig,
}

impl Config {
    /// Creates a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the entire configuration
    ///
    /// Returns all validation errors found across all sections.
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(mut e) = self.catalog.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.trending.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.ui.validate() {
            errors.append(&mut e);
        }

        if let Err(mut e) = self.app.validate() {
            errors.append(&mut e);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Fails when the catalog token, without which nothing works, is unset
    pub fn require_catalog_token(&self) -> ConfigResult<()> {
        if self.catalog.api_token.is_empty() {
            return Err(ConfigError::MissingCredential {
                field: "catalog.api_token",
                env_var: "MARQUEE_TMDB_API_TOKEN",
            });
        }
        Ok(())
    }
}
