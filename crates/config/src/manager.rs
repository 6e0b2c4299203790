//! Configuration manager - main API for config operations

use crate::{Config, ConfigError, ConfigResult, Secret};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Prefix shared by every environment override
pub const ENV_PREFIX: &str = "MARQUEE_";

const CONFIG_FILE_NAME: &str = "config.toml";
const LOG_FILE_NAME: &str = "marquee.log";

/// Main configuration manager
///
/// Locates the config directory, reads the optional config file and layers
/// environment overrides on top of it.
pub struct ConfigManager {
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager using the default config directory
    ///
    /// The default directory follows the platform convention:
    /// - Linux: `~/.config/marquee/`
    /// - macOS: `~/Library/Application Support/marquee/`
    /// - Windows: `%APPDATA%\marquee\`
    pub fn new() -> ConfigResult<Self> {
        let config_dir = Self::project_dirs()?.config_dir().to_path_buf();
        Ok(Self::with_directory(config_dir))
    }

    /// Creates a config manager with a custom config directory
    pub fn with_directory(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    fn project_dirs() -> ConfigResult<ProjectDirs> {
        ProjectDirs::from("", "", "marquee").ok_or_else(|| ConfigError::PathResolutionError {
            reason: "Could not determine user home directory".to_string(),
        })
    }

    /// Default log file location in the platform cache directory
    pub fn default_log_path() -> ConfigResult<PathBuf> {
        Ok(Self::project_dirs()?.cache_dir().join(LOG_FILE_NAME))
    }

    /// Returns the config directory path
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Returns the full config file path
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// True when a config file exists to be read
    pub fn has_config_file(&self) -> bool {
        self.config_path().is_file()
    }

    /// Loads the configuration file
    ///
    /// A missing file yields the defaults. An unreadable or malformed file is
    /// an error. Validation problems are only logged here.
    pub fn load(&self) -> ConfigResult<Config> {
        let path = self.config_path();
        if !path.exists() {
            log::info!("Config file not found at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.clone(),
            source: e,
        })?;

        if let Err(errors) = config.validate() {
            let error_msg = errors
                .iter()
                .map(|e| e.to_string())
                .collect::<Vec<_>>()
                .join("; ");
            log::warn!("Config validation warnings: {}", error_msg);
        }

        Ok(config)
    }

    /// Loads the configuration, falling back to defaults on any error
    pub fn load_or_default(&self) -> Config {
        match self.load() {
            Ok(config) => config,
            Err(e) => {
                log::warn!("Failed to load config: {}, using defaults", e);
                Config::default()
            }
        }
    }

    /// Loads the file, applies process environment overrides and validates
    /// the result
    pub fn load_with_env_overrides(&self) -> ConfigResult<Config> {
        let mut config = self.load()?;
        apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;

        config.validate().map_err(|errors| {
            ConfigError::ValidationError(
                errors
                    .iter()
                    .map(|e| e.to_string())
                    .collect::<Vec<_>>()
                    .join("; "),
            )
        })?;

        Ok(config)
    }
}

/// Applies `MARQUEE_*` overrides read through `lookup`
///
/// `lookup` abstracts the environment so callers (and tests) can supply
/// values without touching process state. Empty values are ignored.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> ConfigResult<()>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |name: &str| -> Option<String> {
        lookup(&format!("{}{}", ENV_PREFIX, name)).filter(|v| !v.trim().is_empty())
    };

    // Catalog
    if let Some(token) = get("TMDB_API_TOKEN").or_else(|| {
        lookup("TMDB_API_KEY").filter(|v| !v.trim().is_empty())
    }) {
        config.catalog.api_token = Secret::new(token.trim());
    }
    if let Some(url) = get("TMDB_BASE_URL") {
        config.catalog.base_url = url.trim().trim_end_matches('/').to_string();
    }
    if let Some(url) = get("TMDB_IMAGE_BASE_URL") {
        config.catalog.image_base_url = url.trim().trim_end_matches('/').to_string();
    }

    // Trending store
    if let Some(endpoint) = get("APPWRITE_ENDPOINT") {
        config.trending.endpoint = endpoint.trim().trim_end_matches('/').to_string();
    }
    if let Some(project) = get("APPWRITE_PROJECT_ID") {
        config.trending.project_id = project.trim().to_string();
    }
    if let Some(key) = get("APPWRITE_API_KEY") {
        config.trending.api_key = Secret::new(key.trim());
    }
    if let Some(database) = get("APPWRITE_DATABASE_ID") {
        config.trending.database_id = database.trim().to_string();
    }
    if let Some(collection) = get("APPWRITE_COLLECTION_ID") {
        config.trending.collection_id = collection.trim().to_string();
    }
    if let Some(limit) = get("TRENDING_LIMIT") {
        config.trending.limit = parse_var("TRENDING_LIMIT", &limit)?;
    }
    if let Some(enabled) = get("TRENDING_ENABLED") {
        config.trending.enabled = parse_var("TRENDING_ENABLED", &enabled)?;
    }

    // UI
    if let Some(debounce) = get("DEBOUNCE_MS") {
        config.ui.debounce_ms = parse_var("DEBOUNCE_MS", &debounce)?;
    }
    if let Some(theme) = get("THEME") {
        config.ui.theme = parse_var("THEME", &theme)?;
    }

    // App
    if let Some(level) = get("LOG_LEVEL") {
        config.app.log_level = parse_var("LOG_LEVEL", &level)?;
    }
    if let Some(path) = get("LOG_FILE") {
        config.app.log_file = Some(PathBuf::from(path.trim()));
    }

    Ok(())
}

fn parse_var<T: FromStr>(name: &str, value: &str) -> ConfigResult<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidEnvValue {
            var: format!("{}{}", ENV_PREFIX, name),
            value: value.to_string(),
        })
}
