//! Movie catalog (TMDB) configuration section

use crate::secret::Secret;
use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_CATALOG_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p/w500";

/// Settings for the movie catalog API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CatalogConfig {
    /// API root, without trailing slash
    pub base_url: String,

    /// Prefix for poster image paths
    pub image_base_url: String,

    /// Bearer token (v4 read access token)
    pub api_token: Secret,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CATALOG_BASE_URL.to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
            api_token: Secret::default(),
            timeout_secs: 15,
        }
    }
}

impl CatalogConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl ConfigSection for CatalogConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::collect_errors(vec![
            Validator::http_url(&self.base_url, "catalog.base_url"),
            Validator::http_url(&self.image_base_url, "catalog.image_base_url"),
            Validator::in_range(self.timeout_secs, 1, 120, "catalog.timeout_secs"),
        ])
    }

    fn section_name(&self) -> &'static str {
        "catalog"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(CatalogConfig::default().validate().is_ok());
    }

    #[test]
    fn test_invalid_timeout() {
        let mut config = CatalogConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_base_url() {
        let mut config = CatalogConfig::default();
        config.base_url = "api.themoviedb.org".to_string();
        let errors = config.validate().err().unwrap_or_default();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "catalog.base_url");
    }
}
