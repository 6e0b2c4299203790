//! Trending store (Appwrite) configuration section

use crate::secret::Secret;
use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};

pub const DEFAULT_TRENDING_ENDPOINT: &str = "https://cloud.appwrite.io/v1";

/// Settings for the hosted document store that ranks searches
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TrendingConfig {
    /// Turn the trending store off entirely
    pub enabled: bool,

    /// REST endpoint, e.g. `https://cloud.appwrite.io/v1`
    pub endpoint: String,

    pub project_id: String,

    /// Server API key
    pub api_key: Secret,

    pub database_id: String,

    pub collection_id: String,

    /// How many entries the trending list shows
    pub limit: u32,
}

impl Default for TrendingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: DEFAULT_TRENDING_ENDPOINT.to_string(),
            project_id: String::new(),
            api_key: Secret::default(),
            database_id: String::new(),
            collection_id: String::new(),
            limit: 5,
        }
    }
}

impl TrendingConfig {
    /// Returns the names of credentials that are still unset
    pub fn missing_credentials(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.project_id.trim().is_empty() {
            missing.push("trending.project_id");
        }
        if self.api_key.is_empty() {
            missing.push("trending.api_key");
        }
        if self.database_id.trim().is_empty() {
            missing.push("trending.database_id");
        }
        if self.collection_id.trim().is_empty() {
            missing.push("trending.collection_id");
        }
        missing
    }

    /// True when the store is enabled and fully configured
    pub fn is_usable(&self) -> bool {
        self.enabled && self.missing_credentials().is_empty()
    }
}

impl ConfigSection for TrendingConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::collect_errors(vec![
            Validator::http_url(&self.endpoint, "trending.endpoint"),
            Validator::in_range(self.limit, 1, 50, "trending.limit"),
        ])
    }

    fn section_name(&self) -> &'static str {
        "trending"
    }
}
