// crates/cli/src/services.rs
//! Builds the remote clients and the starting UI state from configuration

use anyhow::{Context, Result};
use marquee_config::{Config, TrendingConfig};
use marquee_content_sources::{CatalogClient, TrendingClient};
use marquee_tui::AppState;
use std::sync::Arc;

/// Clients handed to the UI runtime
pub struct Services {
    pub catalog: Arc<CatalogClient>,
    /// `None` when the trending store is disabled or not configured
    pub trending: Option<Arc<TrendingClient>>,
    /// Shown in the status bar on start
    pub notice: Option<String>,
}

impl Services {
    pub fn from_config(config: &Config) -> Result<Self> {
        let (trending, notice) = trending_client(&config.trending);

        let mut catalog =
            CatalogClient::new(&config.catalog).context("Failed to create catalog client")?;
        if let Some(trending) = &trending {
            catalog = catalog.with_trending(trending.clone());
        }

        Ok(Self {
            catalog: Arc::new(catalog),
            trending: trending.map(Arc::new),
            notice,
        })
    }

    /// Starting state with the configured theme and image base
    pub fn initial_state(&self, config: &Config) -> AppState {
        let mut state = AppState::new()
            .with_theme(config.ui.theme.into())
            .with_image_base_url(config.catalog.image_base_url.clone());
        if let Some(notice) = &self.notice {
            state.set_status(notice.clone());
        }
        state
    }
}

/// The trending client, or the reason there is none
fn trending_client(config: &TrendingConfig) -> (Option<TrendingClient>, Option<String>) {
    if !config.enabled {
        log::info!("Trending store disabled by configuration");
        return (None, None);
    }

    let missing = config.missing_credentials();
    if !missing.is_empty() {
        log::warn!(
            "Trending store disabled, missing: {}",
            missing.join(", ")
        );
        return (
            None,
            Some("Trending disabled: Appwrite credentials not set".to_string()),
        );
    }

    match TrendingClient::new(config) {
        Ok(client) => (Some(client), None),
        Err(e) => {
            log::warn!("Trending store disabled: {}", e);
            (None, Some(format!("Trending disabled: {}", e)))
        }
    }
}
