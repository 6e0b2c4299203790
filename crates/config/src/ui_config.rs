//! Terminal UI configuration section

use crate::validation::{ConfigSection, ValidationError, Validator};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Quiet period before a search is sent, in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 600;

/// Color scheme options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ColorScheme {
    #[default]
    Dark,
    Light,
    HighContrast,
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorScheme::Dark => write!(f, "dark"),
            ColorScheme::Light => write!(f, "light"),
            ColorScheme::HighContrast => write!(f, "high-contrast"),
        }
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ColorScheme::Dark),
            "light" => Ok(ColorScheme::Light),
            "high-contrast" | "high_contrast" | "highcontrast" => Ok(ColorScheme::HighContrast),
            other => Err(format!("unknown color scheme '{}'", other)),
        }
    }
}

/// Terminal UI behavior
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    /// Debounce window for search input
    pub debounce_ms: u64,

    /// Redraw interval while idle
    pub tick_rate_ms: u64,

    pub theme: ColorScheme,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            tick_rate_ms: 250,
            theme: ColorScheme::default(),
        }
    }
}

impl UiConfig {
    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}

impl ConfigSection for UiConfig {
    fn validate(&self) -> Result<(), Vec<ValidationError>> {
        Validator::collect_errors(vec![
            Validator::in_range(self.debounce_ms, 50, 5000, "ui.debounce_ms"),
            Validator::in_range(self.tick_rate_ms, 16, 2000, "ui.tick_rate_ms"),
        ])
    }

    fn section_name(&self) -> &'static str {
        "ui"
    }
}
