// crates/tui/src/theme.rs
//! Theme system for customizable colors

use marquee_config::ColorScheme;
use ratatui::style::{Color, Modifier, Style};
use serde::{Deserialize, Serialize};

/// Available themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ThemeType {
    /// Default dark theme
    #[default]
    Dark,
    /// Light theme
    Light,
    /// High contrast theme
    HighContrast,
}

impl ThemeType {
    /// Returns all available themes
    pub fn all() -> Vec<ThemeType> {
        vec![ThemeType::Dark, ThemeType::Light, ThemeType::HighContrast]
    }

    /// Returns the theme name
    pub fn name(&self) -> &str {
        match self {
            ThemeType::Dark => "Dark",
            ThemeType::Light => "Light",
            ThemeType::HighContrast => "High Contrast",
        }
    }

    /// The theme after this one, wrapping around
    pub fn next(self) -> Self {
        match self {
            ThemeType::Dark => ThemeType::Light,
            ThemeType::Light => ThemeType::HighContrast,
            ThemeType::HighContrast => ThemeType::Dark,
        }
    }
}

impl From<ColorScheme> for ThemeType {
    fn from(scheme: ColorScheme) -> Self {
        match scheme {
            ColorScheme::Dark => ThemeType::Dark,
            ColorScheme::Light => ThemeType::Light,
            ColorScheme::HighContrast => ThemeType::HighContrast,
        }
    }
}

/// Color theme
#[derive(Debug, Clone)]
pub struct Theme {
    /// Theme type
    pub theme_type: ThemeType,
    /// Primary text color
    pub text: Color,
    /// Secondary text color
    pub text_secondary: Color,
    /// Highlight/selection color
    pub highlight: Color,
    /// Accent color
    pub accent: Color,
    /// Rating stars
    pub rating: Color,
    /// Error color (red)
    pub error: Color,
    /// Border color
    pub border: Color,
    /// Border of the focused panel
    pub border_focused: Color,
}

impl Theme {
    /// Creates a new theme
    pub fn new(theme_type: ThemeType) -> Self {
        match theme_type {
            ThemeType::Dark => Self::dark(),
            ThemeType::Light => Self::light(),
            ThemeType::HighContrast => Self::high_contrast(),
        }
    }

    /// Dark theme (default)
    fn dark() -> Self {
        Self {
            theme_type: ThemeType::Dark,
            text: Color::White,
            text_secondary: Color::Gray,
            highlight: Color::Yellow,
            accent: Color::Cyan,
            rating: Color::Yellow,
            error: Color::Red,
            border: Color::DarkGray,
            border_focused: Color::Cyan,
        }
    }

    /// Light theme
    fn light() -> Self {
        Self {
            theme_type: ThemeType::Light,
            text: Color::Black,
            text_secondary: Color::DarkGray,
            highlight: Color::Blue,
            accent: Color::Magenta,
            rating: Color::Rgb(181, 137, 0),
            error: Color::Red,
            border: Color::Gray,
            border_focused: Color::Blue,
        }
    }

    /// High contrast theme
    fn high_contrast() -> Self {
        Self {
            theme_type: ThemeType::HighContrast,
            text: Color::White,
            text_secondary: Color::LightYellow,
            highlight: Color::LightYellow,
            accent: Color::LightCyan,
            rating: Color::LightYellow,
            error: Color::LightRed,
            border: Color::White,
            border_focused: Color::LightYellow,
        }
    }

    /// Returns base text style
    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    /// Returns secondary text style
    pub fn text_secondary_style(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    /// Returns highlighted style
    pub fn highlight_style(&self) -> Style {
        Style::default()
            .fg(self.highlight)
            .add_modifier(Modifier::BOLD)
    }

    /// Returns accent style
    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn rating_style(&self) -> Style {
        Style::default().fg(self.rating)
    }

    /// Returns error style
    pub fn error_style(&self) -> Style {
        Style::default().fg(self.error)
    }

    /// Border color, brighter when the panel has focus
    pub fn border_color(&self, focused: bool) -> Color {
        if focused {
            self.border_focused
        } else {
            self.border
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}
