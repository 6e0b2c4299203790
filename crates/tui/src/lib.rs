// crates/tui/src/lib.rs
//! Terminal User Interface for Marquee

mod app;
mod error;
pub mod events;
pub mod pagination;
pub mod search;
mod state;
mod theme;
pub mod ui;
pub mod view;

pub use app::{App, RuntimeSettings};
pub use error::{TuiError, TuiResult};
pub use pagination::{page_window, PageSlot};
pub use search::{SearchController, SearchPhase};
pub use state::{update, AppState, Command, Focus, Msg, View, FETCH_ERROR_MESSAGE};
pub use theme::{Theme, ThemeType};

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use marquee_content_sources::{MovieCatalog, TrendingSource};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Main TUI application wrapper
///
/// Puts the terminal in raw mode on the alternate screen and restores it
/// when dropped, even if the run loop fails.
pub struct TuiApp {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
    cleaned_up: bool,
}

impl TuiApp {
    /// Creates and initializes the terminal
    pub fn new() -> TuiResult<Self> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)?;

        Ok(Self {
            terminal,
            cleaned_up: false,
        })
    }

    /// Runs `app` until the user quits
    pub async fn run<C, T>(&mut self, app: &mut App<C, T>) -> TuiResult<()>
    where
        C: MovieCatalog + 'static,
        T: TrendingSource + 'static,
    {
        let result = app.run(&mut self.terminal).await;
        self.cleanup()?;
        result
    }

    /// Cleans up terminal state
    fn cleanup(&mut self) -> TuiResult<()> {
        if self.cleaned_up {
            return Ok(());
        }
        self.cleaned_up = true;

        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }
}

impl Drop for TuiApp {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
