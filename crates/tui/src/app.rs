// crates/tui/src/app.rs
//! Runtime that feeds [`update`] and executes its commands

use crate::{
    error::{TuiError, TuiResult},
    events,
    state::{update, AppState, Command, Msg},
    ui,
};
use crossterm::event::EventStream;
use futures::StreamExt;
use marquee_config::Config;
use marquee_content_sources::{MovieCatalog, TrendingSource};
use ratatui::{backend::Backend, Terminal};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;

/// Timing knobs for the runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuntimeSettings {
    /// Quiet period before a typed query is fetched
    pub debounce: Duration,
    /// Redraw interval when nothing else happens
    pub tick_rate: Duration,
    /// Number of trending entries to request
    pub trending_limit: u32,
}

impl Default for RuntimeSettings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(600),
            tick_rate: Duration::from_millis(250),
            trending_limit: 5,
        }
    }
}

impl From<&Config> for RuntimeSettings {
    fn from(config: &Config) -> Self {
        Self {
            debounce: config.ui.debounce(),
            tick_rate: config.ui.tick_rate(),
            trending_limit: config.trending.limit,
        }
    }
}

/// The main TUI application
///
/// Owns the state and the services. Every command returned by [`update`]
/// runs as its own task and reports back through a channel, so a slow
/// request never blocks input.
pub struct App<C, T> {
    state: AppState,
    catalog: Arc<C>,
    trending: Option<Arc<T>>,
    settings: RuntimeSettings,
    tx: mpsc::UnboundedSender<Msg>,
    rx: mpsc::UnboundedReceiver<Msg>,
}

impl<C, T> App<C, T>
where
    C: MovieCatalog + 'static,
    T: TrendingSource + 'static,
{
    /// Creates a new application
    pub fn new(
        state: AppState,
        catalog: Arc<C>,
        trending: Option<Arc<T>>,
        settings: RuntimeSettings,
    ) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            state,
            catalog,
            trending,
            settings,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies a message and starts whatever it asks for
    pub fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, commands) = update(state, msg);
        self.state = state;

        for command in commands {
            self.execute(command);
        }
    }

    fn execute(&self, command: Command) {
        let tx = self.tx.clone();

        match command {
            Command::ScheduleDebounce(generation) => {
                let delay = self.settings.debounce;
                tokio::spawn(async move {
                    tokio::time::sleep(delay).await;
                    let _ = tx.send(Msg::DebounceElapsed(generation));
                });
            }
            Command::Search(request) => {
                log::debug!("Searching '{}' page {}", request.query, request.page);
                let catalog = Arc::clone(&self.catalog);
                tokio::spawn(async move {
                    let page = catalog.search(&request).await;
                    let _ = tx.send(Msg::SearchLoaded { request, page });
                });
            }
            Command::FetchDetail(id) => {
                log::debug!("Fetching details for movie {}", id);
                let catalog = Arc::clone(&self.catalog);
                tokio::spawn(async move {
                    let detail = catalog.fetch_by_id(id).await;
                    let _ = tx.send(Msg::DetailLoaded { id, detail });
                });
            }
            Command::LoadTrending => {
                let Some(trending) = self.trending.as_ref().map(Arc::clone) else {
                    log::debug!("Trending store not configured");
                    return;
                };
                let limit = self.settings.trending_limit;
                tokio::spawn(async move {
                    let entries = match trending.list_trending(limit).await {
                        Ok(entries) => entries,
                        Err(e) => {
                            log::warn!("Failed to load trending movies: {}", e);
                            Vec::new()
                        }
                    };
                    let _ = tx.send(Msg::TrendingLoaded(entries));
                });
            }
        }
    }

    /// Applies every message that has already arrived, returning how many
    pub fn drain(&mut self) -> usize {
        let mut handled = 0;
        while let Ok(msg) = self.rx.try_recv() {
            self.dispatch(msg);
            handled += 1;
        }
        handled
    }

    /// Runs the application until the user quits
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> TuiResult<()> {
        let mut input = EventStream::new();
        let mut ticker = tokio::time::interval(self.settings.tick_rate);

        self.dispatch(Msg::Init);

        while !self.state.should_quit {
            terminal.draw(|frame| ui::render(frame, &self.state))?;

            tokio::select! {
                event = input.next() => match event {
                    Some(Ok(event)) => {
                        if let Some(msg) = events::to_msg(&self.state, event) {
                            self.dispatch(msg);
                        }
                    }
                    Some(Err(e)) => return Err(TuiError::Io(e)),
                    None => return Err(TuiError::InputClosed),
                },
                Some(msg) = self.rx.recv() => {
                    self.dispatch(msg);
                    self.drain();
                }
                _ = ticker.tick() => {}
            }
        }

        Ok(())
    }
}
