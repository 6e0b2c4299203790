// crates/tui/tests/support/mod.rs
//! In-memory services for driving the runtime in tests

#![allow(dead_code)]

use marquee_content_sources::{MovieCatalog, SourceError, SourceResult, TrendingSource};
use marquee_core::{
    MovieDetail, MovieId, MovieSummary, SearchPage, SearchRequest, TrendingEntry,
};
use marquee_tui::App;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Duration;

/// Catalog answering every query with one movie titled after the query
#[derive(Default)]
pub struct FakeCatalog {
    requests: Mutex<Vec<SearchRequest>>,
    delays: HashMap<String, Duration>,
    total_pages: u32,
}

impl FakeCatalog {
    pub fn new(total_pages: u32) -> Self {
        Self {
            total_pages,
            ..Self::default()
        }
    }

    /// Makes searches for `query` take `delay` to answer
    pub fn with_delay(mut self, query: &str, delay: Duration) -> Self {
        self.delays.insert(query.to_string(), delay);
        self
    }

    pub fn requests(&self) -> Vec<SearchRequest> {
        self.requests
            .lock()
            .map(|requests| requests.clone())
            .unwrap_or_default()
    }
}

impl MovieCatalog for FakeCatalog {
    async fn search(&self, request: &SearchRequest) -> SearchPage {
        if let Ok(mut requests) = self.requests.lock() {
            requests.push(request.clone());
        }
        if let Some(delay) = self.delays.get(&request.query) {
            tokio::time::sleep(*delay).await;
        }

        SearchPage::new(
            vec![MovieSummary::new(MovieId(7), request.query.clone())],
            self.total_pages,
        )
    }

    async fn fetch_by_id(&self, id: MovieId) -> MovieDetail {
        MovieDetail {
            id,
            title: Some(format!("Movie {}", id)),
            ..MovieDetail::default()
        }
    }
}

/// Trending store with a fixed list, or a failing one
pub struct FakeTrending {
    entries: Option<Vec<TrendingEntry>>,
}

impl FakeTrending {
    pub fn with_entries(titles: &[&str]) -> Self {
        Self {
            entries: Some(
                titles
                    .iter()
                    .enumerate()
                    .map(|(i, title)| TrendingEntry::new(MovieId(i as u64 + 1), *title))
                    .collect(),
            ),
        }
    }

    pub fn failing() -> Self {
        Self { entries: None }
    }
}

impl TrendingSource for FakeTrending {
    async fn list_trending(&self, limit: u32) -> SourceResult<Vec<TrendingEntry>> {
        match &self.entries {
            Some(entries) => Ok(entries.iter().take(limit as usize).cloned().collect()),
            None => Err(SourceError::HttpStatus {
                status: 503,
                url: "http://trending.test/documents".to_string(),
            }),
        }
    }

    async fn record_search(&self, _query: &str, _top: &MovieSummary) -> SourceResult<()> {
        Ok(())
    }
}

/// Lets spawned work finish and applies whatever it reported
pub async fn settle<C, T>(app: &mut App<C, T>)
where
    C: MovieCatalog + 'static,
    T: TrendingSource + 'static,
{
    for _ in 0..10 {
        tokio::task::yield_now().await;
        app.drain();
    }
}
