//! Trending search entries

use crate::types::MovieId;
use serde::{Deserialize, Serialize};

/// One row of the trending list, ranked by how often it was searched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingEntry {
    pub movie_id: MovieId,
    pub title: String,
    pub poster_url: Option<String>,
    /// Query text that first surfaced this movie
    pub search_term: String,
    pub count: u64,
}

impl TrendingEntry {
    pub fn new(movie_id: MovieId, title: impl Into<String>) -> Self {
        Self {
            movie_id,
            title: title.into(),
            poster_url: None,
            search_term: String::new(),
            count: 0,
        }
    }
}
