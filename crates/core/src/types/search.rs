//! Search requests and result pages

use crate::types::MovieSummary;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Returns true when a query should fall back to the popular listing
pub fn is_blank_query(query: &str) -> bool {
    query.trim().is_empty()
}

/// The (query, page) pair a search was issued for
///
/// Responses are tagged with their request so a late answer for an older
/// request can be told apart from the one currently expected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub page: u32,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>, page: u32) -> Self {
        Self {
            query: query.into(),
            page: page.max(1),
        }
    }

    /// Blank queries list popular movies instead of searching
    pub fn is_popular(&self) -> bool {
        is_blank_query(&self.query)
    }
}

/// Kind of failure behind an empty result page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchFailure {
    /// The request never produced a response
    Transport,
    /// The service answered with a non-success status
    HttpStatus(u16),
    /// The body was missing expected fields or was not valid JSON
    DataShape,
    /// The client could not be built from its configuration
    Configuration,
}

impl fmt::Display for FetchFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchFailure::Transport => write!(f, "transport failure"),
            FetchFailure::HttpStatus(code) => write!(f, "HTTP status {}", code),
            FetchFailure::DataShape => write!(f, "unexpected response shape"),
            FetchFailure::Configuration => write!(f, "client misconfigured"),
        }
    }
}

/// One page of catalog results
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchPage {
    pub results: Vec<MovieSummary>,
    /// Page count, already capped at the catalog's hard limit
    pub total_pages: u32,
    /// Set when the page is empty because the fetch failed
    pub error: Option<FetchFailure>,
}

impl SearchPage {
    pub fn new(results: Vec<MovieSummary>, total_pages: u32) -> Self {
        Self {
            results,
            total_pages,
            error: None,
        }
    }

    /// The empty page returned for a failed fetch
    pub fn failed(failure: FetchFailure) -> Self {
        Self {
            results: Vec::new(),
            total_pages: 0,
            error: Some(failure),
        }
    }

    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }

    /// Highest-ranked result, if any
    pub fn top_result(&self) -> Option<&MovieSummary> {
        self.results.first()
    }
}
