// crates/content-sources/src/traits.rs
//! Seams between the UI runtime and the remote services

use crate::SourceResult;
use marquee_core::{MovieDetail, MovieId, MovieSummary, SearchPage, SearchRequest, TrendingEntry};
use std::future::Future;

/// Something that can answer searches and detail lookups
///
/// Both operations are infallible: failures come back as an empty page
/// (with [`SearchPage::error`] set) or as `MovieDetail::default()`.
pub trait MovieCatalog: Send + Sync {
    /// Fetches one page of results for a query, or the popular listing
    /// for a blank query
    fn search(&self, request: &SearchRequest) -> impl Future<Output = SearchPage> + Send;

    /// Fetches the full record for one movie
    fn fetch_by_id(&self, id: MovieId) -> impl Future<Output = MovieDetail> + Send;
}

/// Something that ranks movies by how often they were searched
pub trait TrendingSource: Send + Sync {
    /// Most searched movies, highest count first
    fn list_trending(
        &self,
        limit: u32,
    ) -> impl Future<Output = SourceResult<Vec<TrendingEntry>>> + Send;

    /// Counts one more search that surfaced `top_result`
    fn record_search(
        &self,
        query: &str,
        top_result: &MovieSummary,
    ) -> impl Future<Output = SourceResult<()>> + Send;
}
