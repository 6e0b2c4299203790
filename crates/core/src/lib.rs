// crates/core/src/lib.rs
//! Shared movie model and display helpers for Marquee

pub mod display;
pub mod types;

// Re-export commonly used types
pub use types::{
    cap_total_pages, is_blank_query, FetchFailure, Genre, MovieDetail, MovieId, MovieSummary,
    PageState, ProductionCompany, ProductionCountry, SearchPage, SearchRequest, SpokenLanguage,
    Trailer, TrendingEntry, Video, MAX_TOTAL_PAGES,
};
