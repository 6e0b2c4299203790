//! Domain types shared across the workspace

pub mod movie;
pub mod page;
pub mod search;
pub mod trending;

pub use movie::{
    Genre, MovieDetail, MovieId, MovieSummary, ProductionCompany, ProductionCountry,
    SpokenLanguage, Trailer, Video, YOUTUBE_EMBED_BASE,
};
pub use page::{cap_total_pages, PageState, MAX_TOTAL_PAGES};
pub use search::{is_blank_query, FetchFailure, SearchPage, SearchRequest};
pub use trending::TrendingEntry;
