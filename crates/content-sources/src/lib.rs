// crates/content-sources/src/lib.rs
//! Remote content sources for Marquee
//!
//! - [`CatalogClient`]: movie search, popular listing and detail lookups
//!   against the TMDB v3 API.
//! - [`TrendingClient`]: search counters kept in an Appwrite collection.
//!
//! The UI talks to both through the [`MovieCatalog`] and [`TrendingSource`]
//! traits so it can run against fakes in tests.

mod appwrite;
mod error;
mod http;
mod tmdb;
mod traits;

pub use appwrite::TrendingClient;
pub use error::{SourceError, SourceResult};
pub use tmdb::CatalogClient;
pub use traits::{MovieCatalog, TrendingSource};
