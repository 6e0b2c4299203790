// crates/content-sources/src/tmdb.rs
//! Movie catalog backed by the TMDB v3 API

use crate::appwrite::TrendingClient;
use crate::http::{build_client, normalize_base, read_json};
use crate::{MovieCatalog, SourceError, SourceResult};
use marquee_config::CatalogConfig;
use marquee_core::display;
use marquee_core::{
    cap_total_pages, Genre, MovieDetail, MovieId, MovieSummary, ProductionCompany,
    ProductionCountry, SearchPage, SearchRequest, SpokenLanguage, Trailer, Video,
};
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;
use std::future::Future;

/// Client for catalog search, discover and detail lookups
#[derive(Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
    image_base_url: String,
    api_token: String,
    trending: Option<TrendingClient>,
}

impl CatalogClient {
    /// Builds a client from the catalog config section
    ///
    /// Fails with [`SourceError::Configuration`] when the token is unset or a
    /// URL is malformed.
    pub fn new(config: &CatalogConfig) -> SourceResult<Self> {
        if config.api_token.is_empty() {
            return Err(SourceError::Configuration(
                "catalog API token is not set".to_string(),
            ));
        }

        Ok(Self {
            http: build_client(config.timeout())?,
            base_url: normalize_base(&config.base_url)?,
            image_base_url: normalize_base(&config.image_base_url)?,
            api_token: config.api_token.expose().trim().to_string(),
            trending: None,
        })
    }

    /// Records successful searches in the given trending store
    pub fn with_trending(mut self, trending: TrendingClient) -> Self {
        self.trending = Some(trending.with_image_base_url(self.image_base_url.clone()));
        self
    }

    /// Full poster URL for a catalog poster path
    pub fn poster_url(&self, poster_path: &str) -> String {
        display::poster_url(&self.image_base_url, poster_path)
    }

    pub fn image_base_url(&self) -> &str {
        &self.image_base_url
    }

    async fn get<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> SourceResult<T> {
        let url = format!("{}{}", self.base_url, path);
        log::debug!("GET {} {:?}", url, query);

        let response = self
            .http
            .get(&url)
            .query(query)
            .header(AUTHORIZATION, format!("Bearer {}", self.api_token))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        read_json(response).await
    }

    /// Fetches one result page
    ///
    /// A blank query lists popular movies instead of searching. The page
    /// count is capped at the catalog's hard limit. A non-blank first page
    /// with results is recorded in the trending store in the background.
    pub async fn try_search(&self, query: &str, page: u32) -> SourceResult<SearchPage> {
        let request = SearchRequest::new(query.trim(), page);
        let page_param = ("page", request.page.to_string());

        let raw: ResultsPage = if request.is_popular() {
            self.get(
                "/discover/movie",
                &[("sort_by", "popularity.desc".to_string()), page_param],
            )
            .await?
        } else {
            self.get(
                "/search/movie",
                &[("query", request.query.clone()), page_param],
            )
            .await?
        };

        let page = SearchPage::new(raw.results, cap_total_pages(raw.total_pages));

        if !request.is_popular() && request.page == 1 {
            if let Some(top_result) = page.top_result() {
                self.record_in_background(&request.query, top_result);
            }
        }

        Ok(page)
    }

    /// Like [`try_search`](Self::try_search), but failures become an empty
    /// page with [`SearchPage::error`] set
    pub async fn search(&self, query: &str, page: u32) -> SearchPage {
        match self.try_search(query, page).await {
            Ok(page) => page,
            Err(e) => {
                log::warn!("Error fetching movies for '{}' page {}: {}", query, page, e);
                SearchPage::failed(e.failure())
            }
        }
    }

    /// Fetches the full record for one movie, trailer included
    pub async fn try_fetch_by_id(&self, id: MovieId) -> SourceResult<MovieDetail> {
        let raw: RawMovieDetail = self
            .get(
                &format!("/movie/{}", id),
                &[("append_to_response", "videos".to_string())],
            )
            .await?;
        Ok(raw.into())
    }

    /// Like [`try_fetch_by_id`](Self::try_fetch_by_id), but failures become
    /// `MovieDetail::default()`
    pub async fn fetch_by_id(&self, id: MovieId) -> MovieDetail {
        match self.try_fetch_by_id(id).await {
            Ok(detail) => detail,
            Err(e) => {
                log::warn!("Error fetching movie {}: {}", id, e);
                MovieDetail::default()
            }
        }
    }

    fn record_in_background(&self, query: &str, top_result: &MovieSummary) {
        let Some(trending) = self.trending.clone() else {
            return;
        };
        let query = query.to_string();
        let top_result = top_result.clone();

        tokio::spawn(async move {
            match trending.record_search(&query, &top_result).await {
                Ok(()) => log::debug!("Recorded search '{}' -> {}", query, top_result.id),
                Err(e) => log::warn!("Failed to record search '{}': {}", query, e),
            }
        });
    }
}

impl MovieCatalog for CatalogClient {
    fn search(&self, request: &SearchRequest) -> impl Future<Output = SearchPage> + Send {
        CatalogClient::search(self, &request.query, request.page)
    }

    fn fetch_by_id(&self, id: MovieId) -> impl Future<Output = MovieDetail> + Send {
        CatalogClient::fetch_by_id(self, id)
    }
}

#[derive(Debug, Deserialize)]
struct ResultsPage {
    results: Vec<MovieSummary>,
    total_pages: u32,
}

#[derive(Debug, Deserialize)]
struct RawMovieDetail {
    id: MovieId,
    title: Option<String>,
    poster_path: Option<String>,
    vote_average: Option<f64>,
    release_date: Option<String>,
    original_language: Option<String>,
    status: Option<String>,
    genres: Option<Vec<Genre>>,
    overview: Option<String>,
    runtime: Option<u32>,
    budget: Option<u64>,
    revenue: Option<u64>,
    tagline: Option<String>,
    production_companies: Option<Vec<ProductionCompany>>,
    production_countries: Option<Vec<ProductionCountry>>,
    spoken_languages: Option<Vec<SpokenLanguage>>,
    videos: Option<VideoList>,
}

#[derive(Debug, Deserialize)]
struct VideoList {
    #[serde(default)]
    results: Vec<Video>,
}

impl From<RawMovieDetail> for MovieDetail {
    fn from(raw: RawMovieDetail) -> Self {
        let trailer = raw
            .videos
            .as_ref()
            .map(|videos| Trailer::from_videos(&videos.results))
            .unwrap_or_default();

        MovieDetail {
            id: raw.id,
            title: raw.title,
            poster_path: raw.poster_path,
            vote_average: raw.vote_average,
            release_date: raw.release_date,
            original_language: raw.original_language,
            status: raw.status,
            genres: raw.genres.unwrap_or_default(),
            overview: raw.overview,
            runtime: raw.runtime,
            budget: raw.budget,
            revenue: raw.revenue,
            tagline: raw.tagline,
            production_companies: raw.production_companies.unwrap_or_default(),
            production_countries: raw.production_countries.unwrap_or_default(),
            spoken_languages: raw.spoken_languages.unwrap_or_default(),
            trailer,
        }
    }
}
