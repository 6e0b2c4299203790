// crates/content-sources/src/appwrite.rs
//! Trending store backed by an Appwrite document collection
//!
//! Each movie that topped a search owns one document, `movie-{id}`, whose
//! `count` attribute is bumped through the store's atomic increment
//! endpoint. Ranking is done by the store, never locally.

use crate::http::{build_client, ensure_success, normalize_base, read_json};
use crate::{SourceError, SourceResult, TrendingSource};
use marquee_config::catalog_config::DEFAULT_IMAGE_BASE_URL;
use marquee_config::TrendingConfig;
use marquee_core::display::poster_url;
use marquee_core::{MovieId, MovieSummary, TrendingEntry};
use reqwest::{Method, RequestBuilder};
use serde::{Deserialize, Serialize};
use std::future::Future;
use std::time::Duration;

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);
const COUNT_ATTRIBUTE: &str = "count";

/// Client for the trending collection
#[derive(Clone)]
pub struct TrendingClient {
    http: reqwest::Client,
    endpoint: String,
    project_id: String,
    api_key: String,
    database_id: String,
    collection_id: String,
    image_base_url: String,
}

impl TrendingClient {
    /// Builds a client from the trending config section
    ///
    /// Fails with [`SourceError::Configuration`] when a credential is unset.
    pub fn new(config: &TrendingConfig) -> SourceResult<Self> {
        let missing = config.missing_credentials();
        if !missing.is_empty() {
            return Err(SourceError::Configuration(format!(
                "missing {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            http: build_client(REQUEST_TIMEOUT)?,
            endpoint: normalize_base(&config.endpoint)?,
            project_id: config.project_id.trim().to_string(),
            api_key: config.api_key.expose().trim().to_string(),
            database_id: config.database_id.trim().to_string(),
            collection_id: config.collection_id.trim().to_string(),
            image_base_url: DEFAULT_IMAGE_BASE_URL.to_string(),
        })
    }

    /// Sets the prefix used to build stored poster URLs
    pub fn with_image_base_url(mut self, image_base_url: impl Into<String>) -> Self {
        self.image_base_url = image_base_url.into();
        self
    }

    /// Document id for a movie's counter
    pub fn document_id(movie_id: MovieId) -> String {
        format!("movie-{}", movie_id)
    }

    fn documents_url(&self) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, self.database_id, self.collection_id
        )
    }

    fn request(&self, method: Method, url: &str) -> RequestBuilder {
        self.http
            .request(method, url)
            .header("X-Appwrite-Project", &self.project_id)
            .header("X-Appwrite-Key", &self.api_key)
            .header(reqwest::header::ACCEPT, "application/json")
    }

    /// Most searched movies, highest count first
    pub async fn list_trending(&self, limit: u32) -> SourceResult<Vec<TrendingEntry>> {
        let order = serde_json::json!({ "method": "orderDesc", "attribute": COUNT_ATTRIBUTE });
        let limit = serde_json::json!({ "method": "limit", "values": [limit] });

        log::debug!("Listing trending documents");
        let response = self
            .request(Method::GET, &self.documents_url())
            .query(&[("queries[]", order.to_string()), ("queries[]", limit.to_string())])
            .send()
            .await?;

        let list: DocumentList = read_json(response).await?;
        Ok(list.documents.into_iter().map(TrendingEntry::from).collect())
    }

    /// Counts one more search that surfaced `top_result`
    ///
    /// Increments the movie's counter, creating the document on first
    /// sight. A create that loses the race to a concurrent writer falls
    /// back to a single further increment.
    pub async fn record_search(&self, query: &str, top_result: &MovieSummary) -> SourceResult<()> {
        let document_id = Self::document_id(top_result.id);

        match self.increment(&document_id).await {
            Err(e) if e.is_not_found() => {}
            other => return other,
        }

        log::debug!("Creating trending document {}", document_id);
        match self.create(&document_id, query, top_result).await {
            Err(e) if e.is_conflict() => {
                log::debug!("Trending document {} already created, incrementing", document_id);
                self.increment(&document_id).await
            }
            other => other,
        }
    }

    async fn increment(&self, document_id: &str) -> SourceResult<()> {
        let url = format!(
            "{}/{}/{}/increment",
            self.documents_url(),
            document_id,
            COUNT_ATTRIBUTE
        );
        let response = self
            .request(Method::PATCH, &url)
            .json(&serde_json::json!({ "value": 1 }))
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }

    async fn create(
        &self,
        document_id: &str,
        query: &str,
        movie: &MovieSummary,
    ) -> SourceResult<()> {
        let body = NewDocument {
            document_id,
            data: TrendingDocumentData {
                search_term: query,
                movie_id: movie.id.as_u64(),
                title: &movie.title,
                poster_url: movie
                    .poster_path
                    .as_deref()
                    .map(|path| poster_url(&self.image_base_url, path)),
                count: 1,
            },
        };

        let response = self
            .request(Method::POST, &self.documents_url())
            .json(&body)
            .send()
            .await?;
        ensure_success(response)?;
        Ok(())
    }
}

impl TrendingSource for TrendingClient {
    fn list_trending(
        &self,
        limit: u32,
    ) -> impl Future<Output = SourceResult<Vec<TrendingEntry>>> + Send {
        TrendingClient::list_trending(self, limit)
    }

    fn record_search(
        &self,
        query: &str,
        top_result: &MovieSummary,
    ) -> impl Future<Output = SourceResult<()>> + Send {
        TrendingClient::record_search(self, query, top_result)
    }
}

#[derive(Debug, Deserialize)]
struct DocumentList {
    documents: Vec<TrendingDocument>,
}

#[derive(Debug, Deserialize)]
struct TrendingDocument {
    movie_id: u64,
    #[serde(default)]
    title: String,
    #[serde(default)]
    poster_url: Option<String>,
    #[serde(default)]
    search_term: String,
    #[serde(default)]
    count: u64,
}

impl From<TrendingDocument> for TrendingEntry {
    fn from(doc: TrendingDocument) -> Self {
        TrendingEntry {
            movie_id: MovieId::new(doc.movie_id),
            title: doc.title,
            poster_url: doc.poster_url,
            search_term: doc.search_term,
            count: doc.count,
        }
    }
}

#[derive(Debug, Serialize)]
struct NewDocument<'a> {
    #[serde(rename = "documentId")]
    document_id: &'a str,
    data: TrendingDocumentData<'a>,
}

#[derive(Debug, Serialize)]
struct TrendingDocumentData<'a> {
    search_term: &'a str,
    movie_id: u64,
    title: &'a str,
    poster_url: Option<String>,
    count: u64,
}
