// crates/content-sources/src/http.rs
//! Response handling shared by both clients

use crate::{SourceError, SourceResult};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;

/// Builds the underlying HTTP client
pub(crate) fn build_client(timeout: Duration) -> SourceResult<Client> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| SourceError::Configuration(format!("HTTP client: {}", e)))
}

/// Turns a non-2xx answer into [`SourceError::HttpStatus`]
pub(crate) fn ensure_success(response: Response) -> SourceResult<Response> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(SourceError::HttpStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        })
    }
}

/// Checks the status, then decodes the body
///
/// The body is read fully before parsing so a bad payload is reported as
/// [`SourceError::DataShape`] rather than a transport failure.
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> SourceResult<T> {
    let response = ensure_success(response)?;
    let body = response.bytes().await?;
    Ok(serde_json::from_slice(&body)?)
}

/// Trims whitespace and trailing slashes off a configured base URL
pub(crate) fn normalize_base(url: &str) -> SourceResult<String> {
    let trimmed = url.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        Ok(trimmed.to_string())
    } else {
        Err(SourceError::Configuration(format!(
            "'{}' is not an http(s) URL",
            url
        )))
    }
}
