//! Catalog client tests against a local HTTP server

mod support;

use marquee_config::{CatalogConfig, Secret, TrendingConfig};
use marquee_content_sources::{CatalogClient, MovieCatalog, SourceError, TrendingClient};
use marquee_core::{FetchFailure, MovieDetail, MovieId, SearchRequest, Trailer};
use std::time::Duration;
use support::{dead_address, MockServer, Reply};

const MATRIX_PAGE: &str = r#"{
    "page": 1,
    "total_pages": 1200,
    "total_results": 24000,
    "results": [
        {"id": 603, "title": "The Matrix", "poster_path": "/m.jpg", "vote_average": 8.2,
         "release_date": "1999-03-30", "original_language": "en"},
        {"id": 604, "title": "The Matrix Reloaded", "poster_path": null, "vote_average": 7.0,
         "release_date": "2003-05-15", "original_language": "en"}
    ]
}"#;

const INCEPTION: &str = r#"{
    "id": 27205,
    "title": "Inception",
    "runtime": 148,
    "budget": 160000000,
    "status": "Released",
    "videos": {"results": [
        {"key": "clip", "site": "YouTube", "type": "Clip", "name": "Clip"},
        {"key": "YoHD9XEInc0", "site": "YouTube", "type": "Trailer", "name": "Official Trailer"}
    ]}
}"#;

fn catalog_config(base_url: String) -> CatalogConfig {
    CatalogConfig {
        base_url,
        api_token: Secret::new("test-token"),
        ..CatalogConfig::default()
    }
}

fn trending_client(server: &MockServer) -> TrendingClient {
    TrendingClient::new(&TrendingConfig {
        endpoint: format!("{}/v1", server.url()),
        project_id: "project".to_string(),
        api_key: Secret::new("key"),
        database_id: "db".to_string(),
        collection_id: "metrics".to_string(),
        ..TrendingConfig::default()
    })
    .expect("trending client")
}

#[tokio::test]
async fn test_search_uses_search_endpoint() {
    let server = MockServer::start(|_| Reply::ok(MATRIX_PAGE)).await;
    let client = CatalogClient::new(&catalog_config(server.url())).expect("client");

    let page = client.search("the matrix", 1).await;

    assert_eq!(page.results.len(), 2);
    assert_eq!(page.results[0].id, MovieId(603));
    assert_eq!(page.total_pages, 500);
    assert!(page.error.is_none());

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].path(), "/search/movie");
    assert!(requests[0].target.contains("query=the+matrix"));
    assert!(requests[0].target.contains("page=1"));
    assert_eq!(requests[0].header("authorization"), Some("Bearer test-token"));
    assert_eq!(requests[0].header("accept"), Some("application/json"));
}

#[tokio::test]
async fn test_blank_query_uses_discover_endpoint() {
    let server = MockServer::start(|_| Reply::ok(MATRIX_PAGE)).await;
    let client = CatalogClient::new(&catalog_config(server.url())).expect("client");

    for query in ["", "   "] {
        let page = client.search(query, 2).await;
        assert_eq!(page.results.len(), 2);
    }

    for request in server.requests() {
        assert_eq!(request.path(), "/discover/movie");
        assert!(request.target.contains("sort_by=popularity.desc"));
        assert!(request.target.contains("page=2"));
    }
}

#[tokio::test]
async fn test_trait_search_forwards_request() {
    let server = MockServer::start(|_| Reply::ok(MATRIX_PAGE)).await;
    let client = CatalogClient::new(&catalog_config(server.url())).expect("client");

    let page = MovieCatalog::search(&client, &SearchRequest::new("matrix", 3)).await;
    assert_eq!(page.results.len(), 2);

    let requests = server.requests();
    assert!(requests[0].target.contains("query=matrix"));
    assert!(requests[0].target.contains("page=3"));
}

#[tokio::test]
async fn test_http_500_yields_empty_results() {
    let server = MockServer::start(|_| Reply::status(500)).await;
    let client = CatalogClient::new(&catalog_config(server.url())).expect("client");

    let page = client.search("alien", 1).await;
    assert!(page.results.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.error, Some(FetchFailure::HttpStatus(500)));

    let detail = client.fetch_by_id(MovieId(348)).await;
    assert_eq!(detail, MovieDetail::default());

    match client.try_fetch_by_id(MovieId(348)).await {
        Err(SourceError::HttpStatus { status, .. }) => assert_eq!(status, 500),
        other => panic!("expected HttpStatus, got {:?}", other.map(|d| d.id)),
    }
}

#[tokio::test]
async fn test_malformed_body_is_data_shape_failure() {
    let server = MockServer::start(|_| Reply::ok(r#"{"page": 1}"#)).await;
    let client = CatalogClient::new(&catalog_config(server.url())).expect("client");

    let page = client.search("alien", 1).await;
    assert!(page.results.is_empty());
    assert_eq!(page.error, Some(FetchFailure::DataShape));
}

#[tokio::test]
async fn test_missing_total_pages_is_data_shape_failure() {
    let server = MockServer::start(|_| {
        Reply::ok(r#"{"page": 1, "results": [{"id": 603, "title": "The Matrix"}]}"#)
    })
    .await;
    let client = CatalogClient::new(&catalog_config(server.url())).expect("client");

    let page = client.search("matrix", 1).await;
    assert!(page.results.is_empty());
    assert_eq!(page.total_pages, 0);
    assert_eq!(page.error, Some(FetchFailure::DataShape));
}

#[tokio::test]
async fn test_unreachable_server_is_transport_failure() {
    let client = CatalogClient::new(&catalog_config(dead_address().await)).expect("client");

    let page = client.search("alien", 1).await;
    assert_eq!(page.error, Some(FetchFailure::Transport));
    assert_eq!(client.fetch_by_id(MovieId(1)).await, MovieDetail::default());
}

#[tokio::test]
async fn test_fetch_by_id_resolves_trailer() {
    let server = MockServer::start(|_| Reply::ok(INCEPTION)).await;
    let client = CatalogClient::new(&catalog_config(server.url())).expect("client");

    let detail = client.fetch_by_id(MovieId(27205)).await;
    assert_eq!(detail.title.as_deref(), Some("Inception"));
    assert_eq!(detail.runtime, Some(148));
    assert_eq!(
        detail.trailer.embed_url().as_deref(),
        Some("https://www.youtube.com/embed/YoHD9XEInc0")
    );

    let requests = server.requests();
    assert_eq!(requests[0].path(), "/movie/27205");
    assert!(requests[0].target.contains("append_to_response=videos"));
}

#[tokio::test]
async fn test_fetch_by_id_without_trailer() {
    let server = MockServer::start(|_| {
        Reply::ok(
            r#"{"id": 5, "title": "Shorts", "videos": {"results": [
                {"key": "t1", "site": "YouTube", "type": "Teaser", "name": "Teaser"}
            ]}}"#,
        )
    })
    .await;
    let client = CatalogClient::new(&catalog_config(server.url())).expect("client");

    let detail = client.fetch_by_id(MovieId(5)).await;
    assert_eq!(detail.trailer, Trailer::NotAvailable);
}

#[tokio::test]
async fn test_search_records_top_result() {
    let catalog = MockServer::start(|_| Reply::ok(MATRIX_PAGE)).await;
    let trending = MockServer::start(|request| match request.method.as_str() {
        "PATCH" => Reply::status(404),
        _ => Reply::json(201, "{}"),
    })
    .await;

    let client = CatalogClient::new(&catalog_config(catalog.url()))
        .expect("client")
        .with_trending(trending_client(&trending));

    let page = client.search("matrix", 1).await;
    assert_eq!(page.results.len(), 2);

    let requests = trending.wait_for_requests(2).await;
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, "PATCH");
    assert_eq!(
        requests[0].path(),
        "/v1/databases/db/collections/metrics/documents/movie-603/count/increment"
    );
    assert_eq!(requests[1].method, "POST");
    assert!(requests[1].body.contains(r#""documentId":"movie-603""#));
    assert!(requests[1].body.contains(r#""search_term":"matrix""#));
    assert!(requests[1]
        .body
        .contains(r#""poster_url":"https://image.tmdb.org/t/p/w500/m.jpg""#));
    assert_eq!(requests[1].header("x-appwrite-project"), Some("project"));
    assert_eq!(requests[1].header("x-appwrite-key"), Some("key"));
}

#[tokio::test]
async fn test_trending_failure_leaves_results_untouched() {
    let catalog = MockServer::start(|_| Reply::ok(MATRIX_PAGE)).await;
    let trending = MockServer::start(|_| Reply::status(500)).await;

    let client = CatalogClient::new(&catalog_config(catalog.url()))
        .expect("client")
        .with_trending(trending_client(&trending));

    let page = client.search("matrix", 1).await;
    assert_eq!(page.results.len(), 2);
    assert_eq!(page.total_pages, 500);
    assert!(page.error.is_none());

    // The recording was attempted and failed on its own
    assert_eq!(trending.wait_for_requests(1).await.len(), 1);
}

#[tokio::test]
async fn test_only_first_page_of_real_searches_is_recorded() {
    let catalog = MockServer::start(|_| Reply::ok(MATRIX_PAGE)).await;
    let trending = MockServer::start(|_| Reply::ok("{}")).await;

    let client = CatalogClient::new(&catalog_config(catalog.url()))
        .expect("client")
        .with_trending(trending_client(&trending));

    client.search("matrix", 2).await;
    client.search("", 1).await;
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(trending.requests().is_empty());
}

#[tokio::test]
async fn test_empty_results_are_not_recorded() {
    let catalog =
        MockServer::start(|_| Reply::ok(r#"{"page": 1, "total_pages": 0, "results": []}"#)).await;
    let trending = MockServer::start(|_| Reply::ok("{}")).await;

    let client = CatalogClient::new(&catalog_config(catalog.url()))
        .expect("client")
        .with_trending(trending_client(&trending));

    let page = client.search("zzzzqqq", 1).await;
    assert!(page.results.is_empty());
    assert!(page.error.is_none());
    tokio::time::sleep(Duration::from_millis(100)).await;

    assert!(trending.requests().is_empty());
}

#[tokio::test]
#[ignore = "talks to the live catalog API; needs MARQUEE_TMDB_API_TOKEN"]
async fn test_live_popular_listing() {
    let token = std::env::var("MARQUEE_TMDB_API_TOKEN").unwrap_or_default();
    let config = CatalogConfig {
        api_token: Secret::new(token),
        ..CatalogConfig::default()
    };
    let client = CatalogClient::new(&config).expect("client");

    let page = client.try_search("", 1).await.expect("live search");
    assert!(!page.results.is_empty());
    assert!(page.total_pages <= 500);
}
