//! TMDB API client tests
//!
//! Tests detail retrieval, payload edge cases, and error handling.

use mockito::Server;
use cinetui::api::{TmdbClient, TmdbError};

// =============================================================================
// Detail Parsing Tests
// =============================================================================

#[tokio::test]
async fn test_movie_detail_parses_full_payload() {
    let mut server = Server::new_async().await;

    let mock_response = r#"{
        "id": 11324,
        "title": "Shutter Island",
        "poster_path": "/4GDy0PHYX3VRXUtBK0P8QX9kVVn.jpg",
        "release_date": "2010-02-14",
        "runtime": 138,
        "vote_average": 8.2,
        "vote_count": 22432,
        "budget": 80000000,
        "revenue": 294804195,
        "status": "Released",
        "tagline": "Some places never let you go.",
        "overview": "World War II soldier-turned-U.S. Marshal Teddy Daniels investigates.",
        "genres": [
            {"id": 18, "name": "Drama"},
            {"id": 53, "name": "Thriller"},
            {"id": 9648, "name": "Mystery"}
        ],
        "production_companies": [
            {"id": 4, "name": "Paramount", "logo_path": null, "origin_country": "US"},
            {"id": 2527, "name": "Phoenix Pictures", "logo_path": null, "origin_country": "US"}
        ]
    }"#;

    let mock = server
        .mock("GET", "/movie/11324")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_response)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let detail = client.movie_detail(11324).await.unwrap();

    mock.assert_async().await;

    assert_eq!(detail.id, 11324);
    assert_eq!(detail.title, "Shutter Island");
    assert_eq!(detail.release_date.as_deref(), Some("2010-02-14"));
    assert_eq!(detail.runtime, Some(138));
    assert_eq!(detail.vote_count, Some(22432));
    assert_eq!(detail.budget, Some(80_000_000));
    assert_eq!(detail.revenue, Some(294_804_195));
    assert_eq!(detail.status.as_deref(), Some("Released"));

    // Genres keep API order
    let genre_names: Vec<&str> = detail.genres.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(genre_names, vec!["Drama", "Thriller", "Mystery"]);

    // Derived display strings
    assert_eq!(detail.release_line().unwrap(), "February 14, 2010");
    assert_eq!(detail.vote_display(), "8/10");
    assert_eq!(detail.budget_display(), "$80 million");
    assert_eq!(detail.companies_display(), "Paramount · Phoenix Pictures");
    assert_eq!(
        detail.poster_url().unwrap(),
        "https://image.tmdb.org/t/p/w500/4GDy0PHYX3VRXUtBK0P8QX9kVVn.jpg"
    );
}

#[tokio::test]
async fn test_movie_detail_null_companies() {
    let mut server = Server::new_async().await;

    // Some records carry an explicit null instead of an empty array
    let mock_response = r#"{
        "id": 99,
        "title": "Obscure Short",
        "poster_path": null,
        "release_date": null,
        "genres": [],
        "production_companies": null
    }"#;

    let mock = server
        .mock("GET", "/movie/99")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(mock_response)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let detail = client.movie_detail(99).await.unwrap();

    mock.assert_async().await;

    assert!(detail.production_companies.is_empty());
    assert_eq!(detail.companies_display(), "N/A");
    assert!(detail.poster_url().is_none());
    assert!(detail.release_line().is_none());
    assert_eq!(detail.vote_display(), "0/10");
}

// =============================================================================
// Error Handling Tests
// =============================================================================

#[tokio::test]
async fn test_handles_not_found() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/movie/999999999")
        .with_status(404)
        .with_body(r#"{"status_code": 34, "status_message": "not found"}"#)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let result = client.movie_detail(999999999).await;

    mock.assert_async().await;

    // Should be a NotFound error, not a panic
    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TmdbError>(),
        Some(TmdbError::NotFound)
    ));
}

#[tokio::test]
async fn test_handles_rate_limit() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/movie/550")
        .with_status(429)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let result = client.movie_detail(550).await;

    mock.assert_async().await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TmdbError>(),
        Some(TmdbError::RateLimited)
    ));
}

#[tokio::test]
async fn test_handles_server_error() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/movie/550")
        .with_status(502)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let result = client.movie_detail(550).await;

    mock.assert_async().await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TmdbError>(),
        Some(TmdbError::ServerError(502))
    ));
}

#[tokio::test]
async fn test_handles_invalid_json() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/movie/550")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body("not json at all {")
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("test_key", server.url());
    let result = client.movie_detail(550).await;

    mock.assert_async().await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.downcast_ref::<TmdbError>(),
        Some(TmdbError::InvalidResponse(_))
    ));
}

#[tokio::test]
async fn test_sends_bearer_token() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/movie/550")
        .match_header("authorization", "Bearer secret_token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"id": 550, "title": "Fight Club"}"#)
        .create_async()
        .await;

    let client = TmdbClient::with_base_url("secret_token", server.url());
    let detail = client.movie_detail(550).await.unwrap();

    mock.assert_async().await;
    assert_eq!(detail.title, "Fight Club");
}
