//! TMDB (The Movie Database) API client
//!
//! Fetches the detail record for a single movie.
//! API docs: https://developer.themoviedb.org/docs

use anyhow::Result;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

use crate::models::{Genre, MovieDetail, ProductionCompany};

/// TMDB API error types
#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("Resource not found (404)")]
    NotFound,

    #[error("Rate limited (429)")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// TMDB API client
#[derive(Debug, Clone)]
pub struct TmdbClient {
    api_key: String,
    base_url: String,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a new TMDB client with the given API key
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, "https://api.themoviedb.org/3")
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .build()
                .unwrap_or_default(),
        }
    }

    /// Make an authenticated GET request; single attempt, no retry policy
    async fn get<T: for<'de> Deserialize<'de>>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(TmdbError::RequestFailed)?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await.map_err(TmdbError::RequestFailed)?;
                let parsed: T = serde_json::from_str(&body)
                    .map_err(|e| TmdbError::InvalidResponse(format!("JSON parse error: {}", e)))?;
                Ok(parsed)
            }
            StatusCode::NOT_FOUND => Err(TmdbError::NotFound.into()),
            StatusCode::TOO_MANY_REQUESTS => Err(TmdbError::RateLimited.into()),
            status => Err(TmdbError::ServerError(status.as_u16()).into()),
        }
    }

    /// Get movie details by TMDB id
    pub async fn movie_detail(&self, id: u64) -> Result<MovieDetail> {
        let endpoint = format!("/movie/{}", id);
        let response: MovieResponse = self.get(&endpoint).await?;
        Ok(response.into_detail())
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

#[derive(Debug, Deserialize)]
struct MovieResponse {
    id: u64,
    title: String,
    poster_path: Option<String>,
    release_date: Option<String>,
    runtime: Option<u32>,
    vote_average: Option<f32>,
    vote_count: Option<u64>,
    budget: Option<u64>,
    revenue: Option<u64>,
    status: Option<String>,
    tagline: Option<String>,
    overview: Option<String>,
    // Null or absent arrays deserialize to empty, so downstream iteration is
    // always safe
    #[serde(default, deserialize_with = "null_as_empty")]
    genres: Vec<GenreRaw>,
    #[serde(default, deserialize_with = "null_as_empty")]
    production_companies: Vec<CompanyRaw>,
}

impl MovieResponse {
    fn into_detail(self) -> MovieDetail {
        MovieDetail {
            id: self.id,
            title: self.title,
            poster_path: self.poster_path,
            release_date: self.release_date.filter(|d| !d.is_empty()),
            runtime: self.runtime,
            vote_average: self.vote_average,
            vote_count: self.vote_count,
            budget: self.budget.filter(|b| *b > 0),
            revenue: self.revenue.filter(|r| *r > 0),
            status: self.status.filter(|s| !s.is_empty()),
            tagline: self.tagline.filter(|t| !t.is_empty()),
            overview: self.overview.filter(|o| !o.is_empty()),
            genres: self
                .genres
                .into_iter()
                .map(|g| Genre {
                    id: g.id,
                    name: g.name,
                })
                .collect(),
            production_companies: self
                .production_companies
                .into_iter()
                .map(|c| ProductionCompany { name: c.name })
                .collect(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenreRaw {
    id: u64,
    name: String,
}

#[derive(Debug, Deserialize)]
struct CompanyRaw {
    name: String,
}

/// Treat an explicit JSON null the same as an absent array
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    let opt: Option<Vec<T>> = Option::deserialize(deserializer)?;
    Ok(opt.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_payload_parses() {
        let raw = r#"{"id": 5, "title": "Sparse"}"#;
        let response: MovieResponse = serde_json::from_str(raw).unwrap();
        let detail = response.into_detail();
        assert_eq!(detail.id, 5);
        assert_eq!(detail.title, "Sparse");
        assert!(detail.genres.is_empty());
        assert!(detail.production_companies.is_empty());
    }

    #[test]
    fn test_null_arrays_parse_as_empty() {
        let raw = r#"{"id": 5, "title": "Sparse", "genres": null, "production_companies": null}"#;
        let response: MovieResponse = serde_json::from_str(raw).unwrap();
        let detail = response.into_detail();
        assert!(detail.genres.is_empty());
        assert!(detail.production_companies.is_empty());
        assert_eq!(detail.companies_display(), "N/A");
    }

    #[test]
    fn test_empty_strings_become_absent() {
        let raw = r#"{"id": 5, "title": "Sparse", "release_date": "", "tagline": "", "status": ""}"#;
        let response: MovieResponse = serde_json::from_str(raw).unwrap();
        let detail = response.into_detail();
        assert_eq!(detail.release_date, None);
        assert_eq!(detail.tagline, None);
        assert_eq!(detail.status, None);
    }

    #[test]
    fn test_zero_money_becomes_absent() {
        // TMDB reports unknown budget/revenue as 0
        let raw = r#"{"id": 5, "title": "Sparse", "budget": 0, "revenue": 0}"#;
        let response: MovieResponse = serde_json::from_str(raw).unwrap();
        let detail = response.into_detail();
        assert_eq!(detail.budget, None);
        assert_eq!(detail.revenue, None);
        assert_eq!(detail.budget_display(), "$0 million");
    }
}
