//! TMDB (The Movie Database) client facade.
//!
//! Uses TMDB API v3: https://developer.themoviedb.org/docs
//!
//! Every call is a single synchronous-in-spirit GET: no retries, no
//! caching, no rate limiting. Failures map onto [`TmdbError`] so callers
//! never see a raw transport error.

use tracing::debug;

use crate::config::TmdbConfig;
use crate::types::{
    parse_cast, parse_movie_details, parse_movie_page, CastMember, MovieDetails, MovieSummary,
};
use crate::TmdbError;

pub const DEFAULT_LANGUAGE: &str = "pt-BR";

pub struct TmdbClient {
    config: TmdbConfig,
    client: reqwest::Client,
}

impl TmdbClient {
    pub fn new(config: TmdbConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// GET `base_url + path` with the API key merged into the query
    /// parameters, returning the decoded JSON body.
    pub async fn get(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<serde_json::Value, TmdbError> {
        let mut all_params = vec![("api_key", self.config.api_key.as_str())];
        all_params.extend_from_slice(params);

        let url = format!("{}{}", self.config.base_url, path);
        debug!(url = %url, "TMDB request");

        let resp = self
            .client
            .get(&url)
            .query(&all_params)
            .send()
            .await
            .map_err(|e| TmdbError::Network(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            // TMDB error bodies carry a human-readable status_message.
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v["status_message"].as_str().map(|s| s.to_string()))
                .unwrap_or_else(|| status.to_string());
            return Err(TmdbError::Status {
                status: status.as_u16(),
                message,
            });
        }

        resp.json()
            .await
            .map_err(|e| TmdbError::Decode(e.to_string()))
    }

    /// `/movie/{id}`
    pub async fn movie_details(
        &self,
        movie_id: u64,
        language: &str,
    ) -> Result<MovieDetails, TmdbError> {
        let data = self
            .get(&format!("/movie/{movie_id}"), &[("language", language)])
            .await?;
        Ok(parse_movie_details(&data))
    }

    /// `/movie/{id}/credits` — billed cast only, in billing order.
    pub async fn movie_credits(
        &self,
        movie_id: u64,
        language: &str,
    ) -> Result<Vec<CastMember>, TmdbError> {
        let data = self
            .get(
                &format!("/movie/{movie_id}/credits"),
                &[("language", language)],
            )
            .await?;
        Ok(parse_cast(&data))
    }

    /// `/movie/{id}/recommendations`
    pub async fn recommendations(
        &self,
        movie_id: u64,
        language: &str,
        page: u32,
    ) -> Result<Vec<MovieSummary>, TmdbError> {
        let page = page.to_string();
        let data = self
            .get(
                &format!("/movie/{movie_id}/recommendations"),
                &[("language", language), ("page", &page)],
            )
            .await?;
        Ok(parse_movie_page(&data))
    }

    /// `/movie/{id}/similar`
    pub async fn similar(
        &self,
        movie_id: u64,
        language: &str,
        page: u32,
    ) -> Result<Vec<MovieSummary>, TmdbError> {
        let page = page.to_string();
        let data = self
            .get(
                &format!("/movie/{movie_id}/similar"),
                &[("language", language), ("page", &page)],
            )
            .await?;
        Ok(parse_movie_page(&data))
    }

    /// `/search/movie`
    pub async fn search(
        &self,
        query: &str,
        language: &str,
        page: u32,
    ) -> Result<Vec<MovieSummary>, TmdbError> {
        let page = page.to_string();
        let data = self
            .get(
                "/search/movie",
                &[("query", query), ("language", language), ("page", &page)],
            )
            .await?;
        Ok(parse_movie_page(&data))
    }
}
