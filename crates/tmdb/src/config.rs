//! Client configuration resolved once at process start.

use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.themoviedb.org/3";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TMDB_API_KEY is not set; export it or add it to a .env file")]
    MissingApiKey,
    #[error("TMDB_API_KEY is empty")]
    EmptyApiKey,
}

/// Base URL and API key for the TMDB v3 API.
///
/// Built once in `main` and handed to [`crate::TmdbClient`]; there is no
/// module-global state. `base_url` is overridable for tests pointed at a
/// mock server.
#[derive(Debug, Clone)]
pub struct TmdbConfig {
    pub api_key: String,
    pub base_url: String,
}

impl TmdbConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Reads `TMDB_API_KEY` (required) and `TMDB_BASE_URL` (optional) from
    /// the environment, loading a `.env` file first if one exists.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let api_key = std::env::var("TMDB_API_KEY").map_err(|_| ConfigError::MissingApiKey)?;
        if api_key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }

        let base_url =
            std::env::var("TMDB_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        Ok(Self { api_key, base_url })
    }
}
