pub mod client;
pub mod config;
pub mod types;

use thiserror::Error;

pub use client::TmdbClient;
pub use config::TmdbConfig;
pub use types::{CastMember, MovieDetails, MovieSummary};

/// Failures from the TMDB client, one variant per failure origin.
///
/// Callers treat all three the same by default (skip the item, log a
/// warning); the split exists so they can differentiate if they ever
/// need to.
#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("network error: {0}")]
    Network(String),
    #[error("TMDB returned HTTP {status}: {message}")]
    Status { status: u16, message: String },
    #[error("decode error: {0}")]
    Decode(String),
}
