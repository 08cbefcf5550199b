//! Recommendation list assembly.

use std::collections::HashSet;
use std::fmt::Write;

use anyhow::bail;
use tracing::info;

use filmstat_tmdb::{MovieSummary, TmdbClient};

/// Resolves the seed movie (explicit id, or first search match for a
/// title) and assembles the recommendation list. An unmatched title stops
/// here; no further remote call is made.
pub async fn run(
    client: &TmdbClient,
    id: Option<u64>,
    title: Option<String>,
    language: &str,
    limit: usize,
) -> anyhow::Result<Vec<MovieSummary>> {
    let movie_id = match (id, title) {
        (Some(id), _) => id,
        (None, Some(title)) => {
            let results = client.search(&title, language, 1).await?;
            match results.first() {
                Some(movie) => {
                    info!(movie_id = movie.id, title = %movie.title, "resolved title via search");
                    movie.id
                }
                None => bail!("no movie found matching {title:?}"),
            }
        }
        (None, None) => bail!("pass a movie title or --id"),
    };

    let recommended = build_recommendation_list(
        movie_id,
        client.recommendations(movie_id, language, 1).await?,
        Vec::new(),
        limit,
    );

    // Gate on the deduped length, so a recommendations page padded with
    // the seed or duplicates still triggers the supplement.
    let similar = if recommended.len() < limit {
        client.similar(movie_id, language, 1).await?
    } else {
        Vec::new()
    };

    Ok(build_recommendation_list(movie_id, recommended, similar, limit))
}

/// Merges recommendation and similar-title pages into one list of at most
/// `limit` entries. Recommendations keep priority; similar titles only fill
/// remaining slots. The seed movie and any already-seen id are skipped, so
/// the result never holds duplicates.
pub fn build_recommendation_list(
    seed_id: u64,
    recommended: Vec<MovieSummary>,
    similar: Vec<MovieSummary>,
    limit: usize,
) -> Vec<MovieSummary> {
    let mut seen: HashSet<u64> = HashSet::from([seed_id]);
    let mut list = Vec::new();

    for movie in recommended.into_iter().chain(similar) {
        if list.len() >= limit {
            break;
        }
        if seen.insert(movie.id) {
            list.push(movie);
        }
    }

    list
}

pub fn render_recommendations(list: &[MovieSummary]) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "🍿 Recommended movies:");
    for movie in list {
        match movie.release_year {
            Some(year) => {
                let _ = writeln!(out, "  - {} ({year}) [id {}]", movie.title, movie.id);
            }
            None => {
                let _ = writeln!(out, "  - {} [id {}]", movie.title, movie.id);
            }
        }
    }

    out
}
