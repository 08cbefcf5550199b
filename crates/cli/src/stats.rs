//! Cross-movie statistics: actor appearances, genre frequency, and
//! revenue credited to top-billed cast.

use std::collections::BTreeMap;
use std::fmt::Write;

use tracing::warn;

use filmstat_tmdb::{CastMember, MovieDetails, TmdbClient};

/// Fetches details and credits for each id strictly in order and folds the
/// survivors into an aggregate. A failing id is logged and skipped so the
/// rest of the list still gets processed. Returns the aggregate and the
/// number of movies actually fetched.
pub async fn collect(
    client: &TmdbClient,
    ids: &[u64],
    language: &str,
    cast_limit: usize,
) -> (MovieAggregate, usize) {
    let mut aggregate = MovieAggregate::new(cast_limit);
    let mut fetched = 0usize;

    for &movie_id in ids {
        let details = match client.movie_details(movie_id, language).await {
            Ok(details) => details,
            Err(e) => {
                warn!(movie_id, error = %e, "skipping movie, details fetch failed");
                continue;
            }
        };
        let cast = match client.movie_credits(movie_id, language).await {
            Ok(cast) => cast,
            Err(e) => {
                warn!(movie_id, error = %e, "skipping movie, credits fetch failed");
                continue;
            }
        };

        aggregate.add_movie(&details, &cast);
        fetched += 1;
    }

    (aggregate, fetched)
}

/// Accumulator folded over `(details, cast)` pairs, one per movie.
///
/// Only the first `cast_limit` billed cast entries of each movie are
/// counted. A movie's total revenue is split evenly across those entries;
/// movies with zero recorded revenue credit nothing to anyone. The even
/// split across top billing is deliberate observable behavior, not an
/// attempt at fair attribution.
pub struct MovieAggregate {
    cast_limit: usize,
    appearances: BTreeMap<String, u32>,
    genres: BTreeMap<String, u32>,
    revenue: BTreeMap<String, f64>,
}

impl MovieAggregate {
    pub fn new(cast_limit: usize) -> Self {
        Self {
            cast_limit,
            appearances: BTreeMap::new(),
            genres: BTreeMap::new(),
            revenue: BTreeMap::new(),
        }
    }

    pub fn add_movie(&mut self, details: &MovieDetails, cast: &[CastMember]) {
        for genre in &details.genres {
            *self.genres.entry(genre.clone()).or_insert(0) += 1;
        }

        let counted = &cast[..cast.len().min(self.cast_limit)];
        for member in counted {
            *self.appearances.entry(member.name.clone()).or_insert(0) += 1;
        }

        if details.revenue > 0 && !counted.is_empty() {
            let share = details.revenue as f64 / counted.len() as f64;
            for member in counted {
                *self.revenue.entry(member.name.clone()).or_insert(0.0) += share;
            }
        }
    }

    pub fn appearances(&self) -> &BTreeMap<String, u32> {
        &self.appearances
    }

    pub fn genres(&self) -> &BTreeMap<String, u32> {
        &self.genres
    }

    /// Actors with nonzero accumulated revenue, strictly descending,
    /// truncated to `n`. Ties break by name so output is deterministic.
    pub fn top_actors_by_revenue(&self, n: usize) -> Vec<(String, f64)> {
        let mut ranked: Vec<(String, f64)> = self
            .revenue
            .iter()
            .map(|(name, total)| (name.clone(), *total))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranked.truncate(n);
        ranked
    }
}

pub fn render_report(aggregate: &MovieAggregate, fetched: usize, requested: usize) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "🎬 Movie report ({fetched}/{requested} movies fetched)");
    let _ = writeln!(out);

    let _ = writeln!(out, "🎭 Appearances per actor:");
    for (actor, count) in aggregate.appearances() {
        let _ = writeln!(out, "  - {actor}: {count} movie(s)");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "🏷️ Genre frequency:");
    for (genre, count) in aggregate.genres() {
        let _ = writeln!(out, "  - {genre}: {count}");
    }
    let _ = writeln!(out);

    let _ = writeln!(out, "💰 Top 5 actors by accumulated revenue:");
    for (rank, (actor, total)) in aggregate.top_actors_by_revenue(5).iter().enumerate() {
        let _ = writeln!(out, "  {}. {actor}: ${total:.0}", rank + 1);
    }

    out
}
