//! filmstat - TMDB movie statistics and recommendation CLI.

mod recommend;
mod stats;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use filmstat_tmdb::client::DEFAULT_LANGUAGE;
use filmstat_tmdb::{TmdbClient, TmdbConfig};

use crate::recommend::render_recommendations;
use crate::stats::render_report;

/// Sample set analyzed when no ids are given: Fight Club, Pulp Fiction,
/// Star Wars, The Avengers.
const DEFAULT_MOVIE_IDS: [u64; 4] = [550, 680, 11, 24428];

#[derive(Parser)]
#[command(name = "filmstat", about, version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Aggregate actor, genre and revenue statistics across movies.
    Stats(StatsArgs),
    /// List movies related to a title or TMDB id.
    Recommend(RecommendArgs),
}

#[derive(clap::Args)]
struct StatsArgs {
    /// TMDB movie ids (defaults to a built-in sample set).
    ids: Vec<u64>,

    /// Metadata language.
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Top-billed cast entries counted per movie.
    #[arg(long, default_value_t = 10)]
    cast_limit: usize,
}

#[derive(clap::Args)]
struct RecommendArgs {
    /// Movie title, resolved via search (first match wins).
    title: Option<String>,

    /// Explicit TMDB movie id, skipping search.
    #[arg(long, conflicts_with = "title")]
    id: Option<u64>,

    /// Metadata language.
    #[arg(long, default_value = DEFAULT_LANGUAGE)]
    language: String,

    /// Maximum number of recommendations printed.
    #[arg(long, default_value_t = 5)]
    limit: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();

    let config = TmdbConfig::from_env().context("failed to load TMDB configuration")?;
    let client = TmdbClient::new(config);

    match cli.command {
        Commands::Stats(args) => run_stats(&client, args).await,
        Commands::Recommend(args) => run_recommend(&client, args).await,
    }
}

async fn run_stats(client: &TmdbClient, args: StatsArgs) -> anyhow::Result<()> {
    let ids = if args.ids.is_empty() {
        DEFAULT_MOVIE_IDS.to_vec()
    } else {
        args.ids
    };

    let (aggregate, fetched) = stats::collect(client, &ids, &args.language, args.cast_limit).await;

    print!("{}", render_report(&aggregate, fetched, ids.len()));
    Ok(())
}

async fn run_recommend(client: &TmdbClient, args: RecommendArgs) -> anyhow::Result<()> {
    let list = recommend::run(client, args.id, args.title, &args.language, args.limit).await?;
    if list.is_empty() {
        println!("No recommendations found.");
    } else {
        print!("{}", render_recommendations(&list));
    }

    Ok(())
}
