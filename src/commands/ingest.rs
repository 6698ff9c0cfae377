//! Ingestion pipeline: fetch the directory, fetch season stats, land both.

use crate::{
    config::IngestConfig,
    nba::NbaStatsClient,
    storage::{self, PLAYERS_TABLE, PLAYER_STATS_TABLE, RAW_SCHEMA},
    Result, Season,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

/// What one successful run wrote.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestSummary {
    pub season: Season,
    pub db_path: PathBuf,
    pub players: usize,
    pub player_stats: usize,
}

/// Run the pipeline once against an already-built client.
///
/// Strictly sequential. The first error aborts the run and is returned as-is.
pub async fn run_ingest(client: &NbaStatsClient, config: &IngestConfig) -> Result<IngestSummary> {
    info!("Fetching player metadata...");
    let players = client.fetch_player_directory().await?;

    info!(season = %config.season, "Fetching player stats...");
    let stats = client.fetch_season_stats(&config.season).await?;

    info!(path = %config.db_path.display(), "Loading data into DuckDB...");
    storage::load(&players, &stats, &config.db_path)?;

    info!("Raw data ingestion complete.");
    Ok(IngestSummary {
        season: config.season.clone(),
        db_path: config.db_path.clone(),
        players: players.row_count(),
        player_stats: stats.row_count(),
    })
}

/// Handle the ingest command
pub async fn handle_ingest(config: IngestConfig, verbose: bool) -> Result<IngestSummary> {
    let client = NbaStatsClient::new(&config)?;
    let summary = run_ingest(&client, &config).await?;

    if verbose {
        println!("Season: {}", summary.season);
        println!("Database: {}", summary.db_path.display());
        println!(
            "{}.{}: {} rows",
            RAW_SCHEMA, PLAYERS_TABLE, summary.players
        );
        println!(
            "{}.{}: {} rows",
            RAW_SCHEMA, PLAYER_STATS_TABLE, summary.player_stats
        );
    }

    Ok(summary)
}
