//! NBA raw ingestion library
//!
//! Pulls the NBA player directory and per-player season statistics from the
//! NBA stats API and lands both, unmodified, as tables in an embedded DuckDB
//! file.
//!
//! ## Pipeline
//!
//! 1. Fetch every player, current and historical (`commonallplayers`)
//! 2. Fetch per-player totals for one season (`leaguedashplayerstats`)
//! 3. Replace `raw.players` and `raw.player_stats` with what was fetched
//!
//! Any error aborts the run. Re-running is always safe: tables are replaced,
//! never appended to.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use nba_ingest::{commands::ingest::run_ingest, IngestConfig, NbaStatsClient, Season};
//!
//! # async fn example() -> nba_ingest::Result<()> {
//! let config = IngestConfig {
//!     season: Season::new("2024-25"),
//!     ..IngestConfig::from_env()?
//! };
//! let client = NbaStatsClient::new(&config)?;
//! let summary = run_ingest(&client, &config).await?;
//! println!("{} players, {} stat rows", summary.players, summary.player_stats);
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export NBA_INGEST_DB_PATH=/data/nba.duckdb
//! export NBA_INGEST_SEASON=2024-25
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod nba;
pub mod storage;

// Re-export commonly used types
pub use cli::types::time::Season;
pub use config::IngestConfig;
pub use core::Table;
pub use error::{IngestError, Result};
pub use nba::NbaStatsClient;
pub use storage::{load, RawStore};
