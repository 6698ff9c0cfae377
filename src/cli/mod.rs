//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::time::Season;

/// Overrides shared by every command that runs the pipeline
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Season label, e.g. 2024-25 (or set `NBA_INGEST_SEASON`). Defaults to the current season.
    #[clap(long, short)]
    pub season: Option<Season>,

    /// DuckDB file to write (or set `NBA_INGEST_DB_PATH`).
    #[clap(long)]
    pub db_path: Option<PathBuf>,

    /// Print a summary of the loaded tables when done.
    #[clap(long, short)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Fetch players and season stats, then replace the raw DuckDB tables.
    ///
    /// This is also what runs when no subcommand is given.
    Ingest {
        #[clap(flatten)]
        run: RunArgs,
    },

    /// Run the ingestion under the job's retry policy.
    Job {
        #[clap(flatten)]
        run: RunArgs,

        /// Re-runs allowed after a failed run.
        #[clap(long)]
        retries: Option<u32>,

        /// Seconds to wait before re-running a failed run.
        #[clap(long)]
        retry_delay_secs: Option<u64>,
    },

    /// Print the scheduler-facing job definition.
    DescribeJob {
        /// Output as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "nba-ingest",
    about = "Land NBA player metadata and season stats in DuckDB"
)]
pub struct NbaIngest {
    #[clap(subcommand)]
    pub command: Option<Commands>,
}
