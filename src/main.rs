//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use nba_ingest::{
    cli::{Commands, NbaIngest, RunArgs},
    commands::{
        ingest::handle_ingest,
        job::{handle_describe_job, handle_job, RetryPolicy},
    },
    IngestConfig,
};
use std::time::Duration;

fn resolve_config(run: RunArgs) -> anyhow::Result<(IngestConfig, bool)> {
    let config = IngestConfig::from_env()?.with_overrides(run.db_path, run.season);
    Ok((config, run.verbose))
}

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let app = NbaIngest::parse();

    match app.command {
        None => {
            let config = IngestConfig::from_env()?;
            handle_ingest(config, false).await?;
        }

        Some(Commands::Ingest { run }) => {
            let (config, verbose) = resolve_config(run)?;
            handle_ingest(config, verbose).await?;
        }

        Some(Commands::Job {
            run,
            retries,
            retry_delay_secs,
        }) => {
            let (config, verbose) = resolve_config(run)?;
            let defaults = RetryPolicy::default();
            let policy = RetryPolicy {
                retries: retries.unwrap_or(defaults.retries),
                retry_delay: retry_delay_secs
                    .map(Duration::from_secs)
                    .unwrap_or(defaults.retry_delay),
            };
            handle_job(config, policy, verbose).await?;
        }

        Some(Commands::DescribeJob { json }) => handle_describe_job(json)?,
    }

    Ok(())
}
