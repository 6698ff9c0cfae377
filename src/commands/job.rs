//! Scheduler-facing job definition and its retry policy
//!
//! The pipeline is run as one opaque unit. When the whole run fails it is
//! re-run from scratch after a fixed delay; there is no partial resume.

use crate::{config::IngestConfig, Result};
use serde::Serialize;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;
use tracing::{info, warn};

use super::ingest::{handle_ingest, IngestSummary};

/// Whole-run retry policy. Applied the same way to every error kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RetryPolicy {
    /// Extra attempts after the first failure.
    pub retries: u32,
    pub retry_delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 1,
            retry_delay: Duration::from_secs(5 * 60),
        }
    }
}

/// Static description of the ingestion job as the scheduler sees it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct JobSpec {
    pub job_id: &'static str,
    pub owner: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    /// `None` means manually triggered only.
    pub schedule: Option<&'static str>,
    pub catchup: bool,
    pub retry: RetryPolicy,
}

impl JobSpec {
    pub fn nba_data_ingestion() -> Self {
        Self {
            job_id: "nba_data_ingestion",
            owner: "aljpacho",
            description: "Run nba ingestion and store in DuckDB",
            tags: &["nba", "ingestion", "duckdb", "dbt"],
            schedule: None,
            catchup: false,
            retry: RetryPolicy::default(),
        }
    }
}

/// Run `f`, re-running it after `policy.retry_delay` while attempts remain.
///
/// Returns the first success or the last error.
pub async fn run_with_retry<F, Fut, T>(policy: &RetryPolicy, mut f: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let attempts = policy.retries + 1;
    let mut attempt = 1;

    loop {
        match f().await {
            Ok(result) => return Ok(result),
            Err(e) if attempt < attempts => {
                warn!(
                    "Attempt {}/{} failed: {}, retrying in {:?}",
                    attempt, attempts, e, policy.retry_delay
                );
                sleep(policy.retry_delay).await;
                attempt += 1;
            }
            Err(e) => return Err(e),
        }
    }
}

/// Handle the job command: one ingestion under the job's retry policy
pub async fn handle_job(
    config: IngestConfig,
    policy: RetryPolicy,
    verbose: bool,
) -> Result<IngestSummary> {
    let spec = JobSpec::nba_data_ingestion();
    info!(job = spec.job_id, retries = policy.retries, "Starting job");

    run_with_retry(&policy, || handle_ingest(config.clone(), verbose)).await
}

/// Handle the describe-job command
pub fn handle_describe_job(as_json: bool) -> Result<()> {
    let spec = JobSpec::nba_data_ingestion();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&spec)?);
        return Ok(());
    }

    println!("Job: {}", spec.job_id);
    println!("Owner: {}", spec.owner);
    println!("Description: {}", spec.description);
    println!("Tags: {}", spec.tags.join(", "));
    println!("Schedule: {}", spec.schedule.unwrap_or("manual trigger only"));
    println!("Retries: {}", spec.retry.retries);
    println!("Retry delay: {}s", spec.retry.retry_delay.as_secs());
    Ok(())
}
