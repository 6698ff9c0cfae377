//! Runtime configuration: defaults, then environment, then CLI flags.

use crate::{
    cli::types::time::Season,
    error::{IngestError, Result},
    nba::http::STATS_BASE_URL,
};
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DB_PATH_ENV_VAR: &str = "NBA_INGEST_DB_PATH";
pub const SEASON_ENV_VAR: &str = "NBA_INGEST_SEASON";
pub const BASE_URL_ENV_VAR: &str = "NBA_STATS_BASE_URL";
pub const TIMEOUT_ENV_VAR: &str = "NBA_STATS_TIMEOUT_SECS";
pub const USER_AGENT_ENV_VAR: &str = "NBA_STATS_USER_AGENT";

/// Relative to the working directory the scheduler launches the job from.
pub const DEFAULT_DB_PATH: &str = "../duckdb/nba.duckdb";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Everything one ingestion run needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IngestConfig {
    pub db_path: PathBuf,
    pub season: Season,
    pub base_url: String,
    pub timeout: Duration,
    pub user_agent: Option<String>,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            db_path: PathBuf::from(DEFAULT_DB_PATH),
            season: Season::current(),
            base_url: STATS_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: None,
        }
    }
}

impl IngestConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(path) = lookup(DB_PATH_ENV_VAR) {
            config.db_path = PathBuf::from(path);
        }

        if let Some(season) = lookup(SEASON_ENV_VAR) {
            config.season = Season::new(season.trim());
        }

        if let Some(url) = lookup(BASE_URL_ENV_VAR) {
            config.base_url = url.trim_end_matches('/').to_string();
        }

        if let Some(secs) = lookup(TIMEOUT_ENV_VAR) {
            let secs: u64 = secs.trim().parse().map_err(|_| IngestError::InvalidConfig {
                key: TIMEOUT_ENV_VAR.to_string(),
                value: secs.clone(),
            })?;
            config.timeout = Duration::from_secs(secs);
        }

        if let Some(agent) = lookup(USER_AGENT_ENV_VAR) {
            config.user_agent = Some(agent);
        }

        Ok(config)
    }

    /// Apply CLI overrides on top of the environment.
    pub fn with_overrides(mut self, db_path: Option<PathBuf>, season: Option<Season>) -> Self {
        if let Some(path) = db_path {
            self.db_path = path;
        }
        if let Some(season) = season {
            self.season = season;
        }
        self
    }
}
