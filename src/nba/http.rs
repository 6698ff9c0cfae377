use reqwest::Client;
use tracing::{debug, info};

use super::types::StatsResponse;
use crate::{
    cli::types::time::Season,
    config::IngestConfig,
    core::{stats_header_map, Table},
    error::{IngestError, Result},
};

/// Base path for the NBA stats API.
pub const STATS_BASE_URL: &str = "https://stats.nba.com/stats";

pub const COMMON_ALL_PLAYERS: &str = "commonallplayers";
pub const LEAGUE_DASH_PLAYER_STATS: &str = "leaguedashplayerstats";

/// Current and historical players. Sent on every directory request.
pub const INCLUDE_HISTORICAL_PLAYERS: &str = "0";

/// Thin client over the two stats endpoints the pipeline reads.
pub struct NbaStatsClient {
    client: Client,
    base_url: String,
    directory_season: Season,
}

impl NbaStatsClient {
    pub fn new(config: &IngestConfig) -> Result<Self> {
        let headers = stats_header_map(config.user_agent.as_deref())?;
        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            directory_season: config.season.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Every player the league knows about, current and historical.
    pub async fn fetch_player_directory(&self) -> Result<Table> {
        let params = [
            ("IsOnlyCurrentSeason", INCLUDE_HISTORICAL_PLAYERS),
            ("LeagueID", "00"),
            ("Season", self.directory_season.as_str()),
        ];

        let table = self.get_first_table(COMMON_ALL_PLAYERS, &params).await?;
        info!(rows = table.row_count(), "Fetched player directory");
        Ok(table)
    }

    /// Per-player season totals for `season`.
    ///
    /// The endpoint may return several result sets; only the first is kept.
    pub async fn fetch_season_stats(&self, season: &Season) -> Result<Table> {
        let params = [
            ("College", ""),
            ("Conference", ""),
            ("Country", ""),
            ("DateFrom", ""),
            ("DateTo", ""),
            ("Division", ""),
            ("DraftPick", ""),
            ("DraftYear", ""),
            ("GameScope", ""),
            ("GameSegment", ""),
            ("Height", ""),
            ("ISTRound", ""),
            ("LastNGames", "0"),
            ("LeagueID", "00"),
            ("Location", ""),
            ("MeasureType", "Base"),
            ("Month", "0"),
            ("OpponentTeamID", "0"),
            ("Outcome", ""),
            ("PORound", ""),
            ("PaceAdjust", "N"),
            ("PerMode", "Totals"),
            ("Period", "0"),
            ("PlayerExperience", ""),
            ("PlayerPosition", ""),
            ("PlusMinus", "N"),
            ("Rank", "N"),
            ("Season", season.as_str()),
            ("SeasonSegment", ""),
            ("SeasonType", "Regular Season"),
            ("ShotClockRange", ""),
            ("StarterBench", ""),
            ("TeamID", ""),
            ("TwoWay", ""),
            ("VsConference", ""),
            ("VsDivision", ""),
            ("Weight", ""),
        ];

        let table = self
            .get_first_table(LEAGUE_DASH_PLAYER_STATS, &params)
            .await?;
        info!(season = %season, rows = table.row_count(), "Fetched season stats");
        Ok(table)
    }

    async fn get_first_table(&self, endpoint: &str, params: &[(&str, &str)]) -> Result<Table> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!(%url, "Requesting stats endpoint");

        let response = self.client.get(&url).query(params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(IngestError::Upstream {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
                message,
            });
        }

        let body = response.json::<StatsResponse>().await?;
        body.into_first_table()
            .ok_or_else(|| IngestError::MissingResultSet {
                endpoint: endpoint.to_string(),
            })
    }
}

#[cfg(test)]
mod tests;
