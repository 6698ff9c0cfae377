//! HTTP utilities for NBA stats API communication

use crate::Result;
use reqwest::header::{
    HeaderMap, HeaderName, HeaderValue, ACCEPT, ACCEPT_LANGUAGE, ORIGIN, REFERER, USER_AGENT,
};

const BROWSER_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Headers stats.nba.com expects; requests without them tend to hang.
///
/// `user_agent` overrides the browser string when set (`NBA_STATS_USER_AGENT`).
pub fn stats_header_map(user_agent: Option<&str>) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(
        ACCEPT,
        HeaderValue::from_static("application/json, text/plain, */*"),
    );
    h.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    h.insert(ORIGIN, HeaderValue::from_static("https://www.nba.com"));
    h.insert(REFERER, HeaderValue::from_static("https://www.nba.com/"));
    h.insert(
        HeaderName::from_static("x-nba-stats-origin"),
        HeaderValue::from_static("stats"),
    );
    h.insert(
        HeaderName::from_static("x-nba-stats-token"),
        HeaderValue::from_static("true"),
    );
    let agent = user_agent.unwrap_or(BROWSER_USER_AGENT);
    h.insert(USER_AGENT, HeaderValue::from_str(agent)?);
    Ok(h)
}
