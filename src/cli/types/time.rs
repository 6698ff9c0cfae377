//! Season labels for the NBA stats API.

use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// A two-part season label such as `2024-25`.
///
/// Labels are passed to the stats API as-is. The upstream service is the one
/// that rejects malformed labels, so parsing never fails locally.
///
/// # Examples
///
/// ```rust
/// use nba_ingest::Season;
///
/// let season = Season::from_start_year(2023);
/// assert_eq!(season.as_str(), "2023-24");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(String);

impl Season {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// Season starting in the autumn of `year`.
    pub fn from_start_year(year: i32) -> Self {
        Self(format!("{}-{:02}", year, (year + 1).rem_euclid(100)))
    }

    /// Season in progress (or about to start) on `date`. Seasons tip off in October.
    pub fn for_date(date: NaiveDate) -> Self {
        if date.month() >= 10 {
            Self::from_start_year(date.year())
        } else {
            Self::from_start_year(date.year() - 1)
        }
    }

    pub fn current() -> Self {
        Self::for_date(Local::now().date_naive())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self::current()
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_start_year() {
        assert_eq!(Season::from_start_year(2024).as_str(), "2024-25");
        assert_eq!(Season::from_start_year(1999).as_str(), "1999-00");
        assert_eq!(Season::from_start_year(2009).as_str(), "2009-10");
    }

    #[test]
    fn test_for_date_before_tipoff_uses_previous_year() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        assert_eq!(Season::for_date(date).as_str(), "2024-25");

        let date = NaiveDate::from_ymd_opt(2025, 9, 30).unwrap();
        assert_eq!(Season::for_date(date).as_str(), "2024-25");
    }

    #[test]
    fn test_for_date_after_tipoff_uses_current_year() {
        let date = NaiveDate::from_ymd_opt(2025, 10, 1).unwrap();
        assert_eq!(Season::for_date(date).as_str(), "2025-26");

        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(Season::for_date(date).as_str(), "2025-26");
    }

    #[test]
    fn test_parse_does_not_validate_label() {
        let season: Season = "not-a-season".parse().unwrap();
        assert_eq!(season.as_str(), "not-a-season");

        let season: Season = " 2023-24 ".parse().unwrap();
        assert_eq!(season, Season::new("2023-24"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Season::new("2023-24").to_string(), "2023-24");
    }
}
