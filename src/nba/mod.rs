//! NBA stats API client and response types.

pub mod http;
pub mod types;

pub use http::NbaStatsClient;
pub use types::{ResultSet, StatsResponse};
