//! Error types for the NBA raw ingestion pipeline

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IngestError>;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("NBA stats API returned {status} for {endpoint}: {message}")]
    Upstream {
        endpoint: String,
        status: u16,
        message: String,
    },

    #[error("NBA stats API returned no result sets for {endpoint}")]
    MissingResultSet { endpoint: String },

    #[error("DuckDB error: {0}")]
    Storage(#[from] duckdb::Error),

    #[error("Cannot create table {table} without columns")]
    EmptySchema { table: String },

    #[error("Invalid value for {key}: {value}")]
    InvalidConfig { key: String, value: String },
}
