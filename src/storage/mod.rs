//! Storage layer for the raw landing zone
//!
//! Wraps an embedded DuckDB file:
//! - `schema`: connection handling, the `raw` namespace, read helpers
//! - `load`: column type inference and wholesale table replacement

pub mod load;
pub mod schema;


pub use load::{load, ColumnType};
pub use schema::{RawStore, PLAYERS_TABLE, PLAYER_STATS_TABLE, RAW_SCHEMA};
