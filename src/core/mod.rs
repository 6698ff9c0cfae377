//! Core utilities shared across the pipeline
//!
//! - `http`: request headers for the NBA stats API
//! - `table`: the pass-through row set both pipeline stages exchange

pub mod http;
pub mod table;

pub use http::stats_header_map;
pub use table::Table;
