//! Command implementations for the nba-ingest CLI

pub mod ingest;
pub mod job;
