//! Database connection and schema management

use crate::error::Result;
use duckdb::{params, Connection};
use std::path::Path;
use tracing::debug;

/// Namespace holding the unmodified upstream tables.
pub const RAW_SCHEMA: &str = "raw";
pub const PLAYERS_TABLE: &str = "players";
pub const PLAYER_STATS_TABLE: &str = "player_stats";

/// Connection to the DuckDB file the raw tables land in.
///
/// The connection closes when the store is dropped.
pub struct RawStore {
    pub(crate) conn: Connection,
}

impl RawStore {
    /// Open (or create) the database file at `path`
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        debug!(path = %path.display(), "Opening DuckDB");
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Create the raw schema if it is missing
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(RAW_SCHEMA)))?;
        Ok(())
    }

    pub fn table_exists(&self, schema: &str, table: &str) -> Result<bool> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM information_schema.tables
             WHERE table_schema = ? AND table_name = ?",
            params![schema, table],
            |row| row.get(0),
        )?;
        Ok(count > 0)
    }

    pub fn row_count(&self, schema: &str, table: &str) -> Result<i64> {
        let sql = format!("SELECT COUNT(*) FROM {}", qualified_name(schema, table));
        let count = self.conn.query_row(&sql, [], |row| row.get(0))?;
        Ok(count)
    }

    /// Column names in table order
    pub fn columns(&self, schema: &str, table: &str) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT column_name FROM information_schema.columns
             WHERE table_schema = ? AND table_name = ?
             ORDER BY ordinal_position",
        )?;

        let rows = stmt.query_map(params![schema, table], |row| row.get::<_, String>(0))?;

        let mut columns = Vec::new();
        for row in rows {
            columns.push(row?);
        }
        Ok(columns)
    }
}

pub(crate) fn quote_ident(ident: &str) -> String {
    format!("\"{}\"", ident.replace('"', "\"\""))
}

pub(crate) fn qualified_name(schema: &str, table: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(table))
}
