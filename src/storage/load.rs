//! Wholesale table replacement for the raw landing zone

use super::schema::{
    qualified_name, quote_ident, RawStore, PLAYERS_TABLE, PLAYER_STATS_TABLE, RAW_SCHEMA,
};
use crate::{
    core::Table,
    error::{IngestError, Result},
};
use duckdb::{params_from_iter, types::Value as DbValue};
use serde_json::Value;
use std::path::Path;
use tracing::info;

static NULL: Value = Value::Null;

/// DuckDB column type inferred from the JSON values of one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    Boolean,
    BigInt,
    Double,
    Varchar,
}

impl ColumnType {
    /// Nulls are ignored. An all-null column becomes `VARCHAR`.
    pub fn infer<'a>(values: impl IntoIterator<Item = &'a Value>) -> Self {
        let mut inferred: Option<ColumnType> = None;

        for value in values {
            let ty = match value {
                Value::Null => continue,
                Value::Bool(_) => ColumnType::Boolean,
                Value::Number(n) if n.is_i64() => ColumnType::BigInt,
                Value::Number(_) => ColumnType::Double,
                _ => return ColumnType::Varchar,
            };

            inferred = Some(match (inferred, ty) {
                (None, ty) => ty,
                (Some(a), b) if a == b => a,
                (Some(ColumnType::BigInt), ColumnType::Double)
                | (Some(ColumnType::Double), ColumnType::BigInt) => ColumnType::Double,
                _ => return ColumnType::Varchar,
            });
        }

        inferred.unwrap_or(ColumnType::Varchar)
    }

    pub fn sql(&self) -> &'static str {
        match self {
            ColumnType::Boolean => "BOOLEAN",
            ColumnType::BigInt => "BIGINT",
            ColumnType::Double => "DOUBLE",
            ColumnType::Varchar => "VARCHAR",
        }
    }

    /// Convert one JSON value to a parameter of this column's type.
    pub fn to_db_value(&self, value: &Value) -> DbValue {
        match (self, value) {
            (_, Value::Null) => DbValue::Null,
            (ColumnType::Boolean, Value::Bool(b)) => DbValue::Boolean(*b),
            (ColumnType::BigInt, Value::Number(n)) if n.is_i64() => {
                n.as_i64().map(DbValue::BigInt).unwrap_or(DbValue::Null)
            }
            (ColumnType::Double, Value::Number(n)) => {
                n.as_f64().map(DbValue::Double).unwrap_or(DbValue::Null)
            }
            (_, Value::String(s)) => DbValue::Text(s.clone()),
            (_, other) => DbValue::Text(other.to_string()),
        }
    }
}

impl RawStore {
    /// Drop and recreate `schema.name` holding exactly the rows of `table`.
    ///
    /// Runs in its own transaction: on error the previous table (or its
    /// absence) is left untouched.
    pub fn replace_table(&mut self, schema: &str, name: &str, table: &Table) -> Result<usize> {
        let qualified = qualified_name(schema, name);
        if table.columns.is_empty() {
            return Err(IngestError::EmptySchema {
                table: format!("{}.{}", schema, name),
            });
        }

        let types: Vec<ColumnType> = (0..table.column_count())
            .map(|i| ColumnType::infer(table.column_values(i)))
            .collect();

        let column_defs = table
            .columns
            .iter()
            .zip(&types)
            .map(|(column, ty)| format!("{} {}", quote_ident(column), ty.sql()))
            .collect::<Vec<_>>()
            .join(", ");
        let placeholders = vec!["?"; types.len()].join(", ");

        let create_sql = format!("CREATE OR REPLACE TABLE {} ({})", qualified, column_defs);
        let insert_sql = format!("INSERT INTO {} VALUES ({})", qualified, placeholders);

        let tx = self.conn.transaction()?;
        tx.execute_batch(&create_sql)?;
        {
            let mut stmt = tx.prepare(&insert_sql)?;
            for row in &table.rows {
                let values = types
                    .iter()
                    .enumerate()
                    .map(|(i, ty)| ty.to_db_value(row.get(i).unwrap_or(&NULL)));
                stmt.execute(params_from_iter(values))?;
            }
        }
        tx.commit()?;

        info!(table = %qualified, rows = table.row_count(), "Replaced table");
        Ok(table.row_count())
    }

    /// Land both tables under the raw schema, players first.
    ///
    /// The two replacements are independent: if the stats write fails, the
    /// players table keeps its new contents.
    pub fn load(&mut self, players: &Table, stats: &Table) -> Result<()> {
        self.ensure_schema()?;
        self.replace_table(RAW_SCHEMA, PLAYERS_TABLE, players)?;
        self.replace_table(RAW_SCHEMA, PLAYER_STATS_TABLE, stats)?;
        Ok(())
    }
}

/// Open `destination`, replace `raw.players` and `raw.player_stats`, close.
pub fn load(players: &Table, stats: &Table, destination: &Path) -> Result<()> {
    let mut store = RawStore::open(destination)?;
    store.load(players, stats)
}
