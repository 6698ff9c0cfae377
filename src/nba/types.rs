//! Response envelope of the NBA stats API.
//!
//! Every endpoint answers with one or more named result sets, each a header
//! list plus a row set. Most endpoints use `resultSets` (an array); a few use
//! `resultSet`, sometimes holding a single object instead of an array.

use crate::core::Table;
use serde::Deserialize;
use serde_json::Value;

/// One `headers` + `rowSet` block.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ResultSet {
    #[serde(default)]
    pub name: String,
    pub headers: Vec<String>,
    #[serde(rename = "rowSet", default)]
    pub row_set: Vec<Vec<Value>>,
}

impl From<ResultSet> for Table {
    fn from(set: ResultSet) -> Self {
        Table::new(set.name, set.headers, set.row_set)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum ResultSets {
    Many(Vec<ResultSet>),
    One(ResultSet),
}

impl ResultSets {
    fn into_vec(self) -> Vec<ResultSet> {
        match self {
            ResultSets::Many(sets) => sets,
            ResultSets::One(set) => vec![set],
        }
    }
}

/// Top-level response body.
#[derive(Debug, Clone, Deserialize)]
pub struct StatsResponse {
    #[serde(default)]
    pub resource: Option<String>,
    #[serde(rename = "resultSets", default)]
    result_sets: Option<ResultSets>,
    #[serde(rename = "resultSet", default)]
    result_set: Option<ResultSets>,
}

impl StatsResponse {
    pub fn into_result_sets(self) -> Vec<ResultSet> {
        self.result_sets
            .or(self.result_set)
            .map(ResultSets::into_vec)
            .unwrap_or_default()
    }

    /// The first result set as a table. Later sets are ignored.
    pub fn into_first_table(self) -> Option<Table> {
        self.into_result_sets().into_iter().next().map(Table::from)
    }
}
