//! Pass-through tabular data as returned by the stats API.

use serde::{Deserialize, Serialize};
use serde_json::Value;

static NULL: Value = Value::Null;

/// A named row set with columns in upstream order.
///
/// Values are kept as raw JSON so whatever shape the upstream service returns
/// can be landed without a fixed schema.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            name: name.into(),
            columns,
            rows,
        }
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterate the values of column `index`. Short rows yield `Null`.
    pub fn column_values(&self, index: usize) -> impl Iterator<Item = &Value> {
        self.rows
            .iter()
            .map(move |row| row.get(index).unwrap_or(&NULL))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Table {
        Table::new(
            "CommonAllPlayers",
            vec!["PERSON_ID".to_string(), "DISPLAY_FIRST_LAST".to_string()],
            vec![
                vec![json!(2544), json!("LeBron James")],
                vec![json!(201939)],
            ],
        )
    }

    #[test]
    fn test_counts() {
        let table = sample();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert!(!table.is_empty());
        assert!(Table::default().is_empty());
    }

    #[test]
    fn test_column_values_pads_short_rows() {
        let table = sample();
        let names: Vec<&Value> = table.column_values(1).collect();
        assert_eq!(names, vec![&json!("LeBron James"), &Value::Null]);
    }
}
