//! Input shapes accepted by the adapter.
//!
//! All shapes deserialize from plain JSON without a type tag:
//!
//! ```json
//! [10.0, 10.0, 9.0, 11.0]
//! { "name": "latency_ms", "values": [10.0, 10.0, 9.0, 11.0] }
//! { "columns": ["host", "latency_ms"], "rows": [["a", 10.0], ["b", 9.5]] }
//! [["a", 10.0], ["b", 9.5]]
//! ```
//!
//! The last shape is a table without a header; its columns can only be picked by
//! position.

use serde::{Deserialize, Serialize};

/// A single table cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Null,
    Bool(bool),
    Integer(i64),
    Number(f64),
    Text(String),
}

impl Cell {
    /// The numeric value of the cell, if it holds one.
    #[expect(clippy::cast_precision_loss)]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(value) => Some(*value as f64),
            Self::Number(value) => Some(*value),
            Self::Null | Self::Bool(_) | Self::Text(_) => None,
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for Cell {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

/// A one-dimensional named sequence of numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub values: Vec<f64>,
}

/// Row-major table with a header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    #[must_use]
    pub fn column_position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column == name)
    }
}

/// Any input the adapter can evaluate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::From)]
#[serde(untagged)]
pub enum Dataset {
    List(Vec<f64>),
    /// Headerless rows, addressed by column position only.
    Rows(Vec<Vec<Cell>>),
    Series(Series),
    Table(Table),
}

impl Dataset {
    /// Number of values (or rows) in the dataset.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::List(values) => values.len(),
            Self::Rows(rows) => rows.len(),
            Self::Series(series) => series.values.len(),
            Self::Table(table) => table.rows.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::List(_) => "list",
            Self::Rows(_) => "rows",
            Self::Series(_) => "series",
            Self::Table(_) => "table",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list() {
        let dataset: Dataset = serde_json::from_str("[1, 2.5, -3]").unwrap();
        assert_eq!(dataset, Dataset::List(vec![1.0, 2.5, -3.0]));
        assert_eq!(dataset.kind(), "list");
    }

    #[test]
    fn test_parse_series() {
        let dataset: Dataset =
            serde_json::from_str(r#"{"name": "latency", "values": [1.0, 2.0]}"#).unwrap();
        assert_eq!(
            dataset,
            Dataset::Series(Series {
                name: Some("latency".to_owned()),
                values: vec![1.0, 2.0],
            })
        );

        let dataset: Dataset = serde_json::from_str(r#"{"values": []}"#).unwrap();
        assert!(dataset.is_empty());
    }

    #[test]
    fn test_parse_table() {
        let dataset: Dataset = serde_json::from_str(
            r#"{"columns": ["id", "ok", "x"], "rows": [[1, true, 2.5], ["b", null, 3]]}"#,
        )
        .unwrap();
        let Dataset::Table(table) = dataset else {
            panic!("expected a table");
        };
        assert_eq!(table.column_position("x"), Some(2));
        assert_eq!(
            table.rows[0],
            [Cell::Integer(1), Cell::Bool(true), Cell::Number(2.5)]
        );
        assert_eq!(
            table.rows[1],
            [Cell::from("b"), Cell::Null, Cell::Integer(3)]
        );
        assert_eq!(table.rows[1][2].as_f64(), Some(3.0));
        assert_eq!(table.rows[1][0].as_f64(), None);
    }

    #[test]
    fn test_parse_headerless_rows() {
        let dataset: Dataset = serde_json::from_str(r#"[[1, 10.0], [2, "x"], [3]]"#).unwrap();
        assert_eq!(
            dataset,
            Dataset::Rows(vec![
                vec![Cell::Integer(1), Cell::Number(10.0)],
                vec![Cell::Integer(2), Cell::from("x")],
                vec![Cell::Integer(3)],
            ])
        );
        assert_eq!(dataset.kind(), "rows");
        assert_eq!(dataset.len(), 3);
    }

    #[test]
    fn test_from_shapes() {
        assert_eq!(Dataset::from(vec![1.0, 2.0]).kind(), "list");
        assert_eq!(Dataset::from(vec![vec![Cell::Null]]).kind(), "rows");
        assert_eq!(Dataset::from(Series::default()).kind(), "series");
        assert_eq!(Dataset::from(Table::default()).kind(), "table");
    }

    #[test]
    fn test_integer_cells_stay_integers() {
        let cells: Vec<Cell> = serde_json::from_str("[0, 1, 1.5]").unwrap();
        assert_eq!(serde_json::to_string(&cells).unwrap(), "[0,1,1.5]");
    }
}
