//! Adapter between container-shaped data and the outlier test.
//!
//! [`tautest_core`] works on a plain slice of numbers. This crate accepts the shapes
//! callers actually have (a bare list, a named series, a table with or without a
//! header), picks the values to test, runs the test, and hands the markers back in the
//! same shape with the rows in their original order.
//!
//! # Modules
//!
//! - [`dataset`]: Input shapes ([`Dataset`](dataset::Dataset), [`Table`](dataset::Table), ...)
//! - [`column`]: Resolving the target column of a table
//! - [`labeled`]: Output shapes with outlier markers
//!
//! # Examples
//!
//! ```
//! use tautest_frame::{
//!     Options,
//!     column::ColumnSelector,
//!     dataset::{Cell, Dataset, Table},
//!     labeled::LabeledData,
//! };
//!
//! let table = Table {
//!     columns: vec!["host".to_owned(), "latency".to_owned()],
//!     rows: [10.0, 10.0, 9.0, 11.0, 10.0, 100.0]
//!         .iter()
//!         .enumerate()
//!         .map(|(i, &v)| vec![Cell::from(format!("h{i}").as_str()), Cell::from(v)])
//!         .collect(),
//! };
//! let options = Options {
//!     selector: ColumnSelector::by_name("latency"),
//!     ..Options::default()
//! };
//!
//! let labeled = tautest_frame::evaluate_dataset(&Dataset::Table(table), &options).unwrap();
//! let LabeledData::Table(table) = labeled.data() else { unreachable!() };
//! assert_eq!(table.columns, ["host", "latency", "is_outlier"]);
//! assert_eq!(table.rows[5][2], Cell::Integer(1));
//! ```

use tautest_core::{EvaluateError, Evaluation, Strictness};

use self::{
    column::{ColumnError, ColumnSelector, OUTLIER_COLUMN},
    dataset::{Cell, Dataset, Series, Table},
    labeled::{LabeledData, LabeledDataset, LabeledSeries, LabeledValue},
};

pub mod column;
pub mod dataset;
pub mod labeled;

#[derive(Debug, Clone, PartialEq, Eq)]
#[derive(derive_more::Display, derive_more::Error, derive_more::From)]
pub enum FrameError {
    #[display("{_0}")]
    #[from]
    Column(ColumnError),
    #[display("{_0}")]
    #[from]
    Evaluate(EvaluateError),
    #[display("row {row} has {actual} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },
    #[display("row {row} has a non-numeric value in column '{column}'")]
    NonNumericCell { row: usize, column: String },
    #[display("values marked as sorted are out of order at row {row}")]
    NotSorted { row: usize },
}

/// How to run the test over a dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    /// Target column; only consulted for tables and headerless rows.
    pub selector: ColumnSelector,
    pub strictness: Strictness,
    /// The target values are already sorted ascending.
    ///
    /// Skips the sort but not the order check.
    pub is_sorted: bool,
}

impl Options {
    fn evaluate(&self, values: &[f64]) -> Result<Evaluation, FrameError> {
        if self.is_sorted
            && let Some(position) = values.windows(2).position(|pair| pair[1] < pair[0])
        {
            return Err(FrameError::NotSorted { row: position + 1 });
        }
        Ok(tautest_core::evaluate(
            values,
            self.strictness,
            self.is_sorted,
        )?)
    }
}

/// Runs the test over `dataset` and labels every element.
pub fn evaluate_dataset(
    dataset: &Dataset,
    options: &Options,
) -> Result<LabeledDataset, FrameError> {
    match dataset {
        Dataset::List(values) => {
            let evaluation = options.evaluate(values)?;
            let labeled = evaluation
                .labeled()
                .map(|(value, is_outlier)| LabeledValue { value, is_outlier })
                .collect();
            Ok(LabeledDataset::new(LabeledData::List(labeled), evaluation))
        }
        Dataset::Rows(rows) => evaluate_rows(rows, options),
        Dataset::Series(series) => evaluate_series(series, options),
        Dataset::Table(table) => evaluate_table(table, options),
    }
}

fn evaluate_series(series: &Series, options: &Options) -> Result<LabeledDataset, FrameError> {
    let evaluation = options.evaluate(&series.values)?;
    let labeled = LabeledSeries {
        name: series.name.clone(),
        values: series.values.clone(),
        is_outlier: evaluation.outliers().to_vec(),
    };
    Ok(LabeledDataset::new(
        LabeledData::Series(labeled),
        evaluation,
    ))
}

fn evaluate_rows(rows: &[Vec<Cell>], options: &Options) -> Result<LabeledDataset, FrameError> {
    let width = rows.first().map_or(0, Vec::len);
    let target = options.selector.resolve_position(width)?;
    let values = column_values(rows, width, target, || target.to_string())?;
    let evaluation = options.evaluate(&values)?;

    let rows = rows
        .iter()
        .zip(evaluation.outliers())
        .map(|(cells, &is_outlier)| {
            let mut cells = cells.clone();
            cells.push(marker_cell(is_outlier));
            cells
        })
        .collect();
    Ok(LabeledDataset::new(LabeledData::Rows(rows), evaluation))
}

fn evaluate_table(table: &Table, options: &Options) -> Result<LabeledDataset, FrameError> {
    let target = options.selector.resolve(&table.columns)?;
    let target_name = &table.columns[target];
    if target_name == OUTLIER_COLUMN {
        return Err(ColumnError::ReservedName {
            name: target_name.clone(),
        }
        .into());
    }

    let width = table.columns.len();
    let values = column_values(&table.rows, width, target, || target_name.clone())?;
    let evaluation = options.evaluate(&values)?;

    let mut columns = table.columns.clone();
    let marker = table.column_position(OUTLIER_COLUMN);
    if marker.is_none() {
        columns.push(OUTLIER_COLUMN.to_owned());
    }
    let rows = table
        .rows
        .iter()
        .zip(evaluation.outliers())
        .map(|(cells, &is_outlier)| {
            let mut cells = cells.clone();
            let cell = marker_cell(is_outlier);
            match marker {
                Some(position) => cells[position] = cell,
                None => cells.push(cell),
            }
            cells
        })
        .collect();

    Ok(LabeledDataset::new(
        LabeledData::Table(Table { columns, rows }),
        evaluation,
    ))
}

/// Numeric values of column `target` in rows that must all be `width` cells wide.
fn column_values(
    rows: &[Vec<Cell>],
    width: usize,
    target: usize,
    column: impl Fn() -> String,
) -> Result<Vec<f64>, FrameError> {
    rows.iter()
        .enumerate()
        .map(|(row, cells)| {
            if cells.len() != width {
                return Err(FrameError::RowWidth {
                    row,
                    expected: width,
                    actual: cells.len(),
                });
            }
            cells[target]
                .as_f64()
                .ok_or_else(|| FrameError::NonNumericCell {
                    row,
                    column: column(),
                })
        })
        .collect()
}

fn marker_cell(is_outlier: bool) -> Cell {
    Cell::Integer(i64::from(is_outlier))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [f64; 6] = [10.0, 10.0, 9.0, 11.0, 10.0, 100.0];

    fn sample_table() -> Table {
        Table {
            columns: vec!["id".to_owned(), "reading".to_owned()],
            rows: SAMPLE
                .iter()
                .zip(1..)
                .map(|(&value, id)| vec![Cell::Integer(id), Cell::Number(value)])
                .collect(),
        }
    }

    fn marker_column(data: &LabeledData) -> Vec<Cell> {
        let LabeledData::Table(table) = data else {
            panic!("expected a table");
        };
        let position = table.column_position(OUTLIER_COLUMN).unwrap();
        table.rows.iter().map(|row| row[position].clone()).collect()
    }

    #[test]
    fn test_list() {
        let dataset = Dataset::List(SAMPLE.to_vec());
        let labeled = evaluate_dataset(&dataset, &Options::default()).unwrap();
        let json = serde_json::to_value(&labeled).unwrap();
        assert_eq!(json[5], serde_json::json!({ "value": 100.0, "is_outlier": true }));
        assert_eq!(json[0]["is_outlier"], false);
        assert_eq!(labeled.evaluation().outlier_count(), 1);
    }

    #[test]
    fn test_series_keeps_name() {
        let series = Series {
            name: Some("reading".to_owned()),
            values: SAMPLE.to_vec(),
        };
        let labeled = evaluate_dataset(&Dataset::Series(series), &Options::default()).unwrap();
        let LabeledData::Series(series) = labeled.data() else {
            panic!("expected a series");
        };
        assert_eq!(series.name.as_deref(), Some("reading"));
        assert_eq!(series.values, SAMPLE);
        assert_eq!(series.is_outlier, [false, false, false, false, false, true]);
    }

    #[test]
    fn test_series_ignores_selector() {
        let options = Options {
            selector: ColumnSelector::by_index(7),
            ..Options::default()
        };
        let dataset = Dataset::Series(Series {
            name: None,
            values: SAMPLE.to_vec(),
        });
        assert!(evaluate_dataset(&dataset, &options).is_ok());
    }

    #[test]
    fn test_table_by_name_and_index() {
        let dataset = Dataset::Table(sample_table());
        for selector in [
            ColumnSelector::by_name("reading"),
            ColumnSelector::by_index(1),
        ] {
            let options = Options {
                selector,
                ..Options::default()
            };
            let labeled = evaluate_dataset(&dataset, &options).unwrap();
            let expected = [0, 0, 0, 0, 0, 1].map(Cell::Integer);
            assert_eq!(marker_column(labeled.data()), expected);
        }
    }

    #[test]
    fn test_table_keeps_row_order_and_cells() {
        let options = Options {
            selector: ColumnSelector::by_name("reading"),
            ..Options::default()
        };
        let table = sample_table();
        let labeled = evaluate_dataset(&Dataset::Table(table.clone()), &options).unwrap();
        let LabeledData::Table(labeled) = labeled.into_data() else {
            panic!("expected a table");
        };
        assert_eq!(labeled.columns, ["id", "reading", "is_outlier"]);
        for (original, row) in table.rows.iter().zip(&labeled.rows) {
            assert_eq!(&row[..2], &original[..]);
        }
    }

    #[test]
    fn test_table_overwrites_existing_marker_column() {
        let mut table = sample_table();
        table.columns.insert(0, OUTLIER_COLUMN.to_owned());
        for row in &mut table.rows {
            row.insert(0, Cell::Text("stale".to_owned()));
        }
        let options = Options {
            selector: ColumnSelector::by_name("reading"),
            ..Options::default()
        };
        let labeled = evaluate_dataset(&Dataset::Table(table), &options).unwrap();
        let LabeledData::Table(labeled) = labeled.data() else {
            panic!("expected a table");
        };
        assert_eq!(labeled.columns, ["is_outlier", "id", "reading"]);
        assert_eq!(labeled.rows[5][0], Cell::Integer(1));
        assert_eq!(labeled.rows[0][0], Cell::Integer(0));
    }

    #[test]
    fn test_table_rejects_marker_as_target() {
        let table = Table {
            columns: vec![OUTLIER_COLUMN.to_owned()],
            rows: vec![vec![Cell::Integer(0)]],
        };
        assert_eq!(
            evaluate_dataset(&Dataset::Table(table), &Options::default()),
            Err(FrameError::Column(ColumnError::ReservedName {
                name: OUTLIER_COLUMN.to_owned()
            }))
        );
    }

    #[test]
    fn test_table_needs_selector_with_many_columns() {
        assert_eq!(
            evaluate_dataset(&Dataset::Table(sample_table()), &Options::default()),
            Err(FrameError::Column(ColumnError::Ambiguous { len: 2 }))
        );
    }

    #[test]
    fn test_table_cell_errors() {
        let options = Options {
            selector: ColumnSelector::by_index(1),
            ..Options::default()
        };

        let mut table = sample_table();
        table.rows[3][1] = Cell::Null;
        assert_eq!(
            evaluate_dataset(&Dataset::Table(table), &options),
            Err(FrameError::NonNumericCell {
                row: 3,
                column: "reading".to_owned()
            })
        );

        let mut table = sample_table();
        table.rows[2].pop();
        assert_eq!(
            evaluate_dataset(&Dataset::Table(table), &options),
            Err(FrameError::RowWidth {
                row: 2,
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_small_table_has_no_outliers() {
        let table = Table {
            columns: vec!["x".to_owned()],
            rows: vec![
                vec![Cell::Integer(1)],
                vec![Cell::Integer(1_000_000)],
            ],
        };
        let labeled = evaluate_dataset(&Dataset::Table(table), &Options::default()).unwrap();
        assert_eq!(
            marker_column(labeled.data()),
            [Cell::Integer(0), Cell::Integer(0)]
        );
    }

    #[test]
    fn test_presorted_table() {
        let mut table = sample_table();
        table
            .rows
            .sort_by(|a, b| a[1].as_f64().unwrap().total_cmp(&b[1].as_f64().unwrap()));
        let options = Options {
            selector: ColumnSelector::by_index(1),
            is_sorted: true,
            ..Options::default()
        };
        let labeled = evaluate_dataset(&Dataset::Table(table), &options).unwrap();
        let LabeledData::Table(labeled) = labeled.data() else {
            panic!("expected a table");
        };
        let flagged = labeled
            .rows
            .iter()
            .filter(|row| row[2] == Cell::Integer(1))
            .map(|row| row[0].clone())
            .collect::<Vec<_>>();
        assert_eq!(flagged, [Cell::Integer(6)]);
    }

    #[test]
    fn test_headerless_rows_by_index() {
        let dataset: Dataset = serde_json::from_str(
            "[[1, 10.0], [2, 10.0], [3, 9.0], [4, 11.0], [5, 10.0], [6, 100.0]]",
        )
        .unwrap();
        let options = Options {
            selector: ColumnSelector::by_index(1),
            ..Options::default()
        };
        let labeled = evaluate_dataset(&dataset, &options).unwrap();
        let LabeledData::Rows(rows) = labeled.data() else {
            panic!("expected rows");
        };
        assert_eq!(rows.len(), 6);
        assert_eq!(
            rows[5],
            [Cell::Integer(6), Cell::Number(100.0), Cell::Integer(1)]
        );
        let markers = rows.iter().map(|row| row[2].clone()).collect::<Vec<_>>();
        assert_eq!(markers, [0, 0, 0, 0, 0, 1].map(Cell::Integer));

        let json = serde_json::to_value(&labeled).unwrap();
        assert_eq!(json[0], serde_json::json!([1, 10.0, 0]));
        let parsed: LabeledData = serde_json::from_value(json).unwrap();
        assert_eq!(&parsed, labeled.data());
    }

    #[test]
    fn test_headerless_rows_selection_errors() {
        let rows = sample_table().rows;
        let dataset = Dataset::Rows(rows.clone());
        let by_name = Options {
            selector: ColumnSelector::by_name("reading"),
            ..Options::default()
        };
        assert_eq!(
            evaluate_dataset(&dataset, &by_name),
            Err(FrameError::Column(ColumnError::NoHeader {
                name: "reading".to_owned()
            }))
        );
        assert_eq!(
            evaluate_dataset(&dataset, &Options::default()),
            Err(FrameError::Column(ColumnError::Ambiguous { len: 2 }))
        );

        let mut rows = rows;
        rows[4][1] = Cell::from("n/a");
        let options = Options {
            selector: ColumnSelector::by_index(1),
            ..Options::default()
        };
        assert_eq!(
            evaluate_dataset(&Dataset::Rows(rows), &options),
            Err(FrameError::NonNumericCell {
                row: 4,
                column: "1".to_owned()
            })
        );
    }

    #[test]
    fn test_single_column_rows_need_no_selector() {
        let rows = SAMPLE.iter().map(|&value| vec![Cell::from(value)]).collect();
        let labeled = evaluate_dataset(&Dataset::Rows(rows), &Options::default()).unwrap();
        assert_eq!(
            labeled.evaluation().outlier_indices().collect::<Vec<_>>(),
            [5]
        );
    }

    #[test]
    fn test_sorted_flag_rejects_unsorted_values() {
        let options = Options {
            is_sorted: true,
            ..Options::default()
        };
        let dataset = Dataset::List(vec![5.0, 1.0, 3.0, 100.0, 2.0]);
        assert_eq!(
            evaluate_dataset(&dataset, &options),
            Err(FrameError::NotSorted { row: 1 })
        );

        let mut table = sample_table();
        table.rows.swap(4, 5);
        let options = Options {
            selector: ColumnSelector::by_index(1),
            is_sorted: true,
            ..Options::default()
        };
        assert_eq!(
            evaluate_dataset(&Dataset::Table(table), &options),
            Err(FrameError::NotSorted { row: 2 })
        );
    }

    #[test]
    fn test_json_round_trip_of_table_output() {
        let options = Options {
            selector: ColumnSelector::by_name("reading"),
            strictness: Strictness::Confidence99,
            ..Options::default()
        };
        let labeled = evaluate_dataset(&Dataset::Table(sample_table()), &options).unwrap();
        let json = serde_json::to_string(&labeled).unwrap();
        let parsed: LabeledData = serde_json::from_str(&json).unwrap();
        assert_eq!(&parsed, labeled.data());
    }
}
