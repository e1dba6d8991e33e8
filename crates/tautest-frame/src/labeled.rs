use serde::{Deserialize, Serialize};
use tautest_core::Evaluation;

use crate::dataset::{Cell, Table};

/// A list element with its outlier marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabeledValue {
    pub value: f64,
    pub is_outlier: bool,
}

/// A series with a parallel marker sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledSeries {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub values: Vec<f64>,
    pub is_outlier: Vec<bool>,
}

/// Labeled output in the shape of the input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LabeledData {
    List(Vec<LabeledValue>),
    /// The input rows, each with a 0/1 marker cell appended.
    Rows(Vec<Vec<Cell>>),
    Series(LabeledSeries),
    /// The input table with a 0/1 marker column.
    Table(Table),
}

/// Labeled output plus the evaluation it came from.
///
/// Serializes as the labeled data alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LabeledDataset {
    data: LabeledData,
    #[serde(skip)]
    evaluation: Evaluation,
}

impl LabeledDataset {
    pub(crate) fn new(data: LabeledData, evaluation: Evaluation) -> Self {
        Self { data, evaluation }
    }

    #[must_use]
    pub fn data(&self) -> &LabeledData {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> LabeledData {
        self.data
    }

    #[must_use]
    pub fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }
}
