/// Name of the marker column added to labeled tables.
pub const OUTLIER_COLUMN: &str = "is_outlier";

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ColumnError {
    #[display("column index {index} is out of range for a table with {len} columns")]
    IndexOutOfRange { index: usize, len: usize },
    #[display("no column named '{name}'")]
    UnknownName { name: String },
    #[display("table has {len} columns; the name or index of the target column is required")]
    Ambiguous { len: usize },
    #[display("table has no columns")]
    NoColumns,
    #[display("rows have no header; select column '{name}' by index instead")]
    NoHeader { name: String },
    #[display("column '{name}' is reserved for outlier markers and cannot be evaluated")]
    ReservedName { name: String },
}

/// Identifies the column to evaluate in a table.
///
/// An index takes precedence over a name. With neither, the table must have exactly
/// one column.
///
/// # Examples
///
/// ```
/// use tautest_frame::column::ColumnSelector;
///
/// let columns = ["host".to_owned(), "latency".to_owned()];
/// assert_eq!(ColumnSelector::by_name("latency").resolve(&columns), Ok(1));
/// assert_eq!(ColumnSelector::by_index(0).resolve(&columns), Ok(0));
/// assert!(ColumnSelector::default().resolve(&columns).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSelector {
    pub index: Option<usize>,
    pub name: Option<String>,
}

impl ColumnSelector {
    #[must_use]
    pub fn by_index(index: usize) -> Self {
        Self {
            index: Some(index),
            name: None,
        }
    }

    #[must_use]
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            index: None,
            name: Some(name.into()),
        }
    }

    /// Resolves the selector to a position in `columns`.
    pub fn resolve(&self, columns: &[String]) -> Result<usize, ColumnError> {
        let len = columns.len();
        if let Some(index) = self.index {
            return if index < len {
                Ok(index)
            } else {
                Err(ColumnError::IndexOutOfRange { index, len })
            };
        }
        if let Some(name) = &self.name {
            return columns
                .iter()
                .position(|column| column == name)
                .ok_or_else(|| ColumnError::UnknownName { name: name.clone() });
        }
        Self::resolve_default(len)
    }

    /// Resolves the selector against `width` unnamed columns.
    ///
    /// Only an index can address such columns; a name alone is an error.
    pub fn resolve_position(&self, width: usize) -> Result<usize, ColumnError> {
        match (self.index, &self.name) {
            (Some(index), _) if index < width => Ok(index),
            (Some(index), _) => Err(ColumnError::IndexOutOfRange { index, len: width }),
            (None, Some(name)) => Err(ColumnError::NoHeader { name: name.clone() }),
            (None, None) => Self::resolve_default(width),
        }
    }

    fn resolve_default(len: usize) -> Result<usize, ColumnError> {
        match len {
            0 => Err(ColumnError::NoColumns),
            1 => Ok(0),
            _ => Err(ColumnError::Ambiguous { len }),
        }
    }
}
