use ndarray::{Array1, Array2};
use thiserror::Error;

#[cfg(test)]
mod tests;

/// Simplified `Result` using [`TableError`] as error type
pub type Result<T> = std::result::Result<T, TableError>;

/// Error variants raised when building or reading a [`Table`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("column {column} has {found} rows, expected {expected}")]
    LengthMismatch {
        column: String,
        expected: usize,
        found: usize,
    },
    #[error("duplicate column {0}")]
    DuplicateColumn(String),
    #[error("column {0} not found")]
    ColumnNotFound(String),
    #[error("column {0} is not numeric")]
    NonNumericColumn(String),
    #[error("column {column} has a missing value at row {row}")]
    MissingValue { column: String, row: usize },
}

/// A typed column. `None` marks a missing cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Column {
    Numeric(Vec<Option<f64>>),
    Categorical(Vec<Option<String>>),
}

impl Column {
    /// Builds a numeric column without missing cells.
    pub fn numeric<I: IntoIterator<Item = f64>>(values: I) -> Self {
        Column::Numeric(values.into_iter().map(Some).collect())
    }

    /// Builds a categorical column without missing cells.
    pub fn categorical<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Column::Categorical(values.into_iter().map(|v| Some(v.into())).collect())
    }

    pub fn len(&self) -> usize {
        match self {
            Column::Numeric(values) => values.len(),
            Column::Categorical(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, Column::Numeric(_))
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        match self {
            Column::Numeric(values) => values.iter().filter(|v| v.is_none()).count(),
            Column::Categorical(values) => values.iter().filter(|v| v.is_none()).count(),
        }
    }

    /// Short type name used in summaries.
    pub fn dtype(&self) -> &'static str {
        match self {
            Column::Numeric(_) => "numeric",
            Column::Categorical(_) => "categorical",
        }
    }
}

/// An ordered collection of named columns of equal length.
///
/// Column names are unique and every column holds exactly [`Table::n_rows`]
/// cells; each mutating method checks both before touching the table.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Table {
    names: Vec<String>,
    columns: Vec<Column>,
}

impl Table {
    pub fn new() -> Self {
        Table::default()
    }

    /// Builds a table from `(name, column)` pairs, keeping their order.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Column)>,
        S: Into<String>,
    {
        let mut table = Table::new();
        for (name, column) in columns {
            table.push_column(name, column)?;
        }
        Ok(table)
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// `(rows, columns)`
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows(), self.n_columns())
    }

    pub fn column_names(&self) -> &[String] {
        &self.names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.position(name).map(|idx| &self.columns[idx])
    }

    /// In-place access for transformations that keep the column length.
    pub(crate) fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.position(name).map(move |idx| &mut self.columns[idx])
    }

    /// Iterates over `(name, column)` pairs in table order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.names
            .iter()
            .map(String::as_str)
            .zip(self.columns.iter())
    }

    /// Appends a column at the end of the table.
    pub fn push_column<S: Into<String>>(&mut self, name: S, column: Column) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(TableError::DuplicateColumn(name));
        }
        self.check_length(&name, &column)?;
        self.names.push(name);
        self.columns.push(column);
        Ok(())
    }

    /// Swaps the content of an existing column, keeping its position.
    pub fn replace_column(&mut self, name: &str, column: Column) -> Result<Column> {
        let idx = self
            .position(name)
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))?;
        if self.columns.len() > 1 {
            self.check_length(name, &column)?;
        }
        Ok(std::mem::replace(&mut self.columns[idx], column))
    }

    pub fn drop_column(&mut self, name: &str) -> Result<Column> {
        let idx = self
            .position(name)
            .ok_or_else(|| TableError::ColumnNotFound(name.to_string()))?;
        self.names.remove(idx);
        Ok(self.columns.remove(idx))
    }

    /// Missing cells per column, in table order.
    pub fn missing_counts(&self) -> Vec<(String, usize)> {
        self.iter()
            .map(|(name, column)| (name.to_string(), column.missing_count()))
            .collect()
    }

    pub fn total_missing(&self) -> usize {
        self.columns.iter().map(Column::missing_count).sum()
    }

    /// Converts the whole table into a dense row-major design matrix.
    ///
    /// Every column must be numeric and fully observed.
    pub fn to_design_matrix(&self) -> Result<Array2<f64>> {
        let (n_rows, n_columns) = self.shape();
        let mut X = Array2::<f64>::zeros((n_rows, n_columns));
        for (j, (name, column)) in self.iter().enumerate() {
            let values = numeric_values(name, column)?;
            X.column_mut(j).assign(&values);
        }
        Ok(X)
    }

    /// Splits the table into a feature matrix, a target vector and the feature
    /// names, in table order.
    pub fn split_target(&self, target: &str) -> Result<(Array2<f64>, Array1<f64>, Vec<String>)> {
        let mut features = self.clone();
        let target_column = features.drop_column(target)?;
        let y = numeric_values(target, &target_column)?;
        let X = features.to_design_matrix()?;
        Ok((X, y, features.names))
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|n| n == name)
    }

    fn check_length(&self, name: &str, column: &Column) -> Result<()> {
        if self.columns.is_empty() {
            return Ok(());
        }
        let expected = self.n_rows();
        if column.len() != expected {
            return Err(TableError::LengthMismatch {
                column: name.to_string(),
                expected,
                found: column.len(),
            });
        }
        Ok(())
    }
}

fn numeric_values(name: &str, column: &Column) -> Result<Array1<f64>> {
    match column {
        Column::Numeric(values) => values
            .iter()
            .enumerate()
            .map(|(row, v)| {
                v.ok_or_else(|| TableError::MissingValue {
                    column: name.to_string(),
                    row,
                })
            })
            .collect::<Result<Vec<f64>>>()
            .map(Array1::from_vec),
        Column::Categorical(_) => Err(TableError::NonNumericColumn(name.to_string())),
    }
}

