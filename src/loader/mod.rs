use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use log::info;
use thiserror::Error;

use crate::table::{Column, Table, TableError};


/// Simplified `Result` using [`LoadError`] as error type
pub type Result<T> = std::result::Result<T, LoadError>;

/// Error variants raised while reading the input table
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("file {0} not found")]
    InputNotFound(PathBuf),
    #[error("cannot read {path}: {source}")]
    InputUnreadable {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("input has no header row")]
    EmptyHeader,
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Cell contents read as missing, on top of the empty cell.
pub const MISSING_MARKERS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Shape, column names and missing cells of a loaded table.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetSummary {
    pub n_rows: usize,
    pub n_columns: usize,
    pub columns: Vec<String>,
    pub missing: Vec<(String, usize)>,
}

/// Loads a headered CSV file into a [`Table`].
pub fn load_dataset<P: AsRef<Path>>(path: P) -> Result<Table> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoadError::InputNotFound(path.to_path_buf()));
    }
    let file = File::open(path).map_err(|e| LoadError::InputUnreadable {
        path: path.to_path_buf(),
        source: csv::Error::from(e),
    })?;
    let table = read_table(file).map_err(|e| match e {
        LoadError::InputUnreadable { source, .. } => LoadError::InputUnreadable {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;
    let (n_rows, n_columns) = table.shape();
    info!("Dataset loaded successfully: {n_rows} rows, {n_columns} columns");
    Ok(table)
}

/// Reads a headered CSV stream into a [`Table`].
///
/// A column is numeric when every present cell parses as a float, and
/// categorical otherwise. Numeric cells that parse to NaN or an infinity are
/// missing.
pub fn read_table<R: io::Read>(reader: R) -> Result<Table> {
    let unreadable = |source| LoadError::InputUnreadable {
        path: PathBuf::new(),
        source,
    };
    let mut reader = ReaderBuilder::new().has_headers(true).from_reader(reader);
    let headers: Vec<String> = reader
        .headers()
        .map_err(unreadable)?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();
    if headers.is_empty() || headers.iter().all(String::is_empty) {
        return Err(LoadError::EmptyHeader);
    }

    let mut cells: Vec<Vec<Option<String>>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(unreadable)?;
        for (j, raw) in record.iter().enumerate() {
            cells[j].push(parse_cell(raw));
        }
    }

    let mut table = Table::new();
    for (name, values) in headers.into_iter().zip(cells) {
        table.push_column(name, infer_column(values))?;
    }
    Ok(table)
}

/// Logs and returns a summary of the table.
pub fn basic_data_info(table: &Table) -> DatasetSummary {
    let (n_rows, n_columns) = table.shape();
    let summary = DatasetSummary {
        n_rows,
        n_columns,
        columns: table.column_names().to_vec(),
        missing: table.missing_counts(),
    };
    info!("Shape: ({n_rows}, {n_columns})");
    info!("Columns: {:?}", summary.columns);
    info!("Missing values:");
    for (name, count) in &summary.missing {
        info!("  {name:<24} {count}");
    }
    summary
}

fn parse_cell(raw: &str) -> Option<String> {
    let cell = raw.trim();
    if cell.is_empty() || MISSING_MARKERS.contains(&cell) {
        None
    } else {
        Some(cell.to_string())
    }
}

fn infer_column(values: Vec<Option<String>>) -> Column {
    let parsed: Option<Vec<Option<f64>>> = values
        .iter()
        .map(|cell| match cell {
            None => Some(None),
            Some(text) => text.parse::<f64>().ok().map(|v| v.is_finite().then_some(v)),
        })
        .collect();
    match parsed {
        Some(numbers) => Column::Numeric(numbers),
        None => Column::Categorical(values),
    }
}
