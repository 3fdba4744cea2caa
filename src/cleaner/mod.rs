use std::collections::{BTreeMap, BTreeSet, HashMap};

use log::{info, warn};
use thiserror::Error;

use crate::table::{Column, Table, TableError};

mod encoders;

pub use encoders::LabelEncoder;


/// Simplified `Result` using [`CleanerError`] as error type
pub type Result<T> = std::result::Result<T, CleanerError>;

/// Error variants raised while encoding a table
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CleanerError {
    #[error("column {column} still has {count} missing values")]
    MissingValues { column: String, count: usize },
    #[error(transparent)]
    Table(#[from] TableError),
}

/// Fill value of a categorical column with no observed category.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Columns handled by a [`DataCleaner`].
///
/// Columns listed here but absent from a table are skipped, and columns of
/// the table that appear in no list pass through untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanerConfig {
    /// Columns imputed with their most frequent value.
    pub categorical_columns: Vec<String>,
    /// Columns imputed with their mean.
    pub numeric_columns: Vec<String>,
    /// Columns label-encoded by [`DataCleaner::encode_categorical_variables`].
    pub encoded_columns: Vec<String>,
    /// Columns expanded by [`DataCleaner::create_dummies`].
    pub dummy_columns: Vec<String>,
    /// Truncates numeric pass-through columns to integers when creating
    /// dummies.
    pub integer_dummies: bool,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        let names = |cols: &[&str]| cols.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        let categorical = ["Weather", "Traffic_Level", "Time_of_Day", "Vehicle_Type"];
        CleanerConfig {
            categorical_columns: names(&categorical[..3]),
            numeric_columns: names(&["Courier_Experience_yrs"]),
            encoded_columns: names(&categorical),
            dummy_columns: names(&categorical),
            integer_dummies: false,
        }
    }
}

/// Turns a raw delivery table into a fully numeric one.
///
/// The cleaner owns the label encoders fitted by
/// [`DataCleaner::encode_categorical_variables`], one per encoded column.
#[derive(Debug, Clone, Default)]
pub struct DataCleaner {
    config: CleanerConfig,
    label_encoders: HashMap<String, LabelEncoder>,
}

impl DataCleaner {
    pub fn new(config: CleanerConfig) -> Self {
        DataCleaner {
            config,
            label_encoders: HashMap::new(),
        }
    }

    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    /// Encoder fitted on `column` by the last encoding call.
    pub fn label_encoder(&self, column: &str) -> Option<&LabelEncoder> {
        self.label_encoders.get(column)
    }

    /// Fills missing cells: categorical columns with their mode, numeric
    /// columns with their mean.
    pub fn handle_missing_values(&self, table: &Table) -> Table {
        let mut clean = table.clone();

        for name in &self.config.categorical_columns {
            if let Some(column) = clean.column_mut(name) {
                fill_with_mode(column);
            }
        }

        for name in &self.config.numeric_columns {
            match clean.column_mut(name) {
                Some(Column::Numeric(values)) => {
                    let observed: Vec<f64> = values.iter().flatten().copied().collect();
                    if observed.is_empty() {
                        continue;
                    }
                    let mean = observed.iter().sum::<f64>() / observed.len() as f64;
                    values.iter_mut().filter(|v| v.is_none()).for_each(|v| *v = Some(mean));
                }
                Some(Column::Categorical(_)) => {
                    warn!("Column {name} is not numeric, skipping mean imputation");
                }
                None => {}
            }
        }

        info!("Missing values handled successfully");
        clean
    }

    /// Replaces each encoded column by the integer codes of its categories.
    ///
    /// The columns must not contain missing cells.
    pub fn encode_categorical_variables(&mut self, table: &Table) -> Result<Table> {
        let mut encoded = table.clone();

        for name in &self.config.encoded_columns {
            let Some(column) = table.column(name) else {
                continue;
            };
            let missing = column.missing_count();
            if missing > 0 {
                return Err(CleanerError::MissingValues {
                    column: name.clone(),
                    count: missing,
                });
            }
            let labels: Vec<String> = category_labels(column).into_iter().flatten().collect();
            let encoder = LabelEncoder::fit(labels.iter().map(String::as_str));
            let codes = labels
                .iter()
                .filter_map(|label| encoder.transform(label))
                .map(|code| code as f64);
            encoded.replace_column(name, Column::numeric(codes))?;
            self.label_encoders.insert(name.clone(), encoder);
        }

        info!("Categorical variables encoded successfully");
        Ok(encoded)
    }

    /// Expands each dummy column into one 0/1 column per category, named
    /// `<column>_<category>`.
    ///
    /// Remaining columns come first in their original order, followed by the
    /// indicator columns with categories sorted. A missing cell is 0 in every
    /// indicator of its column.
    pub fn create_dummies(&self, table: &Table) -> Result<Table> {
        let is_dummy = |name: &str| self.config.dummy_columns.iter().any(|c| c == name);
        let mut dummies = Table::new();

        for (name, column) in table.iter().filter(|(name, _)| !is_dummy(name)) {
            let column = match column {
                Column::Numeric(values) if self.config.integer_dummies => {
                    Column::Numeric(values.iter().map(|v| v.map(f64::trunc)).collect())
                }
                other => other.clone(),
            };
            dummies.push_column(name, column)?;
        }

        for name in &self.config.dummy_columns {
            let Some(column) = table.column(name) else {
                continue;
            };
            let (labels, categories) = sorted_categories(column);
            for category in categories {
                let indicator = labels.iter().map(|label| match label {
                    Some(label) if *label == category => 1.,
                    _ => 0.,
                });
                dummies.push_column(format!("{name}_{category}"), Column::numeric(indicator))?;
            }
        }

        let (n_rows, n_columns) = dummies.shape();
        info!("Dummy variables created. New shape: ({n_rows}, {n_columns})");
        Ok(dummies)
    }
}

/// Textual category of every cell.
fn category_labels(column: &Column) -> Vec<Option<String>> {
    match column {
        Column::Numeric(values) => values.iter().map(|v| v.map(number_label)).collect(),
        Column::Categorical(values) => values.clone(),
    }
}

/// Category label of a number. Both zeros share the label `0`.
fn number_label(value: f64) -> String {
    if value == 0. {
        0f64.to_string()
    } else {
        value.to_string()
    }
}

/// Cell labels along with the distinct categories in ascending order.
fn sorted_categories(column: &Column) -> (Vec<Option<String>>, Vec<String>) {
    let categories = match column {
        Column::Numeric(values) => {
            let mut distinct: Vec<f64> = values.iter().flatten().copied().collect();
            distinct.sort_by(f64::total_cmp);
            distinct.dedup();
            distinct.into_iter().map(number_label).collect()
        }
        Column::Categorical(values) => values
            .iter()
            .flatten()
            .cloned()
            .collect::<BTreeSet<String>>()
            .into_iter()
            .collect(),
    };
    (category_labels(column), categories)
}

/// Fills the missing cells of a column with its most frequent value, the
/// smallest one on ties. A column without any observed value becomes
/// categorical and is filled with [`UNKNOWN_CATEGORY`].
fn fill_with_mode(column: &mut Column) {
    match column {
        Column::Categorical(values) => {
            let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
            for value in values.iter().flatten() {
                *counts.entry(value.as_str()).or_insert(0) += 1;
            }
            let mode = most_frequent(counts).unwrap_or(UNKNOWN_CATEGORY).to_string();
            values
                .iter_mut()
                .filter(|v| v.is_none())
                .for_each(|v| *v = Some(mode.clone()));
        }
        Column::Numeric(values) => {
            let n_rows = values.len();
            let mut observed: Vec<f64> = values.iter().flatten().copied().collect();
            observed.sort_by(f64::total_cmp);
            let mut counts: Vec<(f64, usize)> = Vec::new();
            for value in observed {
                match counts.last_mut() {
                    Some((last, count)) if *last == value => *count += 1,
                    _ => counts.push((value, 1)),
                }
            }
            match most_frequent(counts) {
                Some(mode) => values
                    .iter_mut()
                    .filter(|v| v.is_none())
                    .for_each(|v| *v = Some(mode)),
                None => *column = Column::categorical(vec![UNKNOWN_CATEGORY; n_rows]),
            }
        }
    }
}

/// First key reaching the highest count among keys given in ascending order.
fn most_frequent<K, I: IntoIterator<Item = (K, usize)>>(counts: I) -> Option<K> {
    counts
        .into_iter()
        .fold(None, |best: Option<(K, usize)>, (key, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((key, count)),
        })
        .map(|(key, _)| key)
}
