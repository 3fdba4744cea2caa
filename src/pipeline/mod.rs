use std::path::PathBuf;

use log::{error, info, warn};
use thiserror::Error;

use crate::cleaner::{CleanerConfig, CleanerError, DataCleaner};
use crate::datasets::{train_test_split, DatasetError};
use crate::estimators::error::EstimatorError;
use crate::estimators::hyperparams::ModelKind;
use crate::estimators::model::RegressionModel;
use crate::loader::{basic_data_info, load_dataset};
use crate::metrics::RegressionMetrics;
use crate::report::save_results;
use crate::table::TableError;

#[cfg(test)]
mod tests;

/// Simplified `Result` using [`PipelineError`] as error type
pub type Result<T> = std::result::Result<T, PipelineError>;

/// Errors that terminate a pipeline run once the dataset is loaded
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Table(#[from] TableError),
    #[error(transparent)]
    Cleaner(#[from] CleanerError),
    #[error(transparent)]
    Dataset(#[from] DatasetError),
    #[error(transparent)]
    Estimator(#[from] EstimatorError),
    #[error("failed to write results to {path}: {source}")]
    Results {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no model to train")]
    NoModels,
}

/// Settings of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    pub data_path: PathBuf,
    /// Column to predict.
    pub target: String,
    /// Fraction of the rows held out for evaluation.
    pub test_size: f64,
    /// Seed of the train/test shuffle.
    pub seed: u64,
    pub models: Vec<ModelKind>,
    /// Where to write the results summary, if anywhere.
    pub results_path: Option<PathBuf>,
    pub cleaner: CleanerConfig,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        PipelineConfig {
            data_path: PathBuf::from("data/Food_Delivery_Times.csv"),
            target: "Delivery_Time_min".to_string(),
            test_size: 0.2,
            seed: 42,
            models: ModelKind::ALL.to_vec(),
            results_path: None,
            cleaner: CleanerConfig::default(),
        }
    }
}

/// Test metrics of every trained model and the best of them.
#[derive(Debug, Clone, PartialEq)]
pub struct PipelineReport {
    /// Metrics in training order.
    pub results: Vec<(ModelKind, RegressionMetrics)>,
    pub best: ModelKind,
    pub n_train: usize,
    pub n_test: usize,
}

impl PipelineReport {
    pub fn best_metrics(&self) -> Option<&RegressionMetrics> {
        self.results
            .iter()
            .find(|(kind, _)| *kind == self.best)
            .map(|(_, metrics)| metrics)
    }
}

/// Model with the highest R², the first one on ties.
pub fn best_model(results: &[(ModelKind, RegressionMetrics)]) -> Option<ModelKind> {
    results
        .iter()
        .fold(None, |best: Option<&(ModelKind, RegressionMetrics)>, current| match best {
            Some(b) if b.1.r2 >= current.1.r2 => Some(b),
            _ => Some(current),
        })
        .map(|(kind, _)| *kind)
}

/// Runs load, clean, split, train, evaluate and selection.
///
/// A dataset that cannot be loaded is reported and yields `Ok(None)` without
/// training anything. Any later failure aborts the run with an error.
pub fn run(config: &PipelineConfig) -> Result<Option<PipelineReport>> {
    if config.models.is_empty() {
        return Err(PipelineError::NoModels);
    }

    info!("Loading dataset...");
    let raw = match load_dataset(&config.data_path) {
        Ok(table) => table,
        Err(e) => {
            error!("Error loading dataset: {e}");
            return Ok(None);
        }
    };
    basic_data_info(&raw);

    info!("Cleaning data...");
    let mut cleaner = DataCleaner::new(config.cleaner.clone());
    let clean = cleaner.handle_missing_values(&raw);
    // Label codes stay available through the cleaner; the models train on
    // the dummy table, where a missing cell is 0 in every indicator.
    match cleaner.encode_categorical_variables(&clean) {
        Ok(_) => {}
        Err(CleanerError::MissingValues { column, count }) => {
            warn!("Skipping label encoding: column {column} still has {count} missing values");
        }
        Err(e) => return Err(e.into()),
    }
    let dummies = cleaner.create_dummies(&clean)?;

    info!("Preparing features and target...");
    let (X, y, _) = dummies.split_target(&config.target)?;
    let (train, test) = train_test_split(&X, &y, config.test_size, config.seed)?;
    info!("Training set: {} samples", train.n_samples());
    info!("Test set: {} samples", test.n_samples());

    info!("Training regression models...");
    let mut results = Vec::with_capacity(config.models.len());
    for &kind in &config.models {
        info!("Training {kind} regression...");
        let mut model = RegressionModel::<f64>::new(kind);
        model.train(&train.design_matrix, &train.targets)?;
        let metrics = model.evaluate(&test.design_matrix, &test.targets)?;
        info!("R² Score: {:.4}", metrics.r2);
        info!("RMSE: {:.2}", metrics.rmse);
        results.push((kind, metrics));
    }

    let best = best_model(&results).ok_or(PipelineError::NoModels)?;
    let report = PipelineReport {
        best,
        n_train: train.n_samples(),
        n_test: test.n_samples(),
        results,
    };
    if let Some(metrics) = report.best_metrics() {
        info!("Best model: {best} (R² = {:.4})", metrics.r2);
    }

    if let Some(path) = &config.results_path {
        save_results(&report.results, path).map_err(|source| PipelineError::Results {
            path: path.clone(),
            source,
        })?;
        info!("Results saved to {}", path.display());
    }

    Ok(Some(report))
}
