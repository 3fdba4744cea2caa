use thiserror::Error;

/// Simplified `Result` using [`EstimatorError`] as error type
pub type Result<T> = std::result::Result<T, EstimatorError>;

/// Error variants from hyperparameter construction or model estimation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimatorError {
    /// The model tag names none of the supported estimators
    #[error("unknown model type: {0}")]
    Configuration(String),
    /// Prediction or evaluation was requested before training
    #[error("model must be trained before use")]
    NotTrained,
    #[error("model is already trained")]
    AlreadyTrained,
    #[error("invalid alpha {0}")]
    InvalidRegularization(f32),
    #[error("invalid tolerance {0}")]
    InvalidTolerance(f32),
    #[error("invalid number of epochs {0}")]
    InvalidMaxEpochs(usize),
    #[error("expected {expected} features, got {found}")]
    FeatureMismatch { expected: usize, found: usize },
    #[error("design matrix has {n_samples} rows but targets have {n_targets}")]
    SampleMismatch { n_samples: usize, n_targets: usize },
    #[error("cannot fit a model on an empty dataset")]
    EmptyDataset,
    #[error("cannot compute metrics: {0}")]
    Metrics(String),
}
