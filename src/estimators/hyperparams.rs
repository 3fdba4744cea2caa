use std::fmt;
use std::str::FromStr;

use super::error::{EstimatorError, Result};
use super::param_guard::ParamGuard;
use super::Float;

/// The linear estimators a [`crate::estimators::model::RegressionModel`] can
/// wrap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    /// Ordinary least squares
    Linear,
    /// Least squares with an L2 penalty
    Ridge,
    /// Least squares with an L1 penalty
    Lasso,
}

impl ModelKind {
    pub const ALL: [ModelKind; 3] = [ModelKind::Linear, ModelKind::Ridge, ModelKind::Lasso];

    /// The tag the kind is parsed from.
    pub fn tag(&self) -> &'static str {
        match self {
            ModelKind::Linear => "linear",
            ModelKind::Ridge => "ridge",
            ModelKind::Lasso => "lasso",
        }
    }

    /// Capitalized name used in reports.
    pub fn display_name(&self) -> &'static str {
        match self {
            ModelKind::Linear => "Linear",
            ModelKind::Ridge => "Ridge",
            ModelKind::Lasso => "Lasso",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for ModelKind {
    type Err = EstimatorError;

    fn from_str(tag: &str) -> Result<Self> {
        match tag {
            "linear" => Ok(ModelKind::Linear),
            "ridge" => Ok(ModelKind::Ridge),
            "lasso" => Ok(ModelKind::Lasso),
            other => Err(EstimatorError::Configuration(other.to_string())),
        }
    }
}

/// A verified hyperparameter set ready for the fitting of a linear model
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionValidParams<F> {
    kind: ModelKind,
    alpha: F,
    max_epochs: usize,
    tolerance: F,
    fit_intercept: bool,
    verbose: bool,
}

impl<F: Float> RegressionValidParams<F> {
    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    pub fn alpha(&self) -> F {
        self.alpha
    }

    pub fn max_epochs(&self) -> usize {
        self.max_epochs
    }

    pub fn tolerance(&self) -> F {
        self.tolerance
    }

    pub fn fit_intercept(&self) -> bool {
        self.fit_intercept
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }
}

/// A hyper-parameter set during construction
///
/// Depending on the kind, fitting minimizes one of the following objective
/// functions:
/// ```ignore
/// Linear: ||y - Xw||^2_2
/// Ridge:  ||y - Xw||^2_2 + alpha * ||w||^2_2
/// Lasso:  1 / (2 * n_samples) * ||y - Xw||^2_2 + alpha * ||w||_1
/// ```
/// The intercept is never penalized.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionParams<F>(RegressionValidParams<F>);

/// Configure and fit a linear model
impl<F: Float> RegressionParams<F> {
    /// Create default hyper parameters for the given kind
    pub fn new(kind: ModelKind) -> RegressionParams<F> {
        Self(RegressionValidParams {
            kind,
            alpha: F::one(),
            max_epochs: 1000,
            tolerance: F::cast(1e-4),
            fit_intercept: true,
            verbose: false,
        })
    }

    pub fn kind(&self) -> ModelKind {
        self.0.kind
    }

    /// Set the regularization hyperparameter. Ignored by ordinary least
    /// squares.
    /// Defaults to `1` if not set.
    pub fn alpha(mut self, alpha: F) -> Self {
        self.0.alpha = alpha;
        self
    }

    /// Set the maximum number of coordinate descent epochs of the Lasso.
    ///
    /// Defaults to `1000` if not set.
    pub fn max_epochs(mut self, max_epochs: usize) -> Self {
        self.0.max_epochs = max_epochs;
        self
    }

    /// Set the stopping criterion of the Lasso solver (KKT violation).
    ///
    /// Defaults to `1e-4` if not set.
    pub fn tolerance(mut self, tolerance: F) -> Self {
        self.0.tolerance = tolerance;
        self
    }

    /// Whether to fit an intercept. When set, the data is centered before
    /// fitting.
    /// Defaults to `true` if not set.
    pub fn fit_intercept(mut self, fit_intercept: bool) -> Self {
        self.0.fit_intercept = fit_intercept;
        self
    }

    /// Sets the verbosity level of the solver.
    ///
    /// Defaults to `false` if not set.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.0.verbose = verbose;
        self
    }
}

impl<F: Float> ParamGuard for RegressionParams<F> {
    type Checked = RegressionValidParams<F>;
    type Error = EstimatorError;

    /// Validate the hyper parameters
    fn check_ref(&self) -> Result<&Self::Checked> {
        if self.0.alpha.is_negative() || self.0.alpha.is_nan() {
            Err(EstimatorError::InvalidRegularization(
                self.0.alpha.to_f32().unwrap_or(f32::NAN),
            ))
        } else if self.0.tolerance.is_negative() || self.0.tolerance.is_nan() {
            Err(EstimatorError::InvalidTolerance(
                self.0.tolerance.to_f32().unwrap_or(f32::NAN),
            ))
        } else if self.0.max_epochs == 0 {
            Err(EstimatorError::InvalidMaxEpochs(self.0.max_epochs))
        } else {
            Ok(&self.0)
        }
    }

    fn check(self) -> Result<Self::Checked> {
        self.check_ref()?;
        Ok(self.0)
    }
}
