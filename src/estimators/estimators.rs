use log::info;
use ndarray::{Array1, ArrayBase, ArrayView1, Data, Ix1, Ix2};

use super::error::{EstimatorError, Result};
use super::hyperparams::{ModelKind, RegressionParams, RegressionValidParams};
use super::traits::Fit;

use crate::cd::coordinate_descent;
use crate::datafits::Quadratic;
use crate::datasets::DatasetBase;
use crate::helpers::linalg::{center, solve_normal_equations};
use crate::metrics::RegressionMetrics;
use crate::penalties::L1;
use crate::Float;

/// A fitted linear model
///
/// Predictions are `X.dot(coefficients) + intercept`, whichever estimator
/// produced the coefficients.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearModel<F> {
    kind: ModelKind,
    coefficients: Array1<F>,
    intercept: F,
}

impl<F: Float> LinearModel<F> {
    /// This method instantiates the hyperparameters of a model of the given
    /// kind, with default values.
    pub fn params(kind: ModelKind) -> RegressionParams<F> {
        RegressionParams::new(kind)
    }

    pub fn kind(&self) -> ModelKind {
        self.kind
    }

    /// This method is a getter for the coefficients vector.
    pub fn coefficients(&self) -> ArrayView1<F> {
        self.coefficients.view()
    }

    pub fn intercept(&self) -> F {
        self.intercept
    }

    pub fn n_features(&self) -> usize {
        self.coefficients.len()
    }

    /// Predicts one target per row of `X`.
    pub fn predict<S: Data<Elem = F>>(&self, X: &ArrayBase<S, Ix2>) -> Result<Array1<F>> {
        if X.ncols() != self.n_features() {
            return Err(EstimatorError::FeatureMismatch {
                expected: self.n_features(),
                found: X.ncols(),
            });
        }
        Ok(X.dot(&self.coefficients) + self.intercept)
    }

    /// Scores the predictions on `X` against `y`.
    pub fn evaluate<S, T>(
        &self,
        X: &ArrayBase<S, Ix2>,
        y: &ArrayBase<T, Ix1>,
    ) -> Result<RegressionMetrics>
    where
        S: Data<Elem = F>,
        T: Data<Elem = F>,
    {
        let y_pred = self.predict(X)?;
        RegressionMetrics::compute(y.view(), y_pred.view())
    }
}

/// This implements the fitting of the three estimators on dense design
/// matrices.
impl<F: Float, S: Data<Elem = F>, T: Data<Elem = F>>
    Fit<ArrayBase<S, Ix2>, ArrayBase<T, Ix1>, EstimatorError> for RegressionValidParams<F>
{
    /// If successful, the output is a [`LinearModel`] holding the fitted
    /// coefficients and intercept.
    type Object = LinearModel<F>;

    /// Ordinary least squares and Ridge solve their normal equations, the
    /// Lasso runs coordinate descent on the quadratic datafit with an L1
    /// penalty.
    fn fit(
        &self,
        dataset: &DatasetBase<ArrayBase<S, Ix2>, ArrayBase<T, Ix1>>,
    ) -> Result<Self::Object> {
        let X = dataset.design_matrix().view();
        let y = dataset.targets().view();
        let n_samples = X.nrows();
        if n_samples == 0 {
            return Err(EstimatorError::EmptyDataset);
        }
        if y.len() != n_samples {
            return Err(EstimatorError::SampleMismatch {
                n_samples,
                n_targets: y.len(),
            });
        }

        let (X_fit, y_fit, X_offset, y_offset) = if self.fit_intercept() {
            center(X, y)
        } else {
            (X.to_owned(), y.to_owned(), Array1::zeros(X.ncols()), F::zero())
        };

        let coefficients = match self.kind() {
            ModelKind::Linear => {
                let XtX = X_fit.t().dot(&X_fit);
                let Xty = X_fit.t().dot(&y_fit);
                solve_normal_equations(XtX.view(), Xty.view())
            }
            ModelKind::Ridge => {
                let mut XtX = X_fit.t().dot(&X_fit);
                XtX.diag_mut().mapv_inplace(|v| v + self.alpha());
                let Xty = X_fit.t().dot(&y_fit);
                solve_normal_equations(XtX.view(), Xty.view())
            }
            ModelKind::Lasso => {
                let centered = DatasetBase::from((X_fit.view(), y_fit.view()));
                let mut datafit = Quadratic::new();
                let penalty = L1::new(self.alpha());
                coordinate_descent(
                    &centered,
                    &mut datafit,
                    &penalty,
                    self.max_epochs(),
                    self.tolerance(),
                    self.verbose(),
                )
            }
        };

        let intercept = y_offset - X_offset.dot(&coefficients);
        info!("{} model trained successfully", self.kind().display_name());

        Ok(LinearModel {
            kind: self.kind(),
            coefficients,
            intercept,
        })
    }
}
