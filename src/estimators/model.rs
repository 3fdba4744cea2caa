use ndarray::{Array1, ArrayBase, Data, Ix1, Ix2};

use super::error::{EstimatorError, Result};
use super::estimators::LinearModel;
use super::hyperparams::{ModelKind, RegressionParams};
use super::param_guard::ParamGuard;
use super::traits::Fit;
use crate::datasets::DatasetBase;
use crate::metrics::RegressionMetrics;
use crate::Float;

/// A linear model that must be trained once before it can predict.
///
/// The model starts untrained with its hyperparameters; [`RegressionModel::train`]
/// fits it and it stays trained from then on. Predicting or evaluating an
/// untrained model fails with [`EstimatorError::NotTrained`].
#[derive(Debug, Clone)]
pub struct RegressionModel<F: Float> {
    params: RegressionParams<F>,
    fitted: Option<LinearModel<F>>,
}

impl<F: Float> RegressionModel<F> {
    /// An untrained model of the given kind with default hyperparameters.
    pub fn new(kind: ModelKind) -> Self {
        Self::with_params(RegressionParams::new(kind))
    }

    /// An untrained model from its tag (`"linear"`, `"ridge"` or `"lasso"`).
    pub fn from_tag(tag: &str) -> Result<Self> {
        Ok(Self::new(tag.parse()?))
    }

    pub fn with_params(params: RegressionParams<F>) -> Self {
        RegressionModel {
            params,
            fitted: None,
        }
    }

    pub fn kind(&self) -> ModelKind {
        self.params.kind()
    }

    pub fn is_trained(&self) -> bool {
        self.fitted.is_some()
    }

    /// The fitted estimator, once trained.
    pub fn fitted(&self) -> Option<&LinearModel<F>> {
        self.fitted.as_ref()
    }

    /// Fits the model on `X` and `y`.
    pub fn train<S, T>(&mut self, X: &ArrayBase<S, Ix2>, y: &ArrayBase<T, Ix1>) -> Result<()>
    where
        S: Data<Elem = F>,
        T: Data<Elem = F>,
    {
        if self.is_trained() {
            return Err(EstimatorError::AlreadyTrained);
        }
        let params = self.params.check_ref()?;
        let dataset = DatasetBase::from((X.view(), y.view()));
        let model = Fit::<_, _, EstimatorError>::fit(params, &dataset)?;
        self.fitted = Some(model);
        Ok(())
    }

    pub fn predict<S: Data<Elem = F>>(&self, X: &ArrayBase<S, Ix2>) -> Result<Array1<F>> {
        self.trained()?.predict(X)
    }

    /// Computes the MSE, RMSE, MAE and R² of the predictions on `X` against `y`.
    pub fn evaluate<S, T>(
        &self,
        X: &ArrayBase<S, Ix2>,
        y: &ArrayBase<T, Ix1>,
    ) -> Result<RegressionMetrics>
    where
        S: Data<Elem = F>,
        T: Data<Elem = F>,
    {
        self.trained()?.evaluate(X, y)
    }

    fn trained(&self) -> Result<&LinearModel<F>> {
        self.fitted.as_ref().ok_or(EstimatorError::NotTrained)
    }
}
