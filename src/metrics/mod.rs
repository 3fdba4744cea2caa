use ndarray::{Array1, ArrayView1};
use ndarray_stats::DeviationExt;

use crate::estimators::error::{EstimatorError, Result};
use crate::Float;

#[cfg(test)]
mod tests;

/// Accuracy of a set of predictions against the true targets.
///
/// Every field is finite, `rmse` is exactly `mse.sqrt()` and `r2` is at most 1.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionMetrics {
    pub mse: f64,
    pub rmse: f64,
    pub mae: f64,
    pub r2: f64,
}

impl RegressionMetrics {
    /// Compares `y_pred` with `y_true`.
    ///
    /// When the true targets are constant, R² is 1 for an exact prediction
    /// and 0 otherwise.
    pub fn compute<F: Float>(y_true: ArrayView1<F>, y_pred: ArrayView1<F>) -> Result<Self> {
        let y_true: Array1<f64> = y_true.mapv(|v| v.as_());
        let y_pred: Array1<f64> = y_pred.mapv(|v| v.as_());

        let mse = y_true
            .mean_sq_err(&y_pred)
            .map_err(|e| EstimatorError::Metrics(e.to_string()))?;
        let mae = y_true
            .mean_abs_err(&y_pred)
            .map_err(|e| EstimatorError::Metrics(e.to_string()))?;

        Ok(RegressionMetrics {
            mse,
            rmse: mse.sqrt(),
            mae,
            r2: r2_score(y_true.view(), y_pred.view()),
        })
    }
}

/// Coefficient of determination `1 - SS_res / SS_tot`.
pub fn r2_score(y_true: ArrayView1<f64>, y_pred: ArrayView1<f64>) -> f64 {
    let mean = y_true.mean().unwrap_or(0.);
    let ss_res: f64 = y_true
        .iter()
        .zip(y_pred.iter())
        .map(|(t, p)| (t - p).powi(2))
        .sum();
    let ss_tot: f64 = y_true.iter().map(|t| (t - mean).powi(2)).sum();
    if ss_tot == 0. {
        if ss_res == 0. {
            1.
        } else {
            0.
        }
    } else {
        1. - ss_res / ss_tot
    }
}
