use approx::assert_abs_diff_eq;
use ndarray::{array, Array1};

use crate::estimators::error::EstimatorError;
use crate::metrics::*;

#[test]
fn test_metrics_values() {
    let y_true = array![3., -0.5, 2., 7.];
    let y_pred = array![2.5, 0.0, 2., 8.];
    let metrics = RegressionMetrics::compute(y_true.view(), y_pred.view()).unwrap();
    assert_abs_diff_eq!(metrics.mse, 0.375, epsilon = 1e-12);
    assert_abs_diff_eq!(metrics.mae, 0.5, epsilon = 1e-12);
    assert_abs_diff_eq!(metrics.r2, 0.9486081370449679, epsilon = 1e-12);
    assert_eq!(metrics.rmse, metrics.mse.sqrt());
}

#[test]
fn test_perfect_prediction() {
    let y = array![1., 2., 3.];
    let metrics = RegressionMetrics::compute(y.view(), y.view()).unwrap();
    assert_eq!(metrics.mse, 0.);
    assert_eq!(metrics.r2, 1.);
}

#[test]
fn test_constant_targets_stay_finite() {
    let y_true = array![4., 4., 4.];
    assert_eq!(r2_score(y_true.view(), array![4., 4., 4.].view()), 1.);
    assert_eq!(r2_score(y_true.view(), array![3., 4., 5.].view()), 0.);
}

#[test]
fn test_r2_can_be_negative() {
    let y_true = array![1., 2., 3.];
    let y_pred = array![3., 2., 1.];
    assert_abs_diff_eq!(r2_score(y_true.view(), y_pred.view()), -3., epsilon = 1e-12);
}

#[test]
fn test_single_precision() {
    let y_true = array![1f32, 2., 3.];
    let y_pred = array![1f32, 2., 4.];
    let metrics = RegressionMetrics::compute(y_true.view(), y_pred.view()).unwrap();
    assert_abs_diff_eq!(metrics.mse, 1. / 3., epsilon = 1e-7);
}

#[test]
fn test_invalid_inputs() {
    let empty = Array1::<f64>::zeros(0);
    assert!(matches!(
        RegressionMetrics::compute(empty.view(), empty.view()),
        Err(EstimatorError::Metrics(_))
    ));
    assert!(matches!(
        RegressionMetrics::compute(array![1., 2.].view(), array![1.].view()),
        Err(EstimatorError::Metrics(_))
    ));
}
