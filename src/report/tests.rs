use crate::estimators::hyperparams::ModelKind;
use crate::metrics::RegressionMetrics;
use crate::pipeline::PipelineReport;
use crate::report::*;

fn sample_results() -> Vec<(ModelKind, RegressionMetrics)> {
    vec![
        (
            ModelKind::Linear,
            RegressionMetrics {
                mse: 81.,
                rmse: 9.,
                mae: 6.123,
                r2: 0.81234,
            },
        ),
        (
            ModelKind::Lasso,
            RegressionMetrics {
                mse: 100.,
                rmse: 10.,
                mae: 7.,
                r2: 0.7,
            },
        ),
    ]
}

#[test]
fn test_write_results_format() {
    let mut out = Vec::new();
    write_results(&sample_results(), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let expected = "\
Food Delivery Time Prediction - Model Results
==================================================

Linear Regression:
  R² Score: 0.8123
  RMSE: 9.00
  MAE: 6.12

Lasso Regression:
  R² Score: 0.7000
  RMSE: 10.00
  MAE: 7.00

";
    assert_eq!(text, expected);
}

#[test]
fn test_save_results_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("model_results.txt");
    save_results(&sample_results(), &path).unwrap();
    let text = std::fs::read_to_string(&path).unwrap();
    assert!(text.starts_with("Food Delivery Time Prediction"));
    assert!(text.contains("Lasso Regression:"));
}

#[test]
fn test_comparison_table() {
    let report = PipelineReport {
        results: sample_results(),
        best: ModelKind::Linear,
        n_train: 8,
        n_test: 2,
    };
    let rendered = comparison_table(&report).to_string();
    assert!(rendered.contains("Linear"));
    assert!(rendered.contains("0.8123"));
    assert!(rendered.contains("10.00"));
    assert!(rendered.contains("best"));
}
