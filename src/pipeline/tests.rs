use std::fmt::Write as _;
use std::io::Write;

use crate::estimators::hyperparams::ModelKind;
use crate::metrics::RegressionMetrics;
use crate::pipeline::*;

/// Delivery records whose time is an exact linear function of the features.
fn delivery_csv(n_rows: usize) -> String {
    let weathers = ["Clear", "Rainy", "Snowy", "Windy"];
    let traffic = ["Low", "Medium", "High"];
    let mut csv = String::from(
        "Order_ID,Distance_km,Weather,Traffic_Level,Time_of_Day,Vehicle_Type,\
         Preparation_Time_min,Courier_Experience_yrs,Delivery_Time_min\n",
    );
    for i in 0..n_rows {
        let distance = 1. + (i * 7 % 19) as f64;
        let weather = weathers[i % 4];
        let level = traffic[i * 5 % 3];
        let preparation = 5 + (i * 3 % 11);
        let experience = (i % 6) as f64;
        let time = 10.
            + 2.5 * distance
            + [0., 5., 12., 3.][i % 4]
            + [0., 4., 9.][i * 5 % 3]
            + preparation as f64;
        writeln!(
            csv,
            "{},{distance},{weather},{level},Morning,Bike,{preparation},{experience},{time}",
            i + 1
        )
        .unwrap();
    }
    csv
}

fn write_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

fn metrics(r2: f64) -> RegressionMetrics {
    RegressionMetrics {
        mse: 1.,
        rmse: 1.,
        mae: 1.,
        r2,
    }
}

#[test]
fn test_best_model_prefers_first_on_ties() {
    let results = vec![
        (ModelKind::Linear, metrics(0.5)),
        (ModelKind::Ridge, metrics(0.8)),
        (ModelKind::Lasso, metrics(0.8)),
    ];
    assert_eq!(best_model(&results), Some(ModelKind::Ridge));
    assert_eq!(best_model(&[]), None);
}

#[test]
fn test_missing_dataset_returns_none() {
    let config = PipelineConfig {
        data_path: "no/such/file.csv".into(),
        ..PipelineConfig::default()
    };
    assert!(run(&config).unwrap().is_none());
}

#[test]
fn test_run_trains_every_model() {
    let file = write_csv(&delivery_csv(60));
    let dir = tempfile::tempdir().unwrap();
    let results_path = dir.path().join("results.txt");
    let config = PipelineConfig {
        data_path: file.path().to_path_buf(),
        results_path: Some(results_path.clone()),
        ..PipelineConfig::default()
    };

    let report = run(&config).unwrap().unwrap();
    assert_eq!((report.n_train, report.n_test), (48, 12));
    let kinds: Vec<ModelKind> = report.results.iter().map(|(kind, _)| *kind).collect();
    assert_eq!(kinds, ModelKind::ALL.to_vec());

    // Noise-free data: least squares recovers it exactly
    let (_, linear) = report.results[0];
    assert!(linear.r2 > 0.999, "r2 = {}", linear.r2);
    assert!(linear.rmse < 1e-6, "rmse = {}", linear.rmse);
    assert_eq!(report.best, ModelKind::Linear);
    for (_, m) in &report.results {
        assert!(m.r2 <= 1.);
        assert!((m.rmse - m.mse.sqrt()).abs() < 1e-12);
    }

    assert!(std::fs::read_to_string(results_path)
        .unwrap()
        .contains("Ridge Regression:"));
}

#[test]
fn test_run_with_missing_cells() {
    let mut csv = delivery_csv(40);
    // Blank out one weather and one experience cell
    csv = csv.replacen(",Rainy,", ",,", 1).replacen(",Bike,9,3,", ",Bike,9,,", 1);
    let file = write_csv(&csv);
    let config = PipelineConfig {
        data_path: file.path().to_path_buf(),
        models: vec![ModelKind::Ridge],
        ..PipelineConfig::default()
    };
    let report = run(&config).unwrap().unwrap();
    assert_eq!(report.results.len(), 1);
    assert_eq!(report.best, ModelKind::Ridge);
    let (_, ridge) = report.results[0];
    assert!(ridge.mse.is_finite() && ridge.mae.is_finite() && ridge.r2.is_finite());
}

#[test]
fn test_run_tolerates_unimputed_categorical_cells() {
    // Vehicle_Type is dummied but not imputed
    let csv = delivery_csv(40).replacen(",Bike,", ",,", 1);
    let file = write_csv(&csv);
    let config = PipelineConfig {
        data_path: file.path().to_path_buf(),
        ..PipelineConfig::default()
    };
    let report = run(&config).unwrap().unwrap();
    assert_eq!(report.results.len(), 3);
    for (_, m) in &report.results {
        assert!(m.rmse.is_finite() && m.r2.is_finite());
    }
}

#[test]
fn test_run_reports_missing_target() {
    let file = write_csv(&delivery_csv(20));
    let config = PipelineConfig {
        data_path: file.path().to_path_buf(),
        target: "Total_Time".to_string(),
        ..PipelineConfig::default()
    };
    assert!(matches!(run(&config), Err(PipelineError::Table(_))));
}

#[test]
fn test_run_without_models() {
    let config = PipelineConfig {
        models: vec![],
        ..PipelineConfig::default()
    };
    assert!(matches!(run(&config), Err(PipelineError::NoModels)));
}
