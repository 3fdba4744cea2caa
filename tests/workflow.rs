use std::io::Write;

use approx::assert_abs_diff_eq;

use delivery_glm::cleaner::{CleanerConfig, DataCleaner};
use delivery_glm::datasets::train_test_split;
use delivery_glm::estimators::error::EstimatorError;
use delivery_glm::estimators::model::RegressionModel;
use delivery_glm::loader::{load_dataset, LoadError};
use delivery_glm::table::Column;

const DELIVERIES: &str = "\
Order_ID,Distance_km,Weather,Traffic_Level,Time_of_Day,Vehicle_Type,Preparation_Time_min,Courier_Experience_yrs,Delivery_Time_min
1,7.93,Windy,Low,Afternoon,Scooter,12,1.0,43
2,16.42,Clear,Medium,Evening,Bike,20,2.0,84
3,9.52,Foggy,Low,Night,Scooter,28,,59
4,7.44,Rainy,Medium,Afternoon,Scooter,5,1.0,37
5,19.03,Clear,Low,Morning,Bike,16,5.0,68
6,19.4,Clear,High,Evening,Bike,8,,57
7,1.57,Snowy,Low,Night,Scooter,8,9.0,21
8,9.31,,Medium,Evening,Car,9,2.0,39
9,4.78,Clear,Low,,Bike,22,6.0,41
10,13.86,Rainy,High,Morning,Car,10,4.0,66
";

fn write_csv(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file
}

#[test]
fn test_load_clean_and_fit() {
    let file = write_csv(DELIVERIES);
    let raw = load_dataset(file.path()).unwrap();
    assert_eq!(raw.shape(), (10, 9));
    assert_eq!(raw.total_missing(), 4);

    let mut cleaner = DataCleaner::new(CleanerConfig::default());
    let clean = cleaner.handle_missing_values(&raw);
    assert_eq!(clean.total_missing(), 0);
    match clean.column("Weather") {
        Some(Column::Categorical(values)) => assert_eq!(values[7].as_deref(), Some("Clear")),
        other => panic!("unexpected column {other:?}"),
    }
    match clean.column("Courier_Experience_yrs") {
        Some(Column::Numeric(values)) => {
            assert_abs_diff_eq!(values[2].unwrap(), 30. / 8., epsilon = 1e-12);
            assert_abs_diff_eq!(values[5].unwrap(), 30. / 8., epsilon = 1e-12);
        }
        other => panic!("unexpected column {other:?}"),
    }

    cleaner.encode_categorical_variables(&clean).unwrap();
    let weather = cleaner.label_encoder("Weather").unwrap();
    assert_eq!(weather.inverse_transform(0), Some("Windy"));
    assert_eq!(weather.transform("Clear"), Some(1));

    let dummies = cleaner.create_dummies(&clean).unwrap();
    // 5 pass-through columns, 5 weathers, 3 traffic levels, 4 times of day
    // and 3 vehicles
    assert_eq!(dummies.n_columns(), 5 + 5 + 3 + 4 + 3);
    assert!(dummies.contains("Time_of_Day_Morning"));

    let (x, y, names) = dummies.split_target("Delivery_Time_min").unwrap();
    assert_eq!(x.ncols(), names.len());
    let (train, test) = train_test_split(&x, &y, 0.2, 42).unwrap();
    assert_eq!((train.n_samples(), test.n_samples()), (8, 2));

    let mut model = RegressionModel::<f64>::from_tag("ridge").unwrap();
    model.train(&train.design_matrix, &train.targets).unwrap();
    let metrics = model.evaluate(&test.design_matrix, &test.targets).unwrap();
    assert!(metrics.mse.is_finite() && metrics.mae.is_finite() && metrics.r2.is_finite());
    assert_abs_diff_eq!(metrics.rmse, metrics.mse.sqrt(), epsilon = 1e-12);
    assert_eq!(
        model.train(&train.design_matrix, &train.targets),
        Err(EstimatorError::AlreadyTrained)
    );
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deliveries.csv");
    assert!(matches!(load_dataset(&path), Err(LoadError::InputNotFound(p)) if p == path));
}
