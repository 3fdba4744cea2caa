use ndarray::array;

use crate::table::*;

fn sample_table() -> Table {
    Table::from_columns(vec![
        ("Distance_km", Column::numeric(vec![7.9, 16.4, 9.5])),
        (
            "Weather",
            Column::Categorical(vec![Some("Windy".to_string()), None, Some("Foggy".to_string())]),
        ),
        ("Delivery_Time_min", Column::numeric(vec![43., 84., 59.])),
    ])
    .unwrap()
}

#[test]
fn test_shape_and_names() {
    let table = sample_table();
    assert_eq!(table.shape(), (3, 3));
    assert_eq!(
        table.column_names(),
        &["Distance_km", "Weather", "Delivery_Time_min"]
    );
    assert!(table.contains("Weather"));
    assert!(!table.contains("Vehicle_Type"));
}

#[test]
fn test_push_column_rejects_length_mismatch() {
    let mut table = sample_table();
    let err = table
        .push_column("Preparation_Time_min", Column::numeric(vec![12., 20.]))
        .unwrap_err();
    assert_eq!(
        err,
        TableError::LengthMismatch {
            column: "Preparation_Time_min".to_string(),
            expected: 3,
            found: 2,
        }
    );
    assert_eq!(table.n_columns(), 3);
}

#[test]
fn test_push_column_rejects_duplicates() {
    let mut table = sample_table();
    let err = table
        .push_column("Weather", Column::categorical(vec!["Clear", "Clear", "Rainy"]))
        .unwrap_err();
    assert_eq!(err, TableError::DuplicateColumn("Weather".to_string()));
}

#[test]
fn test_missing_counts() {
    let table = sample_table();
    assert_eq!(
        table.missing_counts(),
        vec![
            ("Distance_km".to_string(), 0),
            ("Weather".to_string(), 1),
            ("Delivery_Time_min".to_string(), 0),
        ]
    );
    assert_eq!(table.total_missing(), 1);
}

#[test]
fn test_replace_keeps_position() {
    let mut table = sample_table();
    let old = table
        .replace_column("Weather", Column::numeric(vec![0., 1., 2.]))
        .unwrap();
    assert_eq!(old.missing_count(), 1);
    assert_eq!(table.column_names()[1], "Weather");
    assert!(table.column("Weather").unwrap().is_numeric());
}

#[test]
fn test_design_matrix_requires_numeric_columns() {
    let table = sample_table();
    assert_eq!(
        table.to_design_matrix().unwrap_err(),
        TableError::NonNumericColumn("Weather".to_string())
    );
}

#[test]
fn test_split_target() {
    let mut table = sample_table();
    table.drop_column("Weather").unwrap();
    let (X, y, names) = table.split_target("Delivery_Time_min").unwrap();
    assert_eq!(X, array![[7.9], [16.4], [9.5]]);
    assert_eq!(y, array![43., 84., 59.]);
    assert_eq!(names, vec!["Distance_km".to_string()]);
}

#[test]
fn test_split_target_reports_missing_cells() {
    let table = Table::from_columns(vec![
        ("Courier_Experience_yrs", Column::Numeric(vec![Some(1.), None])),
        ("Delivery_Time_min", Column::numeric(vec![30., 40.])),
    ])
    .unwrap();
    assert_eq!(
        table.split_target("Delivery_Time_min").unwrap_err(),
        TableError::MissingValue {
            column: "Courier_Experience_yrs".to_string(),
            row: 1,
        }
    );
    assert_eq!(
        table.split_target("Order_ID").unwrap_err(),
        TableError::ColumnNotFound("Order_ID".to_string())
    );
}
