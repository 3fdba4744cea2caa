use ndarray::{array, Array1, Array2};

use crate::datasets::*;

fn indexed_data(n_samples: usize) -> (Array2<f64>, Array1<f64>) {
    let X = Array2::from_shape_fn((n_samples, 2), |(i, j)| (i * 10 + j) as f64);
    let y = Array1::from_shape_fn(n_samples, |i| i as f64);
    (X, y)
}

#[test]
fn test_dataset_accessors() {
    let X = array![[1., 2.], [3., 4.], [5., 6.]];
    let y = array![1., 0., 1.];
    let dataset = DatasetBase::from((X.view(), y.view()));
    assert_eq!(dataset.n_samples(), 3);
    assert_eq!(dataset.n_features(), 2);
    assert_eq!(dataset.targets().as_single_targets(), y.view());
    assert_eq!(dataset.design_matrix().column_dot(1, y.view()), 8.);
}

#[test]
fn test_update_model_fit() {
    let X = array![[1., 2.], [3., 4.]];
    let mut Xw = array![0.5, 0.5];
    X.update_model_fit(&mut Xw, 2., 1);
    assert_eq!(Xw, array![4.5, 8.5]);
}

#[test]
fn test_split_sizes() {
    let (X, y) = indexed_data(10);
    let (train, test) = train_test_split(&X, &y, 0.2, 42).unwrap();
    assert_eq!(train.n_samples(), 8);
    assert_eq!(test.n_samples(), 2);
    assert_eq!(train.n_features(), 2);

    let (X, y) = indexed_data(11);
    let (train, test) = train_test_split(&X, &y, 0.2, 42).unwrap();
    assert_eq!((train.n_samples(), test.n_samples()), (8, 3));
}

#[test]
fn test_split_is_a_partition_keeping_rows_aligned() {
    let (X, y) = indexed_data(25);
    let (train, test) = train_test_split(&X, &y, 0.3, 7).unwrap();

    let mut seen: Vec<f64> = train.targets.iter().chain(test.targets.iter()).copied().collect();
    seen.sort_by(f64::total_cmp);
    assert_eq!(seen, y.to_vec());

    for part in [&train, &test] {
        for (row, &target) in part.design_matrix.rows().into_iter().zip(part.targets.iter()) {
            assert_eq!(row[0], target * 10.);
        }
    }
}

#[test]
fn test_split_is_reproducible() {
    let (X, y) = indexed_data(30);
    let (_, first) = train_test_split(&X, &y, 0.2, 42).unwrap();
    let (_, second) = train_test_split(&X, &y, 0.2, 42).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_split_errors() {
    let (X, y) = indexed_data(4);
    assert_eq!(
        train_test_split(&X, &y, 1.5, 42).unwrap_err(),
        DatasetError::InvalidTestSize(1.5)
    );
    assert_eq!(
        train_test_split(&X, &y, 0.9, 42).unwrap_err(),
        DatasetError::NotEnoughSamples {
            n_samples: 4,
            test_size: 0.9,
        }
    );
    let short = Array1::<f64>::zeros(3);
    assert_eq!(
        train_test_split(&X, &short, 0.2, 42).unwrap_err(),
        DatasetError::ShapeMismatch {
            n_samples: 4,
            n_targets: 3,
        }
    );
}
