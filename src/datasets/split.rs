use ndarray::{Array1, Array2, ArrayBase, Axis, Data, Ix1, Ix2};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use super::{DatasetBase, DatasetError, DenseDataset, Result};
use crate::Float;

/// Randomly splits samples into a train and a test dataset.
///
/// Row indices are shuffled with a generator seeded by `seed`; the first
/// `ceil(test_size * n_samples)` shuffled rows form the test set and the
/// remaining ones the train set. The split is reproducible for a given seed.
pub fn train_test_split<F, D, S>(
    X: &ArrayBase<D, Ix2>,
    y: &ArrayBase<S, Ix1>,
    test_size: f64,
    seed: u64,
) -> Result<(DenseDataset<F>, DenseDataset<F>)>
where
    F: Float,
    D: Data<Elem = F>,
    S: Data<Elem = F>,
{
    if !(test_size > 0. && test_size < 1.) {
        return Err(DatasetError::InvalidTestSize(test_size));
    }
    let n_samples = X.nrows();
    if y.len() != n_samples {
        return Err(DatasetError::ShapeMismatch {
            n_samples,
            n_targets: y.len(),
        });
    }

    let n_test = (test_size * n_samples as f64).ceil() as usize;
    if n_test == 0 || n_test >= n_samples {
        return Err(DatasetError::NotEnoughSamples {
            n_samples,
            test_size,
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut indices: Vec<usize> = (0..n_samples).collect();
    indices.shuffle(&mut rng);
    let (test_idx, train_idx) = indices.split_at(n_test);

    let take = |idx: &[usize]| -> (Array2<F>, Array1<F>) {
        (X.select(Axis(0), idx), y.select(Axis(0), idx))
    };
    let (X_train, y_train) = take(train_idx);
    let (X_test, y_test) = take(test_idx);

    Ok((
        DatasetBase::new(X_train, y_train),
        DatasetBase::new(X_test, y_test),
    ))
}
