
/// This module implements the proximal operator of the L1 penalty.
pub mod prox {
    use crate::Float;

    /// The soft-thresholding operator is the proximal operator used by
    /// [`crate::penalties::L1`].
    pub fn soft_thresholding<F: Float>(x: F, threshold: F) -> F {
        if x > threshold {
            x - threshold
        } else if x < -threshold {
            x + threshold
        } else {
            F::zero()
        }
    }
}

/// This module contains the dense linear algebra used by the closed-form
/// estimators.
pub mod linalg {
    use crate::Float;
    use ndarray::{s, Array1, Array2, ArrayView1, ArrayView2, Axis};

    /// Centers the columns of `X` and `y`, returning the centered copies
    /// together with the column means of `X` and the mean of `y`.
    pub fn center<F: 'static + Float>(
        X: ArrayView2<F>,
        y: ArrayView1<F>,
    ) -> (Array2<F>, Array1<F>, Array1<F>, F) {
        let n_features = X.ncols();
        let X_offset = X
            .mean_axis(Axis(0))
            .unwrap_or_else(|| Array1::zeros(n_features));
        let y_offset = y.mean().unwrap_or_else(F::zero);
        let X_centered = &X - &X_offset;
        let y_centered = &y - y_offset;
        (X_centered, y_centered, X_offset, y_offset)
    }

    /// This function solves the symmetric positive semi-definite system
    /// `A x = b` arising from normal equations, using Gauss-Jordan elimination
    /// with partial pivoting.
    ///
    /// A column whose pivot vanishes relative to its diagonal entry is
    /// linearly dependent on the previous ones (e.g. a full set of dummy
    /// columns); its coefficient is set to zero, which still yields a
    /// least-squares solution. We made the choice not to use a BLAS/LAPACK
    /// subroutine to keep the crate free of native dependencies.
    pub fn solve_normal_equations<F: 'static + Float>(A: ArrayView2<F>, b: ArrayView1<F>) -> Array1<F> {
        let size = b.len();
        let tolerance = F::epsilon().sqrt();

        // Augmented matrix [A | b]
        let mut system = Array2::<F>::zeros((size, size + 1));
        system.slice_mut(s![.., ..size]).assign(&A);
        system.column_mut(size).assign(&b);

        let mut pivots: Vec<(usize, usize)> = Vec::with_capacity(size);
        let mut row = 0;
        for col in 0..size {
            if row == size {
                break;
            }
            let (pivot_row, pivot) = (row..size)
                .map(|i| (i, system[[i, col]].abs()))
                .fold((row, F::zero()), |best, cur| if cur.1 > best.1 { cur } else { best });
            if pivot == F::zero() || pivot <= tolerance * A[[col, col]].abs() {
                continue;
            }

            if pivot_row != row {
                for k in 0..=size {
                    system.swap([row, k], [pivot_row, k]);
                }
            }

            let scale = system[[row, col]];
            system.row_mut(row).mapv_inplace(|v| v / scale);
            for i in (0..size).filter(|&i| i != row) {
                let factor = system[[i, col]];
                if factor == F::zero() {
                    continue;
                }
                for k in 0..=size {
                    let update = factor * system[[row, k]];
                    system[[i, k]] -= update;
                }
            }

            pivots.push((row, col));
            row += 1;
        }

        let mut x = Array1::<F>::zeros(size);
        for (row, col) in pivots {
            x[col] = system[[row, size]];
        }
        x
    }
}

/// This module contains helpers functions to efficiently write tests.
pub mod test_helpers {
    use crate::Float;
    use ndarray::{Array1, Array2, ArrayView1};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use rand_distr::{Distribution, Normal};

    pub fn assert_array_all_close<F: Float>(x: ArrayView1<F>, y: ArrayView1<F>, delta: F) {
        assert_eq!(x.len(), y.len());
        for i in 0..x.len() {
            if x[i].abs_diff_ne(&y[i], delta) {
                panic!("x: {}, y: {} ; with precision level {}", x[i], y[i], delta);
            }
        }
    }

    pub fn fill_random_vector(capacity: usize, seed: u64) -> Vec<f64> {
        let mut r = StdRng::seed_from_u64(seed);
        let normal = Normal::new(0., 1.).unwrap();

        let mut data_x: Vec<f64> = Vec::with_capacity(capacity);
        for _ in 0..data_x.capacity() {
            data_x.push(normal.sample(&mut r));
        }
        data_x
    }

    /// Gaussian design, Gaussian true coefficients and Gaussian noise scaled
    /// by `noise`.
    pub fn generate_random_data(
        n_samples: usize,
        n_features: usize,
        noise: f64,
    ) -> (Array2<f64>, Array1<f64>, Array1<f64>) {
        let data_x = fill_random_vector(n_samples * n_features, 42);
        let data_w = fill_random_vector(n_features, 43);
        let data_e = fill_random_vector(n_samples, 44);
        let X = Array2::from_shape_vec((n_samples, n_features), data_x).unwrap();
        let true_w = Array1::from_shape_vec(n_features, data_w).unwrap();
        let noise = Array1::from_shape_vec(n_samples, data_e).unwrap() * noise;
        let y = X.dot(&true_w) + noise;

        (X, y, true_w)
    }
}
