use ndarray::{Array1, ArrayView1};
use thiserror::Error;

mod impl_datasets;
mod impl_design_matrix;
mod impl_targets;
mod split;

pub use split::train_test_split;

#[cfg(test)]
mod tests;

/// Simplified `Result` using [`DatasetError`] as error type
pub type Result<T> = std::result::Result<T, DatasetError>;

/// Error variants raised when splitting a dataset
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DatasetError {
    #[error("invalid test size {0}, expected a value in (0, 1)")]
    InvalidTestSize(f64),
    #[error("cannot split {n_samples} samples with test size {test_size}")]
    NotEnoughSamples { n_samples: usize, test_size: f64 },
    #[error("design matrix has {n_samples} rows but targets have {n_targets}")]
    ShapeMismatch { n_samples: usize, n_targets: usize },
}

/// A dataset pairs a design matrix with the targets to regress on.
#[derive(Debug, Clone, PartialEq)]
pub struct DatasetBase<DM, T>
where
    DM: DesignMatrix,
    T: AsSingleTargets,
{
    pub design_matrix: DM,
    pub targets: T,
}

/// Dense design matrix, one row per sample.
pub type DenseDataset<F> = DatasetBase<ndarray::Array2<F>, Array1<F>>;

/// This trait provides the operations the solvers need on a design matrix.
pub trait DesignMatrix: Sized {
    type Elem;

    /// Number of rows.
    fn n_samples(&self) -> usize;

    /// Number of columns.
    fn n_features(&self) -> usize;

    /// Dot product of column `j` with `v`.
    fn column_dot(&self, j: usize, v: ArrayView1<Self::Elem>) -> Self::Elem;

    /// Squared euclidean norm of column `j`.
    fn column_sq_norm(&self, j: usize) -> Self::Elem;

    /// Updates the model fit `Xw` after the j-th coefficient moved by `diff`.
    fn update_model_fit(&self, Xw: &mut Array1<Self::Elem>, diff: Self::Elem, j: usize);
}

/// This trait exposes single-task regression targets.
pub trait AsSingleTargets: Sized {
    type Elem;

    fn n_samples(&self) -> usize;

    fn as_single_targets(&self) -> ArrayView1<Self::Elem>;
}
