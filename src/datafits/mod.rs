use ndarray::{Array1, ArrayView1};

use super::Float;
use crate::datasets::{AsSingleTargets, DatasetBase, DesignMatrix};


/// This trait provides three main methods [`Datafit::initialize`],
/// [`Datafit::value`] and [`Datafit::gradient_j`] to compute useful quantities
/// during the optimization routine.
pub trait Datafit<F: Float, DM: DesignMatrix<Elem = F>, T: AsSingleTargets<Elem = F>> {
    /// This method is called before looping onto the features, to precompute
    /// the Lipschitz constants (used as stepsizes) and the matrix-vector
    /// product XTy.
    fn initialize(&mut self, dataset: &DatasetBase<DM, T>);

    /// This method is called when evaluating the objective value.
    ///
    /// It is jointly used with [`crate::penalties::Penalty::value`] in order
    /// to compute the value of the objective.
    fn value(&self, dataset: &DatasetBase<DM, T>, Xw: ArrayView1<F>) -> F;

    /// This method computes the gradient of the datafit with respect to the
    /// j-th coefficient.
    fn gradient_j(&self, dataset: &DatasetBase<DM, T>, Xw: ArrayView1<F>, j: usize) -> F;

    /// This method computes the full gradient by calling
    /// [`Datafit::gradient_j`].
    fn full_grad(&self, dataset: &DatasetBase<DM, T>, Xw: ArrayView1<F>) -> Array1<F> {
        Array1::from_iter(
            (0..dataset.design_matrix().n_features()).map(|j| self.gradient_j(dataset, Xw, j)),
        )
    }

    /// Lipschitz constants of the coordinate-wise gradients.
    fn lipschitz(&self) -> ArrayView1<F>;
}

/// Quadratic datafit
///
/// The squared-norm residuals datafit `1 / (2 * n_samples) * ||y - Xw||^2_2`
/// used by the Lasso. It stores the pre-computed quantities useful during the
/// optimization routine.
#[derive(Debug, Clone, PartialEq)]
pub struct Quadratic<F: Float> {
    lipschitz: Array1<F>,
    Xty: Array1<F>,
}

impl<F: Float> Default for Quadratic<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Float> Quadratic<F> {
    pub fn new() -> Self {
        Quadratic {
            lipschitz: Array1::<F>::zeros(1),
            Xty: Array1::<F>::zeros(1),
        }
    }
}

impl<F: Float, DM: DesignMatrix<Elem = F>, T: AsSingleTargets<Elem = F>> Datafit<F, DM, T>
    for Quadratic<F>
{
    /// This method pre-computes the Lipschitz constants and the matrix-vector
    /// product XTy useful during the optimization routine.
    fn initialize(&mut self, dataset: &DatasetBase<DM, T>) {
        let n_samples = F::cast(dataset.targets().n_samples());
        let X = dataset.design_matrix();
        let y = dataset.targets().as_single_targets();
        let n_features = X.n_features();
        self.Xty = Array1::from_iter((0..n_features).map(|j| X.column_dot(j, y)));
        self.lipschitz =
            Array1::from_iter((0..n_features).map(|j| X.column_sq_norm(j) / n_samples));
    }

    /// This method computes the value of the datafit given the model fit.
    fn value(&self, dataset: &DatasetBase<DM, T>, Xw: ArrayView1<F>) -> F {
        let n_samples = dataset.targets().n_samples();
        let y = dataset.targets().as_single_targets();
        let r = &y - &Xw;
        r.dot(&r) / F::cast(2 * n_samples)
    }

    /// This method computes the value of the gradient at some point w for
    /// coordinate j.
    fn gradient_j(&self, dataset: &DatasetBase<DM, T>, Xw: ArrayView1<F>, j: usize) -> F {
        let n_samples = F::cast(dataset.targets().n_samples());
        let XjTXw = dataset.design_matrix().column_dot(j, Xw);
        (XjTXw - self.Xty[j]) / n_samples
    }

    fn lipschitz(&self) -> ArrayView1<F> {
        self.lipschitz.view()
    }
}
