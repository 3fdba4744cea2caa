use ndarray::{Array1, ArrayView1};

use super::Float;
use crate::helpers::prox::soft_thresholding;


/// This trait provides three methods needed to update the weights during the
/// optimization routine.
pub trait Penalty<F: Float> {
    /// This method is called when evaluating the objective value.
    fn value(&self, w: ArrayView1<F>) -> F;

    /// This method computes the proximal gradient step during the update of the
    /// weights. For a given penalty, it implements its proximal operator.
    fn prox(&self, value: F, step_size: F) -> F;

    /// This method computes the distance between the gradient of the datafit
    /// and the subdifferential of the penalty, for each feature, as well as the
    /// maximum distance. The solver stops once the maximum distance falls below
    /// its tolerance.
    fn subdiff_distance(&self, w: ArrayView1<F>, grad: ArrayView1<F>) -> (Array1<F>, F);
}

/// The L1 penalty
///
/// The penalty of the Lasso. It yields sparse solutions at the price of a
/// biased estimate compared to the ordinary least squares solution.
#[derive(Debug, Clone, PartialEq)]
pub struct L1<F: Float> {
    alpha: F,
}

impl<F: Float> L1<F> {
    /// Instantiates a L1 penalty with a positive regularization hyperparameter.
    pub fn new(alpha: F) -> Self {
        L1 { alpha }
    }
}

impl<F: Float> Penalty<F> for L1<F> {
    /// Computes the L1-norm of the weights
    fn value(&self, w: ArrayView1<F>) -> F {
        self.alpha * w.iter().map(|&wj| wj.abs()).sum::<F>()
    }

    /// Applies the soft-thresholding operator to a weight scalar
    fn prox(&self, value: F, step_size: F) -> F {
        soft_thresholding(value, self.alpha * step_size)
    }

    /// Computes the distance of the gradient to the subdifferential
    ///
    /// The distance of the gradient to the subdifferential of L1 is:
    /// dist(grad, subdiff) = max(0, |grad| - alpha)         if w[j] = 0
    ///                       |- grad - sign(w[j]) * alpha|  otherwise
    fn subdiff_distance(&self, w: ArrayView1<F>, grad: ArrayView1<F>) -> (Array1<F>, F) {
        let subdiff_dist = Array1::from_iter(grad.iter().zip(w.iter()).map(|(&grad_j, &w_j)| {
            if w_j == F::zero() {
                F::max(F::zero(), grad_j.abs() - self.alpha)
            } else {
                (-grad_j - w_j.signum() * self.alpha).abs()
            }
        }));
        let max_dist = subdiff_dist.fold(F::zero(), |max, &d| F::max(max, d));
        (subdiff_dist, max_dist)
    }
}
