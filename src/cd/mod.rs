use log::{debug, warn};
use ndarray::Array1;

use super::Float;
use crate::datafits::Datafit;
use crate::datasets::{AsSingleTargets, DatasetBase, DesignMatrix};
use crate::penalties::Penalty;


/// This function computes the distance of the gradient of the datafit to the
/// subdifferential of the penalty. It returns an array containing the
/// distances for each feature as well as the maximum distance.
pub fn kkt_violation<F, DF, P, DM, T>(
    dataset: &DatasetBase<DM, T>,
    w: &Array1<F>,
    Xw: &Array1<F>,
    datafit: &DF,
    penalty: &P,
) -> (Array1<F>, F)
where
    F: Float,
    DM: DesignMatrix<Elem = F>,
    T: AsSingleTargets<Elem = F>,
    DF: Datafit<F, DM, T>,
    P: Penalty<F>,
{
    let grad = datafit.full_grad(dataset, Xw.view());
    penalty.subdiff_distance(w.view(), grad.view())
}

/// This function performs one cycle of coordinate descent over all the
/// features, keeping the model fit `Xw` in sync with `w`.
///
/// Features with a null Lipschitz constant (constant columns) are skipped and
/// keep their coefficient.
pub fn cd_epoch<F, DF, P, DM, T>(
    dataset: &DatasetBase<DM, T>,
    datafit: &DF,
    penalty: &P,
    w: &mut Array1<F>,
    Xw: &mut Array1<F>,
) where
    F: Float,
    DM: DesignMatrix<Elem = F>,
    T: AsSingleTargets<Elem = F>,
    DF: Datafit<F, DM, T>,
    P: Penalty<F>,
{
    let X = dataset.design_matrix();
    let lipschitz = datafit.lipschitz();

    for j in 0..X.n_features() {
        if lipschitz[j] == F::zero() {
            continue;
        }
        let old_w_j = w[j];
        let grad_j = datafit.gradient_j(dataset, Xw.view(), j);
        let step_size = F::one() / lipschitz[j];
        w[j] = penalty.prox(old_w_j - grad_j * step_size, step_size);
        if w[j] != old_w_j {
            X.update_model_fit(Xw, w[j] - old_w_j, j);
        }
    }
}

/// This function implements cyclic coordinate descent for separable
/// penalties. It starts from a null weight vector and stops when the KKT
/// violation falls below `tolerance` or after `max_epochs` cycles.
pub fn coordinate_descent<F, DF, P, DM, T>(
    dataset: &DatasetBase<DM, T>,
    datafit: &mut DF,
    penalty: &P,
    max_epochs: usize,
    tolerance: F,
    verbose: bool,
) -> Array1<F>
where
    F: Float,
    DM: DesignMatrix<Elem = F>,
    T: AsSingleTargets<Elem = F>,
    DF: Datafit<F, DM, T>,
    P: Penalty<F>,
{
    let n_samples = dataset.targets().n_samples();
    let n_features = dataset.design_matrix().n_features();

    datafit.initialize(dataset);

    let mut w = Array1::<F>::zeros(n_features);
    let mut Xw = Array1::<F>::zeros(n_samples);

    for epoch in 0..max_epochs {
        cd_epoch(dataset, datafit, penalty, &mut w, &mut Xw);

        let (_, kkt_max) = kkt_violation(dataset, &w, &Xw, datafit, penalty);
        if verbose {
            let p_obj = datafit.value(dataset, Xw.view()) + penalty.value(w.view());
            debug!(
                "Epoch: {}, objective: {:.10}, KKT violation: {:.2e}",
                epoch + 1,
                p_obj,
                kkt_max
            );
        }
        if kkt_max <= tolerance {
            return w;
        }
    }

    warn!("Coordinate descent did not converge after {max_epochs} epochs");
    w
}
