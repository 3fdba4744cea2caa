use super::DesignMatrix;
use crate::Float;
use ndarray::{s, Array1, ArrayBase, ArrayView1, Axis, Data, Ix2};

/// This implements the [`DesignMatrix`] trait for dense matrices.
impl<F: Float, S: Data<Elem = F>> DesignMatrix for ArrayBase<S, Ix2> {
    type Elem = F;

    fn n_samples(&self) -> usize {
        self.len_of(Axis(0))
    }

    fn n_features(&self) -> usize {
        self.len_of(Axis(1))
    }

    fn column_dot(&self, j: usize, v: ArrayView1<F>) -> F {
        self.slice(s![.., j]).dot(&v)
    }

    fn column_sq_norm(&self, j: usize) -> F {
        let Xj = self.slice(s![.., j]);
        Xj.dot(&Xj)
    }

    fn update_model_fit(&self, Xw: &mut Array1<Self::Elem>, diff: Self::Elem, j: usize) {
        Xw.scaled_add(diff, &self.slice(s![.., j]));
    }
}

/// This implements the [`DesignMatrix`] trait for references.
impl<DM: DesignMatrix> DesignMatrix for &DM {
    type Elem = DM::Elem;

    fn n_samples(&self) -> usize {
        (*self).n_samples()
    }

    fn n_features(&self) -> usize {
        (*self).n_features()
    }

    fn column_dot(&self, j: usize, v: ArrayView1<Self::Elem>) -> Self::Elem {
        (*self).column_dot(j, v)
    }

    fn column_sq_norm(&self, j: usize) -> Self::Elem {
        (*self).column_sq_norm(j)
    }

    fn update_model_fit(&self, Xw: &mut Array1<Self::Elem>, diff: Self::Elem, j: usize) {
        (*self).update_model_fit(Xw, diff, j);
    }
}
