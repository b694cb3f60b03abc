//! Local Lipschitz Estimates from Curvature Probes
//!
//! The curvature function handed to [`projected_fista`](super::projected_fista)
//! may return a scalar bound, a vector whose Euclidean norm bounds the
//! curvature, or the Hessian itself. Whichever it is, the step size is
//! $`1/\|H(x)\|`$ with the norm matching the returned type:
//!
//! | `H(x)` returns        | norm                              |
//! |-----------------------|-----------------------------------|
//! | `f32` / `f64`         | $`\lvert h \rvert`$               |
//! | 1-D array             | $`\|h\|_2`$                       |
//! | 2-D array             | $`\sigma_1(H)`$, the spectral norm |
//! | `Frobenius(2-D array)`| $`\|H\|_F`$                       |
//!
//! For a twice-differentiable $`g`$ the spectral norm of the Hessian is the
//! tightest of these, $`\|\nabla^2 g(x)\|_2 \leq \|\nabla^2 g(x)\|_F`$.

use ndarray::prelude::*;
use ndarray::{Data, NdFloat};
use ndarray_linalg::lapack::Lapack;
use ndarray_linalg::svd::SVD;
use ndarray_linalg::Scalar;
use num_traits::Float;

/// A curvature estimate whose norm approximates the Lipschitz constant
/// of the gradient near the point it was evaluated at.
pub trait LipschitzEstimate<S> {
    fn lipschitz(&self) -> S;
}

impl LipschitzEstimate<f64> for f64 {
    fn lipschitz(&self) -> f64 {
        self.abs()
    }
}

impl LipschitzEstimate<f32> for f32 {
    fn lipschitz(&self) -> f32 {
        self.abs()
    }
}

impl<S, D> LipschitzEstimate<S> for ArrayBase<D, Ix1>
where
    S: NdFloat,
    D: Data<Elem = S>,
{
    fn lipschitz(&self) -> S {
        self.dot(self).sqrt()
    }
}

/// Spectral norm via the largest singular value.
///
/// A failed decomposition gives NaN, which then propagates through the
/// iterates like any other non-finite curvature.
impl<S, D> LipschitzEstimate<S> for ArrayBase<D, Ix2>
where
    S: NdFloat + Scalar<Real = S> + Lapack,
    D: Data<Elem = S>,
{
    fn lipschitz(&self) -> S {
        match self.svd(false, false) {
            // singular values come back in descending order
            Ok((_, sigma, _)) => sigma.get(0).copied().unwrap_or_else(S::zero),
            Err(_) => <S as Float>::nan(),
        }
    }
}

/// Use the Frobenius norm of a matrix estimate instead of its spectral norm.
///
/// Cheaper than an SVD and never smaller than the spectral norm, so the
/// step it gives is always safe but may be short.
#[derive(Debug, Clone, Copy)]
pub struct Frobenius<M>(pub M);

impl<S, D> LipschitzEstimate<S> for Frobenius<ArrayBase<D, Ix2>>
where
    S: NdFloat,
    D: Data<Elem = S>,
{
    fn lipschitz(&self) -> S {
        self.0.iter().fold(S::zero(), |acc, &h| acc + h * h).sqrt()
    }
}

#[allow(non_snake_case)]
#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn scalar_is_absolute_value() {
        assert_eq!((-3f64).lipschitz(), 3.);
        assert_eq!(2.5f32.lipschitz(), 2.5);
    }

    #[test]
    fn vector_is_euclidean() {
        assert_eq!(array![3., -4.].lipschitz(), 5.);
        assert_eq!(array![3., -4.].view().lipschitz(), 5.);
    }

    #[test]
    fn nan_vector_stays_nan() {
        assert!(array![1., f64::NAN].lipschitz().is_nan());
    }

    #[test]
    fn diagonal_matrix_is_largest_magnitude() {
        let H = array![[3., 0.], [0., -4.]];
        assert_abs_diff_eq!(H.lipschitz(), 4., epsilon = 1e-10);
    }

    #[test]
    fn shear_matrix_is_spectral_not_frobenius() {
        // singular values of [[1, 1], [0, 1]] are the golden ratio and its inverse
        let H = array![[1., 1.], [0., 1.]];
        let golden = (1. + 5f64.sqrt()) / 2.;
        assert_abs_diff_eq!(H.lipschitz(), golden, epsilon = 1e-10);
        assert_abs_diff_eq!(Frobenius(H).lipschitz(), 3f64.sqrt(), epsilon = 1e-10);
    }

    #[test]
    fn frobenius_bounds_spectral() {
        let H = array![[2., -1., 0.], [-1., 2., -1.], [0., -1., 2.]];
        let spectral = H.lipschitz();
        let frobenius = Frobenius(H.view()).lipschitz();
        assert!(spectral <= frobenius);
        assert_abs_diff_eq!(spectral, 2. + 2f64.sqrt(), epsilon = 1e-10);
    }
}
