//! Fast Iterative Shrinking/Thresholding Algorithm with projections

use ndarray::prelude::*;
use ndarray::NdFloat;
use num_traits::ToPrimitive;
use thiserror::Error;

use super::LipschitzEstimate;

/// Contract violations caught by [`try_projected_fista`]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FistaError {
    #[error("curvature estimate at iteration {iteration} is {lipschitz}, expected a finite positive value")]
    InvalidCurvature { iteration: usize, lipschitz: f64 },
    #[error("{operator} returned {found} coordinates at iteration {iteration}, expected {expected}")]
    DimensionMismatch {
        operator: &'static str,
        iteration: usize,
        expected: usize,
        found: usize,
    },
    #[error("gradient at iteration {iteration} is not finite")]
    NonFiniteGradient { iteration: usize },
}

/// Nesterov momentum recurrence, $`t_{k+1} = \frac{1 + \sqrt{1 + 4t_k^2}}{2}`$
///
/// Starting from $`t_0 = 1`$ the sequence is strictly increasing
/// and $`t_k \geq (k+2)/2`$.
#[inline]
pub fn next_momentum<S: NdFloat>(t: S) -> S {
    let two = S::one() + S::one();
    (S::one() + (S::one() + two * two * t.powi(2)).sqrt()) / two
}

/// Iterate, extrapolated point and momentum, owned by one solver run
struct Iterates<S> {
    x: Array1<S>,
    y: Array1<S>,
    t: S,
}

impl<S: NdFloat> Iterates<S> {
    fn new(x0: ArrayView1<S>) -> Iterates<S> {
        Iterates {
            x: x0.to_owned(),
            y: x0.to_owned(),
            t: S::one(),
        }
    }

    /// `y - grad / L`
    #[allow(non_snake_case)]
    fn gradient_step(&self, grad: &Array1<S>, L: S) -> Array1<S> {
        &self.y - &(grad * (S::one() / L))
    }

    /// Accept the projected point and move the momentum and extrapolation along
    fn advance(&mut self, x_new: Array1<S>) {
        let x_old = std::mem::replace(&mut self.x, x_new);
        let t_old = self.t;
        self.t = next_momentum(t_old);
        let beta = (t_old - S::one()) / self.t; // zero on the first step
        self.y = &self.x + &((&self.x - &x_old) * beta);
    }
}

/// Projected Fast Iterative Shrinking/Thresholding Algorithm
///
/// Minimizes $`g(x) + h(x)`$ where $`g`$ is convex and differentiable and
/// $`h`$ is the indicator of a convex set, with projection $`p`$ onto that set.
///
/// Algorithm
/// ---------
/// ```math
/// \begin{aligned}
/// L_k &= \| H(x_k) \| \\
/// x_{k+1} &= p\left( y_k - \frac{1}{L_k} \nabla g(y_k) \right) \\
/// t_{k+1} &= \frac{1 + \sqrt{1 + 4 t_k^2}}{2} \\
/// y_{k+1} &= x_{k+1} + \frac{t_k - 1}{t_{k+1}} (x_{k+1} - x_k)
/// \end{aligned}
/// ```
/// where $`y_0 = x_0`$ and $`t_0 = 1`$. The first step is therefore a plain
/// projected gradient step from $`x_0`$.
///
/// Parameters
/// ----------
/// - __grad_g:__    gradient of the smooth part, evaluated at the extrapolated point
/// - __H:__         curvature probe evaluated at the current iterate; the norm of its
///                   result is the step size denominator, see [`LipschitzEstimate`]
/// - __p:__         projection onto the feasible set
/// - __x0:__        initial guess
/// - __num_iter:__  exact number of iterations, there is no early stopping
/// - __callback:__  user-defined function evaluated with (x, iter) after each
///                   iteration, iter running from 0 to num_iter - 1. Use
///                   [`nop`](super::nop) when not needed.
///
/// Nothing is validated: a non-positive or non-finite $`L_k`$, or non-finite
/// gradients, flow into the iterates, and dimension mismatches panic inside
/// the array arithmetic. See [`try_projected_fista`] for a checked variant.
#[allow(non_snake_case)]
pub fn projected_fista<S, C>(
    grad_g: impl Fn(ArrayView1<S>) -> Array1<S>,
    H: impl Fn(ArrayView1<S>) -> C,
    p: impl Fn(ArrayView1<S>) -> Array1<S>,
    x0: ArrayView1<S>,
    num_iter: usize,
    mut callback: impl FnMut(ArrayView1<S>, usize),
) -> Array1<S>
where
    S: NdFloat,
    C: LipschitzEstimate<S>,
{
    let mut state = Iterates::new(x0);

    for iter in 0..num_iter {
        let L = H(state.x.view()).lipschitz();
        let w = state.gradient_step(&grad_g(state.y.view()), L);
        state.advance(p(w.view()));
        callback(state.x.view(), iter);
    }
    state.x
}

/// [`projected_fista`] with its caller contracts checked.
///
/// Before each value is used, checks that the curvature estimate is finite
/// and positive, that the gradient is finite, and that the gradient and the
/// projection keep the dimension of `x0`. Returns the first violation found.
/// When no check fails the result is identical to [`projected_fista`].
#[allow(non_snake_case)]
pub fn try_projected_fista<S, C>(
    grad_g: impl Fn(ArrayView1<S>) -> Array1<S>,
    H: impl Fn(ArrayView1<S>) -> C,
    p: impl Fn(ArrayView1<S>) -> Array1<S>,
    x0: ArrayView1<S>,
    num_iter: usize,
    mut callback: impl FnMut(ArrayView1<S>, usize),
) -> Result<Array1<S>, FistaError>
where
    S: NdFloat,
    C: LipschitzEstimate<S>,
{
    let n = x0.len();
    let mut state = Iterates::new(x0);

    for iter in 0..num_iter {
        let L = H(state.x.view()).lipschitz();
        if !(L.is_finite() && L > S::zero()) {
            return Err(FistaError::InvalidCurvature {
                iteration: iter,
                lipschitz: L.to_f64().unwrap_or(std::f64::NAN),
            });
        }

        let grad = grad_g(state.y.view());
        check_len("gradient", iter, n, grad.len())?;
        if !grad.iter().all(|g| g.is_finite()) {
            return Err(FistaError::NonFiniteGradient { iteration: iter });
        }

        let x_new = p(state.gradient_step(&grad, L).view());
        check_len("projection", iter, n, x_new.len())?;

        state.advance(x_new);
        callback(state.x.view(), iter);
    }
    Ok(state.x)
}

fn check_len(
    operator: &'static str,
    iteration: usize,
    expected: usize,
    found: usize,
) -> Result<(), FistaError> {
    if expected == found {
        Ok(())
    } else {
        Err(FistaError::DimensionMismatch {
            operator,
            iteration,
            expected,
            found,
        })
    }
}


#[allow(non_snake_case)]
#[cfg(all(rustc_nightly, test))]
mod benches {
    use super::*;
    use crate::prox::{nop, project_nonneg};
    use ndarray_rand::rand_distr::Uniform;
    use ndarray_rand::RandomExt;
    use test::Bencher;

    #[bench]
    fn bench_nonneg_least_squares(bench: &mut Bencher) {
        let A = Array2::random((200, 100), Uniform::new(-1., 1.));
        let b = Array1::random(200, Uniform::new(-1., 1.));
        let AtA = A.t().dot(&A);
        let x0 = Array1::zeros(100);
        bench.iter(|| {
            projected_fista(
                |x| A.t().dot(&(A.dot(&x) - &b)),
                |_x| AtA.view(),
                project_nonneg,
                x0.view(),
                50,
                nop,
            )
        });
    }
}
