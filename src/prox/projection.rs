//! Euclidean Projections onto Common Convex Sets
//!
//! Each of these is the proximal operator of the indicator function of
//! its set, and can be passed (wrapped in a closure) as the projection
//! of [`projected_fista`](super::projected_fista).
//!
//! Coordinates that are NaN are passed through rather than clamped.

use std::cmp::Ordering;

use ndarray::prelude::*;
use ndarray::NdFloat;

/// Projection onto the box $`[lo, hi]^n`$, coordinate by coordinate
pub fn project_box<S: NdFloat>(v: ArrayView1<S>, lo: S, hi: S) -> Array1<S> {
    v.mapv(|vi| {
        if vi < lo {
            lo
        } else if vi > hi {
            hi
        } else {
            vi
        }
    })
}

/// Projection onto the non-negative orthant
pub fn project_nonneg<S: NdFloat>(v: ArrayView1<S>) -> Array1<S> {
    v.mapv(|vi| if vi < S::zero() { S::zero() } else { vi })
}

/// Projection onto the Euclidean ball $`\{x : \|x\|_2 \leq r\}`$
pub fn project_l2_ball<S: NdFloat>(v: ArrayView1<S>, radius: S) -> Array1<S> {
    let norm = v.dot(&v).sqrt();
    if norm > radius {
        &v * (radius / norm)
    } else {
        v.to_owned()
    }
}

/// Projection onto the probability simplex
/// $`\{x : x \geq 0, \sum_i x_i = 1\}`$
///
/// Sort-based, $`O(n \log n)`$, following
/// [Wang & Carreira-Perpiñán (2013)](https://arxiv.org/abs/1309.1541).
pub fn project_simplex<S: NdFloat>(v: ArrayView1<S>) -> Array1<S> {
    let mut u: Vec<S> = v.to_vec();
    u.sort_unstable_by(|a, b| b.partial_cmp(a).unwrap_or(Ordering::Equal));

    // largest j with u_j + (1 - sum_{i<=j} u_i) / (j + 1) > 0
    let mut theta = S::zero();
    let mut cumsum = S::zero();
    let mut count = S::zero();
    for &uj in &u {
        cumsum += uj;
        count += S::one();
        let candidate = (cumsum - S::one()) / count;
        if uj - candidate > S::zero() {
            theta = candidate;
        }
    }
    v.mapv(|vi| {
        let shifted = vi - theta;
        if shifted < S::zero() {
            S::zero()
        } else {
            shifted
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn box_clips_each_coordinate() {
        let v = array![-3., -1., 0.25, 1., 7.];
        assert_eq!(project_box(v.view(), -1., 1.), array![-1., -1., 0.25, 1., 1.]);
    }

    #[test]
    fn box_passes_nan_through() {
        let x = project_box(array![f64::NAN, 2.].view(), -1., 1.);
        assert!(x[0].is_nan());
        assert_eq!(x[1], 1.);
    }

    #[test]
    fn nonneg_zeroes_negatives() {
        let v = array![-2., 0., 3.];
        assert_eq!(project_nonneg(v.view()), array![0., 0., 3.]);
    }

    #[test]
    fn l2_ball_rescales_outside_points() {
        let x = project_l2_ball(array![3., 4.].view(), 1.);
        assert_abs_diff_eq!(x, array![0.6, 0.8], epsilon = 1e-12);

        let inside = array![0.3, -0.4];
        assert_eq!(project_l2_ball(inside.view(), 1.), inside);
    }

    #[test]
    fn simplex_lands_on_simplex() {
        let x = project_simplex(array![0.5, 2., -1., 0.8].view());
        assert_abs_diff_eq!(x.sum(), 1., epsilon = 1e-12);
        assert!(x.iter().all(|&xi| xi >= 0.));
        // only the largest coordinate survives, theta = 1
        assert_abs_diff_eq!(x, array![0., 1., 0., 0.], epsilon = 1e-12);
    }

    #[test]
    fn simplex_keeps_simplex_points() {
        let v = array![0.25, 0.25, 0.5];
        assert_abs_diff_eq!(project_simplex(v.view()), v, epsilon = 1e-12);
    }
}
