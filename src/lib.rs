//! The `ndarray-fista` crate minimizes composite objectives
//! $`f = g + h`$ of an `ndarray` vector with an accelerated projected
//! gradient method (FISTA), where $`g`$ is convex and differentiable and
//! $`h`$ is the indicator function of a convex set, handled through a
//! projection onto that set.
//!
//! The solver runs a fixed number of iterations. Each iteration picks its
//! step size from a local curvature estimate supplied by the caller, takes a
//! gradient step from the extrapolated point, projects it back onto the
//! feasible set and updates the Nesterov momentum.
//!
//! ```ignore
//! use ndarray::prelude::*;
//! use ndarray_fista::prox::{nop, project_box, projected_fista};
//!
//! let c = array![5., -7., 0.5];
//! let x = projected_fista(
//!     |x| &x - &c,
//!     |_x| 1.0,
//!     |w| project_box(w, -1., 1.),
//!     Array1::zeros(3).view(),
//!     50,
//!     nop,
//! );
//! assert_eq!(x, array![1., -1., 0.5]);
//! ```

#![cfg_attr(all(rustc_nightly, test), feature(test))]
#[cfg(all(rustc_nightly, test))]
extern crate test;

#[cfg(test)]
extern crate intel_mkl_src;

pub mod prox;
