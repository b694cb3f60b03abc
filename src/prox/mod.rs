//! Minimization for Composite Functions consisting of
//! L-smooth _g_ and a constraint set _h_
//!
//! A projection is the proximal operator of the indicator function
//! of a convex set, so smooth constrained problems such as non-negative
//! least squares or box-constrained regression fit this form.
//!
//! The step size of every iteration is $`1/L_k`$, where $`L_k`$ is a local
//! estimate of the Lipschitz constant of $`\nabla g`$. It is obtained by
//! taking the norm of whatever the caller's curvature function returns, see
//! [`LipschitzEstimate`].

mod fista;
pub use fista::*;

mod lipschitz;
pub use lipschitz::*;

mod projection;
pub use projection::*;

use ndarray::{Array1, ArrayView, ArrayView1};

/// Do nothing function for optional user callback
#[allow(clippy::needless_pass_by_value)]
pub fn nop<T, D>(_x: ArrayView<T, D>, _itr: usize) {}

/// Records every iterate handed to it, in the order received.
///
/// ```ignore
/// let mut history = History::new();
/// let x = projected_fista(grad, H, p, x0.view(), 20, |x, k| history.record(x, k));
/// assert_eq!(history.len(), 20);
/// ```
#[derive(Debug, Clone, Default)]
pub struct History<S> {
    iterates: Vec<(usize, Array1<S>)>,
}

impl<S: Clone> History<S> {
    #[must_use]
    pub fn new() -> History<S> {
        History {
            iterates: Vec::new(),
        }
    }

    pub fn record(&mut self, x: ArrayView1<S>, itr: usize) {
        self.iterates.push((itr, x.to_owned()));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.iterates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.iterates.is_empty()
    }

    /// Iteration indices and iterates, oldest first
    pub fn iter(&self) -> impl Iterator<Item = (usize, ArrayView1<'_, S>)> {
        self.iterates.iter().map(|(itr, x)| (*itr, x.view()))
    }

    /// The most recently recorded iterate
    #[must_use]
    pub fn last(&self) -> Option<ArrayView1<'_, S>> {
        self.iterates.last().map(|(_, x)| x.view())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn history_keeps_order() {
        let mut history = History::new();
        assert!(history.is_empty());
        history.record(array![1., 2.].view(), 0);
        history.record(array![3., 4.].view(), 1);

        assert_eq!(history.len(), 2);
        let itrs: Vec<usize> = history.iter().map(|(k, _)| k).collect();
        assert_eq!(itrs, vec![0, 1]);
        assert_eq!(history.last().unwrap(), array![3., 4.]);
    }
}
