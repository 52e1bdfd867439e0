//! Descriptive reductions over a matrix scope.
//!
//! Every reduction takes a [`Scope`] picking the aggregation subset:
//! the whole matrix, one row, or one column. Out-of-range scope
//! indices and empty matrices return the additive identity rather
//! than failing; high-throughput experiment loops rely on that
//! documented sentinel policy.

use super::Matrix;
use num_traits::{Float, Num, NumCast};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Aggregation subset for mean/var/std/min/max.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scope {
    /// Every element of the matrix.
    All,
    /// One row, by index.
    Row(usize),
    /// One column, by index.
    Col(usize),
}

impl<T: Copy> Matrix<T> {
    /// Number of elements in the scope; `None` when the matrix is empty
    /// or the scope index is out of range.
    fn scope_len(&self, scope: Scope) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        match scope {
            Scope::All => Some(self.size()),
            Scope::Row(n) if n < self.rows() => Some(self.cols()),
            Scope::Col(n) if n < self.cols() => Some(self.rows()),
            _ => None,
        }
    }

    /// The i-th element of the scope, in flat traversal order.
    fn scope_at(&self, scope: Scope, i: usize) -> T {
        let buf = self.as_slice();
        match scope {
            Scope::All => buf[i],
            Scope::Row(n) => buf[n * self.cols() + i],
            Scope::Col(n) => buf[i * self.cols() + n],
        }
    }
}

impl<T: Num + NumCast + Copy + Send + Sync> Matrix<T> {
    fn scope_sum<F>(&self, scope: Scope, count: usize, term: F) -> T
    where
        F: Fn(T) -> T + Send + Sync,
    {
        #[cfg(feature = "parallel")]
        {
            if count > self.par_threshold() {
                return (0..count)
                    .into_par_iter()
                    .map(|i| term(self.scope_at(scope, i)))
                    .reduce(T::zero, |a, b| a + b);
            }
        }
        (0..count).fold(T::zero(), |acc, i| acc + term(self.scope_at(scope, i)))
    }

    /// Arithmetic mean over the scope.
    ///
    /// A single-element scope returns that element. An empty matrix or
    /// an out-of-range scope index returns zero.
    #[must_use]
    pub fn mean(&self, scope: Scope) -> T {
        let Some(count) = self.scope_len(scope) else {
            return T::zero();
        };
        if count == 1 {
            return self.scope_at(scope, 0);
        }
        let sum = self.scope_sum(scope, count, |v| v);
        sum / T::from(count).unwrap_or_else(T::one)
    }

    /// Sample variance over the scope (divides by `count - 1`).
    ///
    /// Zero when the scope has exactly one element (variance is
    /// undefined there), the matrix is empty, or the index is out of
    /// range.
    #[must_use]
    pub fn var(&self, scope: Scope) -> T {
        let Some(count) = self.scope_len(scope) else {
            return T::zero();
        };
        if count == 1 {
            return T::zero();
        }
        let mean = self.mean(scope);
        let sum = self.scope_sum(scope, count, |v| {
            let diff = v - mean;
            diff * diff
        });
        sum / T::from(count - 1).unwrap_or_else(T::one)
    }

    /// Determinant by first-row cofactor expansion.
    ///
    /// 1x1 returns the element, 2x2 returns `ad - bc`, larger matrices
    /// recurse over minors with alternating sign starting positive at
    /// column 0. Exponential in the dimension; meant for the small
    /// matrices the precision experiments use, deliberately not an LU
    /// factorization (which would change the rounding behavior under
    /// comparison). Non-square or empty input returns zero.
    #[must_use]
    pub fn det(&self) -> T {
        if !self.is_square() || self.is_empty() {
            return T::zero();
        }
        let n = self.rows();
        let buf = self.as_slice();
        if n == 1 {
            return buf[0];
        }
        if n == 2 {
            return buf[0] * buf[3] - buf[1] * buf[2];
        }
        let term = |i: usize| {
            let sign = if i % 2 == 0 {
                T::one()
            } else {
                T::zero() - T::one()
            };
            sign * buf[i] * self.submatrix(0, i).det()
        };
        #[cfg(feature = "parallel")]
        {
            if self.size() > self.par_threshold() {
                return (0..n)
                    .into_par_iter()
                    .map(term)
                    .reduce(T::zero, |a, b| a + b);
            }
        }
        (0..n).map(term).fold(T::zero(), |a, b| a + b)
    }
}

impl<T: Num + Copy + PartialOrd> Matrix<T> {
    /// Maximum over the scope: first element seeds, strict `<` compare.
    ///
    /// Zero sentinel on an empty matrix or out-of-range index.
    #[must_use]
    pub fn max(&self, scope: Scope) -> T {
        let Some(count) = self.scope_len(scope) else {
            return T::zero();
        };
        let mut out = self.scope_at(scope, 0);
        for i in 1..count {
            let v = self.scope_at(scope, i);
            if out < v {
                out = v;
            }
        }
        out
    }

    /// Minimum over the scope: first element seeds, strict `>` compare.
    ///
    /// Zero sentinel on an empty matrix or out-of-range index.
    #[must_use]
    pub fn min(&self, scope: Scope) -> T {
        let Some(count) = self.scope_len(scope) else {
            return T::zero();
        };
        let mut out = self.scope_at(scope, 0);
        for i in 1..count {
            let v = self.scope_at(scope, i);
            if out > v {
                out = v;
            }
        }
        out
    }
}

impl<T: Float + Send + Sync> Matrix<T> {
    /// Sample standard deviation: square root of [`var`](Matrix::var).
    #[must_use]
    pub fn std(&self, scope: Scope) -> T {
        self.var(scope).sqrt()
    }
}

#[cfg(test)]
#[path = "reduce_tests.rs"]
mod tests;
