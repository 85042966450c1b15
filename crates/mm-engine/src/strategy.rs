use std::fmt::Debug;

use crate::error::Result;
use crate::matrix::{check_shapes, Matrix};

/// A matrix multiplication algorithm.
///
/// Implementations produce a new `a.rows() x b.cols()` matrix. Every strategy
/// accumulates each output cell in ascending inner index starting from `0.0`,
/// so all of them return bit-identical results for the same inputs.
pub trait MatmulStrategy: Send + Sync + Debug {
    /// Returns the name of this strategy (e.g., "naive", "parallel").
    fn name(&self) -> &str;

    /// Compute `a @ b` assuming `a.cols() == b.rows()` has already been
    /// checked. Prefer [`MatmulStrategy::multiply`].
    fn compute(&self, a: &Matrix, b: &Matrix) -> Result<Matrix>;

    /// Check shape compatibility, then compute `a @ b`.
    fn multiply(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        check_shapes(a, b)?;
        self.compute(a, b)
    }
}
