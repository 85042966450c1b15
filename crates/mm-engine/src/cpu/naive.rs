use std::ops::Range;

use crate::error::Result;
use crate::matrix::Matrix;
use crate::strategy::MatmulStrategy;

/// Textbook triple loop: output row `i`, output column `k`, then the inner
/// reduction over `j`.
///
/// Reads `b` column-wise with stride `b.cols()`, which is what the transpose
/// strategy avoids. This is the reference every other strategy must match.
#[derive(Debug, Clone, Copy, Default)]
pub struct NaiveStrategy;

impl NaiveStrategy {
    pub fn new() -> Self {
        NaiveStrategy
    }
}

impl MatmulStrategy for NaiveStrategy {
    fn name(&self) -> &str {
        "naive"
    }

    fn compute(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let mut c = Matrix::zeros(a.rows(), b.cols())?;
        multiply_rows(a, b, 0..a.rows(), 0..b.cols(), c.data_mut());
        Ok(c)
    }
}

/// Compute output rows `rows` restricted to output columns `cols`.
///
/// `out` holds exactly the output rows in `rows`, each `b.cols()` wide, so
/// local row `0` of `out` is global row `rows.start`.
pub(crate) fn multiply_rows(
    a: &Matrix,
    b: &Matrix,
    rows: Range<usize>,
    cols: Range<usize>,
    out: &mut [f64],
) {
    let n = b.cols();
    let b_data = b.data();
    debug_assert_eq!(out.len(), rows.len() * n);

    for (local, i) in rows.enumerate() {
        let a_row = a.row(i);
        let out_row = &mut out[local * n..(local + 1) * n];
        for k in cols.clone() {
            let mut sum = 0.0;
            for (j, &x) in a_row.iter().enumerate() {
                sum += x * b_data[j * n + k];
            }
            out_row[k] = sum;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_2x2() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
        let c = NaiveStrategy.multiply(&a, &b).unwrap();
        assert_eq!(c.data(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_2x3_times_3x2() {
        let a = Matrix::from_vec(2, 3, vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
        let b = Matrix::from_vec(3, 2, vec![7.0, 8.0, 9.0, 10.0, 11.0, 12.0]).unwrap();
        let c = NaiveStrategy.multiply(&a, &b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert_eq!(c.data(), &[58.0, 64.0, 139.0, 154.0]);
    }

    #[test]
    fn test_row_vector_times_column_vector() {
        let a = Matrix::from_vec(1, 3, vec![1.0, 2.0, 3.0]).unwrap();
        let b = Matrix::from_vec(3, 1, vec![4.0, 5.0, 6.0]).unwrap();
        let c = NaiveStrategy.multiply(&a, &b).unwrap();
        assert_eq!(c.shape(), (1, 1));
        assert_eq!(c.data(), &[32.0]);
    }

    #[test]
    fn test_multiply_rows_subrange() {
        let a = Matrix::from_vec(3, 2, vec![1.0, 0.0, 0.0, 1.0, 1.0, 1.0]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![2.0, 3.0, 4.0, 5.0]).unwrap();
        let mut out = vec![0.0; 2 * 2];
        multiply_rows(&a, &b, 1..3, 0..2, &mut out);
        assert_eq!(out, vec![4.0, 5.0, 6.0, 8.0]);
    }

    #[test]
    fn test_shape_mismatch() {
        let a = Matrix::zeros(2, 3).unwrap();
        let b = Matrix::zeros(4, 2).unwrap();
        assert!(NaiveStrategy.multiply(&a, &b).is_err());
    }
}
