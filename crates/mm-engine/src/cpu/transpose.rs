use crate::error::Result;
use crate::matrix::Matrix;
use crate::strategy::MatmulStrategy;

/// Transposes `b` up front so the inner reduction walks both operands
/// row-major.
///
/// The extra `O(rows_b * cols_b)` copy pays for itself once the inner loop
/// stops striding through `b` by `b.cols()`. The transposed copy is dropped
/// before `compute` returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct TransposeStrategy;

impl TransposeStrategy {
    pub fn new() -> Self {
        TransposeStrategy
    }
}

impl MatmulStrategy for TransposeStrategy {
    fn name(&self) -> &str {
        "transpose"
    }

    fn compute(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let b_t = b.transpose()?;
        let n = b.cols();
        let mut c = Matrix::zeros(a.rows(), n)?;

        for (i, out_row) in c.data_mut().chunks_exact_mut(n).enumerate() {
            let a_row = a.row(i);
            for (k, cell) in out_row.iter_mut().enumerate() {
                // Same ascending-j accumulation as the naive kernel.
                *cell = a_row
                    .iter()
                    .zip(b_t.row(k))
                    .fold(0.0_f64, |sum, (x, y)| sum + x * y);
            }
        }
        Ok(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cpu::naive::NaiveStrategy;
    use crate::init::{init_random_seeded, init_sequential};

    #[test]
    fn test_2x2() {
        let a = Matrix::from_vec(2, 2, vec![1.0, 2.0, 3.0, 4.0]).unwrap();
        let b = Matrix::from_vec(2, 2, vec![5.0, 6.0, 7.0, 8.0]).unwrap();
        let c = TransposeStrategy.multiply(&a, &b).unwrap();
        assert_eq!(c.data(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_non_square_matches_naive() {
        let mut a = Matrix::zeros(5, 3).unwrap();
        let mut b = Matrix::zeros(3, 7).unwrap();
        init_sequential(&mut a);
        init_sequential(&mut b);
        let expected = NaiveStrategy.multiply(&a, &b).unwrap();
        let c = TransposeStrategy.multiply(&a, &b).unwrap();
        assert_eq!(c.shape(), (5, 7));
        assert_eq!(c, expected);
    }

    #[test]
    fn test_random_bit_identical_to_naive() {
        let mut a = Matrix::zeros(17, 23).unwrap();
        let mut b = Matrix::zeros(23, 11).unwrap();
        init_random_seeded(&mut a, 10.0, 7);
        init_random_seeded(&mut b, 10.0, 8);
        let expected = NaiveStrategy.multiply(&a, &b).unwrap();
        let c = TransposeStrategy.multiply(&a, &b).unwrap();
        for (x, y) in c.data().iter().zip(expected.data()) {
            assert_eq!(x.to_bits(), y.to_bits());
        }
    }
}
