//! Matrix initializers used to produce multiplication inputs.

use std::fmt;
use std::str::FromStr;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{MatmulError, Result};
use crate::matrix::Matrix;

/// Allocate a zero-filled `rows x cols` matrix.
pub fn allocate(rows: usize, cols: usize) -> Result<Matrix> {
    Matrix::zeros(rows, cols)
}

/// Fill every cell with its own row-major index: `m[i, j] = i * cols + j`.
pub fn init_sequential(m: &mut Matrix) {
    for (idx, cell) in m.data_mut().iter_mut().enumerate() {
        *cell = idx as f64;
    }
}

/// Fill every cell with a value in `[0, max_value)` from the thread-local
/// generator. Not reproducible; use [`init_random_seeded`] for that.
pub fn init_random(m: &mut Matrix, max_value: f64) {
    fill_random(m, max_value, &mut rand::thread_rng());
}

/// Like [`init_random`], but draws from a generator seeded with `seed`.
pub fn init_random_seeded(m: &mut Matrix, max_value: f64, seed: u64) {
    fill_random(m, max_value, &mut StdRng::seed_from_u64(seed));
}

fn fill_random<R: Rng>(m: &mut Matrix, max_value: f64, rng: &mut R) {
    // gen::<f64>() is uniform in [0, 1), so a zero bound yields zeros.
    for cell in m.data_mut() {
        *cell = rng.gen::<f64>() * max_value;
    }
}

/// How a harness should populate its input matrices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatrixKind {
    Random,
    Sequential,
}

impl MatrixKind {
    pub fn name(&self) -> &'static str {
        match self {
            MatrixKind::Random => "rand",
            MatrixKind::Sequential => "seq",
        }
    }
}

impl fmt::Display for MatrixKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MatrixKind {
    type Err = MatmulError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "RAND" | "RANDOM" => Ok(MatrixKind::Random),
            "SEQ" | "SEQUENTIAL" => Ok(MatrixKind::Sequential),
            _ => Err(MatmulError::UnknownMatrixKind(s.to_string())),
        }
    }
}

/// Allocate a `rows x cols` matrix and populate it according to `kind`.
/// `max_value` is only used for `MatrixKind::Random`.
pub fn build(kind: MatrixKind, rows: usize, cols: usize, max_value: f64) -> Result<Matrix> {
    let mut m = allocate(rows, cols)?;
    match kind {
        MatrixKind::Random => init_random(&mut m, max_value),
        MatrixKind::Sequential => init_sequential(&mut m),
    }
    Ok(m)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_sequential() {
        let mut m = allocate(2, 3).unwrap();
        init_sequential(&mut m);
        assert_eq!(m.data(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(m.get(1, 2), Some(5.0));
    }

    #[test]
    fn test_init_random_bounds() {
        let mut m = allocate(16, 16).unwrap();
        init_random(&mut m, 10.0);
        assert!(m.data().iter().all(|&v| (0.0..10.0).contains(&v)));
    }

    #[test]
    fn test_init_random_zero_bound() {
        let mut m = allocate(3, 3).unwrap();
        init_sequential(&mut m);
        init_random(&mut m, 0.0);
        assert!(m.data().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn test_init_random_seeded_reproducible() {
        let mut a = allocate(8, 8).unwrap();
        let mut b = allocate(8, 8).unwrap();
        let mut c = allocate(8, 8).unwrap();
        init_random_seeded(&mut a, 5.0, 42);
        init_random_seeded(&mut b, 5.0, 42);
        init_random_seeded(&mut c, 5.0, 43);
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert!(a.data().iter().all(|&v| (0.0..5.0).contains(&v)));
    }

    #[test]
    fn test_matrix_kind_from_str() {
        assert_eq!("RAND".parse::<MatrixKind>().unwrap(), MatrixKind::Random);
        assert_eq!("seq".parse::<MatrixKind>().unwrap(), MatrixKind::Sequential);
        assert_eq!(
            "Sequential".parse::<MatrixKind>().unwrap(),
            MatrixKind::Sequential
        );
        assert!(matches!(
            "ones".parse::<MatrixKind>(),
            Err(MatmulError::UnknownMatrixKind(s)) if s == "ones"
        ));
    }

    #[test]
    fn test_build() {
        let m = build(MatrixKind::Sequential, 2, 2, 10.0).unwrap();
        assert_eq!(m.data(), &[0.0, 1.0, 2.0, 3.0]);

        let r = build(MatrixKind::Random, 4, 5, 1.0).unwrap();
        assert_eq!(r.shape(), (4, 5));

        assert!(build(MatrixKind::Sequential, 0, 2, 10.0).is_err());
    }
}
