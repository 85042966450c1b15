use std::fmt;

use crate::error::{MatmulError, Result};

/// A dense matrix of `f64` stored row-major in a single contiguous buffer.
///
/// Element `(i, j)` lives at `data[i * cols + j]`. Both extents are always
/// non-zero, so any `Matrix` that exists is a valid multiplication operand.
/// The buffer is owned exclusively and released when the matrix is dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix {
    rows: usize,
    cols: usize,
    data: Vec<f64>,
}

impl Matrix {
    /// Allocate a zero-filled `rows x cols` matrix.
    ///
    /// # Errors
    /// Returns `EmptyMatrix` if either extent is zero, and `Allocation` if
    /// `rows * cols` overflows or the storage cannot be reserved.
    pub fn zeros(rows: usize, cols: usize) -> Result<Self> {
        check_extents(rows, cols)?;
        let len = rows
            .checked_mul(cols)
            .ok_or(MatmulError::Allocation { rows, cols })?;

        let mut data = Vec::new();
        data.try_reserve_exact(len)
            .map_err(|_| MatmulError::Allocation { rows, cols })?;
        data.resize(len, 0.0);

        Ok(Matrix { rows, cols, data })
    }

    /// Wrap existing row-major data.
    ///
    /// # Errors
    /// Returns `EmptyMatrix` for a zero extent and `DataLength` if
    /// `data.len() != rows * cols`.
    pub fn from_vec(rows: usize, cols: usize, data: Vec<f64>) -> Result<Self> {
        check_extents(rows, cols)?;
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(MatmulError::DataLength {
                rows,
                cols,
                got: data.len(),
            });
        }
        Ok(Matrix { rows, cols, data })
    }

    /// The `n x n` identity matrix.
    pub fn identity(n: usize) -> Result<Self> {
        let mut m = Matrix::zeros(n, n)?;
        for i in 0..n {
            m.data[i * n + i] = 1.0;
        }
        Ok(m)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Row-major backing storage.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut [f64] {
        &mut self.data
    }

    /// Consume the matrix and return its row-major storage.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Row `i` as a contiguous slice.
    ///
    /// # Panics
    /// Panics if `i >= rows()`.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.cols;
        &self.data[start..start + self.cols]
    }

    /// Element at row `i`, column `j`, or `None` when out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.rows && j < self.cols {
            Some(self.data[i * self.cols + j])
        } else {
            None
        }
    }

    /// A new `cols x rows` matrix `t` with `t[k, j] == self[j, k]`.
    pub fn transpose(&self) -> Result<Matrix> {
        let mut t = Matrix::zeros(self.cols, self.rows)?;
        for i in 0..self.rows {
            for j in 0..self.cols {
                t.data[j * self.rows + i] = self.data[i * self.cols + j];
            }
        }
        Ok(t)
    }
}

/// Check that `a @ b` is defined.
///
/// # Errors
/// Returns `ShapeMismatch` naming both shapes when `a.cols() != b.rows()`.
pub fn check_shapes(a: &Matrix, b: &Matrix) -> Result<()> {
    if a.cols != b.rows {
        return Err(MatmulError::ShapeMismatch {
            rows_a: a.rows,
            cols_a: a.cols,
            rows_b: b.rows,
            cols_b: b.cols,
        });
    }
    Ok(())
}

fn check_extents(rows: usize, cols: usize) -> Result<()> {
    if rows == 0 || cols == 0 {
        return Err(MatmulError::EmptyMatrix { rows, cols });
    }
    Ok(())
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in 0..self.rows {
            write!(f, "|\t")?;
            for (j, v) in self.row(i).iter().enumerate() {
                if j > 0 {
                    write!(f, "\t")?;
                }
                write!(f, "{:8.3}", v)?;
            }
            writeln!(f, "\t|")?;
        }
        Ok(())
    }
}
