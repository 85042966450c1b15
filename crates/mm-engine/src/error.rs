use thiserror::Error;

#[derive(Error, Debug)]
pub enum MatmulError {
    #[error("couldn't allocate a {rows}x{cols} matrix")]
    Allocation { rows: usize, cols: usize },
    #[error("matrix extents must be non-zero, got {rows}x{cols}")]
    EmptyMatrix { rows: usize, cols: usize },
    #[error("data length {got} does not match a {rows}x{cols} matrix")]
    DataLength { rows: usize, cols: usize, got: usize },
    #[error(
        "shape mismatch: [{rows_a}x{cols_a}] @ [{rows_b}x{cols_b}] (columns of A must equal rows of B)"
    )]
    ShapeMismatch {
        rows_a: usize,
        cols_a: usize,
        rows_b: usize,
        cols_b: usize,
    },
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("worker #{thread_id} failed before finishing its rows")]
    WorkerFailed { thread_id: usize },
    #[error("couldn't spawn worker thread: {0}")]
    ThreadSpawn(#[from] std::io::Error),
    #[error("unknown multiplication mode: {0}")]
    UnknownMode(String),
    #[error("unknown matrix kind: {0}")]
    UnknownMatrixKind(String),
}

pub type Result<T> = std::result::Result<T, MatmulError>;
