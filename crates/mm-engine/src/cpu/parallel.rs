//! Row-partitioned multi-threaded multiplication.
//!
//! The output rows are split into contiguous blocks (see [`partition`]) and
//! the output storage is split into matching disjoint `&mut` sub-slices, one
//! per worker. Each worker runs the naive kernel on its own block, so no
//! locking is needed and the result is bit-identical to the naive strategy.

use std::ops::Range;
use std::thread;

use crate::config::NUM_THREADS;
use crate::cpu::naive::multiply_rows;
use crate::error::{MatmulError, Result};
use crate::matrix::Matrix;
use crate::partition::partition;
use crate::strategy::MatmulStrategy;

/// Multiplies with a fixed pool of `threads` scoped OS threads.
#[derive(Debug, Clone, Copy)]
pub struct ParallelStrategy {
    threads: usize,
}

impl ParallelStrategy {
    /// A strategy that spawns `threads` workers per call. A zero count is
    /// reported as `InvalidConfiguration` when multiplying.
    pub fn new(threads: usize) -> Self {
        Self { threads }
    }

    pub fn threads(&self) -> usize {
        self.threads
    }
}

impl Default for ParallelStrategy {
    fn default() -> Self {
        Self::new(NUM_THREADS)
    }
}

impl MatmulStrategy for ParallelStrategy {
    fn name(&self) -> &str {
        "parallel"
    }

    fn compute(&self, a: &Matrix, b: &Matrix) -> Result<Matrix> {
        let blocks = partition(a.rows(), self.threads)?;
        compute_blocks(a, b, blocks)
    }
}

/// Runs one scoped worker per row block. The block lengths must sum to
/// `a.rows()`; worker `i` owns `blocks[i]`.
fn compute_blocks(a: &Matrix, b: &Matrix, blocks: Vec<Range<usize>>) -> Result<Matrix> {
    let n = b.cols();
    let mut c = Matrix::zeros(a.rows(), n)?;

    thread::scope(|s| -> Result<()> {
        let mut rest = c.data_mut();
        let mut handles = Vec::with_capacity(blocks.len());

        for (thread_id, rows) in blocks.into_iter().enumerate() {
            let (out, tail) = std::mem::take(&mut rest).split_at_mut(rows.len() * n);
            rest = tail;

            let task = RowTask {
                thread_id,
                rows,
                cols: 0..n,
                a,
                b,
                out,
            };
            let handle = thread::Builder::new()
                .name(format!("mm-worker-{}", thread_id))
                .spawn_scoped(s, move || task.run())?;
            handles.push((thread_id, handle));
        }

        // Join everything before reporting, so no worker outlives the call.
        let mut failed = None;
        for (thread_id, handle) in handles {
            if handle.join().is_err() && failed.is_none() {
                failed = Some(thread_id);
            }
        }
        match failed {
            Some(thread_id) => Err(MatmulError::WorkerFailed { thread_id }),
            None => Ok(()),
        }
    })?;

    Ok(c)
}

/// One worker's share of the output: a row block and the slice that backs it.
struct RowTask<'a> {
    thread_id: usize,
    rows: Range<usize>,
    cols: Range<usize>,
    a: &'a Matrix,
    b: &'a Matrix,
    out: &'a mut [f64],
}

impl RowTask<'_> {
    fn run(self) {
        log::trace!(
            "worker #{} computing rows {:?}, cols {:?}",
            self.thread_id,
            self.rows,
            self.cols
        );
        multiply_rows(self.a, self.b, self.rows, self.cols, self.out);
    }
}
