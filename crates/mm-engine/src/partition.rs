use std::ops::Range;

use crate::error::{MatmulError, Result};

/// Split `[0, total_rows)` into `thread_count` contiguous row blocks.
///
/// Every block gets `total_rows / thread_count` rows and the last block also
/// absorbs the `total_rows % thread_count` leftover rows. When there are
/// fewer rows than threads the leading blocks are empty.
///
/// # Errors
/// Returns `InvalidConfiguration` if `thread_count == 0`.
pub fn partition(total_rows: usize, thread_count: usize) -> Result<Vec<Range<usize>>> {
    if thread_count == 0 {
        return Err(MatmulError::InvalidConfiguration(
            "cannot partition rows across zero threads".to_string(),
        ));
    }

    let base = total_rows / thread_count;
    let remainder = total_rows % thread_count;

    let blocks: Vec<Range<usize>> = (0..thread_count)
        .map(|t| {
            let start = t * base;
            let end = if t == thread_count - 1 {
                start + base + remainder
            } else {
                start + base
            };
            start..end
        })
        .collect();

    log::trace!(
        "partitioned {} rows across {} threads ({} per block, {} extra on the last)",
        total_rows,
        thread_count,
        base,
        remainder
    );
    Ok(blocks)
}
