//! Assorted utilities and helpers.

use crate::error::{DpError, Result};

/// Compute an integer square root-style block size for T layers.
///
/// This is the heuristic used by [`crate::engine::SweepEngine::new`]: about
/// √T blocks of about √T layers each.
#[inline]
pub fn default_block_size(num_layers: usize) -> usize {
    if num_layers <= 1 {
        1
    } else {
        (num_layers as f64).sqrt().ceil() as usize
    }
}

/// Convert 0-based item positions to the 1-based indices callers see.
#[inline]
pub(crate) fn one_based(positions: impl IntoIterator<Item = usize>) -> Vec<usize> {
    positions.into_iter().map(|p| p + 1).collect()
}

/// Allocate a table of `len` copies of `value`.
///
/// Limits can be raised past what the machine can hold; an allocation that
/// cannot be satisfied is reported as [`DpError::Precondition`] instead of
/// aborting the process.
pub(crate) fn try_table<T: Clone>(value: T, len: usize, what: &str) -> Result<Vec<T>> {
    let mut table = Vec::new();
    table.try_reserve_exact(len).map_err(|e| {
        DpError::precondition(format!("cannot allocate {what} of {len} entries: {e}"))
    })?;
    table.resize(len, value);
    Ok(table)
}
