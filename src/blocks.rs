//! Block-level data structures used by the engine.
//!
//! The engine walks layers in contiguous blocks; each `BlockSummary` records
//! the interval [start, end) and the problem's summary of the frontier at
//! layer `end`.

/// Summary for a contiguous interval of layers [start, end).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSummary<S> {
    /// Inclusive start layer index.
    pub start: usize,
    /// Exclusive end layer index; the block covers layers [start, end).
    pub end: usize,
    /// Frontier summary at layer `end`.
    pub summary: S,
}

impl<S> BlockSummary<S> {
    /// Length of the block in layers.
    #[inline]
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the block is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split `0..num_layers` into consecutive `[start, end)` spans of at most
/// `block_size` layers. Yields nothing when `num_layers == 0`.
pub fn block_spans(num_layers: usize, block_size: usize) -> impl Iterator<Item = (usize, usize)> {
    let b = block_size.max(1);
    (0..num_layers.div_ceil(b)).map(move |k| (k * b, ((k + 1) * b).min(num_layers)))
}
