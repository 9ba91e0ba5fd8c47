//! Generic block-wise sweep engine.
//!
//! The engine owns one [`SweepProblem`] instance and drives its forward steps
//! strictly left to right, in blocks of `block_size` layers. Blocks do not
//! change the result; they set the granularity of trace spans and of the
//! summaries returned by [`SweepEngine::run_with_summaries`].

use crate::blocks::{block_spans, BlockSummary};
use crate::error::Result;
use crate::traits::SweepProblem;
use crate::utils::default_block_size;

/// Sweep engine for a given problem instance `P`.
///
/// Typical usage:
/// ```
/// use bounded_dp::{SweepEngine, problems::step_count::StepCount};
///
/// let problem = StepCount::new(11, &[3, 4]).unwrap();
/// let ways = SweepEngine::new(problem).run().unwrap();
/// assert_eq!(ways, 3);
/// ```
pub struct SweepEngine<P: SweepProblem> {
    problem: P,
    block_size: usize,
}

impl<P: SweepProblem> SweepEngine<P> {
    /// Create a new engine with a heuristic block size (≈ √T).
    pub fn new(problem: P) -> Self {
        let t = problem.num_layers().max(1);
        let b = default_block_size(t).max(1);
        Self::with_block_size(problem, b)
    }

    /// Create a new engine with an explicit block size.
    ///
    /// # Panics
    /// Panics if `block_size == 0`.
    pub fn with_block_size(problem: P, block_size: usize) -> Self {
        assert!(block_size > 0, "block_size must be positive");
        Self {
            problem,
            block_size,
        }
    }

    /// Expose immutable reference to the underlying problem.
    pub fn problem(&self) -> &P {
        &self.problem
    }

    /// Return the configured block size.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Run every layer and read out the answer.
    pub fn run(&self) -> Result<P::Output> {
        let frontier = self.sweep(|_| {})?;
        self.problem.finish(frontier)
    }

    /// Like [`run`](Self::run), also returning one summary per block.
    pub fn run_with_summaries(&self) -> Result<(P::Output, Vec<BlockSummary<P::Summary>>)> {
        let t = self.problem.num_layers();
        let mut blocks = Vec::with_capacity(t.div_ceil(self.block_size));
        let frontier = self.sweep(|block| blocks.push(block))?;
        let output = self.problem.finish(frontier)?;
        Ok((output, blocks))
    }

    fn sweep<F>(&self, mut on_block: F) -> Result<P::Frontier>
    where
        F: FnMut(BlockSummary<P::Summary>),
    {
        let t = self.problem.num_layers();
        let mut frontier = self.problem.init_frontier()?;

        for (k, (start, end)) in block_spans(t, self.block_size).enumerate() {
            #[cfg(feature = "tracing")]
            let span = tracing::trace_span!("sweep_block", block = k, start, end);
            #[cfg(feature = "tracing")]
            let _enter = span.enter();
            #[cfg(not(feature = "tracing"))]
            let _ = k;

            for layer in start..end {
                self.problem.forward_step(layer, &mut frontier)?;
            }
            let summary = self.problem.summarize(end, &frontier);
            #[cfg(feature = "tracing")]
            tracing::trace!(?summary, "block done");
            on_block(BlockSummary {
                start,
                end,
                summary,
            });
        }

        Ok(frontier)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DpError;

    /// Running sum of layer indices; fails at an optional layer.
    struct Triangle {
        t: usize,
        fail_at: Option<usize>,
    }

    impl SweepProblem for Triangle {
        type Frontier = usize;
        type Summary = usize;
        type Output = usize;

        fn num_layers(&self) -> usize {
            self.t
        }
        fn init_frontier(&self) -> Result<Self::Frontier> {
            Ok(0)
        }
        fn forward_step(&self, layer: usize, frontier: &mut Self::Frontier) -> Result<()> {
            if self.fail_at == Some(layer) {
                return Err(DpError::CountOverflow { total: layer });
            }
            *frontier += layer;
            Ok(())
        }
        fn summarize(&self, _layer_end: usize, frontier: &Self::Frontier) -> Self::Summary {
            *frontier
        }
        fn finish(&self, frontier: Self::Frontier) -> Result<Self::Output> {
            Ok(frontier)
        }
    }

    #[test]
    fn block_size_does_not_change_output() {
        for b in 1..12 {
            let engine = SweepEngine::with_block_size(Triangle { t: 10, fail_at: None }, b);
            assert_eq!(engine.run().unwrap(), 45);
        }
    }

    #[test]
    fn summaries_track_block_ends() {
        let engine = SweepEngine::with_block_size(Triangle { t: 5, fail_at: None }, 2);
        let (out, blocks) = engine.run_with_summaries().unwrap();
        assert_eq!(out, 10);
        let ends: Vec<_> = blocks.iter().map(|b| (b.start, b.end, b.summary)).collect();
        assert_eq!(ends, vec![(0, 2, 1), (2, 4, 6), (4, 5, 10)]);
    }

    #[test]
    fn zero_layers_yields_initial_frontier() {
        let engine = SweepEngine::new(Triangle { t: 0, fail_at: None });
        let (out, blocks) = engine.run_with_summaries().unwrap();
        assert_eq!(out, 0);
        assert!(blocks.is_empty());
    }

    #[test]
    fn first_error_stops_the_sweep() {
        let engine = SweepEngine::new(Triangle { t: 8, fail_at: Some(3) });
        assert_eq!(engine.run(), Err(DpError::CountOverflow { total: 3 }));
    }

    #[test]
    #[should_panic(expected = "block_size must be positive")]
    fn with_block_size_panics_on_zero() {
        let _ = SweepEngine::with_block_size(Triangle { t: 1, fail_at: None }, 0);
    }
}
