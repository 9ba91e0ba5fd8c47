//! Solver configuration: input limits plus engine tuning.

use crate::limits::Limits;
use crate::{SweepEngine, SweepProblem};

/// Configuration shared by the `solve_*`/`count_*` entry points.
///
/// ```
/// use bounded_dp::{Limits, SolveConfig};
///
/// let config = SolveConfig::default()
///     .with_limits(Limits::default().with_max_target(10_000))
///     .with_block_size(64);
/// assert_eq!(config.limits.max_target, 10_000);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolveConfig {
    pub limits: Limits,
    /// Layers per engine block; `None` picks ≈ √T.
    pub block_size: Option<usize>,
}

impl SolveConfig {
    pub fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = Some(block_size);
        self
    }

    /// Build an engine for `problem` honouring the configured block size.
    ///
    /// # Panics
    /// Panics if a block size of zero was configured.
    pub fn engine<P: SweepProblem>(&self, problem: P) -> SweepEngine<P> {
        match self.block_size {
            Some(b) => SweepEngine::with_block_size(problem, b),
            None => SweepEngine::new(problem),
        }
    }
}
