//! 0/1 subset-sum returning a selection with the fewest items.
//!
//! A first-found provenance table cannot be reused here: improving a sum with
//! a later item would rewrite a pointer that an earlier chain depends on and
//! the walk could select an item twice. Instead the frontier keeps a 1-D best
//! count per sum plus one "taken" row per item, and reconstruction replays
//! the rows from the last item to the first. The rows are packed 64 flags
//! per word, so they take N × (target + 1) bits, bounded by
//! [`Limits::max_cells`].

use crate::config::SolveConfig;
use crate::error::{DpError, Result};
use crate::limits::Limits;
use crate::problems::subset_sum::{validate_weights, Selection, SubsetOutcome};
use crate::traits::SweepProblem;
use crate::utils::{one_based, try_table};

const UNREACHED: usize = usize::MAX;

/// Flat bit array, one bit per (item, sum) cell.
#[derive(Clone, Debug)]
struct TakenBits {
    words: Vec<u64>,
}

impl TakenBits {
    fn new(cells: usize) -> Result<Self> {
        Ok(Self {
            words: try_table(0u64, cells.div_ceil(64), "taken rows")?,
        })
    }

    #[inline]
    fn set(&mut self, cell: usize) {
        self.words[cell / 64] |= 1u64 << (cell % 64);
    }

    #[inline]
    fn get(&self, cell: usize) -> bool {
        self.words[cell / 64] & (1u64 << (cell % 64)) != 0
    }
}

#[derive(Clone, Debug)]
pub struct MinCountFrontier {
    /// best[s] = fewest items summing to s so far, or `UNREACHED`.
    best: Vec<usize>,
    /// Row-major, one row of `target + 1` bits per item.
    taken: TakenBits,
}

impl MinCountFrontier {
    /// Fewest items reaching `sum` among the items processed so far.
    pub fn best(&self, sum: usize) -> Option<usize> {
        self.best.get(sum).copied().filter(|&c| c != UNREACHED)
    }
}

/// A validated minimum-cardinality subset-sum instance.
#[derive(Clone, Debug)]
pub struct MinSubsetSum {
    weights: Vec<usize>,
    target: usize,
}

impl MinSubsetSum {
    pub fn new(weights: &[i64], target: i64) -> Result<Self> {
        Self::with_limits(weights, target, &Limits::default())
    }

    pub fn with_limits(weights: &[i64], target: i64, limits: &Limits) -> Result<Self> {
        limits.check_items(weights.len())?;
        let target = limits.check_target(target)?;
        limits.check_cells(weights.len(), target)?;
        let weights = validate_weights(weights, limits)?;
        Ok(Self { weights, target })
    }

    fn width(&self) -> usize {
        self.target + 1
    }
}

impl SweepProblem for MinSubsetSum {
    type Frontier = MinCountFrontier;
    type Summary = Option<usize>;
    type Output = SubsetOutcome;

    fn num_layers(&self) -> usize {
        self.weights.len()
    }

    fn init_frontier(&self) -> Result<Self::Frontier> {
        let mut best = try_table(UNREACHED, self.width(), "best-count row")?;
        best[0] = 0;
        // The constructor checked this product against `max_cells`.
        let taken = TakenBits::new(self.weights.len() * self.width())?;
        Ok(MinCountFrontier { best, taken })
    }

    fn forward_step(&self, layer: usize, f: &mut Self::Frontier) -> Result<()> {
        let row = layer * self.width();
        let w = self.weights[layer];
        if w > self.target {
            return Ok(());
        }
        for s in (0..=self.target - w).rev() {
            let from = f.best[s];
            // Strict improvement only: ties keep the earlier selection.
            if from != UNREACHED && from + 1 < f.best[s + w] {
                f.best[s + w] = from + 1;
                f.taken.set(row + s + w);
            }
        }
        Ok(())
    }

    fn summarize(&self, _layer_end: usize, f: &Self::Frontier) -> Self::Summary {
        f.best(self.target)
    }

    fn finish(&self, f: Self::Frontier) -> Result<Self::Output> {
        let Some(count) = f.best(self.target) else {
            return Ok(SubsetOutcome::NoSolution);
        };
        let width = self.width();
        let mut sum = self.target;
        let mut picked = Vec::with_capacity(count);
        for item in (0..self.weights.len()).rev() {
            if f.taken.get(item * width + sum) {
                picked.push(item);
                sum -= self.weights[item];
            }
        }
        if sum != 0 || picked.len() != count {
            return Err(DpError::BrokenChain { sum });
        }
        picked.reverse();
        Ok(SubsetOutcome::Found(Selection {
            indices: one_based(picked),
            sum: self.target,
        }))
    }
}

/// Find a selection with the fewest weights summing exactly to `target`.
///
/// ```
/// use bounded_dp::problems::min_subset::solve_min;
///
/// let sel = solve_min(&[1, 1, 1, 3], 4).unwrap().into_selection().unwrap();
/// assert_eq!(sel.indices, vec![1, 4]);
/// ```
pub fn solve_min(weights: &[i64], target: i64) -> Result<SubsetOutcome> {
    solve_min_with(weights, target, &SolveConfig::default())
}

pub fn solve_min_with(weights: &[i64], target: i64, config: &SolveConfig) -> Result<SubsetOutcome> {
    let problem = MinSubsetSum::with_limits(weights, target, &config.limits)?;
    config.engine(problem).run()
}
