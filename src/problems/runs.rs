//! Longest contiguous monotone run.
//!
//! `run[i] = run[i-1] + 1` when the pair (a[i-1], a[i]) keeps the order,
//! else 1. Only the current run and the best one so far are carried.

use crate::config::SolveConfig;
use crate::error::Result;
use crate::limits::Limits;
use crate::traits::SweepProblem;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    NonDecreasing,
    NonIncreasing,
}

impl Direction {
    #[inline]
    fn keeps_order(self, prev: i64, next: i64) -> bool {
        match self {
            Direction::NonDecreasing => prev <= next,
            Direction::NonIncreasing => prev >= next,
        }
    }
}

/// The longest run found; `start` is 1-based (0 for empty input).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MonotoneRun {
    pub len: usize,
    pub start: usize,
}

#[derive(Clone, Copy, Debug)]
pub struct RunFrontier {
    current: MonotoneRun,
    best: MonotoneRun,
}

#[derive(Clone, Debug)]
pub struct RunProblem {
    values: Vec<i64>,
    direction: Direction,
}

impl RunProblem {
    pub fn new(values: &[i64], direction: Direction) -> Result<Self> {
        Self::with_limits(values, direction, &Limits::default())
    }

    pub fn with_limits(values: &[i64], direction: Direction, limits: &Limits) -> Result<Self> {
        limits.check_len(values.len())?;
        Ok(Self {
            values: values.to_vec(),
            direction,
        })
    }
}

impl SweepProblem for RunProblem {
    type Frontier = RunFrontier;
    type Summary = usize;
    type Output = MonotoneRun;

    fn num_layers(&self) -> usize {
        self.values.len().saturating_sub(1)
    }

    fn init_frontier(&self) -> Result<Self::Frontier> {
        let first = if self.values.is_empty() {
            MonotoneRun::default()
        } else {
            MonotoneRun { len: 1, start: 1 }
        };
        Ok(RunFrontier {
            current: first,
            best: first,
        })
    }

    fn forward_step(&self, layer: usize, f: &mut Self::Frontier) -> Result<()> {
        let i = layer + 1;
        if self.direction.keeps_order(self.values[i - 1], self.values[i]) {
            f.current.len += 1;
        } else {
            f.current = MonotoneRun { len: 1, start: i + 1 };
        }
        if f.current.len > f.best.len {
            f.best = f.current;
        }
        Ok(())
    }

    fn summarize(&self, _layer_end: usize, f: &Self::Frontier) -> Self::Summary {
        f.best.len
    }

    fn finish(&self, f: Self::Frontier) -> Result<Self::Output> {
        Ok(f.best)
    }
}

/// ```
/// use bounded_dp::problems::runs::{longest_run, Direction};
///
/// let run = longest_run(&[3, 1, 2, 2, 5, 4], Direction::NonDecreasing).unwrap();
/// assert_eq!((run.len, run.start), (4, 2));
/// ```
pub fn longest_run(values: &[i64], direction: Direction) -> Result<MonotoneRun> {
    longest_run_with(values, direction, &SolveConfig::default())
}

pub fn longest_run_with(
    values: &[i64],
    direction: Direction,
    config: &SolveConfig,
) -> Result<MonotoneRun> {
    let problem = RunProblem::with_limits(values, direction, &config.limits)?;
    config.engine(problem).run()
}
