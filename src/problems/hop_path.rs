//! Minimum-cost hop path with parent-pointer reconstruction.
//!
//! Platforms 1..N have heights; from platform `i` one may hop to `i+1` or
//! `i+2`, paying the absolute height difference. Layer `l` settles platform
//! `l+1`. Costs are accumulated in `u128`, which cannot overflow for any
//! `i64` heights.

use crate::config::SolveConfig;
use crate::error::{DpError, Result};
use crate::limits::Limits;
use crate::traits::SweepProblem;
use crate::utils::{one_based, try_table};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HopPath {
    pub cost: u128,
    /// 1-based platforms visited, from 1 to N.
    pub platforms: Vec<usize>,
}

#[derive(Clone, Debug)]
pub struct HopFrontier {
    cost: Vec<u128>,
    parent: Vec<usize>,
}

#[derive(Clone, Debug)]
pub struct HopProblem {
    heights: Vec<i64>,
}

impl HopProblem {
    pub fn new(heights: &[i64]) -> Result<Self> {
        Self::with_limits(heights, &Limits::default())
    }

    pub fn with_limits(heights: &[i64], limits: &Limits) -> Result<Self> {
        if heights.is_empty() {
            return Err(DpError::precondition("at least one platform is required"));
        }
        limits.check_len(heights.len())?;
        Ok(Self {
            heights: heights.to_vec(),
        })
    }

    #[inline]
    fn hop(&self, from: usize, to: usize) -> u128 {
        u128::from(self.heights[from].abs_diff(self.heights[to]))
    }
}

impl SweepProblem for HopProblem {
    type Frontier = HopFrontier;
    type Summary = u128;
    type Output = HopPath;

    fn num_layers(&self) -> usize {
        self.heights.len() - 1
    }

    fn init_frontier(&self) -> Result<Self::Frontier> {
        let n = self.heights.len();
        let mut cost = try_table(u128::MAX, n, "hop costs")?;
        cost[0] = 0;
        Ok(HopFrontier {
            cost,
            parent: try_table(0, n, "hop parents")?,
        })
    }

    fn forward_step(&self, layer: usize, f: &mut Self::Frontier) -> Result<()> {
        let i = layer + 1;
        f.cost[i] = f.cost[i - 1] + self.hop(i - 1, i);
        f.parent[i] = i - 1;
        if i >= 2 {
            let jump = f.cost[i - 2] + self.hop(i - 2, i);
            if jump < f.cost[i] {
                f.cost[i] = jump;
                f.parent[i] = i - 2;
            }
        }
        Ok(())
    }

    fn summarize(&self, layer_end: usize, f: &Self::Frontier) -> Self::Summary {
        f.cost[layer_end]
    }

    fn finish(&self, f: Self::Frontier) -> Result<Self::Output> {
        let last = self.heights.len() - 1;
        let mut path = vec![last];
        let mut at = last;
        while at != 0 {
            at = f.parent[at];
            path.push(at);
        }
        path.reverse();
        Ok(HopPath {
            cost: f.cost[last],
            platforms: one_based(path),
        })
    }
}

/// Cheapest way across the platforms.
///
/// ```
/// use bounded_dp::problems::hop_path::hop_path;
///
/// let path = hop_path(&[30, 10, 60, 10, 60, 50]).unwrap();
/// assert_eq!(path.cost, 40);
/// assert_eq!(path.platforms, vec![1, 3, 5, 6]);
/// ```
pub fn hop_path(heights: &[i64]) -> Result<HopPath> {
    hop_path_with(heights, &SolveConfig::default())
}

pub fn hop_path_with(heights: &[i64], config: &SolveConfig) -> Result<HopPath> {
    let problem = HopProblem::with_limits(heights, &config.limits)?;
    config.engine(problem).run()
}
