//! Solving many independent instances at once.
//!
//! Every instance gets its own engine and frontier; nothing is shared. With
//! the `parallel` feature the instances are spread over rayon's pool, and the
//! results come back in input order either way.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::config::SolveConfig;
use crate::error::Result;
use crate::problems::step_count::{count_with, Arithmetic};
use crate::problems::subset_sum::{solve_with, SubsetOutcome};

/// One subset-sum query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubsetQuery {
    pub weights: Vec<i64>,
    pub target: i64,
}

/// One step-counting query.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepQuery {
    pub target: i64,
    pub steps: Vec<i64>,
}

#[cfg(feature = "parallel")]
pub fn solve_all(queries: &[SubsetQuery], config: &SolveConfig) -> Vec<Result<SubsetOutcome>> {
    queries
        .par_iter()
        .map(|q| solve_with(&q.weights, q.target, config))
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub fn solve_all(queries: &[SubsetQuery], config: &SolveConfig) -> Vec<Result<SubsetOutcome>> {
    queries
        .iter()
        .map(|q| solve_with(&q.weights, q.target, config))
        .collect()
}

#[cfg(feature = "parallel")]
pub fn count_all(
    queries: &[StepQuery],
    arithmetic: Arithmetic,
    config: &SolveConfig,
) -> Vec<Result<u128>> {
    queries
        .par_iter()
        .map(|q| count_with(q.target, &q.steps, arithmetic, config))
        .collect()
}

#[cfg(not(feature = "parallel"))]
pub fn count_all(
    queries: &[StepQuery],
    arithmetic: Arithmetic,
    config: &SolveConfig,
) -> Vec<Result<u128>> {
    queries
        .iter()
        .map(|q| count_with(q.target, &q.steps, arithmetic, config))
        .collect()
}
