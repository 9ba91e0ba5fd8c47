//! Problem implementations for the sweep engine.
//!
//! Each module implements [`SweepProblem`](crate::traits::SweepProblem) for
//! one bounded-state DP and offers a plain function entry point:
//! - [`subset_sum`]  : 0/1 subset-sum with first-found reconstruction.
//! - [`min_subset`]  : 0/1 subset-sum with a minimum-cardinality selection.
//! - [`step_count`]  : ordered step counting, full table and ring window.
//! - [`hop_path`]    : minimum-cost 1-or-2 hop path with reconstruction.
//! - [`runs`]        : longest contiguous monotone run.
//! - [`tsp`]         : shortest closed tour over visited-set bitmasks.

pub mod hop_path;
pub mod min_subset;
pub mod runs;
pub mod step_count;
pub mod subset_sum;
pub mod tsp;
