//! Bounded-state dynamic programming with answer reconstruction.
//!
//! Every program in this crate is a *layered* DP swept strictly left to
//! right: one layer per input item (or per total), a frontier holding the DP
//! state between layers, and a read-out that may walk provenance backwards to
//! recover a concrete answer.
//!
//! ## Core idea
//! 1. Model the recurrence as a sequence of forward steps over a bounded
//!    frontier (an array indexed by partial sum, total or position).
//! 2. Implement [`SweepProblem`] for that recurrence.
//! 3. Let [`SweepEngine`] drive the sweep block by block and read the answer.
//!
//! ## Quick start
//! ```
//! use bounded_dp::problems::{step_count::count, subset_sum::{solve, SubsetOutcome}};
//!
//! let outcome = solve(&[1, 3, 2, 2, 1], 4).unwrap();
//! let sel = outcome.selection().unwrap();
//! assert_eq!(sel.indices, vec![1, 2]);
//! assert_eq!(solve(&[5, 5, 5], 1).unwrap(), SubsetOutcome::NoSolution);
//!
//! assert_eq!(count(11, &[3, 4]).unwrap(), 3);
//! ```
//!
//! ## Built-in problems
//! - 0/1 subset-sum with first-found provenance reconstruction
//! - 0/1 subset-sum with a minimum-cardinality selection
//! - Ordered step counting, full table and constant-memory ring
//! - Minimum-cost 1-or-2 hop path
//! - Longest contiguous monotone run
//! - Shortest closed tour over a few cities (bitmask DP)
//!
//! An unreachable subset-sum target is an ordinary [`SubsetOutcome`] value;
//! [`DpError`] is reserved for bad input and unrepresentable counts.

pub mod batch;
pub mod blocks;
pub mod config;
pub mod engine;
pub mod error;
pub mod limits;
pub mod parse;
pub mod problems;
pub mod traits;
pub mod utils;

pub use crate::config::SolveConfig;
pub use crate::engine::SweepEngine;
pub use crate::error::{DpError, Result};
pub use crate::limits::Limits;
pub use crate::problems::subset_sum::{Selection, SubsetOutcome};
pub use crate::traits::SweepProblem;
