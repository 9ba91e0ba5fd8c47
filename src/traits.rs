//! Core trait definitions for layered, forward-only dynamic programs.
//!
//! To run your DP through [`SweepEngine`](crate::engine::SweepEngine),
//! implement [`SweepProblem`] for a struct that captures one validated
//! instance (weights, target, step sizes, ...).
//!
//! The model:
//! - Layers 0..T, each one a single forward transition.
//! - A frontier holding all DP state between two layers.
//! - Per-block summaries: a compact view of the frontier at the end of a block,
//!   used for tracing and inspection only.
//! - A final read-out that turns the frontier at layer T into the answer,
//!   including any backward reconstruction.

use crate::error::Result;

/// Trait for a forward-swept dynamic program instance.
///
/// Semantics:
/// - There are `T = num_layers()` layers.
/// - `forward_step(i, frontier)` advances the frontier from layer `i` to `i+1`
///   and may only read state derived from layers `< i+1`.
/// - After T steps, `finish` consumes the frontier and produces the output.
pub trait SweepProblem {
    /// DP state carried between layers (row, table, window, ...).
    type Frontier;

    /// Compact per-block view of the frontier.
    type Summary: Clone + std::fmt::Debug;

    /// The answer produced by `finish`.
    type Output;

    /// Number of forward steps `T`.
    fn num_layers(&self) -> usize;

    /// Frontier at layer 0.
    ///
    /// Fails when the state for this instance cannot be allocated.
    fn init_frontier(&self) -> Result<Self::Frontier>;

    /// Advance the frontier by one layer.
    ///
    /// Returns an error only for arithmetic the instance cannot represent
    /// (e.g. an exact count overflowing); the sweep stops at the first error.
    fn forward_step(&self, layer: usize, frontier: &mut Self::Frontier) -> Result<()>;

    /// Summarise the frontier after `layer_end` layers have been applied.
    fn summarize(&self, layer_end: usize, frontier: &Self::Frontier) -> Self::Summary;

    /// Read the answer out of the final frontier.
    fn finish(&self, frontier: Self::Frontier) -> Result<Self::Output>;
}
