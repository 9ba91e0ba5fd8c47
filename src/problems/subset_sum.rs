//! 0/1 subset-sum with first-found provenance and backward reconstruction.
//!
//! Layers are the weights in presentation order; the frontier is a
//! [`ProvenanceTable`] with one slot per partial sum `0..=target`. A slot is
//! written the first time its sum becomes reachable and is never overwritten,
//! so every reachable slot points at a strictly smaller sum that was reachable
//! using earlier items only. Walking those pointers from the target back to 0
//! yields a valid selection.
//!
//! The selection is *a* valid one, not necessarily the smallest; see
//! [`min_subset`](crate::problems::min_subset) for the minimum-cardinality
//! variant.

use crate::config::SolveConfig;
use crate::error::{DpError, Result};
use crate::limits::Limits;
use crate::traits::SweepProblem;
use crate::utils::{one_based, try_table};

/// One entry of the provenance table.
///
/// Provenance is stored as two `u32`s so a slot takes 12 bytes; instances
/// whose target or item count do not fit are rejected up front.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Slot {
    /// Not reachable with the items processed so far.
    Unreached,
    /// Sum 0: reachable with the empty selection.
    Origin,
    /// First reached by adding item `item` (0-based) to `prev_sum`.
    Reached { item: u32, prev_sum: u32 },
}

impl Slot {
    #[inline]
    pub fn is_reachable(self) -> bool {
        !matches!(self, Slot::Unreached)
    }
}

/// Sum-indexed provenance array; slot 0 is always [`Slot::Origin`].
#[derive(Clone, Debug)]
pub struct ProvenanceTable {
    slots: Vec<Slot>,
}

impl ProvenanceTable {
    fn new(target: usize) -> Result<Self> {
        let mut slots = try_table(Slot::Unreached, target.saturating_add(1), "provenance table")?;
        slots[0] = Slot::Origin;
        Ok(Self { slots })
    }

    /// Largest sum the table tracks.
    pub fn target(&self) -> usize {
        self.slots.len() - 1
    }

    pub fn slot(&self, sum: usize) -> Option<Slot> {
        self.slots.get(sum).copied()
    }

    pub fn is_reachable(&self, sum: usize) -> bool {
        self.slot(sum).is_some_and(Slot::is_reachable)
    }

    /// Number of reachable sums, including 0.
    pub fn reachable_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_reachable()).count()
    }

    /// Follow provenance from `sum` back to 0, returning 0-based items in
    /// ascending order. At most `max_steps` items are collected.
    fn walk_back(&self, mut sum: usize, max_steps: usize) -> Result<Vec<usize>> {
        let mut picked = Vec::new();
        for _ in 0..=max_steps {
            match self.slot(sum) {
                Some(Slot::Origin) => {
                    picked.reverse();
                    return Ok(picked);
                }
                Some(Slot::Reached { item, prev_sum }) if (prev_sum as usize) < sum => {
                    picked.push(item as usize);
                    sum = prev_sum as usize;
                }
                _ => return Err(DpError::BrokenChain { sum }),
            }
        }
        Err(DpError::BrokenChain { sum })
    }
}

/// A reconstructed selection.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    /// 1-based positions in the weight sequence, ascending.
    pub indices: Vec<usize>,
    /// Sum of the selected weights (equals the target).
    pub sum: usize,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Result of a subset-sum solve. `NoSolution` is a normal outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubsetOutcome {
    Found(Selection),
    NoSolution,
}

impl SubsetOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SubsetOutcome::Found(_))
    }

    pub fn selection(&self) -> Option<&Selection> {
        match self {
            SubsetOutcome::Found(sel) => Some(sel),
            SubsetOutcome::NoSolution => None,
        }
    }

    pub fn into_selection(self) -> Option<Selection> {
        match self {
            SubsetOutcome::Found(sel) => Some(sel),
            SubsetOutcome::NoSolution => None,
        }
    }
}

/// A validated subset-sum instance.
#[derive(Clone, Debug)]
pub struct SubsetSum {
    weights: Vec<usize>,
    target: usize,
}

impl SubsetSum {
    pub fn new(weights: &[i64], target: i64) -> Result<Self> {
        Self::with_limits(weights, target, &Limits::default())
    }

    pub fn with_limits(weights: &[i64], target: i64, limits: &Limits) -> Result<Self> {
        limits.check_items(weights.len())?;
        let target = limits.check_target(target)?;
        if u32::try_from(target).is_err() || u32::try_from(weights.len()).is_err() {
            return Err(DpError::precondition(format!(
                "{} items with target {target} do not fit 32-bit provenance",
                weights.len()
            )));
        }
        let weights = validate_weights(weights, limits)?;
        Ok(Self { weights, target })
    }

    pub fn weights(&self) -> &[usize] {
        &self.weights
    }

    pub fn target(&self) -> usize {
        self.target
    }
}

pub(crate) fn validate_weights(weights: &[i64], limits: &Limits) -> Result<Vec<usize>> {
    weights
        .iter()
        .enumerate()
        .map(|(i, &w)| limits.check_weight(i + 1, w))
        .collect()
}

impl SweepProblem for SubsetSum {
    type Frontier = ProvenanceTable;
    type Summary = usize;
    type Output = SubsetOutcome;

    fn num_layers(&self) -> usize {
        self.weights.len()
    }

    fn init_frontier(&self) -> Result<Self::Frontier> {
        ProvenanceTable::new(self.target)
    }

    fn forward_step(&self, layer: usize, table: &mut Self::Frontier) -> Result<()> {
        let w = self.weights[layer];
        if w > self.target {
            return Ok(());
        }
        // Descending scan: every write lands at s + w > s, above all sums
        // still to be read in this pass, so reads see the pre-item state.
        for s in (0..=self.target - w).rev() {
            if table.slots[s].is_reachable() && !table.slots[s + w].is_reachable() {
                // Both fit: the constructor bounds target and item count by u32.
                table.slots[s + w] = Slot::Reached {
                    item: layer as u32,
                    prev_sum: s as u32,
                };
            }
        }
        Ok(())
    }

    fn summarize(&self, _layer_end: usize, table: &Self::Frontier) -> Self::Summary {
        table.reachable_count()
    }

    fn finish(&self, table: Self::Frontier) -> Result<Self::Output> {
        if !table.is_reachable(self.target) {
            return Ok(SubsetOutcome::NoSolution);
        }
        let items = table.walk_back(self.target, self.weights.len())?;
        Ok(SubsetOutcome::Found(Selection {
            indices: one_based(items),
            sum: self.target,
        }))
    }
}

/// Find a selection of weights summing exactly to `target`.
///
/// ```
/// use bounded_dp::problems::subset_sum::{solve, SubsetOutcome};
///
/// let outcome = solve(&[2, 2, 3], 7).unwrap();
/// assert_eq!(outcome.selection().unwrap().indices, vec![1, 2, 3]);
/// assert_eq!(solve(&[5, 5, 5], 1).unwrap(), SubsetOutcome::NoSolution);
/// ```
pub fn solve(weights: &[i64], target: i64) -> Result<SubsetOutcome> {
    solve_with(weights, target, &SolveConfig::default())
}

pub fn solve_with(weights: &[i64], target: i64, config: &SolveConfig) -> Result<SubsetOutcome> {
    let problem = SubsetSum::with_limits(weights, target, &config.limits)?;
    config.engine(problem).run()
}
