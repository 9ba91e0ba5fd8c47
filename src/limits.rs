//! Input bounds checked by every solver constructor.
//!
//! The DP tables are sized by the target (or sequence length), so a caller
//! must be able to cap them. Values outside these bounds are rejected with
//! [`DpError::Precondition`] before any table is allocated.

use crate::error::{DpError, Result};

/// Upper bounds on solver inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limits {
    /// Maximum number of weights in a subset-sum instance.
    pub max_items: usize,
    /// Maximum subset-sum target or staircase height.
    pub max_target: usize,
    /// Maximum single step size for step counting.
    pub max_step: usize,
    /// Maximum sequence length for hop-path and monotone-run inputs.
    pub max_len: usize,
    /// Maximum items × (target + 1) cells (bits) for solvers that keep one row per item.
    pub max_cells: usize,
    /// Maximum number of cities for the shortest-tour DP (state grows as n × 2^n).
    pub max_cities: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_items: 10_000,
            max_target: 10_000_000,
            max_step: 1_000,
            max_len: 10_000_000,
            max_cells: 1 << 28,
            max_cities: 15,
        }
    }
}

impl Limits {
    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn with_max_target(mut self, max_target: usize) -> Self {
        self.max_target = max_target;
        self
    }

    pub fn with_max_step(mut self, max_step: usize) -> Self {
        self.max_step = max_step;
        self
    }

    pub fn with_max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    pub fn with_max_cells(mut self, max_cells: usize) -> Self {
        self.max_cells = max_cells;
        self
    }

    pub fn with_max_cities(mut self, max_cities: usize) -> Self {
        self.max_cities = max_cities;
        self
    }

    pub(crate) fn check_cells(&self, items: usize, target: usize) -> Result<()> {
        match items.checked_mul(target.saturating_add(1)) {
            Some(cells) if cells <= self.max_cells => Ok(()),
            _ => Err(DpError::precondition(format!(
                "{items} items × target {target} exceed the table limit of {} cells",
                self.max_cells
            ))),
        }
    }

    pub(crate) fn check_items(&self, n: usize) -> Result<()> {
        if n > self.max_items {
            return Err(DpError::precondition(format!(
                "{n} items exceed the limit of {}",
                self.max_items
            )));
        }
        Ok(())
    }

    pub(crate) fn check_len(&self, n: usize) -> Result<()> {
        if n > self.max_len {
            return Err(DpError::precondition(format!(
                "sequence of length {n} exceeds the limit of {}",
                self.max_len
            )));
        }
        Ok(())
    }

    pub(crate) fn check_cities(&self, n: usize) -> Result<()> {
        if n == 0 {
            return Err(DpError::precondition("at least one city is required"));
        }
        if n > self.max_cities {
            return Err(DpError::precondition(format!(
                "{n} cities exceed the limit of {}",
                self.max_cities
            )));
        }
        Ok(())
    }

    /// Validate a target and convert it to a table bound.
    pub(crate) fn check_target(&self, target: i64) -> Result<usize> {
        let t = usize::try_from(target)
            .map_err(|_| DpError::precondition(format!("target must be non-negative, got {target}")))?;
        if t > self.max_target {
            return Err(DpError::precondition(format!(
                "target {t} exceeds the limit of {}",
                self.max_target
            )));
        }
        Ok(t)
    }

    /// Validate a subset-sum weight (1-based `index` is only used in messages).
    pub(crate) fn check_weight(&self, index: usize, weight: i64) -> Result<usize> {
        if weight <= 0 {
            return Err(DpError::precondition(format!(
                "weight #{index} must be positive, got {weight}"
            )));
        }
        // A weight larger than any representable sum can never be selected.
        Ok(usize::try_from(weight).unwrap_or(usize::MAX))
    }

    pub(crate) fn check_step(&self, step: i64) -> Result<usize> {
        if step <= 0 {
            return Err(DpError::precondition(format!(
                "step sizes must be positive, got {step}"
            )));
        }
        let s = usize::try_from(step).unwrap_or(usize::MAX);
        if s > self.max_step {
            return Err(DpError::precondition(format!(
                "step size {s} exceeds the limit of {}",
                self.max_step
            )));
        }
        Ok(s)
    }
}
