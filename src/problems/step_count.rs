//! Ordered step counting ("how many ways to climb the stairs").
//!
//! `ways[t] = Σ ways[t - k]` over the allowed step sizes `k <= t`, seeded with
//! `ways[0] = 1`. Layer `l` produces `ways[l + 1]` from strictly smaller
//! totals, so one left-to-right sweep is enough.
//!
//! Two frontiers are provided:
//! - [`StepCount`] keeps the whole table.
//! - [`WindowedStepCount`] keeps `max(steps) + 1` entries in a ring indexed by
//!   `total mod window`. No recurrence looks back further than the largest
//!   step, so the ring always still holds every value it reads.
//!
//! Both variants produce identical counts, overflow included.

use crate::config::SolveConfig;
use crate::error::{DpError, Result};
use crate::limits::Limits;
use crate::traits::SweepProblem;
use crate::utils::try_table;

/// How counts are accumulated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Arithmetic {
    /// 128-bit counts; overflow is an error.
    #[default]
    Exact,
    /// Counts reduced modulo `m`.
    Modulo(u64),
}

impl Arithmetic {
    fn validate(self) -> Result<Self> {
        match self {
            Arithmetic::Modulo(0) => Err(DpError::precondition("modulus must be at least 1")),
            a => Ok(a),
        }
    }

    #[inline]
    fn one(self) -> u128 {
        match self {
            Arithmetic::Exact => 1,
            Arithmetic::Modulo(m) => 1 % u128::from(m),
        }
    }

    #[inline]
    fn add(self, a: u128, b: u128, total: usize) -> Result<u128> {
        match self {
            Arithmetic::Exact => a.checked_add(b).ok_or(DpError::CountOverflow { total }),
            // Both operands are below m <= u64::MAX, so the sum fits.
            Arithmetic::Modulo(m) => Ok((a + b) % u128::from(m)),
        }
    }
}

/// A set of distinct positive step sizes, kept sorted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepSet {
    steps: Vec<usize>,
}

impl StepSet {
    pub fn new(steps: &[i64], limits: &Limits) -> Result<Self> {
        let mut sorted = steps
            .iter()
            .map(|&k| limits.check_step(k))
            .collect::<Result<Vec<_>>>()?;
        sorted.sort_unstable();
        if let Some(pair) = sorted.windows(2).find(|p| p[0] == p[1]) {
            return Err(DpError::precondition(format!(
                "step size {} listed more than once",
                pair[0]
            )));
        }
        Ok(Self { steps: sorted })
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.steps
    }

    pub fn max_step(&self) -> usize {
        self.steps.last().copied().unwrap_or(0)
    }
}

#[derive(Clone, Debug)]
struct Recurrence {
    target: usize,
    steps: StepSet,
    arithmetic: Arithmetic,
}

impl Recurrence {
    fn new(target: i64, steps: &[i64], limits: &Limits) -> Result<Self> {
        Ok(Self {
            target: limits.check_target(target)?,
            steps: StepSet::new(steps, limits)?,
            arithmetic: Arithmetic::Exact,
        })
    }

    /// Combine earlier totals into `ways[t]`; `lookup(j)` returns `ways[j]`.
    #[inline]
    fn ways_at(&self, t: usize, lookup: impl Fn(usize) -> u128) -> Result<u128> {
        let mut acc = 0u128;
        for &k in self.steps.as_slice().iter().take_while(|&&k| k <= t) {
            acc = self.arithmetic.add(acc, lookup(t - k), t)?;
        }
        Ok(acc)
    }
}

/// Full-table step counting.
#[derive(Clone, Debug)]
pub struct StepCount {
    rec: Recurrence,
}

/// Every total's count, `ways[0..=target]`.
#[derive(Clone, Debug)]
pub struct CountTable {
    pub ways: Vec<u128>,
}

impl StepCount {
    pub fn new(target: i64, steps: &[i64]) -> Result<Self> {
        Self::with_limits(target, steps, &Limits::default())
    }

    pub fn with_limits(target: i64, steps: &[i64], limits: &Limits) -> Result<Self> {
        Ok(Self {
            rec: Recurrence::new(target, steps, limits)?,
        })
    }

    pub fn with_arithmetic(mut self, arithmetic: Arithmetic) -> Result<Self> {
        self.rec.arithmetic = arithmetic.validate()?;
        Ok(self)
    }

    pub fn steps(&self) -> &StepSet {
        &self.rec.steps
    }
}

impl SweepProblem for StepCount {
    type Frontier = CountTable;
    type Summary = u128;
    type Output = u128;

    fn num_layers(&self) -> usize {
        self.rec.target
    }

    fn init_frontier(&self) -> Result<Self::Frontier> {
        let mut ways = try_table(0u128, self.rec.target.saturating_add(1), "count table")?;
        ways[0] = self.rec.arithmetic.one();
        Ok(CountTable { ways })
    }

    fn forward_step(&self, layer: usize, table: &mut Self::Frontier) -> Result<()> {
        let t = layer + 1;
        let value = self.rec.ways_at(t, |j| table.ways[j])?;
        table.ways[t] = value;
        Ok(())
    }

    fn summarize(&self, layer_end: usize, table: &Self::Frontier) -> Self::Summary {
        table.ways[layer_end]
    }

    fn finish(&self, table: Self::Frontier) -> Result<Self::Output> {
        Ok(table.ways[self.rec.target])
    }
}

/// Constant-memory step counting over a ring of `max(steps) + 1` entries.
#[derive(Clone, Debug)]
pub struct WindowedStepCount {
    rec: Recurrence,
}

#[derive(Clone, Debug)]
pub struct CountWindow {
    slots: Vec<u128>,
}

impl CountWindow {
    #[inline]
    fn get(&self, total: usize) -> u128 {
        self.slots[total % self.slots.len()]
    }

    #[inline]
    fn set(&mut self, total: usize, value: u128) {
        let n = self.slots.len();
        self.slots[total % n] = value;
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl WindowedStepCount {
    pub fn new(target: i64, steps: &[i64]) -> Result<Self> {
        Self::with_limits(target, steps, &Limits::default())
    }

    pub fn with_limits(target: i64, steps: &[i64], limits: &Limits) -> Result<Self> {
        Ok(Self {
            rec: Recurrence::new(target, steps, limits)?,
        })
    }

    pub fn with_arithmetic(mut self, arithmetic: Arithmetic) -> Result<Self> {
        self.rec.arithmetic = arithmetic.validate()?;
        Ok(self)
    }

    /// Ring size: one more than the largest step.
    pub fn window(&self) -> usize {
        self.rec.steps.max_step() + 1
    }
}

impl SweepProblem for WindowedStepCount {
    type Frontier = CountWindow;
    type Summary = u128;
    type Output = u128;

    fn num_layers(&self) -> usize {
        self.rec.target
    }

    fn init_frontier(&self) -> Result<Self::Frontier> {
        let mut window = CountWindow {
            slots: try_table(0u128, self.window(), "count window")?,
        };
        window.set(0, self.rec.arithmetic.one());
        Ok(window)
    }

    fn forward_step(&self, layer: usize, window: &mut Self::Frontier) -> Result<()> {
        let t = layer + 1;
        let value = self.rec.ways_at(t, |j| window.get(j))?;
        window.set(t, value);
        Ok(())
    }

    fn summarize(&self, layer_end: usize, window: &Self::Frontier) -> Self::Summary {
        window.get(layer_end)
    }

    fn finish(&self, window: Self::Frontier) -> Result<Self::Output> {
        Ok(window.get(self.rec.target))
    }
}

/// Count ordered compositions of `target` using `steps`, exactly.
///
/// ```
/// use bounded_dp::problems::step_count::count;
///
/// assert_eq!(count(11, &[3, 4]).unwrap(), 3);
/// assert_eq!(count(0, &[]).unwrap(), 1);
/// assert_eq!(count(5, &[]).unwrap(), 0);
/// ```
pub fn count(target: i64, steps: &[i64]) -> Result<u128> {
    count_with(target, steps, Arithmetic::Exact, &SolveConfig::default())
}

/// Same as [`count`] with the constant-memory window.
pub fn count_windowed(target: i64, steps: &[i64]) -> Result<u128> {
    count_windowed_with(target, steps, Arithmetic::Exact, &SolveConfig::default())
}

pub fn count_with(
    target: i64,
    steps: &[i64],
    arithmetic: Arithmetic,
    config: &SolveConfig,
) -> Result<u128> {
    let problem = StepCount::with_limits(target, steps, &config.limits)?.with_arithmetic(arithmetic)?;
    config.engine(problem).run()
}

pub fn count_windowed_with(
    target: i64,
    steps: &[i64],
    arithmetic: Arithmetic,
    config: &SolveConfig,
) -> Result<u128> {
    let problem =
        WindowedStepCount::with_limits(target, steps, &config.limits)?.with_arithmetic(arithmetic)?;
    config.engine(problem).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SweepEngine;

    #[test]
    fn two_and_three_step_examples() {
        assert_eq!(count(11, &[3, 4]).unwrap(), 3);
        assert_eq!(count(10, &[2, 3, 4]).unwrap(), 17);
        // 3+4, 4+3, 2+2+3, 2+3+2, 3+2+2
        assert_eq!(count(7, &[2, 3, 4]).unwrap(), 5);
        assert_eq!(count(7, &[4, 3, 2]).unwrap(), 5);
    }

    #[test]
    fn raised_target_limit_reports_instead_of_aborting() {
        let open = SolveConfig::default().with_limits(Limits::default().with_max_target(usize::MAX));
        let err = count_with(i64::MAX, &[1, 2], Arithmetic::Exact, &open).unwrap_err();
        assert!(matches!(err, DpError::Precondition(msg) if msg.contains("count table")));
    }

    #[test]
    fn empty_step_set_boundaries() {
        assert_eq!(count(0, &[]).unwrap(), 1);
        assert_eq!(count(1, &[]).unwrap(), 0);
        assert_eq!(count_windowed(0, &[]).unwrap(), 1);
        assert_eq!(count_windowed(9, &[]).unwrap(), 0);
    }

    #[test]
    fn fibonacci_with_unit_steps() {
        assert_eq!(count(10, &[1, 2]).unwrap(), 89);
        assert_eq!(count_windowed(10, &[1, 2]).unwrap(), 89);
    }

    #[test]
    fn window_is_max_step_plus_one() {
        let p = WindowedStepCount::new(30, &[7, 2, 5]).unwrap();
        assert_eq!(p.window(), 8);
        let f = p.init_frontier().unwrap();
        assert_eq!(f.len(), 8);
    }

    #[test]
    fn exact_overflow_is_reported_identically() {
        // Fibonacci(187) > u128::MAX.
        let full = count(200, &[1, 2]);
        let ring = count_windowed(200, &[1, 2]);
        assert!(matches!(full, Err(DpError::CountOverflow { .. })));
        assert_eq!(full, ring);
    }

    #[test]
    fn modular_counts_stay_reduced() {
        let m = 1_000_000_007;
        let config = SolveConfig::default();
        let full = count_with(1000, &[1, 2], Arithmetic::Modulo(m), &config).unwrap();
        let ring = count_windowed_with(1000, &[1, 2], Arithmetic::Modulo(m), &config).unwrap();
        assert_eq!(full, ring);
        assert!(full < u128::from(m));
        assert_eq!(count_with(0, &[1], Arithmetic::Modulo(1), &config).unwrap(), 0);
    }

    #[test]
    fn rejects_bad_step_sets() {
        assert!(matches!(count(5, &[2, 2]), Err(DpError::Precondition(_))));
        assert!(matches!(count(5, &[0, 1]), Err(DpError::Precondition(_))));
        assert!(matches!(count(5, &[-1]), Err(DpError::Precondition(_))));
        assert!(matches!(count(-5, &[1]), Err(DpError::Precondition(_))));
        let problem = StepCount::new(5, &[1]).unwrap();
        assert!(problem.with_arithmetic(Arithmetic::Modulo(0)).is_err());
    }

    #[test]
    fn block_summaries_expose_prefix_counts() {
        let problem = StepCount::new(6, &[1, 2]).unwrap();
        let (out, blocks) = SweepEngine::with_block_size(problem, 2).run_with_summaries().unwrap();
        assert_eq!(out, 13);
        let prefix: Vec<_> = blocks.iter().map(|b| b.summary).collect();
        assert_eq!(prefix, vec![2, 5, 13]);
    }
}
