//! Shortest closed tour through every city (bitmask DP).
//!
//! `dp[mask][v]` is the shortest path that leaves city 0, visits exactly the
//! cities in `mask` and stops at `v`. Layer `l` settles mask `l + 1` and
//! pushes it into every mask one city larger. Those masks are larger numbers,
//! so by the time a mask is processed every path into it has been relaxed.
//!
//! The state has `n × 2^n` entries; the city count is capped by
//! [`Limits::max_cities`].

use crate::config::SolveConfig;
use crate::error::{DpError, Result};
use crate::limits::Limits;
use crate::traits::SweepProblem;
use crate::utils::{one_based, try_table};

/// A city on the integer grid.
pub type Point = (i64, i64);

/// Best closed tour.
#[derive(Clone, Debug, PartialEq)]
pub struct Tour {
    /// Euclidean length, including the hop back to city 1.
    pub length: f64,
    /// 1-based visiting order starting at city 1; the tour closes back to it.
    pub cities: Vec<usize>,
}

#[derive(Clone, Debug)]
pub struct TourFrontier {
    /// Row-major `dp[mask * n + v]`, infinite while unreached.
    dist: Vec<f64>,
    /// City preceding `v` on the best path for `(mask, v)`.
    prev: Vec<u32>,
}

/// A validated set of cities with its distance matrix.
#[derive(Clone, Debug)]
pub struct TourProblem {
    n: usize,
    states: usize,
    dist: Vec<f64>,
}

fn distance(a: Point, b: Point) -> f64 {
    (a.0 as f64 - b.0 as f64).hypot(a.1 as f64 - b.1 as f64)
}

impl TourProblem {
    pub fn new(points: &[Point]) -> Result<Self> {
        Self::with_limits(points, &Limits::default())
    }

    pub fn with_limits(points: &[Point], limits: &Limits) -> Result<Self> {
        let n = points.len();
        limits.check_cities(n)?;
        let states = u32::try_from(n)
            .ok()
            .and_then(|bits| 1usize.checked_shl(bits))
            .and_then(|masks| masks.checked_mul(n))
            .ok_or_else(|| DpError::precondition(format!("{n} cities do not fit a bitmask state")))?;
        let dist = points
            .iter()
            .flat_map(|&a| points.iter().map(move |&b| distance(a, b)))
            .collect();
        Ok(Self { n, states, dist })
    }

    pub fn num_cities(&self) -> usize {
        self.n
    }

    #[inline]
    fn d(&self, from: usize, to: usize) -> f64 {
        self.dist[from * self.n + to]
    }

    #[inline]
    fn at(&self, mask: usize, v: usize) -> usize {
        mask * self.n + v
    }

    fn full_mask(&self) -> usize {
        (1 << self.n) - 1
    }
}

impl SweepProblem for TourProblem {
    type Frontier = TourFrontier;
    type Summary = Option<f64>;
    type Output = Tour;

    fn num_layers(&self) -> usize {
        self.full_mask()
    }

    fn init_frontier(&self) -> Result<Self::Frontier> {
        let mut dist = try_table(f64::INFINITY, self.states, "tour table")?;
        dist[self.at(1, 0)] = 0.0;
        Ok(TourFrontier {
            dist,
            prev: try_table(0, self.states, "tour parents")?,
        })
    }

    fn forward_step(&self, layer: usize, f: &mut Self::Frontier) -> Result<()> {
        let mask = layer + 1;
        // Every path starts at city 0.
        if mask & 1 == 0 {
            return Ok(());
        }
        for u in (0..self.n).filter(|&u| mask & (1 << u) != 0) {
            let here = f.dist[self.at(mask, u)];
            if !here.is_finite() {
                continue;
            }
            for v in (0..self.n).filter(|&v| mask & (1 << v) == 0) {
                let cell = self.at(mask | (1 << v), v);
                let cand = here + self.d(u, v);
                if cand < f.dist[cell] {
                    f.dist[cell] = cand;
                    f.prev[cell] = u as u32;
                }
            }
        }
        Ok(())
    }

    /// Shortest partial path over the last settled mask.
    fn summarize(&self, layer_end: usize, f: &Self::Frontier) -> Self::Summary {
        (0..self.n)
            .map(|v| f.dist[self.at(layer_end, v)])
            .filter(|d| d.is_finite())
            .reduce(f64::min)
    }

    fn finish(&self, f: Self::Frontier) -> Result<Self::Output> {
        if self.n == 1 {
            return Ok(Tour {
                length: 0.0,
                cities: vec![1],
            });
        }
        let full = self.full_mask();
        let mut last = 1;
        let mut length = f64::INFINITY;
        for u in 1..self.n {
            let closed = f.dist[self.at(full, u)] + self.d(u, 0);
            if closed < length {
                length = closed;
                last = u;
            }
        }

        let mut order = vec![last];
        let (mut mask, mut v) = (full, last);
        for _ in 1..self.n {
            let p = f.prev[self.at(mask, v)] as usize;
            mask ^= 1 << v;
            v = p;
            order.push(v);
        }
        if mask != 1 || v != 0 {
            return Err(DpError::BrokenChain { sum: mask });
        }
        order.reverse();
        Ok(Tour {
            length,
            cities: one_based(order),
        })
    }
}

/// Shortest tour visiting every point once and returning to the first.
///
/// ```
/// use bounded_dp::problems::tsp::shortest_tour;
///
/// let tour = shortest_tour(&[(0, 0), (0, 1), (1, 0), (1, 1)]).unwrap();
/// assert!((tour.length - 4.0).abs() < 1e-9);
/// assert_eq!(tour.cities, vec![1, 3, 4, 2]);
/// ```
pub fn shortest_tour(points: &[Point]) -> Result<Tour> {
    shortest_tour_with(points, &SolveConfig::default())
}

pub fn shortest_tour_with(points: &[Point], config: &SolveConfig) -> Result<Tour> {
    let problem = TourProblem::with_limits(points, &config.limits)?;
    config.engine(problem).run()
}
