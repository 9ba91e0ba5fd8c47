//! Whitespace-separated integer input and contest-style output.
//!
//! Line layout is irrelevant: the readers only look at the token stream.
//! Token positions in errors are 1-based.

use std::str::SplitWhitespace;

use crate::error::{DpError, ParseIssue, Result};
use crate::problems::hop_path::HopPath;
use crate::problems::subset_sum::SubsetOutcome;
use crate::problems::tsp::{Point, Tour};

struct Tokens<'a> {
    iter: SplitWhitespace<'a>,
    position: usize,
}

impl<'a> Tokens<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            iter: text.split_whitespace(),
            position: 0,
        }
    }

    fn next_i64(&mut self) -> Result<i64> {
        self.position += 1;
        let position = self.position;
        let tok = self.iter.next().ok_or(DpError::Parse {
            position,
            issue: ParseIssue::MissingToken,
        })?;
        tok.parse::<i64>().map_err(|_| DpError::Parse {
            position,
            issue: ParseIssue::Malformed(tok.to_string()),
        })
    }

    /// A length prefix: must be a non-negative integer.
    fn next_len(&mut self) -> Result<usize> {
        let value = self.next_i64()?;
        usize::try_from(value).map_err(|_| DpError::Parse {
            position: self.position,
            issue: ParseIssue::Malformed(value.to_string()),
        })
    }

    fn take(&mut self, n: usize) -> Result<Vec<i64>> {
        (0..n).map(|_| self.next_i64()).collect()
    }

    fn rest(&mut self) -> Result<Vec<i64>> {
        let mut out = Vec::new();
        while self.iter.clone().next().is_some() {
            out.push(self.next_i64()?);
        }
        Ok(out)
    }

    fn finish(mut self) -> Result<()> {
        match self.iter.next() {
            None => Ok(()),
            Some(tok) => Err(DpError::Parse {
                position: self.position + 1,
                issue: ParseIssue::Trailing(tok.to_string()),
            }),
        }
    }
}

/// `N S` followed by N weights. Returns `(weights, target)`.
pub fn parse_subset_input(text: &str) -> Result<(Vec<i64>, i64)> {
    let mut tokens = Tokens::new(text);
    let n = tokens.next_len()?;
    let target = tokens.next_i64()?;
    let weights = tokens.take(n)?;
    tokens.finish()?;
    Ok((weights, target))
}

/// A total followed by any number of step sizes. Returns `(target, steps)`.
pub fn parse_step_input(text: &str) -> Result<(i64, Vec<i64>)> {
    let mut tokens = Tokens::new(text);
    let target = tokens.next_i64()?;
    let steps = tokens.rest()?;
    Ok((target, steps))
}

/// `N` followed by N values.
pub fn parse_sequence_input(text: &str) -> Result<Vec<i64>> {
    let mut tokens = Tokens::new(text);
    let n = tokens.next_len()?;
    let values = tokens.take(n)?;
    tokens.finish()?;
    Ok(values)
}

/// `N` followed by N `x y` coordinate pairs.
pub fn parse_points_input(text: &str) -> Result<Vec<Point>> {
    let mut tokens = Tokens::new(text);
    let n = tokens.next_len()?;
    let points = (0..n)
        .map(|_| -> Result<Point> { Ok((tokens.next_i64()?, tokens.next_i64()?)) })
        .collect::<Result<Vec<_>>>()?;
    tokens.finish()?;
    Ok(points)
}

fn join(indices: &[usize]) -> String {
    indices
        .iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// `-1` when there is no solution, else the count and the indices on two lines.
pub fn format_outcome(outcome: &SubsetOutcome) -> String {
    match outcome {
        SubsetOutcome::NoSolution => "-1".to_string(),
        SubsetOutcome::Found(sel) => format!("{}\n{}", sel.len(), join(&sel.indices)),
    }
}

/// Number of platforms visited, then the platforms.
pub fn format_hop_path(path: &HopPath) -> String {
    format!("{}\n{}", path.platforms.len(), join(&path.platforms))
}

/// Tour length with twelve decimals.
pub fn format_tour(tour: &Tour) -> String {
    format!("{:.12}", tour.length)
}

/// The visiting order on one line.
pub fn format_tour_order(tour: &Tour) -> String {
    join(&tour.cities)
}
