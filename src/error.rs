//! Error taxonomy shared by every solver in the crate.
//!
//! An unreachable subset-sum target is *not* an error: it is reported as
//! [`SubsetOutcome::NoSolution`](crate::problems::subset_sum::SubsetOutcome).

use thiserror::Error;

pub type Result<T> = std::result::Result<T, DpError>;

/// Why a token could not be turned into a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseIssue {
    /// The input ended before the token was read.
    MissingToken,
    /// The token is not a valid integer.
    Malformed(String),
    /// Tokens remain after the last expected value.
    Trailing(String),
}

impl std::fmt::Display for ParseIssue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseIssue::MissingToken => write!(f, "missing token"),
            ParseIssue::Malformed(tok) => write!(f, "malformed integer '{tok}'"),
            ParseIssue::Trailing(tok) => write!(f, "unexpected trailing token '{tok}'"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DpError {
    #[error("parse error at token {position}: {issue}")]
    Parse { position: usize, issue: ParseIssue },

    #[error("precondition violated: {0}")]
    Precondition(String),

    #[error("count overflowed 128 bits at total {total}")]
    CountOverflow { total: usize },

    #[error("provenance chain broken at sum {sum}")]
    BrokenChain { sum: usize },
}

impl DpError {
    pub(crate) fn precondition(msg: impl Into<String>) -> Self {
        DpError::Precondition(msg.into())
    }

    /// True for errors caused by the caller's input rather than the solver.
    pub fn is_input_error(&self) -> bool {
        matches!(self, DpError::Parse { .. } | DpError::Precondition(_))
    }
}
