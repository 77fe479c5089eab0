//! Normalized query descriptor.
//!
//! # Responsibility
//! - Carry the interpreter's structured output into the query engine.
//! - Keep the kind/count pairing explicit in one place.
//!
//! # Invariants
//! - `count` is present if and only if `kind` is `Top` or `Bottom`.
//! - `count`, when present, is at least 1.
//! - `kind == None` implies `count`, `month` and `year` are all absent.
//! - `month`, when present, is within 1-12.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Query category produced by the command interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryKind {
    /// Highest sales first, limited to `count`.
    Top,
    /// Lowest sales first, limited to `count`.
    Bottom,
    /// Filter only, most recent first.
    All,
    /// Nothing usable was recognized.
    None,
}

impl QueryKind {
    /// Stable lowercase label used in logs and response envelopes.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::All => "all",
            Self::None => "none",
        }
    }

    /// Whether this kind ranks by sales and therefore needs a count.
    pub fn is_ranked(self) -> bool {
        matches!(self, Self::Top | Self::Bottom)
    }
}

impl Display for QueryKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured `{kind, count, month, year}` descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NormalizedQuery {
    pub kind: QueryKind,
    pub count: Option<u32>,
    pub month: Option<u32>,
    pub year: Option<i32>,
}

/// Violation of the [`NormalizedQuery`] invariants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValidationError {
    /// `Top`/`Bottom` without a count, or a zero count.
    MissingCount(QueryKind),
    /// `All`/`None` carrying a count.
    UnexpectedCount(QueryKind),
    /// `None` carrying a month or year filter.
    FilterOnUnrecognized,
    MonthOutOfRange(u32),
}

impl Display for QueryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingCount(kind) => write!(f, "`{kind}` query requires a positive count"),
            Self::UnexpectedCount(kind) => write!(f, "`{kind}` query must not carry a count"),
            Self::FilterOnUnrecognized => {
                write!(f, "unrecognized query must not carry month/year filters")
            }
            Self::MonthOutOfRange(month) => write!(f, "month {month} is outside 1-12"),
        }
    }
}

impl Error for QueryValidationError {}

impl NormalizedQuery {
    /// Highest-selling `count` products.
    pub fn top(count: u32, month: Option<u32>, year: Option<i32>) -> Self {
        Self::ranked(QueryKind::Top, count, month, year)
    }

    /// Lowest-selling `count` products.
    pub fn bottom(count: u32, month: Option<u32>, year: Option<i32>) -> Self {
        Self::ranked(QueryKind::Bottom, count, month, year)
    }

    /// Every product matching the optional filters.
    pub fn all(month: Option<u32>, year: Option<i32>) -> Self {
        Self {
            kind: QueryKind::All,
            count: None,
            month,
            year,
        }
    }

    /// The "could not interpret" value.
    pub fn none() -> Self {
        Self {
            kind: QueryKind::None,
            count: None,
            month: None,
            year: None,
        }
    }

    fn ranked(kind: QueryKind, count: u32, month: Option<u32>, year: Option<i32>) -> Self {
        Self {
            kind,
            count: Some(count),
            month,
            year,
        }
    }

    /// Whether the interpreter recognized anything.
    pub fn is_recognized(&self) -> bool {
        self.kind != QueryKind::None
    }

    /// Checks the kind/count/filter invariants.
    pub fn validate(&self) -> Result<(), QueryValidationError> {
        match (self.kind.is_ranked(), self.count) {
            (true, None) | (true, Some(0)) => {
                return Err(QueryValidationError::MissingCount(self.kind));
            }
            (false, Some(_)) => return Err(QueryValidationError::UnexpectedCount(self.kind)),
            _ => {}
        }

        if self.kind == QueryKind::None && (self.month.is_some() || self.year.is_some()) {
            return Err(QueryValidationError::FilterOnUnrecognized);
        }

        if let Some(month) = self.month {
            if !(1..=12).contains(&month) {
                return Err(QueryValidationError::MonthOutOfRange(month));
            }
        }

        Ok(())
    }
}

impl Default for NormalizedQuery {
    fn default() -> Self {
        Self::none()
    }
}
