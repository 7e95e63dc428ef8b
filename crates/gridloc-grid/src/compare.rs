//! Point-set comparison between two grids.
//!
//! Used to check a regenerated grid against a previously published one:
//! which points both share, and which appear on only one side.

use crate::grid::Grid;
use std::fmt;

/// The three-way split of two grids' points.
#[derive(Clone, Debug)]
pub struct GridComparison {
    /// Points present in both grids (attributes from `a`).
    pub in_both: Grid,
    /// Points only in `a`.
    pub only_a: Grid,
    /// Points only in `b`.
    pub only_b: Grid,
    len_a: usize,
    len_b: usize,
}

/// Counts from a [`GridComparison`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ComparisonSummary {
    /// Size of grid `a`.
    pub len_a: usize,
    /// Size of grid `b`.
    pub len_b: usize,
    /// Points in both.
    pub in_both: usize,
    /// Points only in `a`.
    pub only_a: usize,
    /// Points only in `b`.
    pub only_b: usize,
}

impl GridComparison {
    /// Point counts for each partition.
    pub fn summary(&self) -> ComparisonSummary {
        ComparisonSummary {
            len_a: self.len_a,
            len_b: self.len_b,
            in_both: self.in_both.len(),
            only_a: self.only_a.len(),
            only_b: self.only_b.len(),
        }
    }

    /// `true` when both grids hold exactly the same points.
    pub fn is_identical(&self) -> bool {
        self.only_a.is_empty() && self.only_b.is_empty()
    }
}

impl fmt::Display for ComparisonSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "grid a          : {}", self.len_a)?;
        writeln!(f, "grid b          : {}", self.len_b)?;
        writeln!(f, "in both         : {}", self.in_both)?;
        writeln!(f, "in a but not b  : {}", self.only_a)?;
        write!(f, "in b but not a  : {}", self.only_b)
    }
}

/// Split the points of `a` and `b` into shared and one-sided sets.
pub fn compare(a: &Grid, b: &Grid) -> GridComparison {
    let comparison = GridComparison {
        in_both: a.intersection(b),
        only_a: a.difference(b),
        only_b: b.difference(a),
        len_a: a.len(),
        len_b: b.len(),
    };
    let s = comparison.summary();
    tracing::info!(
        len_a = s.len_a,
        len_b = s.len_b,
        in_both = s.in_both,
        only_a = s.only_a,
        only_b = s.only_b,
        "grids compared"
    );
    comparison
}
