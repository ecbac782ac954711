// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Row-major cell positions.

use std::cmp::Ordering;
use std::fmt;

/// A cell `(row, col)` inside a table of `rows x cols` cells.
///
/// Positions are ordered by their row-major linear index. Two positions only
/// compare meaningfully when built against the same table dimensions.
#[derive(Clone, Copy, Debug, Eq)]
pub struct RowMajorPosition {
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
}

impl RowMajorPosition {
    pub fn new(row: usize, col: usize, rows: usize, cols: usize) -> RowMajorPosition {
        return RowMajorPosition { row, col, rows, cols };
    }

    #[inline(always)]
    pub fn row(&self) -> usize {
        return self.row;
    }

    #[inline(always)]
    pub fn col(&self) -> usize {
        return self.col;
    }

    /// `row * cols + col`, or `None` if that does not fit in a `usize`.
    #[inline]
    pub fn linear_index(&self) -> Option<usize> {
        return self.row.checked_mul(self.cols)?.checked_add(self.col);
    }

    /// True if `self` comes strictly before `other` in row-major order.
    ///
    /// Every column is below `cols`, so comparing `(row, col)` pairs gives
    /// the same order as comparing linear indices, without overflow.
    #[inline]
    pub fn precedes(&self, other: &RowMajorPosition) -> bool {
        return (self.row, self.col) < (other.row, other.col);
    }

    /// The next cell in row-major order, or `None` for the last cell.
    pub fn successor(&self) -> Option<RowMajorPosition> {
        if self.col + 1 < self.cols {
            return Some(RowMajorPosition { col: self.col + 1, ..*self });
        }
        if self.row + 1 < self.rows {
            return Some(RowMajorPosition { row: self.row + 1, col: 0, ..*self });
        }
        return None;
    }
}

impl PartialEq for RowMajorPosition {
    fn eq(&self, other: &Self) -> bool {
        return self.row == other.row && self.col == other.col;
    }
}

impl PartialOrd for RowMajorPosition {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        return Some(self.cmp(other));
    }
}

impl Ord for RowMajorPosition {
    fn cmp(&self, other: &Self) -> Ordering {
        return (self.row, self.col).cmp(&(other.row, other.col));
    }
}

impl fmt::Display for RowMajorPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "({}, {})", self.row, self.col);
    }
}
