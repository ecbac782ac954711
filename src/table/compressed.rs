// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Run-length compressed 2-D table.
//!
//! Scanning cells row-major (left to right, top to bottom), the table stores
//! only the cells where the value changes. Each [`RunEntry`] says "from this
//! cell until the next entry, every cell holds this value".
//!
//! ```text
//!   x x a x        runs: (0,0) -> x
//!   x x x x              (0,2) -> a
//!   b b x x              (0,3) -> x
//!                        (2,0) -> b
//!                        (2,2) -> x
//! ```
//!
//! Invariants, restored by [`CompressedTable::compress`] after every write:
//! - the first entry sits at (0, 0)
//! - positions strictly increase along the list
//! - no two neighbouring entries share a value
//!
//! Reads and writes walk the run list from the head, so both are O(runs).

use std::fmt;

use tracing::{debug, trace};

use super::entry::RunEntry;
use super::position::RowMajorPosition;
use crate::error::{ListError, TableError};
use crate::list::CursorList;
use crate::list::linked::Iter;

/// A `rows x cols` table of `V` stored as row-major runs.
#[derive(Clone, Debug)]
pub struct CompressedTable<V> {
    runs: CursorList<RunEntry<V>>,
    rows: usize,
    cols: usize,
}

impl<V> CompressedTable<V> {
    /// Create a table whose every cell holds `default`.
    pub fn new(rows: usize, cols: usize, default: V) -> CompressedTable<V> {
        let mut runs = CursorList::new();
        runs.add_first(RunEntry::new(RowMajorPosition::new(0, 0, rows, cols), default));
        return CompressedTable { runs, rows, cols };
    }

    #[inline(always)]
    pub fn rows(&self) -> usize {
        return self.rows;
    }

    #[inline(always)]
    pub fn cols(&self) -> usize {
        return self.cols;
    }

    /// Number of stored run entries.
    #[inline]
    pub fn run_count(&self) -> usize {
        return self.runs.len();
    }

    /// Run entries in row-major order.
    pub fn runs(&self) -> Iter<'_, RunEntry<V>> {
        return self.runs.iter();
    }

    /// True if `(row, col)` lies inside the table.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        return row < self.rows && col < self.cols;
    }

    fn position(&self, row: usize, col: usize) -> RowMajorPosition {
        return RowMajorPosition::new(row, col, self.rows, self.cols);
    }

    /// Value of cell `(row, col)`, or `None` if the cell is outside the table.
    pub fn get_cell(&self, row: usize, col: usize) -> Option<&V> {
        if !self.contains(row, col) {
            return None;
        }
        let position = self.position(row, col);
        return self
            .runs
            .iter()
            .take_while(|entry| !position.precedes(&entry.position))
            .last()
            .map(|entry| &entry.value);
    }

    /// Put the cursor on the run containing `position`: the last entry whose
    /// position is at or before it.
    fn locate_run(&mut self, position: &RowMajorPosition) -> Result<(), TableError> {
        self.runs.to_first()?;
        loop {
            if position.precedes(&self.runs.current_value()?.position) {
                break;
            }
            self.runs.advance()?;
            if self.runs.is_off() {
                break;
            }
        }
        // Overstepped by one entry, or ran off the right end.
        self.runs.retreat()?;
        if self.runs.is_off_left() {
            // Only reachable if the head no longer sits at (0, 0).
            return Err(TableError::CorruptRuns { row: position.row(), col: position.col() });
        }
        return Ok(());
    }
}

impl<V: Clone + PartialEq> CompressedTable<V> {
    /// Set cell `(row, col)` to `value`.
    ///
    /// Writes outside the table are ignored. Errors are only returned for a
    /// corrupted run list (no run covers the cell, or the run after it shares
    /// its value), and are raised before anything is modified.
    pub fn set_cell(&mut self, row: usize, col: usize, value: V) -> Result<(), TableError> {
        if !self.contains(row, col) {
            trace!(row, col, rows = self.rows, cols = self.cols, "ignoring write outside table");
            return Ok(());
        }

        let position = self.position(row, col);
        self.locate_run(&position)?;

        let run = self.runs.current_value()?;
        if run.value == value {
            trace!(row, col, "cell already holds value");
            return Ok(());
        }
        let run_start = run.position;
        let old_value = run.value.clone();

        // The old run resumes after this cell unless another run already
        // starts there or the cell is the last one in the table. A run
        // starting there must hold a different value than the one split.
        let following = self.runs.peek_next();
        let resume = match position.successor() {
            Some(next) => match following {
                Some(entry) if entry.position == next => {
                    if entry.value == old_value {
                        return Err(TableError::CorruptRuns { row, col });
                    }
                    None
                }
                _ => Some(next),
            },
            None => None,
        };

        let replaces_start = run_start == position;
        debug!(%position, %run_start, replaces_start, resume = resume.is_some(), "splitting run");

        self.runs.insert_after_current(RunEntry::new(position, value))?;
        if replaces_start {
            // The new entry supersedes the one it was inserted after.
            self.runs.retreat()?;
            self.runs.remove_current()?;
        }
        if let Some(next) = resume {
            self.runs.insert_after_current(RunEntry::new(next, old_value))?;
        }

        self.compress()?;
        return Ok(());
    }

    /// Drop every entry whose value equals its predecessor's, merging it
    /// into the earlier run. Returns the number of entries removed.
    ///
    /// Structural duplicates (same position and value) are a special case
    /// of equal values and are dropped the same way.
    pub fn compress(&mut self) -> Result<usize, ListError> {
        let mut removed = 0;
        self.runs.to_first()?;
        self.runs.advance()?;
        while !self.runs.is_off() {
            let merge = match self.runs.peek_prev() {
                Some(prev) => prev.same_value(self.runs.current_value()?),
                None => false,
            };
            if merge {
                let entry = self.runs.remove_current()?;
                debug!(position = %entry.position, "merged run into predecessor");
                removed += 1;
            } else {
                self.runs.advance()?;
            }
        }
        return Ok(removed);
    }

    /// Every cell's value, row by row.
    pub fn to_rows(&self) -> Vec<Vec<V>> {
        let mut out = Vec::with_capacity(self.rows);
        let mut entries = self.runs.iter().peekable();
        let mut value = match entries.next() {
            Some(entry) => &entry.value,
            None => return out,
        };
        for row in 0..self.rows {
            let mut cells = Vec::with_capacity(self.cols);
            for col in 0..self.cols {
                let position = self.position(row, col);
                while let Some(entry) = entries.next_if(|entry| !position.precedes(&entry.position)) {
                    value = &entry.value;
                }
                cells.push(value.clone());
            }
            out.push(cells);
        }
        return out;
    }
}

impl<V: fmt::Display> CompressedTable<V> {
    /// Every cell's value, one line per row, cells written back to back.
    pub fn render_grid(&self) -> String {
        let mut out = String::new();
        for row in 0..self.rows {
            for col in 0..self.cols {
                if let Some(value) = self.get_cell(row, col) {
                    out.push_str(&value.to_string());
                }
            }
            out.push('\n');
        }
        return out;
    }
}

/// Dumps the run list, one entry per line.
impl<V: fmt::Display> fmt::Display for CompressedTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{}", self.runs);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runs_of(table: &CompressedTable<&'static str>) -> Vec<(usize, usize, &'static str)> {
        return table
            .runs()
            .map(|entry| (entry.position.row(), entry.position.col(), entry.value))
            .collect();
    }

    #[test]
    fn new_table_has_one_run() {
        let table = CompressedTable::new(5, 6, "x");
        assert_eq!(runs_of(&table), vec![(0, 0, "x")]);
        assert_eq!(table.get_cell(4, 5), Some(&"x"));
        assert_eq!(table.rows(), 5);
        assert_eq!(table.cols(), 6);
    }

    #[test]
    fn locate_run_finds_containing_entry() {
        let mut table = CompressedTable::new(3, 3, "x");
        table.set_cell(1, 0, "a").unwrap();

        let lookups = [
            ((0, 0), (0, 0)),
            ((0, 2), (0, 0)),
            ((1, 0), (1, 0)),
            ((1, 1), (1, 1)),
            ((2, 2), (1, 1)),
        ];
        for ((row, col), (run_row, run_col)) in lookups {
            let position = table.position(row, col);
            table.locate_run(&position).unwrap();
            let run = table.runs.current_value().unwrap();
            assert_eq!((run.position.row(), run.position.col()), (run_row, run_col));
        }
    }

    #[test]
    fn split_middle_of_run() {
        let mut table = CompressedTable::new(5, 6, "x");
        table.set_cell(0, 1, "a").unwrap();
        assert_eq!(runs_of(&table), vec![(0, 0, "x"), (0, 1, "a"), (0, 2, "x")]);
    }

    #[test]
    fn write_back_collapses() {
        let mut table = CompressedTable::new(5, 6, "x");
        table.set_cell(0, 1, "a").unwrap();
        table.set_cell(0, 1, "x").unwrap();
        assert_eq!(runs_of(&table), vec![(0, 0, "x")]);
    }

    #[test]
    fn write_origin_cell() {
        let mut table = CompressedTable::new(2, 2, "x");
        table.set_cell(0, 0, "a").unwrap();
        assert_eq!(runs_of(&table), vec![(0, 0, "a"), (0, 1, "x")]);
    }

    #[test]
    fn write_last_cell() {
        let mut table = CompressedTable::new(2, 2, "x");
        table.set_cell(1, 1, "a").unwrap();
        assert_eq!(runs_of(&table), vec![(0, 0, "x"), (1, 1, "a")]);
        assert_eq!(table.get_cell(1, 1), Some(&"a"));
        assert_eq!(table.get_cell(1, 0), Some(&"x"));
    }

    #[test]
    fn write_at_existing_boundary_keeps_next_run() {
        let mut table = CompressedTable::new(1, 4, "x");
        table.set_cell(0, 1, "a").unwrap();
        table.set_cell(0, 2, "b").unwrap();
        table.set_cell(0, 1, "c").unwrap();
        assert_eq!(runs_of(&table), vec![(0, 0, "x"), (0, 1, "c"), (0, 2, "b"), (0, 3, "x")]);
    }

    #[test]
    fn write_matching_both_neighbours_merges_three_runs() {
        let mut table = CompressedTable::new(1, 3, "x");
        table.set_cell(0, 0, "a").unwrap();
        table.set_cell(0, 2, "a").unwrap();
        assert_eq!(runs_of(&table), vec![(0, 0, "a"), (0, 1, "x"), (0, 2, "a")]);
        table.set_cell(0, 1, "a").unwrap();
        assert_eq!(runs_of(&table), vec![(0, 0, "a")]);
    }

    #[test]
    fn out_of_range_write_is_ignored() {
        let mut table = CompressedTable::new(2, 2, "x");
        table.set_cell(2, 0, "a").unwrap();
        table.set_cell(0, 2, "a").unwrap();
        table.set_cell(21, 5, "b").unwrap();
        assert_eq!(runs_of(&table), vec![(0, 0, "x")]);
    }

    #[test]
    fn out_of_range_read_is_none() {
        let table = CompressedTable::new(2, 2, "x");
        assert_eq!(table.get_cell(2, 0), None);
        assert_eq!(table.get_cell(0, 2), None);
    }

    #[test]
    fn empty_dimensions() {
        let mut table = CompressedTable::new(0, 3, 0u8);
        table.set_cell(0, 0, 1).unwrap();
        assert_eq!(table.get_cell(0, 0), None);
        assert_eq!(table.run_count(), 1);
        assert!(table.to_rows().is_empty());
    }

    #[test]
    fn corrupt_runs_are_rejected_untouched() {
        let mut table = CompressedTable::new(1, 4, "x");
        table.set_cell(0, 2, "a").unwrap();
        // Drop the (0, 0) head so no run contains the first two cells.
        table.runs.remove_first().unwrap();
        let before = runs_of(&table);

        let err = table.set_cell(0, 1, "z").unwrap_err();
        assert_eq!(err, TableError::CorruptRuns { row: 0, col: 1 });
        assert_eq!(runs_of(&table), before);
        assert_eq!(table.get_cell(0, 1), None);
    }

    #[test]
    fn equal_neighbour_at_successor_is_rejected_untouched() {
        let mut table = CompressedTable::new(1, 4, "x");
        table.set_cell(0, 1, "a").unwrap();
        // Give the (0, 1) run the same value as the (0, 0) run before it.
        table.runs.to_first().unwrap();
        table.runs.advance().unwrap();
        table.runs.current_value_mut().unwrap().value = "x";
        let before = runs_of(&table);

        let err = table.set_cell(0, 0, "b").unwrap_err();
        assert_eq!(err, TableError::CorruptRuns { row: 0, col: 0 });
        assert_eq!(runs_of(&table), before);
    }

    #[test]
    fn huge_dimensions_do_not_overflow() {
        let mut table = CompressedTable::new(usize::MAX, 4, 0u8);
        table.set_cell(usize::MAX - 1, 1, 1).unwrap();

        let runs: Vec<_> = table
            .runs()
            .map(|entry| (entry.position.row(), entry.position.col(), entry.value))
            .collect();
        assert_eq!(runs, vec![(0, 0, 0), (usize::MAX - 1, 1, 1), (usize::MAX - 1, 2, 0)]);
        assert_eq!(table.get_cell(usize::MAX - 1, 1), Some(&1));
        assert_eq!(table.get_cell(usize::MAX - 1, 0), Some(&0));
        assert_eq!(table.get_cell(usize::MAX - 1, 2), Some(&0));
        assert_eq!(table.get_cell(0, 1), Some(&0));

        table.set_cell(usize::MAX - 1, 3, 1).unwrap();
        table.set_cell(usize::MAX - 1, 2, 1).unwrap();
        assert_eq!(table.run_count(), 2);
        table.set_cell(usize::MAX - 1, 1, 0).unwrap();
        assert_eq!(table.get_cell(usize::MAX - 1, 1), Some(&0));
        assert_eq!(table.get_cell(usize::MAX - 1, 3), Some(&1));
    }

    #[test]
    fn compress_merges_equal_neighbours() {
        let mut table = CompressedTable::new(1, 4, "x");
        let planted = [((0, 1), "x"), ((0, 1), "x"), ((0, 2), "a"), ((0, 3), "a")];
        table.runs.to_last().unwrap();
        for ((row, col), value) in planted {
            let position = table.position(row, col);
            table.runs.insert_after_current(RunEntry::new(position, value)).unwrap();
        }

        assert_eq!(table.compress(), Ok(3));
        assert_eq!(runs_of(&table), vec![(0, 0, "x"), (0, 2, "a")]);
        assert_eq!(table.compress(), Ok(0));
    }

    #[test]
    fn to_rows_matches_get_cell() {
        let mut table = CompressedTable::new(3, 2, 0);
        table.set_cell(0, 1, 7).unwrap();
        table.set_cell(2, 0, 9).unwrap();
        assert_eq!(table.to_rows(), vec![vec![0, 7], vec![0, 0], vec![9, 0]]);
    }

    #[test]
    fn render_grid_and_dump() {
        let mut table = CompressedTable::new(2, 3, "x");
        table.set_cell(0, 1, "a").unwrap();
        assert_eq!(table.render_grid(), "xax\nxxx\n");
        assert_eq!(table.to_string(), "CursorList:\n(0, 0) -> x\n(0, 1) -> a\n(0, 2) -> x\n");
    }
}
