// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Rletable - a dense 2-D table stored as row-major runs.
//!
//! # Quick Start
//!
//! ```
//! use rletable::CompressedTable;
//!
//! // A 5x6 table where every cell starts as "x"
//! let mut table = CompressedTable::new(5, 6, "x");
//!
//! // Only the cells where the value changes are stored
//! table.set_cell(0, 1, "a").unwrap();
//! assert_eq!(table.run_count(), 3);
//! assert_eq!(table.get_cell(0, 1), Some(&"a"));
//! assert_eq!(table.get_cell(0, 2), Some(&"x"));
//!
//! // Writing the old value back merges the runs again
//! table.set_cell(0, 1, "x").unwrap();
//! assert_eq!(table.run_count(), 1);
//! ```

pub mod error;
pub mod list;
pub mod table;

pub use error::{ListError, TableError};
pub use list::CursorList;
pub use table::{CompressedTable, RowMajorPosition, RunEntry};
