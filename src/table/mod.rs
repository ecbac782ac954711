// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Run-length compressed 2-D table and its building blocks.

pub mod compressed;
pub mod entry;
pub mod position;

pub use compressed::CompressedTable;
pub use entry::RunEntry;
pub use position::RowMajorPosition;
