// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Sequence primitives the compressed table is built on.
//!
//! - `linked`: arena-backed doubly linked list, addressable by handle or index
//! - `cursor`: the same list with a movable cursor and cursor-relative edits

pub mod cursor;
pub mod linked;

pub use cursor::CursorList;
pub use linked::DoublyLinkedList;
pub use linked::NodeIdx;
