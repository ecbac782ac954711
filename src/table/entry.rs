// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Run-start entries.

use std::fmt;

use super::position::RowMajorPosition;

/// Marks that every cell from `position` up to the next entry holds `value`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RunEntry<V> {
    pub position: RowMajorPosition,
    pub value: V,
}

impl<V> RunEntry<V> {
    pub fn new(position: RowMajorPosition, value: V) -> RunEntry<V> {
        return RunEntry { position, value };
    }
}

impl<V: PartialEq> RunEntry<V> {
    /// Compare values only, ignoring positions.
    #[inline]
    pub fn same_value(&self, other: &RunEntry<V>) -> bool {
        return self.value == other.value;
    }
}

impl<V: fmt::Display> fmt::Display for RunEntry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return write!(f, "{} -> {}", self.position, self.value);
    }
}
