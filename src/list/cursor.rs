// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Doubly linked list with a movable "current" cursor.
//!
//! The cursor is either on a node or in one of two terminal states past the
//! ends of the list:
//!
//! ```text
//!   OffLeft <-> head <-> ... <-> tail <-> OffRight
//! ```
//!
//! `advance` from `OffLeft` re-enters at the head and `retreat` from
//! `OffRight` re-enters at the tail, so alternating the two at either end
//! oscillates between the boundary node and the off state.
//!
//! Every splice next to the cursor uses the node handle directly, so
//! cursor-relative insert and remove are O(1).

use std::fmt;

use super::linked::{DoublyLinkedList, Iter, NodeIdx};
use crate::error::ListError;

/// Where the cursor currently sits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cursor {
    /// Fresh or cleared list; nothing to point at yet.
    Unset,
    On(NodeIdx),
    OffLeft,
    OffRight,
}

/// A doubly linked list with a cursor that supports relative edits.
#[derive(Clone, Debug)]
pub struct CursorList<T> {
    list: DoublyLinkedList<T>,
    cursor: Cursor,
}

impl<T> CursorList<T> {
    /// Create an empty list with an unset cursor.
    pub fn new() -> CursorList<T> {
        return CursorList {
            list: DoublyLinkedList::new(),
            cursor: Cursor::Unset,
        };
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        return self.list.len();
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        return self.list.is_empty();
    }

    /// Iterate over values from head to tail. Does not move the cursor.
    pub fn iter(&self) -> Iter<'_, T> {
        return self.list.iter();
    }

    fn ensure_nonempty(&self, action: &'static str) -> Result<(), ListError> {
        if self.list.is_empty() {
            return Err(ListError::Empty { action });
        }
        return Ok(());
    }

    /// Handle of the node under the cursor.
    fn on_node(&self) -> Result<NodeIdx, ListError> {
        self.ensure_nonempty("read current")?;
        return match self.cursor {
            Cursor::On(idx) => Ok(idx),
            Cursor::OffLeft | Cursor::OffRight => Err(ListError::OffList),
            Cursor::Unset => Err(ListError::Unpositioned),
        };
    }

    /// Move the cursor onto the head.
    pub fn to_first(&mut self) -> Result<(), ListError> {
        let head = self.list.head().ok_or(ListError::Empty { action: "move current to head" })?;
        self.cursor = Cursor::On(head);
        return Ok(());
    }

    /// Move the cursor onto the tail.
    pub fn to_last(&mut self) -> Result<(), ListError> {
        let tail = self.list.tail().ok_or(ListError::Empty { action: "move current to tail" })?;
        self.cursor = Cursor::On(tail);
        return Ok(());
    }

    /// Move the cursor one step towards the tail.
    ///
    /// From `OffLeft` this lands on the head. From the tail it goes
    /// `OffRight`.
    pub fn advance(&mut self) -> Result<(), ListError> {
        self.ensure_nonempty("move current to the right")?;
        self.cursor = match self.cursor {
            Cursor::OffRight => return Err(ListError::AlreadyOffRight),
            Cursor::Unset => return Err(ListError::Unpositioned),
            Cursor::OffLeft => self.list.head().map_or(Cursor::OffRight, Cursor::On),
            Cursor::On(idx) => self.list.next(idx).map_or(Cursor::OffRight, Cursor::On),
        };
        return Ok(());
    }

    /// Move the cursor one step towards the head.
    ///
    /// From `OffRight` this lands on the tail. From the head it goes
    /// `OffLeft`.
    pub fn retreat(&mut self) -> Result<(), ListError> {
        self.ensure_nonempty("move current to the left")?;
        self.cursor = match self.cursor {
            Cursor::OffLeft => return Err(ListError::AlreadyOffLeft),
            Cursor::Unset => return Err(ListError::Unpositioned),
            Cursor::OffRight => self.list.tail().map_or(Cursor::OffLeft, Cursor::On),
            Cursor::On(idx) => self.list.prev(idx).map_or(Cursor::OffLeft, Cursor::On),
        };
        return Ok(());
    }

    #[inline]
    pub fn is_off_left(&self) -> bool {
        return self.cursor == Cursor::OffLeft;
    }

    #[inline]
    pub fn is_off_right(&self) -> bool {
        return self.cursor == Cursor::OffRight;
    }

    /// True when the cursor is past either end.
    #[inline]
    pub fn is_off(&self) -> bool {
        return self.is_off_left() || self.is_off_right();
    }

    /// Value under the cursor.
    pub fn current_value(&self) -> Result<&T, ListError> {
        let idx = self.on_node()?;
        return self.list.get(idx).ok_or(ListError::OffList);
    }

    /// Mutable access to the value under the cursor.
    pub fn current_value_mut(&mut self) -> Result<&mut T, ListError> {
        let idx = self.on_node()?;
        return self.list.get_mut(idx).ok_or(ListError::OffList);
    }

    /// Value of the node after the cursor, without moving.
    /// `None` when off, unset, or on the tail.
    pub fn peek_next(&self) -> Option<&T> {
        let Cursor::On(idx) = self.cursor else {
            return None;
        };
        return self.list.get(self.list.next(idx)?);
    }

    /// Value of the node before the cursor, without moving.
    /// `None` when off, unset, or on the head.
    pub fn peek_prev(&self) -> Option<&T> {
        let Cursor::On(idx) = self.cursor else {
            return None;
        };
        return self.list.get(self.list.prev(idx)?);
    }

    /// Linear index of the node under the cursor. O(n).
    pub fn current_index(&self) -> Option<usize> {
        let Cursor::On(mut idx) = self.cursor else {
            return None;
        };
        let mut index = 0;
        while let Some(prev) = self.list.prev(idx) {
            idx = prev;
            index += 1;
        }
        return Some(index);
    }

    /// Insert a new head and move the cursor onto it.
    pub fn add_first(&mut self, value: T) {
        let idx = self.list.push_front(value);
        self.cursor = Cursor::On(idx);
    }

    /// Insert a new tail and move the cursor onto it.
    pub fn add_last(&mut self, value: T) {
        let idx = self.list.push_back(value);
        self.cursor = Cursor::On(idx);
    }

    /// Remove the head and return its value.
    ///
    /// The cursor lands on the new head, or `OffLeft` if the list is now
    /// empty.
    pub fn remove_first(&mut self) -> Result<T, ListError> {
        let value = self.list.pop_front().ok_or(ListError::Empty { action: "remove head" })?;
        self.cursor = self.list.head().map_or(Cursor::OffLeft, Cursor::On);
        return Ok(value);
    }

    /// Remove the tail and return its value. The cursor always goes
    /// `OffRight`, even if the list is now empty.
    pub fn remove_last(&mut self) -> Result<T, ListError> {
        let value = self.list.pop_back().ok_or(ListError::Empty { action: "remove tail" })?;
        self.cursor = Cursor::OffRight;
        return Ok(value);
    }

    /// Move the cursor onto the head and return its value.
    pub fn get_first(&mut self) -> Result<&T, ListError> {
        self.to_first()?;
        return self.current_value();
    }

    /// Move the cursor onto the tail and return its value.
    pub fn get_last(&mut self) -> Result<&T, ListError> {
        self.to_last()?;
        return self.current_value();
    }

    /// Insert `value` directly after the cursor's node and move onto it.
    pub fn insert_after_current(&mut self, value: T) -> Result<(), ListError> {
        let idx = self.on_node()?;
        let new = self.list.insert_after(idx, value).ok_or(ListError::OffList)?;
        self.cursor = Cursor::On(new);
        return Ok(());
    }

    /// Remove the cursor's node and return its value.
    ///
    /// The cursor moves to the successor. Removing the tail leaves the
    /// cursor `OffRight`; removing the only node leaves it `OffLeft`.
    pub fn remove_current(&mut self) -> Result<T, ListError> {
        let idx = self.on_node()?;
        let prev = self.list.prev(idx);
        let next = self.list.next(idx);
        let value = self.list.remove(idx).ok_or(ListError::OffList)?;
        self.cursor = match (prev, next) {
            (_, Some(next)) => Cursor::On(next),
            (Some(_), None) => Cursor::OffRight,
            (None, None) => Cursor::OffLeft,
        };
        return Ok(value);
    }

    /// Drop every node. The cursor becomes unset.
    pub fn clear(&mut self) {
        self.list.clear();
        self.cursor = Cursor::Unset;
    }
}

impl<T: PartialEq> CursorList<T> {
    /// Position of the first element equal to `value`. Does not move the cursor.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        return self.list.index_of(value);
    }
}

impl<T> Default for CursorList<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<'a, T> IntoIterator for &'a CursorList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return self.iter();
    }
}

impl<T: fmt::Display> fmt::Display for CursorList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CursorList:")?;
        for item in self.iter() {
            writeln!(f, "{}", item)?;
        }
        return Ok(());
    }
}
