// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "Isaac Clayton"

//! Arena-backed doubly linked list.
//!
//! Nodes live in a `Vec` of slots and link to each other by index, so there
//! are no reference cycles and no `unsafe`. Vacated slots go on a free list
//! and are reused by later inserts.
//!
//! Operations:
//! - push/pop at either end: O(1)
//! - insert/remove next to a known handle: O(1)
//! - insert/remove/lookup by index: O(n) walk from the nearer end
//! - index_of: O(n)
//!
//! At most `u32::MAX` slots are addressable; `u32::MAX` itself is the
//! no-neighbour sentinel.
//!
//! Handles stay valid until their node is removed. A handle whose node has
//! been removed is stale: every handle operation returns `None` for it, but a
//! stale handle may later alias a new node once its slot is reused.

/// Index into the slot array.
pub type NodeIdx = u32;
/// Sentinel value for no neighbour.
const NONE: NodeIdx = NodeIdx::MAX;

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    prev: NodeIdx,
    next: NodeIdx,
}

/// A doubly linked list addressable by handle or by position.
#[derive(Clone, Debug)]
pub struct DoublyLinkedList<T> {
    /// Node storage. `None` marks a vacated slot.
    slots: Vec<Option<Node<T>>>,
    /// Indices of vacated slots.
    free: Vec<NodeIdx>,
    head: NodeIdx,
    tail: NodeIdx,
    len: usize,
}

impl<T> DoublyLinkedList<T> {
    pub fn new() -> DoublyLinkedList<T> {
        return DoublyLinkedList {
            slots: Vec::new(),
            free: Vec::new(),
            head: NONE,
            tail: NONE,
            len: 0,
        };
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        return self.len;
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        return self.len == 0;
    }

    /// Handle of the first node.
    #[inline]
    pub fn head(&self) -> Option<NodeIdx> {
        return link(self.head);
    }

    /// Handle of the last node.
    #[inline]
    pub fn tail(&self) -> Option<NodeIdx> {
        return link(self.tail);
    }

    pub fn front(&self) -> Option<&T> {
        return self.get(self.head);
    }

    pub fn back(&self) -> Option<&T> {
        return self.get(self.tail);
    }

    #[inline]
    fn node(&self, idx: NodeIdx) -> Option<&Node<T>> {
        return self.slots.get(idx as usize).and_then(|slot| slot.as_ref());
    }

    #[inline]
    fn node_mut(&mut self, idx: NodeIdx) -> Option<&mut Node<T>> {
        return self.slots.get_mut(idx as usize).and_then(|slot| slot.as_mut());
    }

    /// Value stored at `idx`.
    pub fn get(&self, idx: NodeIdx) -> Option<&T> {
        return self.node(idx).map(|node| &node.value);
    }

    pub fn get_mut(&mut self, idx: NodeIdx) -> Option<&mut T> {
        return self.node_mut(idx).map(|node| &mut node.value);
    }

    /// Handle of the node after `idx`.
    pub fn next(&self, idx: NodeIdx) -> Option<NodeIdx> {
        return self.node(idx).and_then(|node| link(node.next));
    }

    /// Handle of the node before `idx`.
    pub fn prev(&self, idx: NodeIdx) -> Option<NodeIdx> {
        return self.node(idx).and_then(|node| link(node.prev));
    }

    /// Allocate a detached node, reusing a free slot if available.
    fn alloc(&mut self, value: T, prev: NodeIdx, next: NodeIdx) -> NodeIdx {
        let node = Node { value, prev, next };
        if let Some(idx) = self.free.pop() {
            self.slots[idx as usize] = Some(node);
            return idx;
        }
        let idx = self.slots.len() as NodeIdx;
        debug_assert!(idx != NONE && idx as usize == self.slots.len(), "slot index space exhausted");
        self.slots.push(Some(node));
        return idx;
    }

    /// Point `prev.next` and `next.prev` at `idx`, or the list ends if missing.
    fn attach(&mut self, idx: NodeIdx, prev: NodeIdx, next: NodeIdx) {
        match self.node_mut(prev) {
            Some(node) => node.next = idx,
            None => self.head = idx,
        }
        match self.node_mut(next) {
            Some(node) => node.prev = idx,
            None => self.tail = idx,
        }
        self.len += 1;
    }

    pub fn push_front(&mut self, value: T) -> NodeIdx {
        let next = self.head;
        let idx = self.alloc(value, NONE, next);
        self.attach(idx, NONE, next);
        return idx;
    }

    pub fn push_back(&mut self, value: T) -> NodeIdx {
        let prev = self.tail;
        let idx = self.alloc(value, prev, NONE);
        self.attach(idx, prev, NONE);
        return idx;
    }

    /// Insert `value` directly after the node at `idx`.
    /// Returns `None` if `idx` is stale.
    pub fn insert_after(&mut self, idx: NodeIdx, value: T) -> Option<NodeIdx> {
        let next = self.node(idx)?.next;
        let new = self.alloc(value, idx, next);
        self.attach(new, idx, next);
        return Some(new);
    }

    /// Insert `value` directly before the node at `idx`.
    /// Returns `None` if `idx` is stale.
    pub fn insert_before(&mut self, idx: NodeIdx, value: T) -> Option<NodeIdx> {
        let prev = self.node(idx)?.prev;
        let new = self.alloc(value, prev, idx);
        self.attach(new, prev, idx);
        return Some(new);
    }

    /// Unlink the node at `idx` and return its value.
    pub fn remove(&mut self, idx: NodeIdx) -> Option<T> {
        let node = self.slots.get_mut(idx as usize)?.take()?;
        match self.node_mut(node.prev) {
            Some(prev) => prev.next = node.next,
            None => self.head = node.next,
        }
        match self.node_mut(node.next) {
            Some(next) => next.prev = node.prev,
            None => self.tail = node.prev,
        }
        self.free.push(idx);
        self.len -= 1;
        return Some(node.value);
    }

    pub fn pop_front(&mut self) -> Option<T> {
        return self.remove(self.head);
    }

    pub fn pop_back(&mut self) -> Option<T> {
        return self.remove(self.tail);
    }

    /// Handle of the node at position `index`, walking from the nearer end.
    pub fn handle_at(&self, index: usize) -> Option<NodeIdx> {
        if index >= self.len {
            return None;
        }
        if index <= self.len / 2 {
            let mut idx = self.head;
            for _ in 0..index {
                idx = self.node(idx)?.next;
            }
            return Some(idx);
        }
        let mut idx = self.tail;
        for _ in index..self.len - 1 {
            idx = self.node(idx)?.prev;
        }
        return Some(idx);
    }

    pub fn get_at(&self, index: usize) -> Option<&T> {
        return self.get(self.handle_at(index)?);
    }

    /// Insert `value` so that it ends up at position `index`.
    /// `index == len` appends. Returns `None` if `index > len`.
    pub fn insert(&mut self, index: usize, value: T) -> Option<NodeIdx> {
        if index == self.len {
            return Some(self.push_back(value));
        }
        let at = self.handle_at(index)?;
        return self.insert_before(at, value);
    }

    /// Remove the node at position `index`.
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        let at = self.handle_at(index)?;
        return self.remove(at);
    }

    /// Drop every node and release the slot storage.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free.clear();
        self.head = NONE;
        self.tail = NONE;
        self.len = 0;
    }

    /// Iterate over values from head to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        return Iter {
            list: self,
            front: self.head,
            back: self.tail,
            remaining: self.len,
        };
    }
}

impl<T: PartialEq> DoublyLinkedList<T> {
    /// Position of the first element equal to `value`.
    pub fn index_of(&self, value: &T) -> Option<usize> {
        return self.iter().position(|item| item == value);
    }
}

impl<T> Default for DoublyLinkedList<T> {
    fn default() -> Self {
        return Self::new();
    }
}

#[inline(always)]
fn link(idx: NodeIdx) -> Option<NodeIdx> {
    return if idx == NONE { None } else { Some(idx) };
}

/// Double-ended iterator over a [`DoublyLinkedList`].
pub struct Iter<'a, T> {
    list: &'a DoublyLinkedList<T>,
    front: NodeIdx,
    back: NodeIdx,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.front)?;
        self.front = node.next;
        self.remaining -= 1;
        return Some(&node.value);
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        return (self.remaining, Some(self.remaining));
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    fn next_back(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let node = self.list.node(self.back)?;
        self.back = node.prev;
        self.remaining -= 1;
        return Some(&node.value);
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a DoublyLinkedList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        return self.iter();
    }
}
