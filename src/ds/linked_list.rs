//! Doubly linked list backed by `SlotArena`.
//!
//! Stores list nodes in a `SlotArena` and links them by `SlotId`, so a cursor
//! is just an `Option<SlotId>`: it stays valid while elements are rewritten in
//! place and never borrows the list.
//!
//! ## Architecture
//!
//! ```text
//!   arena (SlotArena<Node<T>>)
//!   ┌────────┬─────────────────────────────────────────────┐
//!   │ SlotId │ Node { value, prev, next }                  │
//!   ├────────┼─────────────────────────────────────────────┤
//!   │ id_1   │ { value: A, prev: None, next: Some(id_2) }  │
//!   │ id_2   │ { value: B, prev: Some(id_1), next: id_3 }  │
//!   │ id_3   │ { value: C, prev: Some(id_2), next: None }  │
//!   └────────┴─────────────────────────────────────────────┘
//!
//!   head ─► [id_1] ◄──► [id_2] ◄──► [id_3] ◄── tail
//! ```
//!
//! ## Capabilities
//!
//! | basic | bidirectional | random access | mutable | cloning    |
//! |-------|---------------|---------------|---------|------------|
//! | yes   | yes           | no            | yes     | `T: Clone` |
//!
//! Without random access the list is sorted through the extract-sort-reinsert
//! path of [`crate::algo::sort`].
//!
//! ## Performance
//! - `push_front` / `push_back`: O(1)
//! - `pop_front` / `pop_back`: O(1)
//! - `remove(id)`: O(1)
//! - cursor `advance` / `retreat`: O(1)

use crate::ds::slot_arena::{SlotArena, SlotId};
#[cfg(any(test, debug_assertions))]
use crate::error::InvariantError;
use crate::traits::{
    Bidirectional, Capabilities, Capability, Cloning, Mutable, Sequential, Traversal,
};

#[derive(Debug, Clone)]
struct Node<T> {
    value: T,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

#[derive(Debug, Clone)]
/// Linked list that stores nodes in a `SlotArena` and links them via `SlotId`.
pub struct LinkedList<T> {
    arena: SlotArena<Node<T>>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
}

impl<T> LinkedList<T> {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self {
            arena: SlotArena::new(),
            head: None,
            tail: None,
        }
    }

    /// Creates an empty list with reserved node capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            arena: SlotArena::with_capacity(capacity),
            head: None,
            tail: None,
        }
    }

    /// Returns the number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// Returns `true` if `id` is currently a node in this list.
    pub fn contains(&self, id: SlotId) -> bool {
        self.arena.contains(id)
    }

    /// Returns the first value.
    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|id| self.get(id))
    }

    /// Returns the last value.
    pub fn back(&self) -> Option<&T> {
        self.tail.and_then(|id| self.get(id))
    }

    /// Returns the value for a node id, if present.
    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.arena.get(id).map(|node| &node.value)
    }

    /// Returns a mutable reference to a node value, if present.
    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.arena.get_mut(id).map(|node| &mut node.value)
    }

    /// Returns an iterator from front to back.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            list: self,
            current: self.head,
        }
    }

    /// Inserts a new node at the front and returns its `SlotId`.
    pub fn push_front(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: None,
            next: self.head,
        });
        match self.head {
            Some(head) => {
                if let Some(node) = self.arena.get_mut(head) {
                    node.prev = Some(id);
                }
            },
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        id
    }

    /// Inserts a new node at the back and returns its `SlotId`.
    pub fn push_back(&mut self, value: T) -> SlotId {
        let id = self.arena.insert(Node {
            value,
            prev: self.tail,
            next: None,
        });
        match self.tail {
            Some(tail) => {
                if let Some(node) = self.arena.get_mut(tail) {
                    node.next = Some(id);
                }
            },
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        id
    }

    /// Removes and returns the front value.
    pub fn pop_front(&mut self) -> Option<T> {
        let id = self.head?;
        self.remove(id)
    }

    /// Removes and returns the back value.
    pub fn pop_back(&mut self) -> Option<T> {
        let id = self.tail?;
        self.remove(id)
    }

    /// Removes the node `id` from the list and returns its value.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.detach(id)?;
        self.arena.remove(id).map(|node| node.value)
    }

    /// Clears the list and frees all nodes.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
    }

    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let node = self.arena.get(id)?;
            (node.prev, node.next)
        };

        match prev {
            Some(prev_id) => {
                if let Some(prev_node) = self.arena.get_mut(prev_id) {
                    prev_node.next = next;
                }
            },
            None => self.head = next,
        }

        match next {
            Some(next_id) => {
                if let Some(next_node) = self.arena.get_mut(next_id) {
                    next_node.prev = prev;
                }
            },
            None => self.tail = prev,
        }

        Some(())
    }

    fn node(&self, cursor: &Option<SlotId>) -> &Node<T> {
        match cursor.and_then(|id| self.arena.get(id)) {
            Some(node) => node,
            None => panic!("LinkedList cursor is not positioned on an element"),
        }
    }

    fn node_mut(&mut self, cursor: &Option<SlotId>) -> &mut Node<T> {
        match cursor.and_then(|id| self.arena.get_mut(id)) {
            Some(node) => node,
            None => panic!("LinkedList cursor is not positioned on an element"),
        }
    }

    /// Validates link structure (debug-only).
    #[cfg(any(test, debug_assertions))]
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        if self.head.is_none() || self.tail.is_none() {
            if self.head.is_some() || self.tail.is_some() || !self.arena.is_empty() {
                return Err(InvariantError::new(format!(
                    "head {:?} / tail {:?} disagree with {} stored nodes",
                    self.head,
                    self.tail,
                    self.arena.len()
                )));
            }
            return Ok(());
        }

        let mut count = 0usize;
        let mut current = self.head;
        let mut prev = None;
        while let Some(id) = current {
            let node = self
                .arena
                .get(id)
                .ok_or_else(|| InvariantError::new(format!("stale SlotId {:?} in chain", id)))?;
            if node.prev != prev {
                return Err(InvariantError::new(format!(
                    "node {:?} prev pointer inconsistent",
                    id
                )));
            }
            if node.next.is_none() && self.tail != Some(id) {
                return Err(InvariantError::new(format!(
                    "chain ends at {:?} but tail is {:?}",
                    id, self.tail
                )));
            }
            prev = Some(id);
            current = node.next;
            count += 1;
            if count > self.len() {
                return Err(InvariantError::new("chain longer than len (cycle)"));
            }
        }

        if count != self.len() {
            return Err(InvariantError::new(format!(
                "counted {} nodes but len = {}",
                count,
                self.len()
            )));
        }
        Ok(())
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinkedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<T> Extend<T> for LinkedList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.push_back(value);
        }
    }
}

pub struct Iter<'a, T> {
    list: &'a LinkedList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let node = self.list.arena.get(id)?;
        self.current = node.next;
        Some(&node.value)
    }
}

impl<T> Traversal for LinkedList<T> {
    type Item = T;
    type Cursor = Option<SlotId>;
    type Access = Sequential;

    const CAPABILITIES: Capabilities = Capabilities::BASIC
        .with(Capability::Bidirectional)
        .with(Capability::Mutable);

    fn cursor(&self) -> Self::Cursor {
        self.head
    }

    fn advance(&self, cursor: &mut Self::Cursor) {
        *cursor = cursor.and_then(|id| self.arena.get(id)).and_then(|node| node.next);
    }

    fn is_end(&self, cursor: &Self::Cursor) -> bool {
        cursor.is_none()
    }

    fn element<'a>(&'a self, cursor: &Self::Cursor) -> &'a T {
        &self.node(cursor).value
    }

    fn exact_size(&self) -> Option<usize> {
        Some(self.len())
    }

    fn last_cursor(&self) -> Option<Self::Cursor> {
        Some(self.tail)
    }
}

impl<T> Bidirectional for LinkedList<T> {
    fn retreat(&self, cursor: &mut Self::Cursor) {
        *cursor = cursor.and_then(|id| self.arena.get(id)).and_then(|node| node.prev);
    }

    fn seek_last(&self, cursor: &mut Self::Cursor) {
        *cursor = self.tail;
    }
}

impl<T> Mutable for LinkedList<T> {
    fn element_mut<'a>(&'a mut self, cursor: &Self::Cursor) -> &'a mut T {
        &mut self.node_mut(cursor).value
    }
}

impl<T: Clone> Cloning for LinkedList<T> {
    type Scratch = T;

    fn clone_scratch(&self, cursor: &Self::Cursor) -> T {
        self.element(cursor).clone()
    }

    fn restore_scratch(&mut self, cursor: &Self::Cursor, scratch: &T) {
        self.element_mut(cursor).clone_from(scratch);
    }

    fn copy_element(&mut self, dst: &Self::Cursor, src: &Self::Cursor) {
        if dst == src {
            return;
        }
        let value = self.element(src).clone();
        *self.element_mut(dst) = value;
    }
}
