//! Generic traversal: visit, find, map, filter, count, reverse, replace.
//!
//! Every function here creates its own cursors, drives them through the
//! [`Traversal`] operations and drops them before returning. None of them
//! writes to the container unless its bounds include [`Mutable`].
//!
//! | Function             | Needs                      | Cost                        |
//! |----------------------|----------------------------|-----------------------------|
//! | `for_each`           | `Traversal`                | O(n)                        |
//! | `for_each_with_index`| `Traversal`                | O(n)                        |
//! | `for_each_reverse`   | `Bidirectional`            | O(n)                        |
//! | `find_first`         | `Traversal`                | O(k), stops at first match  |
//! | `find_last`          | `Bidirectional`            | O(k) from the back          |
//! | `map` / `filter`     | `Traversal`                | O(n), allocates the result  |
//! | `first`              | `Traversal`                | O(1)                        |
//! | `last`               | `Traversal`                | O(1) with `last_cursor`     |
//! | `count`              | `Traversal`                | O(1) with `exact_size`      |
//! | `reverse`            | `Bidirectional + Cloning`  | O(n) swaps                  |
//! | `replace`            | `Mutable`                  | O(n)                        |
//!
//! ## Example Usage
//!
//! ```
//! use cursorkit::algo::traversal::{filter, map, reverse};
//! use cursorkit::ds::LinkedList;
//!
//! let mut list: LinkedList<i32> = [1, 2, 3, 4].into_iter().collect();
//! assert_eq!(map(&list, |x| x * 10), vec![10, 20, 30, 40]);
//! assert_eq!(filter(&list, |x| x % 2 == 0), vec![&2, &4]);
//!
//! reverse(&mut list);
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![4, 3, 2, 1]);
//! ```

use crate::traits::{Bidirectional, Cloning, Mutable, Traversal};

/// Calls `action` on every element, front to back.
pub fn for_each<C, F>(container: &C, mut action: F)
where
    C: Traversal + ?Sized,
    F: FnMut(&C::Item),
{
    let mut cursor = container.cursor();
    while !container.is_end(&cursor) {
        action(container.element(&cursor));
        container.advance(&mut cursor);
    }
}

/// Like [`for_each`], also passing the zero-based visitation index.
pub fn for_each_with_index<C, F>(container: &C, mut action: F)
where
    C: Traversal + ?Sized,
    F: FnMut(&C::Item, usize),
{
    let mut cursor = container.cursor();
    let mut index = 0;
    while !container.is_end(&cursor) {
        action(container.element(&cursor), index);
        index += 1;
        container.advance(&mut cursor);
    }
}

/// Calls `action` on every element, back to front.
pub fn for_each_reverse<C, F>(container: &C, mut action: F)
where
    C: Bidirectional + ?Sized,
    F: FnMut(&C::Item),
{
    let mut cursor = container.cursor();
    container.seek_last(&mut cursor);
    while !container.is_end(&cursor) {
        action(container.element(&cursor));
        container.retreat(&mut cursor);
    }
}

/// Returns the first element satisfying `predicate`.
pub fn find_first<C, P>(container: &C, mut predicate: P) -> Option<&C::Item>
where
    C: Traversal + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    let mut cursor = container.cursor();
    while !container.is_end(&cursor) {
        let element = container.element(&cursor);
        if predicate(element) {
            return Some(element);
        }
        container.advance(&mut cursor);
    }
    None
}

/// Returns the last element satisfying `predicate`, scanning from the back.
pub fn find_last<C, P>(container: &C, mut predicate: P) -> Option<&C::Item>
where
    C: Bidirectional + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    let mut cursor = container.cursor();
    container.seek_last(&mut cursor);
    while !container.is_end(&cursor) {
        let element = container.element(&cursor);
        if predicate(element) {
            return Some(element);
        }
        container.retreat(&mut cursor);
    }
    None
}

/// Collects `transform(e)` for every element, preserving order.
pub fn map<C, U, F>(container: &C, mut transform: F) -> Vec<U>
where
    C: Traversal + ?Sized,
    F: FnMut(&C::Item) -> U,
{
    let mut mapped = Vec::with_capacity(container.exact_size().unwrap_or(0));
    for_each(container, |element| mapped.push(transform(element)));
    mapped
}

/// Collects references to the elements for which `keep` holds, preserving
/// order. Elements are borrowed, not copied.
pub fn filter<C, P>(container: &C, mut keep: P) -> Vec<&C::Item>
where
    C: Traversal + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    let mut kept = Vec::new();
    let mut cursor = container.cursor();
    while !container.is_end(&cursor) {
        let element = container.element(&cursor);
        if keep(element) {
            kept.push(element);
        }
        container.advance(&mut cursor);
    }
    kept
}

/// Returns the first element, or `None` if the container is empty.
pub fn first<C>(container: &C) -> Option<&C::Item>
where
    C: Traversal + ?Sized,
{
    let cursor = container.cursor();
    if container.is_end(&cursor) {
        return None;
    }
    Some(container.element(&cursor))
}

/// Returns the last element: O(1) when the container publishes a
/// `last_cursor`, a full scan otherwise.
pub fn last<C>(container: &C) -> Option<&C::Item>
where
    C: Traversal + ?Sized,
{
    if let Some(cursor) = container.last_cursor() {
        if container.is_end(&cursor) {
            return None;
        }
        return Some(container.element(&cursor));
    }

    let mut cursor = container.cursor();
    let mut previous = None;
    while !container.is_end(&cursor) {
        previous = Some(cursor.clone());
        container.advance(&mut cursor);
    }
    previous.map(|cursor| container.element(&cursor))
}

/// Returns the number of elements: O(1) when the container publishes an
/// `exact_size`, a full scan otherwise.
pub fn count<C>(container: &C) -> usize
where
    C: Traversal + ?Sized,
{
    if let Some(size) = container.exact_size() {
        return size;
    }

    let mut total = 0;
    let mut cursor = container.cursor();
    while !container.is_end(&cursor) {
        total += 1;
        container.advance(&mut cursor);
    }
    total
}

/// Reverses the container in place.
///
/// A forward and a backward cursor walk toward each other, swapping as they
/// go; the walk stops when the cursors meet (odd length) or cross (even
/// length). Termination compares cursor positions, never indices, so the same
/// code serves lists and arrays.
pub fn reverse<C>(container: &mut C)
where
    C: Bidirectional + Cloning + ?Sized,
{
    let mut front = container.cursor();
    if container.is_end(&front) {
        return;
    }
    let mut back = container.cursor();
    container.seek_last(&mut back);

    loop {
        if front == back {
            break;
        }
        container.swap_elements(&front, &back);
        container.advance(&mut front);
        if front == back {
            break;
        }
        container.retreat(&mut back);
    }
}

/// Rewrites every element in place with `transform(current)`.
pub fn replace<C, F>(container: &mut C, mut transform: F)
where
    C: Mutable + ?Sized,
    C::Item: Sized,
    F: FnMut(&C::Item) -> C::Item,
{
    let mut cursor = container.cursor();
    while !container.is_end(&cursor) {
        let next = transform(container.element(&cursor));
        *container.element_mut(&cursor) = next;
        container.advance(&mut cursor);
    }
}
