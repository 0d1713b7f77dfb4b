//! Key enumeration over ordered sets: `BTreeSet<K>`.
//!
//! Tree-shaped containers only expose forward enumeration of their keys. The
//! cursor holds a copy of the current key and each step is an O(log n) range
//! lookup for its successor. No size, backward, or write capability is
//! published, so `count` and `last` fall back to a full scan here.
//!
//! | basic | bidirectional | random access | mutable | cloning |
//! |-------|---------------|---------------|---------|---------|
//! | yes   | no            | no            | no      | no      |

use std::collections::BTreeSet;
use std::ops::Bound;

use crate::traits::{Capabilities, Sequential, Traversal};

impl<K: Ord + Clone> Traversal for BTreeSet<K> {
    type Item = K;
    type Cursor = Option<K>;
    type Access = Sequential;

    const CAPABILITIES: Capabilities = Capabilities::BASIC;

    fn cursor(&self) -> Option<K> {
        self.first().cloned()
    }

    fn advance(&self, cursor: &mut Option<K>) {
        let next = match cursor {
            Some(key) => self
                .range((Bound::Excluded(&*key), Bound::Unbounded))
                .next()
                .cloned(),
            None => None,
        };
        *cursor = next;
    }

    fn is_end(&self, cursor: &Option<K>) -> bool {
        cursor.is_none()
    }

    fn element<'a>(&'a self, cursor: &Option<K>) -> &'a K {
        match cursor.as_ref().and_then(|key| self.get(key)) {
            Some(key) => key,
            None => panic!("BTreeSet cursor is not positioned on a key"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enumerates_keys_in_order() {
        let set: BTreeSet<_> = [5, 1, 3].into_iter().collect();
        let mut cursor = Traversal::cursor(&set);
        let mut seen = Vec::new();
        while !set.is_end(&cursor) {
            seen.push(*set.element(&cursor));
            set.advance(&mut cursor);
        }
        assert_eq!(seen, vec![1, 3, 5]);
    }

    #[test]
    fn empty_set_cursor_is_end() {
        let set: BTreeSet<u32> = BTreeSet::new();
        assert!(set.is_end(&Traversal::cursor(&set)));
        assert_eq!(set.exact_size(), None);
        assert_eq!(set.last_cursor(), None);
    }
}
