//! Binary search over random-access containers.
//!
//! The container must already be sorted in non-decreasing order under the
//! same comparator; otherwise the result is unspecified but the search still
//! terminates. With duplicate matches, any matching position may be returned.

use std::cmp::Ordering;

use crate::traits::RandomAccess;

/// Sentinel returned by [`binary_search_index`] when no element matches.
pub const NOT_FOUND: usize = usize::MAX;

/// Finds a position whose element compares equal to `target`.
///
/// `compare(element, target)` orders a container element against the probe.
/// Performs O(log n) comparisons and seeks.
///
/// ```
/// use cursorkit::algo::search::binary_search;
///
/// let v = vec![1, 3, 5, 7];
/// assert_eq!(binary_search(&v, &5, |e, t| e.cmp(t)), Some(2));
/// assert_eq!(binary_search(&v, &4, |e, t| e.cmp(t)), None);
/// ```
pub fn binary_search<C, T, F>(container: &C, target: &T, mut compare: F) -> Option<usize>
where
    C: RandomAccess + ?Sized,
    T: ?Sized,
    F: FnMut(&C::Item, &T) -> Ordering,
{
    let size = container.size();
    if size == 0 {
        return None;
    }

    let mut left = 0;
    let mut right = size - 1;
    let mut probe = container.cursor();
    while left <= right {
        let mid = left + (right - left) / 2;
        container.seek(&mut probe, mid);
        match compare(container.element(&probe), target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => left = mid + 1,
            Ordering::Greater => {
                if mid == 0 {
                    return None;
                }
                right = mid - 1;
            },
        }
    }
    None
}

/// Like [`binary_search`], but reports a miss as [`NOT_FOUND`].
pub fn binary_search_index<C, T, F>(container: &C, target: &T, compare: F) -> usize
where
    C: RandomAccess + ?Sized,
    T: ?Sized,
    F: FnMut(&C::Item, &T) -> Ordering,
{
    binary_search(container, target, compare).unwrap_or(NOT_FOUND)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ds::{CharSeq, RawBlock};

    fn cmp_i64(a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn finds_every_present_value() {
        let v: Vec<i64> = vec![1, 2, 3, 4, 5, 6];
        for (index, value) in v.iter().enumerate() {
            assert_eq!(binary_search(&v, value, cmp_i64), Some(index));
        }
    }

    #[test]
    fn misses_below_and_above_range() {
        let v: Vec<i64> = vec![1, 2, 3, 4, 5, 6];
        assert_eq!(binary_search(&v, &-1, cmp_i64), None);
        assert_eq!(binary_search(&v, &12, cmp_i64), None);
        assert_eq!(binary_search_index(&v, &-1, cmp_i64), NOT_FOUND);
        assert_eq!(binary_search_index(&v, &12, cmp_i64), NOT_FOUND);
        assert_eq!(binary_search_index(&v, &4, cmp_i64), 3);
    }

    #[test]
    fn misses_in_gaps() {
        let v: Vec<i64> = vec![10, 20, 30];
        assert_eq!(binary_search(&v, &15, cmp_i64), None);
        assert_eq!(binary_search(&v, &25, cmp_i64), None);
    }

    #[test]
    fn empty_and_single() {
        let empty: Vec<i64> = Vec::new();
        assert_eq!(binary_search(&empty, &1, cmp_i64), None);

        let single: Vec<i64> = vec![7];
        assert_eq!(binary_search(&single, &7, cmp_i64), Some(0));
        assert_eq!(binary_search(&single, &6, cmp_i64), None);
        assert_eq!(binary_search(&single, &8, cmp_i64), None);
    }

    #[test]
    fn duplicates_return_some_match() {
        let v: Vec<i64> = vec![1, 4, 4, 4, 9];
        let found = binary_search(&v, &4, cmp_i64).unwrap();
        assert_eq!(v[found], 4);
    }

    #[test]
    fn heterogeneous_probe() {
        let names = vec!["ada".to_string(), "grace".to_string(), "linus".to_string()];
        let found = binary_search(names.as_slice(), "grace", |e: &String, t: &str| {
            e.as_str().cmp(t)
        });
        assert_eq!(found, Some(1));
    }

    #[test]
    fn searches_char_seq_and_raw_block() {
        let text = CharSeq::from("abdfz");
        assert_eq!(binary_search(&text, &b'f', |e, t| e.cmp(t)), Some(3));
        assert_eq!(binary_search(&text, &b'c', |e, t| e.cmp(t)), None);

        let block = RawBlock::try_from_elements(&[[0u8, 1], [0, 9], [3, 0]]).unwrap();
        let probe: &[u8] = &[0, 9];
        assert_eq!(
            binary_search(&block, probe, |e: &[u8], t: &[u8]| e.cmp(t)),
            Some(1)
        );
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: search agrees with membership on sorted input
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_search_matches_membership(
                mut values in prop::collection::vec(-100i64..100, 0..64),
                target in -110i64..110
            ) {
                values.sort();
                match binary_search(&values, &target, cmp_i64) {
                    Some(index) => prop_assert_eq!(values[index], target),
                    None => prop_assert!(!values.contains(&target)),
                }
            }

            /// Property: unsorted input still terminates in range
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_search_terminates_on_unsorted(
                values in prop::collection::vec(any::<i64>(), 0..64),
                target in any::<i64>()
            ) {
                let index = binary_search_index(&values, &target, cmp_i64);
                prop_assert!(index == NOT_FOUND || index < values.len());
            }
        }
    }
}
