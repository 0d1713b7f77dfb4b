//! Generic in-place three-way quicksort.
//!
//! Sorts any [`Cloning`] container into non-decreasing order using nothing
//! but the capability contract. The result is a permutation of the input; it
//! is not stable among elements the comparator calls equal.
//!
//! ## Dispatch
//!
//! ```text
//!   sort(c, cmp)
//!      │
//!      ├── C::Access = Indexed ────► in-place three-way quicksort over
//!      │                             positions [0, size-1]
//!      │
//!      └── C::Access = Sequential ─► extract: clone every element into a
//!                                    Vec<C::Scratch>
//!                                    sort:    in-place path on that Vec
//!                                    write:   walk c again, restore each
//!                                             sorted scratch value
//! ```
//!
//! ## Partition layout
//!
//! ```text
//!   while scanning (j walks right, stops at p):
//!
//!   start        lt          j           p          end
//!     │  < pivot  │ > pivot   │ unscanned │ == pivot  │
//!
//!   after scanning, the shorter of [lt, p) and [p, end] is block-swapped so
//!   the pivots sit in the middle:
//!
//!     │  < pivot  │  == pivot  │  > pivot  │
//!               less_end    greater_start
//! ```
//!
//! Every element move is a [`Cloning::swap_elements`]: copy A to scratch,
//! copy B over A, restore scratch into B.
//!
//! ## Example Usage
//!
//! ```
//! use cursorkit::algo::sort::{SortConfig, sort};
//! use cursorkit::ds::LinkedList;
//!
//! let mut v = vec![5, 3, 9, 3, 1];
//! sort(&mut v, |a, b| a.cmp(b));
//! assert_eq!(v, vec![1, 3, 3, 5, 9]);
//!
//! // Linked lists take the fallback path; a fixed seed makes pivots reproducible.
//! let mut list: LinkedList<&str> = ["pear", "fig", "apple"].into_iter().collect();
//! SortConfig::seeded(7).sorter().sort(&mut list, |a, b| a.cmp(b));
//! assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec!["apple", "fig", "pear"]);
//! ```

use std::borrow::Borrow;
use std::cmp::Ordering;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::InvariantError;
use crate::traits::{AccessKind, Cloning, Indexed, RandomAccess, Sequential, Traversal};

/// Bounds reported by [`partition_3_way`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Partition {
    /// Last position holding an element strictly less than the pivot, or
    /// `None` if no element was less.
    pub less_end: Option<usize>,
    /// First position holding an element strictly greater than the pivot;
    /// `end + 1` if no element was greater.
    pub greater_start: usize,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Pivot-selection settings for [`Sorter`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SortConfig {
    seed: Option<u64>,
}

impl SortConfig {
    /// Pivots drawn from a generator seeded by the thread-local RNG.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pivots drawn from a generator seeded with `seed`; the same seed and
    /// input always produce the same sequence of element moves.
    pub fn seeded(seed: u64) -> Self {
        Self { seed: Some(seed) }
    }

    /// Returns the fixed seed, or `None` when seeding from the thread RNG.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Builds a [`Sorter`] with a fresh pivot generator.
    ///
    /// Unseeded sorters draw their seed from [`rand::rng`], so building one
    /// does not hit the OS entropy source.
    pub fn sorter(&self) -> Sorter {
        let rng = match self.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_rng(&mut rand::rng()),
        };
        Sorter { rng }
    }
}

/// Sorts containers, carrying the pivot generator between calls.
#[derive(Debug, Clone)]
pub struct Sorter {
    rng: SmallRng,
}

impl Sorter {
    /// Sorts `container` by `compare`, choosing the in-place or fallback path
    /// from the container's access kind.
    pub fn sort<C, F>(&mut self, container: &mut C, mut compare: F)
    where
        C: Cloning + ?Sized,
        C::Access: SortPath<C>,
        F: FnMut(&C::Item, &C::Item) -> Ordering,
    {
        log::debug!(
            "sort: {} path, {:?} elements",
            if <C::Access as AccessKind>::RANDOM_ACCESS {
                "in-place"
            } else {
                "fallback"
            },
            container.exact_size()
        );
        <C::Access as SortPath<C>>::sort_by(container, &mut compare, &mut self.rng);
    }
}

/// Sorts `container` by `compare` with a pivot sequence seeded from the
/// thread-local RNG.
pub fn sort<C, F>(container: &mut C, compare: F)
where
    C: Cloning + ?Sized,
    C::Access: SortPath<C>,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    SortConfig::new().sorter().sort(container, compare);
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

/// Sorting strategy selected by a container's [`AccessKind`].
pub trait SortPath<C: Cloning + ?Sized>: AccessKind {
    /// Sorts all of `container`, drawing pivots from `rng`.
    fn sort_by<F>(container: &mut C, compare: &mut F, rng: &mut SmallRng)
    where
        F: FnMut(&C::Item, &C::Item) -> Ordering;
}

impl<C> SortPath<C> for Indexed
where
    C: RandomAccess + Cloning + ?Sized,
{
    fn sort_by<F>(container: &mut C, compare: &mut F, rng: &mut SmallRng)
    where
        F: FnMut(&C::Item, &C::Item) -> Ordering,
    {
        let size = container.size();
        if size < 2 {
            return;
        }
        quick_sort_range(container, 0, size - 1, compare, rng);
    }
}

impl<C> SortPath<C> for Sequential
where
    C: Cloning + ?Sized,
{
    fn sort_by<F>(container: &mut C, compare: &mut F, rng: &mut SmallRng)
    where
        F: FnMut(&C::Item, &C::Item) -> Ordering,
    {
        let mut staged: Vec<C::Scratch> = Vec::with_capacity(container.exact_size().unwrap_or(0));
        let mut cursor = container.cursor();
        while !container.is_end(&cursor) {
            staged.push(container.clone_scratch(&cursor));
            container.advance(&mut cursor);
        }
        if staged.len() < 2 {
            return;
        }

        let end = staged.len() - 1;
        let mut by_scratch = |a: &C::Scratch, b: &C::Scratch| {
            compare(
                <C::Scratch as Borrow<C::Item>>::borrow(a),
                <C::Scratch as Borrow<C::Item>>::borrow(b),
            )
        };
        quick_sort_range(&mut staged, 0, end, &mut by_scratch, rng);

        let mut cursor = container.cursor();
        for value in &staged {
            container.restore_scratch(&cursor, value);
            container.advance(&mut cursor);
        }
    }
}

// ---------------------------------------------------------------------------
// In-place path
// ---------------------------------------------------------------------------

fn quick_sort_range<C, F>(
    container: &mut C,
    start: usize,
    end: usize,
    compare: &mut F,
    rng: &mut SmallRng,
) where
    C: RandomAccess + Cloning + ?Sized,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    if end <= start {
        return;
    }

    let pivot_pos = rng.random_range(start..=end);
    let partition = partition_3_way(container, start, end, pivot_pos, &mut *compare);

    if let Some(less_end) = partition.less_end {
        quick_sort_range(container, start, less_end, compare, rng);
    }
    quick_sort_range(container, partition.greater_start, end, compare, rng);
}

/// Partitions positions `[start, end]` around the element at `pivot_pos`.
///
/// On return, `[start, less_end]` holds elements less than the pivot,
/// `[greater_start, end]` elements greater than it, and the positions in
/// between hold the elements equal to it.
///
/// # Panics
///
/// Panics unless `start <= pivot_pos <= end < container.size()`.
pub fn partition_3_way<C, F>(
    container: &mut C,
    start: usize,
    end: usize,
    pivot_pos: usize,
    mut compare: F,
) -> Partition
where
    C: RandomAccess + Cloning + ?Sized,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    assert!(
        start <= pivot_pos && pivot_pos <= end && end < container.size(),
        "partition range [{start}, {end}] with pivot {pivot_pos} is invalid for size {}",
        container.size()
    );

    let end_cursor = container.cursor_at(end);
    let pivot_cursor = container.cursor_at(pivot_pos);
    container.swap_elements(&end_cursor, &pivot_cursor);
    let pivot_value = container.clone_scratch(&end_cursor);
    let pivot = <C::Scratch as Borrow<C::Item>>::borrow(&pivot_value);

    let mut lt = start;
    let mut p = end;
    let mut j = start;
    let mut probe = container.cursor();
    while j < p {
        container.seek(&mut probe, j);
        match compare(container.element(&probe), pivot) {
            Ordering::Equal => {
                p -= 1;
                let target = container.cursor_at(p);
                container.swap_elements(&probe, &target);
            },
            Ordering::Less => {
                let target = container.cursor_at(lt);
                container.swap_elements(&target, &probe);
                lt += 1;
                j += 1;
            },
            Ordering::Greater => j += 1,
        }
    }

    let greater_len = p - lt;
    let equal_len = end - p + 1;
    let block_len = greater_len.min(equal_len);
    block_swap_to_end(container, lt, end, block_len);

    let partition = Partition {
        less_end: (lt > start).then(|| lt - 1),
        greater_start: if block_len == greater_len {
            end - block_len + 1
        } else {
            lt + block_len
        },
    };
    log::trace!(
        "partition [{start}, {end}] pivot {pivot_pos}: less_end={:?} greater_start={}",
        partition.less_end,
        partition.greater_start
    );
    partition
}

/// Swaps `[start, start + len)` with the last `len` positions ending at `end`.
fn block_swap_to_end<C>(container: &mut C, start: usize, end: usize, len: usize)
where
    C: RandomAccess + Cloning + ?Sized,
{
    let tail_start = end + 1 - len;
    let mut head = container.cursor_at(start);
    let mut tail = container.cursor_at(tail_start);
    for _ in 0..len {
        container.swap_elements(&head, &tail);
        container.advance(&mut head);
        container.advance(&mut tail);
    }
}

// ---------------------------------------------------------------------------
// Verification
// ---------------------------------------------------------------------------

/// Checks that every adjacent pair is in non-decreasing order.
pub fn check_sorted<C, F>(container: &C, mut compare: F) -> Result<(), InvariantError>
where
    C: Traversal + ?Sized,
    F: FnMut(&C::Item, &C::Item) -> Ordering,
{
    let mut previous = container.cursor();
    if container.is_end(&previous) {
        return Ok(());
    }
    let mut current = previous.clone();
    container.advance(&mut current);
    let mut index = 1;
    while !container.is_end(&current) {
        if compare(container.element(&previous), container.element(&current)) == Ordering::Greater
        {
            return Err(InvariantError::new(format!(
                "element at position {} is greater than its successor",
                index - 1
            )));
        }
        previous = current.clone();
        container.advance(&mut current);
        index += 1;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ds::{CharSeq, LinkedList, RawBlock};

    fn cmp_i64(a: &i64, b: &i64) -> Ordering {
        a.cmp(b)
    }

    #[test]
    fn partition_mixed_pivots() {
        let mut a: Vec<i64> = vec![1, 10, 3, 4, 10, 2, 10, 25, 22, 10, 11, 10, 9, 10];
        let partition = partition_3_way(&mut a, 0, 13, 1, cmp_i64);
        assert_eq!(partition.less_end, Some(4));
        assert_eq!(partition.greater_start, 11);
        assert_eq!(a, vec![1, 9, 3, 4, 2, 10, 10, 10, 10, 10, 10, 11, 22, 25]);
    }

    #[test]
    fn partition_greater_block_shorter() {
        let mut a: Vec<i64> = vec![1, 10, 3, 4, 12, 2, 15, 25, 22, 10, 11, 11, 9, 10];
        let partition = partition_3_way(&mut a, 0, 13, 1, cmp_i64);
        assert_eq!(partition.less_end, Some(4));
        assert_eq!(partition.greater_start, 8);
        assert_eq!(a, vec![1, 9, 3, 4, 2, 10, 10, 10, 22, 11, 11, 12, 15, 25]);
    }

    #[test]
    fn partition_single_pivot() {
        let mut a: Vec<i64> = vec![1, 10, 3, 4, 12, 2, 15, 25, 22, 14, 11, 11, 9, 9];
        let partition = partition_3_way(&mut a, 0, 13, 1, cmp_i64);
        assert_eq!(partition.less_end, Some(5));
        assert_eq!(partition.greater_start, 7);
        assert_eq!(a, vec![1, 9, 3, 4, 2, 9, 10, 25, 22, 14, 11, 11, 12, 15]);
    }

    #[test]
    fn partition_all_pivots() {
        let mut a: Vec<i64> = vec![10; 14];
        let partition = partition_3_way(&mut a, 0, 13, 1, cmp_i64);
        assert_eq!(partition.less_end, None);
        assert_eq!(partition.greater_start, 14);
        assert_eq!(a, vec![10; 14]);
    }

    #[test]
    fn partition_sub_range_leaves_outside_untouched() {
        let mut a: Vec<i64> = vec![99, 5, 1, 5, 3, -1];
        let partition = partition_3_way(&mut a, 1, 4, 1, cmp_i64);
        assert_eq!(a[0], 99);
        assert_eq!(a[5], -1);
        assert_eq!(partition.less_end, Some(2));
        assert_eq!(partition.greater_start, 5);
        assert_eq!(&a[3..5], &[5, 5]);
    }

    #[test]
    #[should_panic(expected = "invalid")]
    fn partition_rejects_pivot_outside_range() {
        let mut a: Vec<i64> = vec![1, 2, 3];
        partition_3_way(&mut a, 0, 1, 2, cmp_i64);
    }

    #[test]
    fn sort_empty_and_single() {
        let mut empty: Vec<i64> = Vec::new();
        sort(&mut empty, cmp_i64);
        assert!(empty.is_empty());

        let mut single = vec![100i64];
        sort(&mut single, cmp_i64);
        assert_eq!(single, vec![100]);

        let mut list: LinkedList<i64> = LinkedList::new();
        sort(&mut list, cmp_i64);
        assert!(list.is_empty());
    }

    #[test]
    fn sort_all_repetitions() {
        let mut a = vec![10i64; 14];
        sort(&mut a, cmp_i64);
        assert_eq!(a, vec![10; 14]);
    }

    #[test]
    fn sort_full_array() {
        let mut a: Vec<i64> = vec![85, 91, 49, 16, 31, 26, 96, 83, 60, 80];
        SortConfig::seeded(42).sorter().sort(&mut a, cmp_i64);
        assert_eq!(a, vec![16, 26, 31, 49, 60, 80, 83, 85, 91, 96]);
    }

    #[test]
    fn sort_slice_in_place() {
        let mut data = [3, 1, 2];
        let slice: &mut [i32] = &mut data;
        sort(slice, |a, b| a.cmp(b));
        assert_eq!(data, [1, 2, 3]);
    }

    #[test]
    fn sort_linked_list_takes_fallback_path() {
        let mut list: LinkedList<i64> = [5, -2, 9, 0, 5, 3].into_iter().collect();
        let ids_before = list.len();
        sort(&mut list, cmp_i64);
        assert_eq!(list.len(), ids_before);
        assert_eq!(
            list.iter().copied().collect::<Vec<_>>(),
            vec![-2, 0, 3, 5, 5, 9]
        );
        list.check_invariants().unwrap();
    }

    #[test]
    fn sort_raw_block_by_decoded_value() {
        let values: Vec<[u8; 4]> = [300u32, 7, 65_536, 1, 7]
            .iter()
            .map(|v| v.to_le_bytes())
            .collect();
        let mut block = RawBlock::try_from_elements(&values).unwrap();
        let decode = |bytes: &[u8]| u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
        sort(&mut block, |a, b| decode(a).cmp(&decode(b)));

        let sorted: Vec<u32> = (0..block.len())
            .map(|i| decode(block.get(i).unwrap()))
            .collect();
        assert_eq!(sorted, vec![1, 7, 7, 300, 65_536]);
    }

    #[test]
    fn sort_char_seq() {
        let mut text = CharSeq::from("quicksort");
        sort(&mut text, |a, b| a.cmp(b));
        assert_eq!(text.as_str(), Some("cikoqrstu"));
    }

    #[test]
    fn sort_descending_comparator() {
        let mut a: Vec<i64> = vec![2, 9, 4];
        sort(&mut a, |x, y| y.cmp(x));
        assert_eq!(a, vec![9, 4, 2]);
    }

    #[test]
    fn sort_is_not_required_to_be_stable() {
        let mut pairs = vec![(1, 'a'), (0, 'b'), (1, 'c'), (0, 'd')];
        sort(&mut pairs, |x, y| x.0.cmp(&y.0));
        assert!(check_sorted(&pairs, |x, y| x.0.cmp(&y.0)).is_ok());
        let mut tags: Vec<char> = pairs.iter().map(|p| p.1).collect();
        tags.sort_unstable();
        assert_eq!(tags, vec!['a', 'b', 'c', 'd']);
    }

    #[test]
    fn seeded_sorter_is_reproducible() {
        let input: Vec<i64> = (0..50).map(|i| (i * 37) % 11).collect();
        let mut a = input.clone();
        let mut b = input;
        SortConfig::seeded(3).sorter().sort(&mut a, cmp_i64);
        SortConfig::seeded(3).sorter().sort(&mut b, cmp_i64);
        assert_eq!(a, b);
        assert_eq!(SortConfig::seeded(3).seed(), Some(3));
        assert_eq!(SortConfig::new().seed(), None);
    }

    #[test]
    fn unseeded_sorter_is_reusable() {
        let config = SortConfig::new();
        assert_eq!(config.seed(), None);

        let mut sorter = config.sorter();
        for round in 0..64i64 {
            let mut v: Vec<i64> = (0..32).map(|i| (i * 17 + round) % 9).collect();
            sorter.sort(&mut v, cmp_i64);
            assert!(check_sorted(&v, cmp_i64).is_ok());
        }
    }

    #[test]
    fn check_sorted_reports_first_violation() {
        assert!(check_sorted(&vec![1, 2, 2, 3], |a: &i32, b: &i32| a.cmp(b)).is_ok());
        assert!(check_sorted(&Vec::<i32>::new(), |a: &i32, b: &i32| a.cmp(b)).is_ok());

        let err = check_sorted(&vec![1, 3, 2], |a: &i32, b: &i32| a.cmp(b)).unwrap_err();
        assert!(err.message().contains("position 1"));
    }

    mod property_tests {
        use super::*;
        use proptest::prelude::*;

        fn sorted_copy(values: &[i64]) -> Vec<i64> {
            let mut expected = values.to_vec();
            expected.sort();
            expected
        }

        proptest! {
            /// Property: in-place sort yields a sorted permutation
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_sort_vec_is_sorted_permutation(
                values in prop::collection::vec(-50i64..50, 0..200),
                seed in any::<u64>()
            ) {
                let mut v = values.clone();
                SortConfig::seeded(seed).sorter().sort(&mut v, cmp_i64);
                prop_assert!(check_sorted(&v, cmp_i64).is_ok());
                prop_assert_eq!(v, sorted_copy(&values));
            }

            /// Property: fallback sort yields a sorted permutation
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_sort_list_is_sorted_permutation(
                values in prop::collection::vec(any::<i64>(), 0..100)
            ) {
                let mut list: LinkedList<i64> = values.iter().copied().collect();
                sort(&mut list, cmp_i64);
                let sorted: Vec<i64> = list.iter().copied().collect();
                prop_assert_eq!(sorted, sorted_copy(&values));
            }

            /// Property: sorting a sorted sequence changes nothing
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_sort_is_idempotent(values in prop::collection::vec(0i64..8, 0..100)) {
                let mut once = values.clone();
                sort(&mut once, cmp_i64);
                let mut twice = once.clone();
                sort(&mut twice, cmp_i64);
                prop_assert_eq!(once, twice);
            }

            /// Property: partition bounds split less / equal / greater
            #[cfg_attr(miri, ignore)]
            #[test]
            fn prop_partition_bounds_hold(
                values in prop::collection::vec(0i64..6, 1..60),
                pivot_seed in any::<usize>()
            ) {
                let mut v = values.clone();
                let end = v.len() - 1;
                let pivot_pos = pivot_seed % v.len();
                let pivot = v[pivot_pos];
                let partition = partition_3_way(&mut v, 0, end, pivot_pos, cmp_i64);

                let equal_start = partition.less_end.map_or(0, |i| i + 1);
                for (i, x) in v.iter().enumerate() {
                    if i < equal_start {
                        prop_assert!(*x < pivot);
                    } else if i < partition.greater_start {
                        prop_assert_eq!(*x, pivot);
                    } else {
                        prop_assert!(*x > pivot);
                    }
                }
                prop_assert_eq!(sorted_copy(&v), sorted_copy(&values));
            }
        }
    }
}
