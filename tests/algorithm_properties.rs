// ==============================================
// CROSS-CONTAINER ALGORITHM PROPERTIES (integration)
// ==============================================
//
// The same generic algorithm must agree on every container that can run it.
// Each property loads identical data into several containers and compares the
// results against a plain Vec computed with the standard library.

use std::cmp::Ordering;
use std::collections::BTreeSet;

use cursorkit::prelude::*;
use proptest::prelude::*;

fn ascending(a: &i32, b: &i32) -> Ordering {
    a.cmp(b)
}

fn contents<C>(container: &C) -> Vec<i32>
where
    C: Traversal<Item = i32> + ?Sized,
{
    map(container, |x| *x)
}

// ==============================================
// Sorting
// ==============================================

mod sorting {
    use super::*;

    #[test]
    fn both_paths_agree_on_fixed_input() {
        let input = vec![1, 10, 3, 4, 10, 2, 10, 25, 22, 10, 11, 10, 9, 10];
        let mut expected = input.clone();
        expected.sort();

        let mut v = input.clone();
        sort(&mut v, ascending);
        assert_eq!(v, expected);

        let mut list: LinkedList<i32> = input.into_iter().collect();
        sort(&mut list, ascending);
        assert_eq!(contents(&list), expected);
    }

    #[test]
    fn sort_owned_strings_in_list() {
        let mut list: LinkedList<String> = ["delta", "alpha", "charlie", "bravo"]
            .into_iter()
            .map(String::from)
            .collect();
        sort(&mut list, |a, b| a.cmp(b));
        let sorted: Vec<&str> = list.iter().map(String::as_str).collect();
        assert_eq!(sorted, vec!["alpha", "bravo", "charlie", "delta"]);
    }

    #[test]
    fn sorter_reuses_generator_across_calls() {
        let mut sorter = SortConfig::seeded(11).sorter();
        let mut a = vec![3, 1, 2];
        let mut b: LinkedList<i32> = [9, 8, 7].into_iter().collect();
        sorter.sort(&mut a, ascending);
        sorter.sort(&mut b, ascending);
        assert_eq!(a, vec![1, 2, 3]);
        assert_eq!(contents(&b), vec![7, 8, 9]);
    }

    #[test]
    fn sorted_then_searchable() {
        let mut text = CharSeq::from("binarysearch");
        sort(&mut text, |a, b| a.cmp(b));
        for ch in b"binarysearch" {
            let index = binary_search(&text, ch, |e, t| e.cmp(t)).unwrap();
            assert_eq!(text.as_bytes()[index], *ch);
        }
        assert_eq!(binary_search_index(&text, &b'z', |e, t| e.cmp(t)), NOT_FOUND);
    }
}

// ==============================================
// Traversal Engine
// ==============================================

mod traversal_engine {
    use super::*;

    #[test]
    fn ordered_set_walks_without_extensions() {
        let set: BTreeSet<i32> = [4, -1, 9].into_iter().collect();
        assert_eq!(count(&set), 3);
        assert_eq!(first(&set), Some(&-1));
        assert_eq!(last(&set), Some(&9));
        assert_eq!(filter(&set, |x| *x > 0), vec![&4, &9]);
        assert!(check_sorted(&set, ascending).is_ok());
    }

    #[test]
    fn reverse_then_for_each_reverse_restores_order() {
        let mut list: LinkedList<i32> = (1..=5).collect();
        reverse(&mut list);
        let mut seen = Vec::new();
        for_each_reverse(&list, |x| seen.push(*x));
        assert_eq!(seen, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn find_first_and_last_on_duplicates() {
        let v = vec![(1, 'a'), (2, 'b'), (1, 'c')];
        assert_eq!(find_first(&v, |p| p.0 == 1), Some(&(1, 'a')));
        assert_eq!(find_last(&v, |p| p.0 == 1), Some(&(1, 'c')));
        assert_eq!(find_first(&v, |p| p.0 == 3), None);
    }
}

// ==============================================
// Properties
// ==============================================

proptest! {
    /// Property: Vec and LinkedList sort to the same sequence
    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_sort_paths_agree(values in prop::collection::vec(-20i32..20, 0..150)) {
        let mut v = values.clone();
        let mut list: LinkedList<i32> = values.iter().copied().collect();
        sort(&mut v, ascending);
        sort(&mut list, ascending);

        let mut expected = values;
        expected.sort();
        prop_assert_eq!(&v, &expected);
        prop_assert_eq!(contents(&list), expected);
    }

    /// Property: reverse agrees with the standard library
    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_reverse_matches_std(values in prop::collection::vec(any::<i32>(), 0..100)) {
        let mut v = values.clone();
        let mut list: LinkedList<i32> = values.iter().copied().collect();
        reverse(&mut v);
        reverse(&mut list);

        let mut expected = values;
        expected.reverse();
        prop_assert_eq!(&v, &expected);
        prop_assert_eq!(contents(&list), expected);
    }

    /// Property: count, first and last agree across containers
    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_endpoints_agree(values in prop::collection::vec(any::<i32>(), 0..50)) {
        let list: LinkedList<i32> = values.iter().copied().collect();
        prop_assert_eq!(count(&values), values.len());
        prop_assert_eq!(count(&list), values.len());
        prop_assert_eq!(first(&list), values.first());
        prop_assert_eq!(last(&list), values.last());
        prop_assert_eq!(last(values.as_slice()), values.last());
    }

    /// Property: search finds every element of a sorted vector
    #[cfg_attr(miri, ignore)]
    #[test]
    fn prop_search_finds_all(values in prop::collection::btree_set(any::<i32>(), 0..80)) {
        let sorted: Vec<i32> = values.iter().copied().collect();
        for (index, value) in sorted.iter().enumerate() {
            prop_assert_eq!(binary_search(&sorted, value, ascending), Some(index));
        }
    }
}
