//! Generic algorithms written against the capability traits.
//!
//! - [`traversal`]: enumeration, lookup and transformation walks.
//! - [`sort`]: three-way quicksort with an in-place and a fallback path.
//! - [`search`]: binary search over random-access containers.

pub mod search;
pub mod sort;
pub mod traversal;

pub use search::{NOT_FOUND, binary_search, binary_search_index};
pub use sort::{Partition, SortConfig, SortPath, Sorter, check_sorted, partition_3_way, sort};
pub use traversal::{
    count, filter, find_first, find_last, first, for_each, for_each_reverse, for_each_with_index,
    last, map, replace, reverse,
};
