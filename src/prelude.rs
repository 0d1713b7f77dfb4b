pub use crate::algo::{
    NOT_FOUND, Partition, SortConfig, Sorter, binary_search, binary_search_index, check_sorted,
    count, filter, find_first, find_last, first, for_each, for_each_reverse, for_each_with_index,
    last, map, partition_3_way, replace, reverse, sort,
};
pub use crate::ds::{CharSeq, LinkedList, RawBlock, SlotArena, SlotId};
pub use crate::error::{ConfigError, ContractViolation, InvariantError};
pub use crate::traits::{
    AccessKind, Bidirectional, Capabilities, Capability, Cloning, Indexed, Mutable, RandomAccess,
    Sequential, Traversal,
};
