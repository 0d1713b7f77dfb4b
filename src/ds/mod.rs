//! Reference containers and capability impls for standard collections.
//!
//! | Container      | basic | bidirectional | random access | mutable | cloning    |
//! |----------------|-------|---------------|---------------|---------|------------|
//! | `Vec<T>`/`[T]` | yes   | yes           | yes           | yes     | `T: Clone` |
//! | `RawBlock`     | yes   | yes           | yes           | yes     | yes        |
//! | `LinkedList`   | yes   | yes           | no            | yes     | `T: Clone` |
//! | `CharSeq`      | yes   | yes           | yes           | yes     | yes        |
//! | `BTreeSet<K>`  | yes   | no            | no            | no      | no         |
//!
//! Element-dependent cloning is reported by `<C as Cloning>::CAPABILITIES`,
//! not by `Traversal::CAPABILITIES`.

pub mod array;
pub mod char_seq;
pub mod key_set;
pub mod linked_list;
pub mod raw_block;
pub mod slot_arena;

pub use char_seq::CharSeq;
pub use linked_list::LinkedList;
pub use raw_block::RawBlock;
pub use slot_arena::{SlotArena, SlotId};
