//! # Capability Contract
//!
//! This module defines the trait hierarchy every container implements to take
//! part in the generic algorithms of [`crate::algo`]. An algorithm never sees a
//! container's layout: it creates a cursor, moves it, dereferences it and, when
//! the container allows it, writes through it.
//!
//! ## Architecture
//!
//! ```text
//!                        ┌───────────────────────────────────────┐
//!                        │             Traversal                 │
//!                        │                                       │
//!                        │  cursor(&) → Cursor                   │
//!                        │  advance(&, &mut Cursor)              │
//!                        │  is_end(&, &Cursor) → bool            │
//!                        │  element(&, &Cursor) → &Item          │
//!                        │  Cursor: PartialEq  (cursor equality) │
//!                        └───────────────────┬───────────────────┘
//!                                            │
//!          ┌─────────────────────────┬───────┴─────────────────┬───────────────────────┐
//!          ▼                         ▼                         ▼                       │
//!  ┌───────────────────┐   ┌───────────────────┐   ┌──────────────────────┐            │
//!  │  Bidirectional    │   │   RandomAccess    │   │       Mutable        │            │
//!  │                   │   │                   │   │                      │            │
//!  │  retreat          │   │  size             │   │  element_mut         │            │
//!  │  seek_last        │   │  seek             │   │                      │            │
//!  └───────────────────┘   └───────────────────┘   └──────────┬───────────┘            │
//!                                                             ▼                        │
//!                                                  ┌──────────────────────┐            │
//!                                                  │       Cloning        │            │
//!                                                  │                      │            │
//!                                                  │  clone_scratch       │            │
//!                                                  │  restore_scratch     │            │
//!                                                  │  copy_element        │            │
//!                                                  │  swap_elements       │            │
//!                                                  └──────────────────────┘            │
//! ```
//!
//! ## Capability pairs
//!
//! | Trait           | Operations                 | Paired requirement               |
//! |-----------------|----------------------------|----------------------------------|
//! | `Traversal`     | create/advance/deref/end   | cursor equality via `PartialEq`  |
//! | `Bidirectional` | `retreat`, `seek_last`     | both or neither                  |
//! | `RandomAccess`  | `size`, `seek`             | both or neither                  |
//! | `Mutable`       | `element_mut`              | -                                |
//! | `Cloning`       | scratch clone/restore/drop | complete set, implies `Mutable`  |
//!
//! Each pair lives in a single trait, so a container cannot expose half of an
//! extension. An algorithm that needs an extension names it in its bounds; a
//! container lacking it is rejected by the compiler rather than at run time.
//!
//! ## Cursors
//!
//! A cursor is a plain position value: it does not borrow the container, so an
//! algorithm may hold several cursors over one container and still write
//! through [`Mutable::element_mut`]. Cursors are created at the start of an
//! algorithm and dropped before it returns.
//!
//! Retreating before the first element and advancing past the last both leave
//! the cursor in an end state: [`Traversal::is_end`] reports `true` for either.
//!
//! ## Runtime tables
//!
//! [`Traversal::CAPABILITIES`] lists the extensions a container implements for
//! every element type. Cloning usually depends on the element (`T: Clone`), so
//! generic containers leave it out there and the complete table is read from
//! [`Cloning::CAPABILITIES`], which exists only where cloning does:
//!
//! ```
//! use cursorkit::traits::{Cloning, Traversal};
//!
//! assert!(!<Vec<String> as Traversal>::CAPABILITIES.is_cloning());
//! assert!(<Vec<String> as Cloning>::CAPABILITIES.is_cloning());
//! ```
//!
//! ## Scratch values
//!
//! [`Cloning::Scratch`] is an owned copy of one element. For typed containers
//! it is the element itself; for [`RawBlock`](crate::ds::RawBlock), whose
//! element width is only known at run time, it is a byte buffer. Dropping the
//! scratch value releases it.
//!
//! ## Example Usage
//!
//! ```
//! use cursorkit::traits::{RandomAccess, Traversal};
//!
//! fn middle<C: RandomAccess + ?Sized>(c: &C) -> Option<&C::Item> {
//!     let size = c.size();
//!     if size == 0 {
//!         return None;
//!     }
//!     let cursor = c.cursor_at(size / 2);
//!     Some(c.element(&cursor))
//! }
//!
//! let v = vec![1, 2, 3];
//! assert_eq!(middle(&v), Some(&2));
//! ```

use std::borrow::Borrow;

use crate::error::ContractViolation;

// ---------------------------------------------------------------------------
// Runtime capability description
// ---------------------------------------------------------------------------

/// A named optional extension of the basic traversal contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Bidirectional,
    RandomAccess,
    Mutable,
    Cloning,
}

impl Capability {
    /// Returns a lowercase human-readable name.
    pub fn name(self) -> &'static str {
        match self {
            Capability::Bidirectional => "bidirectional",
            Capability::RandomAccess => "random-access",
            Capability::Mutable => "mutable",
            Capability::Cloning => "cloning",
        }
    }
}

/// Runtime summary of the extensions a container supports.
///
/// Every [`Traversal`] implementor publishes one as
/// [`Traversal::CAPABILITIES`]. The generic algorithms do not consult it (their
/// trait bounds already guarantee what they need); it serves introspection,
/// logging and callers that route work based on a runtime description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    bidirectional: bool,
    random_access: bool,
    mutable: bool,
    cloning: bool,
}

impl Capabilities {
    /// Basic traversal only.
    pub const BASIC: Self = Self {
        bidirectional: false,
        random_access: false,
        mutable: false,
        cloning: false,
    };

    /// Every extension.
    pub const ALL: Self = Self {
        bidirectional: true,
        random_access: true,
        mutable: true,
        cloning: true,
    };

    /// Returns a copy with `capability` added.
    pub const fn with(self, capability: Capability) -> Self {
        let mut next = self;
        match capability {
            Capability::Bidirectional => next.bidirectional = true,
            Capability::RandomAccess => next.random_access = true,
            Capability::Mutable => next.mutable = true,
            Capability::Cloning => next.cloning = true,
        }
        next
    }

    /// Returns `true` if [`Bidirectional`] is present.
    pub const fn is_bidirectional(self) -> bool {
        self.bidirectional
    }

    /// Returns `true` if [`RandomAccess`] is present.
    pub const fn is_random_access(self) -> bool {
        self.random_access
    }

    /// Returns `true` if [`Mutable`] is present.
    pub const fn is_mutable(self) -> bool {
        self.mutable
    }

    /// Returns `true` if [`Cloning`] is present.
    pub const fn is_cloning(self) -> bool {
        self.cloning
    }

    /// Returns `true` if `capability` is present.
    pub const fn has(self, capability: Capability) -> bool {
        match capability {
            Capability::Bidirectional => self.bidirectional,
            Capability::RandomAccess => self.random_access,
            Capability::Mutable => self.mutable,
            Capability::Cloning => self.cloning,
        }
    }

    /// Fails with a [`ContractViolation`] naming `operation` if `capability`
    /// is absent.
    pub fn require(
        self,
        operation: &'static str,
        capability: Capability,
    ) -> Result<(), ContractViolation> {
        if self.has(capability) {
            Ok(())
        } else {
            Err(ContractViolation::new(operation, capability))
        }
    }

    /// Shorthand for [`require`](Self::require) with [`Capability::Bidirectional`].
    pub fn require_bidirectional(self, operation: &'static str) -> Result<(), ContractViolation> {
        self.require(operation, Capability::Bidirectional)
    }

    /// Shorthand for [`require`](Self::require) with [`Capability::RandomAccess`].
    pub fn require_random_access(self, operation: &'static str) -> Result<(), ContractViolation> {
        self.require(operation, Capability::RandomAccess)
    }

    /// Shorthand for [`require`](Self::require) with [`Capability::Mutable`].
    pub fn require_mutable(self, operation: &'static str) -> Result<(), ContractViolation> {
        self.require(operation, Capability::Mutable)
    }

    /// Shorthand for [`require`](Self::require) with [`Capability::Cloning`].
    pub fn require_cloning(self, operation: &'static str) -> Result<(), ContractViolation> {
        self.require(operation, Capability::Cloning)
    }
}

// ---------------------------------------------------------------------------
// Access kind
// ---------------------------------------------------------------------------

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Indexed {}
    impl Sealed for super::Sequential {}
}

/// Type-level tag selecting how a container is sorted.
///
/// [`Indexed`] containers implement [`RandomAccess`] and are sorted in place;
/// [`Sequential`] containers go through the extract-sort-reinsert path.
pub trait AccessKind: sealed::Sealed {
    const RANDOM_ACCESS: bool;
}

/// Tag for containers that implement [`RandomAccess`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Indexed;

/// Tag for containers reachable only by stepping a cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sequential;

impl AccessKind for Indexed {
    const RANDOM_ACCESS: bool = true;
}

impl AccessKind for Sequential {
    const RANDOM_ACCESS: bool = false;
}

// ---------------------------------------------------------------------------
// Capability traits
// ---------------------------------------------------------------------------

/// Basic traversal: every container supports this.
pub trait Traversal {
    /// Element type yielded by [`element`](Self::element).
    type Item: ?Sized;

    /// Position within the container. Equality is position equality, never
    /// value equality.
    type Cursor: Clone + PartialEq;

    /// [`Indexed`] or [`Sequential`].
    ///
    /// Selects the sort path. [`RandomAccess`] can only be implemented with
    /// `Access = Indexed`, so a container with random access is always sorted
    /// in place.
    type Access: AccessKind;

    /// Extensions this container implements for every element type.
    ///
    /// Leave out any extension whose impl carries extra bounds (typically
    /// `Cloning` for `T: Clone`); [`Cloning::CAPABILITIES`] adds it back.
    const CAPABILITIES: Capabilities = Capabilities::BASIC;

    /// Creates a cursor at the first element (an end cursor if empty).
    fn cursor(&self) -> Self::Cursor;

    /// Moves `cursor` to the next element.
    fn advance(&self, cursor: &mut Self::Cursor);

    /// Returns `true` if `cursor` is not positioned on an element.
    fn is_end(&self, cursor: &Self::Cursor) -> bool;

    /// Returns the element at `cursor`.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is an end cursor.
    fn element<'a>(&'a self, cursor: &Self::Cursor) -> &'a Self::Item;

    /// Number of elements, when known without a scan.
    fn exact_size(&self) -> Option<usize> {
        None
    }

    /// Cursor at the last element (an end cursor if empty), when reachable
    /// without a scan.
    fn last_cursor(&self) -> Option<Self::Cursor> {
        None
    }
}

/// Backward movement.
pub trait Bidirectional: Traversal {
    /// Moves `cursor` to the previous element; from the first element it
    /// becomes an end cursor.
    fn retreat(&self, cursor: &mut Self::Cursor);

    /// Moves `cursor` to the last element.
    fn seek_last(&self, cursor: &mut Self::Cursor);
}

/// Constant-time positioning by index.
///
/// Requires `Access = Indexed`; declaring a random-access container as
/// [`Sequential`] does not compile:
///
/// ```compile_fail
/// use cursorkit::traits::{RandomAccess, Sequential, Traversal};
///
/// struct Slots(Vec<u8>);
///
/// impl Traversal for Slots {
///     type Item = u8;
///     type Cursor = usize;
///     type Access = Sequential;
///
///     fn cursor(&self) -> usize { 0 }
///     fn advance(&self, cursor: &mut usize) { *cursor += 1; }
///     fn is_end(&self, cursor: &usize) -> bool { *cursor >= self.0.len() }
///     fn element<'a>(&'a self, cursor: &usize) -> &'a u8 { &self.0[*cursor] }
/// }
///
/// impl RandomAccess for Slots {
///     fn size(&self) -> usize { self.0.len() }
///     fn seek(&self, cursor: &mut usize, index: usize) { *cursor = index; }
/// }
/// ```
pub trait RandomAccess: Traversal<Access = Indexed> {
    /// Number of elements.
    fn size(&self) -> usize;

    /// Moves `cursor` to `index`. An index `>= size()` yields an end cursor.
    fn seek(&self, cursor: &mut Self::Cursor, index: usize);

    /// Creates a cursor positioned at `index`.
    fn cursor_at(&self, index: usize) -> Self::Cursor {
        let mut cursor = self.cursor();
        self.seek(&mut cursor, index);
        cursor
    }
}

/// In-place writes through a cursor.
pub trait Mutable: Traversal {
    /// Returns the element at `cursor` for writing.
    ///
    /// # Panics
    ///
    /// Panics if `cursor` is an end cursor.
    fn element_mut<'a>(&'a mut self, cursor: &Self::Cursor) -> &'a mut Self::Item;
}

/// Element copies held outside the container.
pub trait Cloning: Mutable {
    /// Owned copy of one element.
    type Scratch: Borrow<Self::Item> + Clone;

    /// [`Traversal::CAPABILITIES`] with cloning added.
    const CAPABILITIES: Capabilities =
        <Self as Traversal>::CAPABILITIES.with(Capability::Cloning);

    /// Allocates a scratch value holding a copy of the element at `cursor`.
    fn clone_scratch(&self, cursor: &Self::Cursor) -> Self::Scratch;

    /// Copies `scratch` into the position at `cursor`.
    fn restore_scratch(&mut self, cursor: &Self::Cursor, scratch: &Self::Scratch);

    /// Copies the element at `src` into the position at `dst`.
    fn copy_element(&mut self, dst: &Self::Cursor, src: &Self::Cursor);

    /// Exchanges the elements at `a` and `b` through one scratch value.
    fn swap_elements(&mut self, a: &Self::Cursor, b: &Self::Cursor) {
        if a == b {
            return;
        }
        let scratch = self.clone_scratch(a);
        self.copy_element(a, b);
        self.restore_scratch(b, &scratch);
    }
}
