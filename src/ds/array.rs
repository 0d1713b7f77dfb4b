//! Capability impls for contiguous typed storage: `[T]` and `Vec<T>`.
//!
//! A cursor is a plain `usize` index. Any index `>= len` is an end cursor, so
//! retreating from index 0 (which wraps to `usize::MAX`) also reads as end.
//!
//! | basic | bidirectional | random access | mutable | cloning     |
//! |-------|---------------|---------------|---------|-------------|
//! | yes   | yes           | yes           | yes     | `T: Clone`  |

use crate::traits::{
    Bidirectional, Capabilities, Capability, Cloning, Indexed, Mutable, RandomAccess, Traversal,
};

macro_rules! impl_contiguous {
    ($container:ty) => {
        impl<T> Traversal for $container {
            type Item = T;
            type Cursor = usize;
            type Access = Indexed;

            const CAPABILITIES: Capabilities = Capabilities::BASIC
                .with(Capability::Bidirectional)
                .with(Capability::RandomAccess)
                .with(Capability::Mutable);

            #[inline]
            fn cursor(&self) -> usize {
                0
            }

            #[inline]
            fn advance(&self, cursor: &mut usize) {
                *cursor = cursor.saturating_add(1);
            }

            #[inline]
            fn is_end(&self, cursor: &usize) -> bool {
                *cursor >= self.len()
            }

            #[inline]
            fn element<'a>(&'a self, cursor: &usize) -> &'a T {
                &self[*cursor]
            }

            fn exact_size(&self) -> Option<usize> {
                Some(self.len())
            }

            fn last_cursor(&self) -> Option<usize> {
                Some(self.len().wrapping_sub(1))
            }
        }

        impl<T> Bidirectional for $container {
            #[inline]
            fn retreat(&self, cursor: &mut usize) {
                *cursor = cursor.wrapping_sub(1);
            }

            #[inline]
            fn seek_last(&self, cursor: &mut usize) {
                *cursor = self.len().wrapping_sub(1);
            }
        }

        impl<T> RandomAccess for $container {
            #[inline]
            fn size(&self) -> usize {
                self.len()
            }

            #[inline]
            fn seek(&self, cursor: &mut usize, index: usize) {
                *cursor = index;
            }
        }

        impl<T> Mutable for $container {
            #[inline]
            fn element_mut<'a>(&'a mut self, cursor: &usize) -> &'a mut T {
                &mut self[*cursor]
            }
        }

        impl<T: Clone> Cloning for $container {
            type Scratch = T;

            #[inline]
            fn clone_scratch(&self, cursor: &usize) -> T {
                self[*cursor].clone()
            }

            #[inline]
            fn restore_scratch(&mut self, cursor: &usize, scratch: &T) {
                self[*cursor].clone_from(scratch);
            }

            fn copy_element(&mut self, dst: &usize, src: &usize) {
                if dst == src {
                    return;
                }
                let value = self[*src].clone();
                self[*dst] = value;
            }
        }
    };
}

impl_contiguous!([T]);
impl_contiguous!(Vec<T>);
