//! Type-erased memory block of fixed-stride elements.
//!
//! A `RawBlock` stores elements as raw bytes, `stride` bytes each, with the
//! stride chosen at run time. Elements are exposed as `[u8]` slices, and
//! scratch values are `Vec<u8>` buffers of one stride, which is why the
//! cloning capability is needed to swap two elements here.
//!
//! ```text
//!   stride = 4
//!   bytes: [ e0 e0 e0 e0 | e1 e1 e1 e1 | e2 e2 e2 e2 ]
//!   index:        0             1             2
//! ```
//!
//! | basic | bidirectional | random access | mutable | cloning |
//! |-------|---------------|---------------|---------|---------|
//! | yes   | yes           | yes           | yes     | yes     |

use crate::error::ConfigError;
use crate::traits::{
    Bidirectional, Capabilities, Cloning, Indexed, Mutable, RandomAccess, Traversal,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlock {
    bytes: Vec<u8>,
    stride: usize,
}

impl RawBlock {
    /// Creates an empty block for elements of `stride` bytes.
    pub fn try_new(stride: usize) -> Result<Self, ConfigError> {
        Self::try_from_bytes(Vec::new(), stride)
    }

    /// Wraps `bytes` as a sequence of `stride`-byte elements.
    pub fn try_from_bytes(bytes: Vec<u8>, stride: usize) -> Result<Self, ConfigError> {
        if stride == 0 {
            return Err(ConfigError::new("stride must be > 0"));
        }
        if bytes.len() % stride != 0 {
            return Err(ConfigError::new(format!(
                "byte length {} is not a multiple of stride {}",
                bytes.len(),
                stride
            )));
        }
        Ok(Self { bytes, stride })
    }

    /// Builds a block from fixed-width elements, using `N` as the stride.
    pub fn try_from_elements<const N: usize>(elements: &[[u8; N]]) -> Result<Self, ConfigError> {
        Self::try_from_bytes(elements.concat(), N)
    }

    /// Returns the width of one element in bytes.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.bytes.len() / self.stride
    }

    /// Returns `true` if the block holds no elements.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Appends one element.
    ///
    /// # Panics
    ///
    /// Panics if `element.len() != self.stride()`.
    pub fn push(&mut self, element: &[u8]) {
        assert_eq!(
            element.len(),
            self.stride,
            "element width does not match the block stride"
        );
        self.bytes.extend_from_slice(element);
    }

    /// Returns the element at `index`, if present.
    pub fn get(&self, index: usize) -> Option<&[u8]> {
        let range = self.span(index)?;
        Some(&self.bytes[range])
    }

    /// Returns the backing bytes, elements laid out back to back.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the block, returning its backing bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    fn span(&self, index: usize) -> Option<std::ops::Range<usize>> {
        if index >= self.len() {
            return None;
        }
        let start = index * self.stride;
        Some(start..start + self.stride)
    }

    fn span_or_panic(&self, index: usize) -> std::ops::Range<usize> {
        match self.span(index) {
            Some(range) => range,
            None => panic!(
                "RawBlock index {} out of bounds for length {}",
                index,
                self.len()
            ),
        }
    }
}

impl Traversal for RawBlock {
    type Item = [u8];
    type Cursor = usize;
    type Access = Indexed;

    const CAPABILITIES: Capabilities = Capabilities::ALL;

    fn cursor(&self) -> usize {
        0
    }

    fn advance(&self, cursor: &mut usize) {
        *cursor = cursor.saturating_add(1);
    }

    fn is_end(&self, cursor: &usize) -> bool {
        *cursor >= self.len()
    }

    fn element<'a>(&'a self, cursor: &usize) -> &'a [u8] {
        &self.bytes[self.span_or_panic(*cursor)]
    }

    fn exact_size(&self) -> Option<usize> {
        Some(self.len())
    }

    fn last_cursor(&self) -> Option<usize> {
        Some(self.len().wrapping_sub(1))
    }
}

impl Bidirectional for RawBlock {
    fn retreat(&self, cursor: &mut usize) {
        *cursor = cursor.wrapping_sub(1);
    }

    fn seek_last(&self, cursor: &mut usize) {
        *cursor = self.len().wrapping_sub(1);
    }
}

impl RandomAccess for RawBlock {
    fn size(&self) -> usize {
        self.len()
    }

    fn seek(&self, cursor: &mut usize, index: usize) {
        *cursor = index;
    }
}

impl Mutable for RawBlock {
    fn element_mut<'a>(&'a mut self, cursor: &usize) -> &'a mut [u8] {
        let range = self.span_or_panic(*cursor);
        &mut self.bytes[range]
    }
}

impl Cloning for RawBlock {
    type Scratch = Vec<u8>;

    fn clone_scratch(&self, cursor: &usize) -> Vec<u8> {
        self.element(cursor).to_vec()
    }

    fn restore_scratch(&mut self, cursor: &usize, scratch: &Vec<u8>) {
        self.element_mut(cursor).copy_from_slice(scratch);
    }

    fn copy_element(&mut self, dst: &usize, src: &usize) {
        let src = self.span_or_panic(*src);
        let dst = self.span_or_panic(*dst);
        self.bytes.copy_within(src, dst.start);
    }
}
