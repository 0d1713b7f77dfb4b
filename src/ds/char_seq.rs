//! Mutable byte-character sequence.
//!
//! `CharSeq` is an owned run of single-byte characters, the shape of a C
//! string without its terminator. Cursors are byte indices; every capability
//! is supported, so text can be reversed, sorted and searched in place.

use std::fmt;

use crate::traits::{
    Bidirectional, Capabilities, Cloning, Indexed, Mutable, RandomAccess, Traversal,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct CharSeq {
    chars: Vec<u8>,
}

impl CharSeq {
    /// Creates an empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Returns `true` if there are no characters.
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Appends one character.
    pub fn push(&mut self, ch: u8) {
        self.chars.push(ch);
    }

    /// Returns the characters as raw bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.chars
    }

    /// Returns the contents as `&str` if they are valid UTF-8.
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(&self.chars).ok()
    }
}

impl From<&str> for CharSeq {
    fn from(text: &str) -> Self {
        Self {
            chars: text.as_bytes().to_vec(),
        }
    }
}

impl From<Vec<u8>> for CharSeq {
    fn from(chars: Vec<u8>) -> Self {
        Self { chars }
    }
}

impl fmt::Display for CharSeq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.chars))
    }
}

impl Traversal for CharSeq {
    type Item = u8;
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
        *cursor >= self.chars.len()
    }

    fn element<'a>(&'a self, cursor: &usize) -> &'a u8 {
        &self.chars[*cursor]
    }

    fn exact_size(&self) -> Option<usize> {
        Some(self.chars.len())
    }

    fn last_cursor(&self) -> Option<usize> {
        Some(self.chars.len().wrapping_sub(1))
    }
}

impl Bidirectional for CharSeq {
    fn retreat(&self, cursor: &mut usize) {
        *cursor = cursor.wrapping_sub(1);
    }

    fn seek_last(&self, cursor: &mut usize) {
        *cursor = self.chars.len().wrapping_sub(1);
    }
}

impl RandomAccess for CharSeq {
    fn size(&self) -> usize {
        self.chars.len()
    }

    fn seek(&self, cursor: &mut usize, index: usize) {
        *cursor = index;
    }
}

impl Mutable for CharSeq {
    fn element_mut<'a>(&'a mut self, cursor: &usize) -> &'a mut u8 {
        &mut self.chars[*cursor]
    }
}

impl Cloning for CharSeq {
    type Scratch = u8;

    fn clone_scratch(&self, cursor: &usize) -> u8 {
        self.chars[*cursor]
    }

    fn restore_scratch(&mut self, cursor: &usize, scratch: &u8) {
        self.chars[*cursor] = *scratch;
    }

    fn copy_element(&mut self, dst: &usize, src: &usize) {
        self.chars[*dst] = self.chars[*src];
    }
}
