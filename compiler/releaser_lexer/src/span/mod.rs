//! Source location spans.

use std::fmt;

/// Byte range of a token in the lexed text.
///
/// Layout: 16 bytes on 64-bit platforms
/// - start: usize - byte offset from the start of the text
/// - end: usize - byte offset (exclusive)
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, Debug)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    /// Create a new span.
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Span of `len` bytes starting at `start`.
    #[inline]
    pub const fn from_len(start: usize, len: usize) -> Self {
        Span {
            start,
            end: start + len,
        }
    }

    /// Length of the span in bytes.
    #[inline]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if an offset is within this span.
    #[inline]
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Convert to a `std::ops::Range` for slicing the lexed text.
    #[inline]
    pub fn to_range(self) -> std::ops::Range<usize> {
        self.start..self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Size assertion: Span is two offsets.
const _: () = assert!(
    std::mem::size_of::<Span>() == 2 * std::mem::size_of::<usize>()
);

#[cfg(test)]
mod tests;
