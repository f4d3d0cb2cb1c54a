//! Bounds-checked cursor over changelog source text.
//!
//! The cursor advances through the source byte-by-byte. Reading at or past
//! the end of the source is not a panic: [`Cursor::current()`] reports it as
//! [`EndOfInput`], and the scanner turns that into [`RawTag::Eof`].
//!
//! # Positions
//!
//! Positions are `usize` byte offsets into the whole source. Nothing is cut
//! off, so every byte of any `&str` is reachable.
//!
//! [`RawTag::Eof`]: crate::RawTag::Eof

/// A read was attempted at or past the end of the source.
///
/// Only the scanner sees this value. It is converted into normal end of
/// iteration before reaching token consumers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
#[error("attempted to read past end of input at byte {pos}")]
pub struct EndOfInput {
    /// Byte offset of the failed read.
    pub pos: usize,
}

/// Cursor over the bytes of a `&str`.
///
/// The cursor is [`Copy`], so a scanner can snapshot it before a
/// speculative read and restore it afterwards.
///
/// # Invariant
///
/// `pos` only ever rests on a UTF-8 character boundary between scanner
/// steps. All bytes the scanner stops on are ASCII, which keeps this true.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Current read position (byte index into `source`).
    pos: usize,
}

/// Size assertion: Cursor should be <= 24 bytes on 64-bit platforms.
/// &str = 16 (fat pointer), usize = 8 => 24 bytes.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 24);

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(source: &'a str) -> Self {
        Self { source, pos: 0 }
    }

    /// The text this cursor reads.
    #[inline]
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Returns the byte at the current position without advancing.
    ///
    /// Fails with [`EndOfInput`] when the cursor is at or past the end of
    /// the source.
    #[inline]
    pub fn current(&self) -> Result<u8, EndOfInput> {
        self.byte_at(self.pos).ok_or(EndOfInput { pos: self.pos })
    }

    /// Returns the character starting at the current position.
    ///
    /// Only meaningful on a character boundary, which is where the scanner
    /// leaves the cursor between tokens.
    pub fn current_char(&self) -> Result<char, EndOfInput> {
        self.source
            .get(self.pos..)
            .and_then(|rest| rest.chars().next())
            .ok_or(EndOfInput { pos: self.pos })
    }

    /// Returns the byte one position ahead of current, if there is one.
    #[inline]
    pub fn peek(&self) -> Option<u8> {
        self.pos.checked_add(1).and_then(|next| self.byte_at(next))
    }

    #[inline]
    fn byte_at(&self, pos: usize) -> Option<u8> {
        self.source.as_bytes().get(pos).copied()
    }

    /// Advance the cursor by one byte.
    #[inline]
    pub fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance the cursor by `n` bytes, stopping at the end of the source.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos = self.pos.saturating_add(n).min(self.source.len());
    }

    /// Returns `true` once every byte of the source has been consumed.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Length of the source in bytes.
    #[inline]
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Extract a source substring.
    ///
    /// # Panics
    ///
    /// Panics if `start..end` is out of bounds or does not fall on
    /// character boundaries. Offsets taken from raw token lengths always
    /// satisfy both.
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(
            end <= self.source.len(),
            "slice end {end} exceeds source length {}",
            self.source.len()
        );
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        &self.source[start..end]
    }

    /// Extract a source substring from `start` to the current position.
    ///
    /// Equivalent to `self.slice(start, self.pos())`.
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at the first rejected byte or at the end of the source.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while let Some(b) = self.byte_at(self.pos) {
            if !pred(b) {
                break;
            }
            self.pos += 1;
        }
    }

    /// Advance past horizontal whitespace (spaces and tabs).
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| b == b' ' || b == b'\t');
    }
}
