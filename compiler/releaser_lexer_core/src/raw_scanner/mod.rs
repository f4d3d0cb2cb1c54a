//! Hand-written raw scanner producing `(RawTag, len)` pairs.
//!
//! The scanner operates on a [`Cursor`] and produces [`RawToken`] values
//! with zero heap allocation. It classifies bytes only; nothing about the
//! changelog structure (heading levels, version brackets, link targets) is
//! checked here.
//!
//! # Design
//!
//! Main dispatch matches on the current byte. Each arm calls a focused
//! method that advances the cursor and returns `RawToken { tag, len }`.
//! Every byte falls into some arm (words are the catch-all), so the scanner
//! never produces an error token. [`EndOfInput`](crate::EndOfInput) from the
//! cursor dispatches to `eof()`.

use crate::cursor::Cursor;
use crate::tag::{RawTag, RawToken};

/// Pure, allocation-free scanner.
///
/// Produces one token at a time as a `(tag, length)` pair.
pub struct RawScanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> RawScanner<'a> {
    /// Create a new scanner from a cursor.
    pub fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }

    /// Byte offset where the next token starts.
    #[inline]
    pub fn pos(&self) -> usize {
        self.cursor.pos()
    }

    /// Snapshot of the cursor, positioned where the next token starts.
    #[inline]
    pub fn cursor(&self) -> Cursor<'a> {
        self.cursor
    }

    /// Produce the next raw token.
    ///
    /// Returns `RawTag::Eof` with `len == 0` when the source is exhausted.
    /// Subsequent calls after EOF continue to return `Eof`.
    #[inline]
    pub fn next_token(&mut self) -> RawToken {
        let start = self.cursor.pos();
        let Ok(byte) = self.cursor.current() else {
            return Self::eof();
        };
        match byte {
            b' ' | b'\t' => self.whitespace(start),
            b'#' => self.hash(start),
            b'[' => self.single(start, RawTag::OpenBrace),
            b']' => self.single(start, RawTag::CloseBrace),
            b'(' => self.single(start, RawTag::OpenParen),
            b')' => self.single(start, RawTag::CloseParen),
            b'-' => self.single(start, RawTag::Dash),
            b'\n' => self.line_end(start, b'\r'),
            b'\r' => self.line_end(start, b'\n'),
            _ => self.word(start),
        }
    }

    // ─── EOF ───────────────────────────────────────────────────────

    fn eof() -> RawToken {
        RawToken {
            tag: RawTag::Eof,
            len: 0,
        }
    }

    // ─── Runs ──────────────────────────────────────────────────────

    #[inline]
    fn whitespace(&mut self, start: usize) -> RawToken {
        self.cursor.eat_whitespace();
        RawToken {
            tag: RawTag::Whitespace,
            len: self.cursor.pos() - start,
        }
    }

    fn hash(&mut self, start: usize) -> RawToken {
        self.cursor.eat_while(|b| b == b'#');
        RawToken {
            tag: RawTag::Hash,
            len: self.cursor.pos() - start,
        }
    }

    /// Words run until the next byte that starts some other token.
    ///
    /// `-` only starts a token at a token boundary; inside a word it is an
    /// ordinary byte, so `2024-01` stays one word.
    #[inline]
    fn word(&mut self, start: usize) -> RawToken {
        self.cursor.eat_while(is_word_continue);
        RawToken {
            tag: RawTag::Word,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Line ends ─────────────────────────────────────────────────

    /// Consume a line break, pairing it with an immediately following
    /// `opposite` break (`\r\n` or `\n\r`).
    ///
    /// A repeated break (`\n\n`, `\r\r`) is never paired: each one is its
    /// own line end.
    fn line_end(&mut self, start: usize, opposite: u8) -> RawToken {
        self.cursor.advance(); // consume first break
        if self.cursor.current() == Ok(opposite) {
            self.cursor.advance();
        }
        RawToken {
            tag: RawTag::LineEnd,
            len: self.cursor.pos() - start,
        }
    }

    // ─── Delimiters ────────────────────────────────────────────────

    /// Single-byte token: advance one byte and emit the given tag.
    fn single(&mut self, start: usize, tag: RawTag) -> RawToken {
        self.cursor.advance();
        RawToken {
            tag,
            len: self.cursor.pos() - start,
        }
    }
}

impl Iterator for RawScanner<'_> {
    type Item = RawToken;

    fn next(&mut self) -> Option<RawToken> {
        let tok = self.next_token();
        if tok.tag == RawTag::Eof {
            None
        } else {
            Some(tok)
        }
    }
}

impl std::iter::FusedIterator for RawScanner<'_> {}

/// 256-byte lookup table for word continuation bytes.
///
/// `false` for space, tab, `#`, `[`, `]`, `(`, `)`, `\r` and `\n`; `true`
/// for everything else, including `-`, control bytes, NUL, and every byte
/// of a multi-byte UTF-8 sequence.
#[allow(
    clippy::cast_possible_truncation,
    reason = "loop counter i is 0..=255, always fits in u8"
)]
static IS_WORD_CONTINUE_TABLE: [bool; 256] = {
    let mut table = [true; 256];
    let mut i = 0u16;
    while i < 256 {
        table[i as usize] = !matches!(
            i as u8,
            b' ' | b'\t' | b'#' | b'[' | b']' | b'(' | b')' | b'\r' | b'\n'
        );
        i += 1;
    }
    table
};

/// Returns `true` if `b` can continue a word.
#[inline]
fn is_word_continue(b: u8) -> bool {
    IS_WORD_CONTINUE_TABLE[b as usize]
}

/// Convenience function: tokenize a source string and collect all raw tokens.
///
/// Returns a `Vec<RawToken>` containing all tokens except the final `Eof`.
/// For streaming access, construct a [`Cursor`] + [`RawScanner`] directly.
pub fn tokenize(source: &str) -> Vec<RawToken> {
    RawScanner::new(Cursor::new(source)).collect()
}
