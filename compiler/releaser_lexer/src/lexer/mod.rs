//! Pull-based lexer over changelog text.
//!
//! [`Lexer`] wraps a [`RawScanner`] and turns each `(tag, len)` pair into a
//! [`Token`] that borrows its text from the source. End of input is not an
//! error: the scanner reports it as `Eof`, and the lexer ends iteration.

use std::iter::FusedIterator;

use releaser_lexer_core::{Cursor, EndOfInput, RawScanner};
use tracing::{debug, trace};

use crate::convert::convert_tag;
use crate::span::Span;
use crate::token::Token;

/// Lexer over a borrowed changelog document.
///
/// Holds a single read cursor. Iteration yields tokens in source order
/// until the cursor reaches the end of the text; after that every call to
/// `next` returns `None`. To lex again, construct a new `Lexer`.
pub struct Lexer<'src> {
    scanner: RawScanner<'src>,
    /// Tokens emitted so far.
    emitted: usize,
    exhausted: bool,
}

impl<'src> Lexer<'src> {
    /// Create a lexer positioned at the start of `source`.
    ///
    /// Any `&str` is accepted, whatever its length; offsets are `usize`, so
    /// the tokens always cover the whole text.
    pub fn new(source: &'src str) -> Self {
        Lexer {
            scanner: RawScanner::new(Cursor::new(source)),
            emitted: 0,
            exhausted: false,
        }
    }

    /// The text being lexed.
    pub fn source(&self) -> &'src str {
        self.scanner.cursor().source()
    }

    /// Byte offset where the next token starts.
    pub fn pos(&self) -> usize {
        self.scanner.pos()
    }

    /// Character at the cursor, without advancing.
    pub fn peek_char(&self) -> Result<char, EndOfInput> {
        self.scanner.cursor().current_char()
    }

    /// Switch to an iterator that also yields each token's [`Span`].
    ///
    /// Continues from the current position.
    pub fn spanned(self) -> Spanned<'src> {
        Spanned { lexer: self }
    }

    fn next_spanned(&mut self) -> Option<(Token<'src>, Span)> {
        if self.exhausted {
            return None;
        }

        let start = self.scanner.pos();
        let raw = self.scanner.next_token();
        let Some(token_type) = convert_tag(raw.tag) else {
            self.exhausted = true;
            debug!(
                tokens = self.emitted,
                len = self.scanner.cursor().source_len(),
                "lexing complete"
            );
            return None;
        };

        let span = Span::from_len(start, raw.len);
        let value = self.scanner.cursor().slice(span.start, span.end);
        self.emitted += 1;
        trace!(%token_type, start, len = raw.len, "token");

        Some((Token::new(token_type, value), span))
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Token<'src>> {
        self.next_spanned().map(|(token, _)| token)
    }
}

impl FusedIterator for Lexer<'_> {}

/// Iterator of `(token, span)` pairs, created by [`Lexer::spanned`].
pub struct Spanned<'src> {
    lexer: Lexer<'src>,
}

impl<'src> Iterator for Spanned<'src> {
    type Item = (Token<'src>, Span);

    fn next(&mut self) -> Option<Self::Item> {
        self.lexer.next_spanned()
    }
}

impl FusedIterator for Spanned<'_> {}

/// Lex `source` completely and collect the tokens.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}

/// Lex `source` completely and collect `(token, span)` pairs.
#[tracing::instrument(level = "debug", skip_all, fields(len = source.len()))]
pub fn tokenize_spanned(source: &str) -> Vec<(Token<'_>, Span)> {
    Lexer::new(source).spanned().collect()
}
