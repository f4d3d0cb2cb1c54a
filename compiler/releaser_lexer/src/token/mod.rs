//! Token contract shared with changelog parsers.

use std::fmt;

use releaser_lexer_core::RawTag;

/// Kind of a changelog token.
///
/// The set is closed: every character of any input belongs to exactly one
/// of these kinds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenType {
    /// Run of spaces and tabs.
    Whitespace,
    /// Run of `#`, the heading marker.
    Hash,
    /// `[`
    OpenBrace,
    /// `]`
    CloseBrace,
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `-`, the list item marker.
    Dash,
    /// `\n`, `\r`, `\n\r` or `\r\n`.
    LineEnd,
    /// Run of anything else.
    Word,
}

impl TokenType {
    /// All token types, in dispatch order.
    pub const ALL: [TokenType; 9] = [
        TokenType::Whitespace,
        TokenType::Hash,
        TokenType::OpenBrace,
        TokenType::CloseBrace,
        TokenType::OpenParen,
        TokenType::CloseParen,
        TokenType::Dash,
        TokenType::LineEnd,
        TokenType::Word,
    ];

    /// The raw scanner tag this type is produced from.
    pub const fn raw(self) -> RawTag {
        match self {
            TokenType::Whitespace => RawTag::Whitespace,
            TokenType::Hash => RawTag::Hash,
            TokenType::OpenBrace => RawTag::OpenBrace,
            TokenType::CloseBrace => RawTag::CloseBrace,
            TokenType::OpenParen => RawTag::OpenParen,
            TokenType::CloseParen => RawTag::CloseParen,
            TokenType::Dash => RawTag::Dash,
            TokenType::LineEnd => RawTag::LineEnd,
            TokenType::Word => RawTag::Word,
        }
    }

    /// Upper-snake name (`WHITESPACE`, `OPEN_BRACE`, `LINE_END`, ...).
    pub const fn name(self) -> &'static str {
        self.raw().name()
    }

    /// Fixed source text for single-character delimiters, `None` otherwise.
    pub const fn lexeme(self) -> Option<&'static str> {
        self.raw().lexeme()
    }

    /// Returns `true` for [`Whitespace`](Self::Whitespace),
    /// [`Hash`](Self::Hash) and [`Word`](Self::Word).
    pub const fn is_run(self) -> bool {
        self.raw().is_run()
    }
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A token and the exact source text it was scanned from.
///
/// `value` borrows the lexed text, not the [`Lexer`](crate::Lexer), so
/// tokens outlive the lexer that produced them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    pub token_type: TokenType,
    pub value: &'src str,
}

impl<'src> Token<'src> {
    #[inline]
    pub const fn new(token_type: TokenType, value: &'src str) -> Self {
        Token { token_type, value }
    }
}

/// Formats as `TYPE("value")` with the value escaped, e.g. `LINE_END("\r\n")`.
impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.token_type, self.value)
    }
}
