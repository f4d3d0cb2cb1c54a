//! Raw token tags and the `(tag, len)` token pair.

/// Kind of a raw token.
///
/// Discriminants are grouped by shape so range checks stay cheap:
/// runs `0..16`, single-byte delimiters `16..32`, line structure `32..48`,
/// control `255`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum RawTag {
    // === Runs ===
    /// One or more spaces or tabs.
    Whitespace = 0,
    /// One or more `#`.
    Hash = 1,
    /// One or more bytes outside every other class.
    Word = 2,

    // === Delimiters ===
    /// `[`
    OpenBrace = 16,
    /// `]`
    CloseBrace = 17,
    /// `(`
    OpenParen = 18,
    /// `)`
    CloseParen = 19,
    /// `-`
    Dash = 20,

    // === Line structure ===
    /// `\n`, `\r`, `\n\r` or `\r\n`.
    LineEnd = 32,

    // === Control ===
    /// End of input. Always has `len == 0`.
    Eof = 255,
}

impl RawTag {
    /// Fixed source text for single-byte delimiters.
    ///
    /// Returns `None` for runs, line ends, and `Eof`, whose text depends on
    /// the source.
    pub const fn lexeme(self) -> Option<&'static str> {
        match self {
            RawTag::OpenBrace => Some("["),
            RawTag::CloseBrace => Some("]"),
            RawTag::OpenParen => Some("("),
            RawTag::CloseParen => Some(")"),
            RawTag::Dash => Some("-"),
            RawTag::Whitespace | RawTag::Hash | RawTag::Word | RawTag::LineEnd | RawTag::Eof => {
                None
            }
        }
    }

    /// Upper-snake name used in token dumps (`WHITESPACE`, `LINE_END`, ...).
    pub const fn name(self) -> &'static str {
        match self {
            RawTag::Whitespace => "WHITESPACE",
            RawTag::Hash => "HASH",
            RawTag::Word => "WORD",
            RawTag::OpenBrace => "OPEN_BRACE",
            RawTag::CloseBrace => "CLOSE_BRACE",
            RawTag::OpenParen => "OPEN_PAREN",
            RawTag::CloseParen => "CLOSE_PAREN",
            RawTag::Dash => "DASH",
            RawTag::LineEnd => "LINE_END",
            RawTag::Eof => "EOF",
        }
    }

    /// Returns `true` for tags that consume a maximal run of one class.
    pub const fn is_run(self) -> bool {
        (self as u8) < 16
    }
}

/// A raw token: what was scanned and how many bytes it covers.
///
/// Carries no position. The consumer knows where the previous token ended,
/// so `start + len` is enough to recover the source slice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RawToken {
    pub tag: RawTag,
    /// Length in bytes. Zero only for [`RawTag::Eof`].
    pub len: usize,
}

/// Size assertion: tag (1) + padding (7) + len (8) on 64-bit platforms.
const _: () = assert!(std::mem::size_of::<RawToken>() <= 16);
