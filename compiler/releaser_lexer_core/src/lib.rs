//! Low-level scanner for changelog markup.
//!
//! Splits source text into [`RawToken`] values: a [`RawTag`] plus a byte
//! length. Raw tokens carry no text and no position; callers that need the
//! source slice track the running offset themselves (see `releaser_lexer`).
//!
//! # Layers
//!
//! - [`Cursor`]: bounds-checked byte cursor over the source. Reads past the
//!   end report [`EndOfInput`] instead of panicking.
//! - [`RawScanner`]: dispatches on the current byte and produces one raw
//!   token per call, ending with [`RawTag::Eof`].
//!
//! Every delimiter of the dialect is ASCII, and UTF-8 continuation bytes are
//! never ASCII, so classifying bytes never splits a multi-byte character.

mod cursor;
mod raw_scanner;
mod tag;

pub use cursor::{Cursor, EndOfInput};
pub use raw_scanner::{tokenize, RawScanner};
pub use tag::{RawTag, RawToken};
