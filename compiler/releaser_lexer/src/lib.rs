//! Lexer for changelog markup.
//!
//! Turns changelog text into [`Token`] values, each a [`TokenType`] plus the
//! exact source text it covers. Concatenating every token's `value` gives
//! back the input byte for byte, including whitespace runs and whichever
//! line-break style the document uses.
//!
//! Scanning is delegated to `releaser_lexer_core`, which produces
//! `(tag, len)` pairs; this crate attaches source slices and spans.
//!
//! ```text
//! "## [v1.0.0]\n"
//!   HASH("##") WHITESPACE(" ") OPEN_BRACE("[") WORD("v1.0.0")
//!   CLOSE_BRACE("]") LINE_END("\n")
//! ```

mod convert;
mod lexer;
mod span;
mod token;

use std::sync::Once;

pub use lexer::{tokenize, tokenize_spanned, Lexer, Spanned};
pub use releaser_lexer_core::EndOfInput;
pub use span::Span;
pub use token::{Token, TokenType};

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=releaser_lexer=debug` (one event per document) or
/// `RUST_LOG=releaser_lexer=trace` (one event per token).
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            let installed = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
            if installed.is_err() {
                tracing::debug!("global subscriber already set by the host; keeping it");
            }
        }
    });
}
