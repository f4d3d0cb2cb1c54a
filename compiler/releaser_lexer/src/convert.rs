//! Raw tag conversion.

use releaser_lexer_core::RawTag;

use crate::token::TokenType;

/// Map a raw scanner tag to its public token type.
///
/// `Eof` has no token type: it marks exhaustion, not a token.
pub(crate) fn convert_tag(tag: RawTag) -> Option<TokenType> {
    match tag {
        RawTag::Whitespace => Some(TokenType::Whitespace),
        RawTag::Hash => Some(TokenType::Hash),
        RawTag::Word => Some(TokenType::Word),
        RawTag::OpenBrace => Some(TokenType::OpenBrace),
        RawTag::CloseBrace => Some(TokenType::CloseBrace),
        RawTag::OpenParen => Some(TokenType::OpenParen),
        RawTag::CloseParen => Some(TokenType::CloseParen),
        RawTag::Dash => Some(TokenType::Dash),
        RawTag::LineEnd => Some(TokenType::LineEnd),
        RawTag::Eof => None,
    }
}
