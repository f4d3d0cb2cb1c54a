//! Property-based tests for the changelog lexer.
//!
//! Inputs come from two generators: arbitrary Unicode strings, and strings
//! drawn from an alphabet weighted toward changelog syntax so that runs,
//! brackets and mixed line endings appear next to each other often.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
#![allow(
    clippy::disallowed_types,
    reason = "Proptest macros generate code with these patterns"
)]

use proptest::prelude::*;
use releaser_lexer::{tokenize, tokenize_spanned, Lexer, TokenType};

// -- Input Strategies --

/// Generate text built from changelog fragments.
fn changelog_text() -> impl Strategy<Value = String> {
    let punct = prop::sample::select(vec![
        " ", "\t", "#", "[", "]", "(", ")", "-", "\n", "\r", "\r\n", "\u{e9}",
    ])
    .prop_map(str::to_owned);
    let word = prop::string::string_regex("[a-z0-9._]{1,6}").expect("valid regex");
    let fragment = prop_oneof![punct, word];
    prop::collection::vec(fragment, 0..48).prop_map(|parts| parts.concat())
}

/// Either generator, so properties hold for both.
fn any_text() -> impl Strategy<Value = String> {
    prop_oneof![changelog_text(), any::<String>()]
}

proptest! {
    #[test]
    fn round_trip(text in any_text()) {
        let rebuilt: String = Lexer::new(&text).map(|t| t.value).collect();
        prop_assert_eq!(rebuilt, text);
    }

    #[test]
    fn spans_cover_input_exactly(text in any_text()) {
        let mut next_start = 0usize;
        for (token, span) in tokenize_spanned(&text) {
            prop_assert_eq!(span.start, next_start);
            prop_assert!(!span.is_empty(), "empty token {:?}", token);
            prop_assert_eq!(&text[span.to_range()], token.value);
            next_start = span.end;
        }
        prop_assert_eq!(next_start, text.len());
    }

    #[test]
    fn runs_are_maximal(text in changelog_text()) {
        let tokens = tokenize(&text);
        for pair in tokens.windows(2) {
            let (a, b) = (pair[0].token_type, pair[1].token_type);
            prop_assert!(
                !(a == b && a.is_run()),
                "adjacent {} tokens {:?} and {:?}", a, pair[0].value, pair[1].value
            );
        }
    }

    #[test]
    fn relexing_a_run_is_idempotent(text in changelog_text()) {
        for token in tokenize(&text).into_iter().filter(|t| t.token_type.is_run()) {
            let relexed = tokenize(token.value);
            prop_assert_eq!(relexed, vec![token]);
        }
    }

    #[test]
    fn fixed_tokens_match_lexeme(text in changelog_text()) {
        for token in tokenize(&text) {
            if let Some(lexeme) = token.token_type.lexeme() {
                prop_assert_eq!(token.value, lexeme);
            }
        }
    }

    #[test]
    fn line_ends_follow_pairing_rule(text in changelog_text()) {
        let tokens = tokenize(&text);
        for (i, token) in tokens.iter().enumerate() {
            if token.token_type != TokenType::LineEnd {
                continue;
            }
            prop_assert!(matches!(token.value, "\n" | "\r" | "\n\r" | "\r\n"));
            // A single break is only left unpaired when its opposite does
            // not follow.
            if token.value.len() == 1 {
                let opposite = if token.value == "\n" { "\r" } else { "\n" };
                let next = tokens.get(i + 1).map(|t| t.value);
                prop_assert!(!next.is_some_and(|v| v.starts_with(opposite)));
            }
        }
    }

    #[test]
    fn first_character_decides_type(text in any_text()) {
        for token in tokenize(&text) {
            let first = token.value.chars().next().unwrap();
            let expected = match first {
                ' ' | '\t' => TokenType::Whitespace,
                '#' => TokenType::Hash,
                '[' => TokenType::OpenBrace,
                ']' => TokenType::CloseBrace,
                '(' => TokenType::OpenParen,
                ')' => TokenType::CloseParen,
                '-' => TokenType::Dash,
                '\r' | '\n' => TokenType::LineEnd,
                _ => TokenType::Word,
            };
            prop_assert_eq!(token.token_type, expected);
        }
    }
}
