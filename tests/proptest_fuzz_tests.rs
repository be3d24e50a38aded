//! Property-based fuzzing tests for the list lexer
//!
//! These tests use proptest to generate random inputs and verify that:
//! 1. The scanner never panics and always ends with exactly one terminal token
//! 2. Well-formed lists lex without errors and reproduce their skeleton
//! 3. Scans are deterministic and symbols are maximal

use listlex::lexer::{is_symbol_char, is_whitespace};
use listlex::{lex, Token, TokenKind};
use proptest::prelude::*;

// =============================================================================
// STRATEGY GENERATORS
// =============================================================================

/// Generate arbitrary unicode strings
fn arbitrary_source_string() -> impl Strategy<Value = String> {
    any::<String>()
}

/// Generate strings made mostly of list punctuation and symbol characters
fn list_like_string() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[\[\],a-zA-Z0-9 \t\r\n;_é]{0,80}").unwrap()
}

/// Optional whitespace between tokens
fn ws() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[ \t\r\n]{0,2}").unwrap()
}

fn symbol() -> impl Strategy<Value = String> {
    prop::string::string_regex(r"[A-Za-z0-9]{1,8}").unwrap()
}

fn bracket_items(items: Vec<(String, String, String)>) -> String {
    let body: Vec<String> = items
        .into_iter()
        .map(|(before, value, after)| format!("{}{}{}", before, value, after))
        .collect();
    format!("[{}]", body.join(","))
}

/// Generate values: symbols or nested lists
fn value() -> impl Strategy<Value = String> {
    symbol().prop_recursive(6, 64, 5, |inner| {
        prop::collection::vec((ws(), inner, ws()), 0..5).prop_map(bracket_items)
    })
}

/// Generate well-formed top-level lists
fn valid_list() -> impl Strategy<Value = String> {
    (prop::collection::vec((ws(), value(), ws()), 0..6), ws()).prop_map(|(items, trailing)| {
        format!("{}{}", bracket_items(items), trailing)
    })
}

// =============================================================================
// HELPERS
// =============================================================================

fn assert_single_terminal(tokens: &[Token]) {
    let terminals = tokens.iter().filter(|t| t.is_terminal()).count();
    assert_eq!(terminals, 1, "tokens: {:?}", tokens);
    assert!(tokens.last().map(Token::is_terminal).unwrap_or(false));
}

fn skeleton(input: &str) -> String {
    input.chars().filter(|c| !is_whitespace(*c)).collect()
}

// =============================================================================
// PROPERTIES
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn scanner_never_panics(input in arbitrary_source_string()) {
        let tokens: Vec<Token> = lex("fuzz", &input).collect();
        assert_single_terminal(&tokens);
    }

    #[test]
    fn list_like_input_terminates_once(input in list_like_string()) {
        let tokens: Vec<Token> = lex("fuzz", &input).collect();
        assert_single_terminal(&tokens);
    }

    #[test]
    fn valid_prefix_matches_input(input in list_like_string()) {
        for token in lex("fuzz", &input) {
            if token.kind == TokenKind::Error || token.kind == TokenKind::EndOfInput {
                continue;
            }
            let end = token.offset + token.text.len();
            prop_assert_eq!(&input[token.offset..end], token.text.as_str());
        }
    }

    #[test]
    fn valid_lists_lex_cleanly(input in valid_list()) {
        let tokens: Vec<Token> = lex("valid", &input).collect();
        prop_assert!(tokens.iter().all(|t| t.kind != TokenKind::Error), "tokens: {:?}", tokens);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));

        let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
        prop_assert_eq!(rebuilt, skeleton(&input));
    }

    #[test]
    fn relexing_is_deterministic(input in list_like_string()) {
        let first: Vec<Token> = lex("first", &input).collect();
        let second: Vec<Token> = lex("second", &input).collect();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn symbols_are_maximal(input in valid_list()) {
        for token in lex("maximal", &input).filter(|t| t.kind == TokenKind::Symbol) {
            prop_assert!(!token.text.is_empty());
            prop_assert!(token.text.chars().all(is_symbol_char));

            let before = input[..token.offset].chars().next_back();
            let after = input[token.offset + token.text.len()..].chars().next();
            prop_assert!(!before.map(is_symbol_char).unwrap_or(false));
            prop_assert!(!after.map(is_symbol_char).unwrap_or(false));
        }
    }

    #[test]
    fn bracketless_input_fails_immediately(input in "[a-zA-Z0-9,\\] ][a-z\\[\\], ]{0,20}") {
        let tokens: Vec<Token> = lex("start", &input).collect();
        prop_assert_eq!(tokens.len(), 1);
        prop_assert_eq!(tokens[0].kind, TokenKind::Error);
        prop_assert_eq!(tokens[0].text.as_str(), "unexpected initial symbol");
    }

    #[test]
    fn truncated_lists_fail(input in valid_list()) {
        // Dropping the final `]` leaves a list open, unless a nested list just
        // closed: the lexer accepts end of input after any `]`
        let cut = input.rfind(']').unwrap();
        let truncated = &input[..cut];
        prop_assume!(!truncated.trim_end().ends_with(']'));
        let tokens: Vec<Token> = lex("truncated", truncated).collect();
        let last = tokens.last().unwrap();
        prop_assert_eq!(last.kind, TokenKind::Error);
        prop_assert_eq!(last.text.as_str(), "unclosed list");
    }
}
