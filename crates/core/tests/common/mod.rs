//! Shared test helpers for `zpl_composer_core` integration tests.

#![allow(unreachable_pub)]

use zpl_composer_core::{Mark, Token};

/// Shorthand for a command token.
#[allow(dead_code)]
pub fn cmd(mark: Mark, name: &str, params: &str) -> Token {
    Token::command(mark, name, params)
}

/// Shorthand for a `^`-prefixed command token.
#[allow(dead_code)]
pub fn caret(name: &str, params: &str) -> Token {
    Token::command(Mark::Caret, name, params)
}

/// Collect the names of all command tokens, in order.
#[allow(dead_code)]
pub fn command_names(tokens: &[Token]) -> Vec<String> {
    tokens
        .iter()
        .filter_map(|t| match t {
            Token::Command { name, .. } => Some(name.clone()),
            _ => None,
        })
        .collect()
}

/// Assert the FieldData/FieldSeparator pairing invariant: every FieldData
/// token is immediately followed by a FieldSeparator, except possibly the
/// last token of the sequence.
#[allow(dead_code)]
pub fn assert_pairing(tokens: &[Token], input_desc: &str) {
    for (i, tok) in tokens.iter().enumerate() {
        if matches!(tok, Token::FieldData { .. }) && i + 1 < tokens.len() {
            assert!(
                matches!(tokens[i + 1], Token::FieldSeparator),
                "FieldData at index {i} not followed by FieldSeparator for input {input_desc}"
            );
        }
    }
}
