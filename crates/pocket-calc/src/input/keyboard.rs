//! Keyboard adapter
//!
//! Maps keyboard key values (`"7"`, `"Enter"`, `"Escape"`, ...) to tokens so
//! typing mirrors the keypad buttons.

use crate::core::{Operator, Token};

/// Key bindings shown in help panels, as (key, action) pairs
pub const KEY_BINDINGS: &[(&str, &str)] = &[
    ("0-9 .", "Enter number"),
    ("+ - * /", "Operator"),
    ("Enter =", "Evaluate"),
    ("Bksp", "Delete"),
    ("Esc c", "Clear"),
];

/// Maps a key value to a token
///
/// Unknown keys map to `None` and are meant to be ignored.
#[must_use]
pub fn key_to_token(key: &str) -> Option<Token> {
    match key {
        "Enter" | "=" => Some(Token::Evaluate),
        "Backspace" => Some(Token::Delete),
        "Escape" | "c" | "C" => Some(Token::Clear),
        "." => Some(Token::Decimal),
        _ => {
            let mut chars = key.chars();
            match (chars.next(), chars.next()) {
                (Some(c @ '0'..='9'), None) => Token::digit(c as u8 - b'0'),
                (Some(c), None) => Operator::from_symbol(c).map(Token::Operator),
                _ => None,
            }
        }
    }
}

/// The canonical key value that produces a token
#[must_use]
pub fn token_to_key(token: Token) -> String {
    match token {
        Token::Evaluate => "Enter".to_string(),
        Token::Delete => "Backspace".to_string(),
        Token::Clear => "Escape".to_string(),
        other => other.symbol().to_string(),
    }
}
