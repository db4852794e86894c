//! Normalized input tokens
//!
//! Every adapter (keypad, keyboard, script text) reduces its events to this
//! set before anything reaches the engine.

use std::fmt;
use std::str::FromStr;

use crate::core::{CalcError, CalcResult, Operator};

/// Symbol of the delete token
pub const DELETE_SYMBOL: char = '⌫';

/// ASCII stand-in for [`DELETE_SYMBOL`] in script strings
pub const DELETE_ASCII: char = '<';

/// One unit of calculator input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Token {
    /// A digit 0-9
    Digit(u8),
    /// The decimal point
    Decimal,
    /// One of `+ - * /`
    Operator(Operator),
    /// `=`
    Evaluate,
    /// `C`
    Clear,
    /// `⌫`
    Delete,
}

impl Token {
    /// Creates a digit token, rejecting values above 9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Returns the symbol this token is labelled with
    #[must_use]
    pub fn symbol(&self) -> char {
        match self {
            Self::Digit(d) => char::from_digit(u32::from(*d), 10).unwrap_or('?'),
            Self::Decimal => '.',
            Self::Operator(op) => op.symbol(),
            Self::Evaluate => '=',
            Self::Clear => 'C',
            Self::Delete => DELETE_SYMBOL,
        }
    }

    /// Maps a single character to a token
    ///
    /// Accepts `c` as well as `C`, and `<` as well as `⌫`.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Self::digit(c as u8 - b'0'),
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Evaluate),
            'C' | 'c' => Some(Self::Clear),
            DELETE_SYMBOL | DELETE_ASCII => Some(Self::Delete),
            other => Operator::from_symbol(other).map(Self::Operator),
        }
    }

    /// Returns true for tokens that extend the number being entered
    #[must_use]
    pub const fn is_entry(&self) -> bool {
        matches!(self, Self::Digit(_) | Self::Decimal)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl From<Operator> for Token {
    fn from(op: Operator) -> Self {
        Self::Operator(op)
    }
}

impl FromStr for Token {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c).ok_or_else(|| CalcError::UnknownToken(s.into())),
            _ => Err(CalcError::UnknownToken(s.into())),
        }
    }
}

/// Splits a script string such as `"12+3="` into tokens
///
/// Whitespace is skipped; any other unknown character fails the whole string.
pub fn tokenize(input: &str) -> CalcResult<Vec<Token>> {
    input
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| Token::from_char(c).ok_or_else(|| CalcError::UnknownToken(c.to_string())))
        .collect()
}
