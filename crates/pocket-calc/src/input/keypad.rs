//! Pointer adapter: the on-screen keypad
//!
//! Layout:
//! ```text
//! [ C ] [ ⌫ ] [ / ] [ * ]
//! [ 7 ] [ 8 ] [ 9 ] [ - ]
//! [ 4 ] [ 5 ] [ 6 ] [ + ]
//! [ 1 ] [ 2 ] [ 3 ] [ = ]
//! [ 0 ] [ . ]
//! ```
//!
//! Activating a button yields its token and lights the button for a short,
//! fixed time. The highlight is purely cosmetic: it lives here, never in the
//! calculator state, and expires when the UI loop calls
//! [`Keypad::release_expired`].

use std::time::{Duration, Instant};

use crate::core::{CalculatorConfig, Operator, Token};

/// Element id for the button that produces `token`
#[must_use]
pub fn button_id(token: Token) -> String {
    match token {
        Token::Digit(d) => format!("btn-{d}"),
        Token::Decimal => "btn-decimal".to_string(),
        Token::Operator(op) => format!("btn-{}", op.id_name()),
        Token::Evaluate => "btn-equals".to_string(),
        Token::Clear => "btn-clear".to_string(),
        Token::Delete => "btn-delete".to_string(),
    }
}

/// A single keypad button
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// Token produced on activation
    pub token: Token,
    /// Stable element id, e.g. `btn-plus`
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Whether the button is currently highlighted
    pub pressed: bool,
    lit_until: Option<Instant>,
}

impl KeypadButton {
    /// Creates a button at a grid position
    #[must_use]
    pub fn new(token: Token, row: usize, col: usize) -> Self {
        Self {
            token,
            id: button_id(token),
            row,
            col,
            pressed: false,
            lit_until: None,
        }
    }

    /// The text printed on the button
    #[must_use]
    pub fn label(&self) -> char {
        self.token.symbol()
    }

    /// When the highlight ends, if lit
    #[must_use]
    pub const fn lit_until(&self) -> Option<Instant> {
        self.lit_until
    }

    fn light(&mut self, until: Instant) {
        self.pressed = true;
        self.lit_until = Some(until);
    }

    fn release(&mut self) {
        self.pressed = false;
        self.lit_until = None;
    }
}

/// The keypad: button layout plus transient highlights
#[derive(Debug, Clone)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
    highlight: Duration,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad with the default highlight duration
    #[must_use]
    pub fn new() -> Self {
        Self::with_highlight(CalculatorConfig::default().highlight())
    }

    /// Creates the standard keypad with a custom highlight duration
    #[must_use]
    pub fn with_highlight(highlight: Duration) -> Self {
        let digit = |d: u8| Token::Digit(d);
        let op = |o: Operator| Token::Operator(o);
        let layout: [&[Token]; 5] = [
            &[Token::Clear, Token::Delete, op(Operator::Divide), op(Operator::Multiply)],
            &[digit(7), digit(8), digit(9), op(Operator::Subtract)],
            &[digit(4), digit(5), digit(6), op(Operator::Add)],
            &[digit(1), digit(2), digit(3), Token::Evaluate],
            &[digit(0), Token::Decimal],
        ];

        let buttons = layout
            .iter()
            .enumerate()
            .flat_map(|(row, tokens)| {
                tokens
                    .iter()
                    .enumerate()
                    .map(move |(col, token)| KeypadButton::new(*token, row, col))
            })
            .collect();

        Self {
            buttons,
            rows: 5,
            cols: 4,
            highlight,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// How long a highlight lasts
    #[must_use]
    pub const fn highlight_duration(&self) -> Duration {
        self.highlight
    }

    /// Gets all buttons
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets a button by index
    #[must_use]
    pub fn get_button(&self, index: usize) -> Option<&KeypadButton> {
        self.buttons.get(index)
    }

    /// Gets the button at a grid position; empty cells return `None`
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.row == row && b.col == col)
    }

    /// Index of the button at a grid position
    #[must_use]
    pub fn index_at(&self, row: usize, col: usize) -> Option<usize> {
        self.buttons
            .iter()
            .position(|b| b.row == row && b.col == col)
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by its printed label
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButton> {
        let mut chars = label.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return None;
        };
        self.buttons.iter().find(|b| b.label() == c)
    }

    /// Index of the button producing `token`
    #[must_use]
    pub fn index_of(&self, token: Token) -> Option<usize> {
        self.buttons.iter().position(|b| b.token == token)
    }

    /// Pointer activation by element id
    ///
    /// Lights the button and returns its token; unknown ids do nothing.
    pub fn activate(&mut self, id: &str, now: Instant) -> Option<Token> {
        let index = self.buttons.iter().position(|b| b.id == id)?;
        self.activate_index(index, now)
    }

    /// Pointer activation by button index
    pub fn activate_index(&mut self, index: usize, now: Instant) -> Option<Token> {
        let until = now + self.highlight;
        let button = self.buttons.get_mut(index)?;
        button.light(until);
        Some(button.token)
    }

    /// Lights the button for a token that arrived from another source
    ///
    /// Returns false if no button produces the token.
    pub fn flash_token(&mut self, token: Token, now: Instant) -> bool {
        match self.index_of(token) {
            Some(index) => self.activate_index(index, now).is_some(),
            None => false,
        }
    }

    /// Releases highlights whose time is up; returns true if any changed
    pub fn release_expired(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for button in &mut self.buttons {
            if button.lit_until.is_some_and(|until| until <= now) {
                button.release();
                changed = true;
            }
        }
        changed
    }

    /// Releases all highlights
    pub fn release_all(&mut self) {
        for button in &mut self.buttons {
            button.release();
        }
    }

    /// The earliest pending highlight expiry
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.buttons.iter().filter_map(KeypadButton::lit_until).min()
    }

    /// Indices of highlighted buttons
    #[must_use]
    pub fn pressed(&self) -> Vec<usize> {
        self.buttons
            .iter()
            .enumerate()
            .filter(|(_, b)| b.pressed)
            .map(|(i, _)| i)
            .collect()
    }
}
