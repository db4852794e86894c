//! Terminal key handling
//!
//! Crossterm events are turned into key values and run through the keyboard
//! adapter, so the terminal accepts exactly the keys the keypad offers.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::core::Token;
use crate::input::key_to_token;

/// Actions that can be triggered by keyboard input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Feed a token to the calculator
    Token(Token),
    /// Forget completed operations
    ClearHistory,
    /// Quit the application
    Quit,
    /// No action (ignored input)
    None,
}

/// Input handler that maps key events to actions
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    /// Creates a new input handler
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Maps a key event to an action
    #[must_use]
    pub fn handle_key(&self, event: KeyEvent) -> KeyAction {
        let KeyEvent {
            code,
            modifiers,
            kind,
            ..
        } = event;

        if kind == KeyEventKind::Release {
            return KeyAction::None;
        }

        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c' | 'q') => KeyAction::Quit,
                KeyCode::Char('l') => KeyAction::ClearHistory,
                _ => KeyAction::None,
            };
        }

        if modifiers.contains(KeyModifiers::ALT) {
            return KeyAction::None;
        }

        key_value(code)
            .and_then(|key| key_to_token(&key))
            .map_or(KeyAction::None, KeyAction::Token)
    }
}

/// The DOM-style key value for a key code, if it has one we care about
#[must_use]
pub fn key_value(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Char(c) => Some(c.to_string()),
        KeyCode::Enter => Some("Enter".to_string()),
        KeyCode::Backspace => Some("Backspace".to_string()),
        KeyCode::Esc => Some("Escape".to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operator;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn key_event_ctrl(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::CONTROL)
    }

    #[test]
    fn test_handle_digit_keys() {
        let handler = InputHandler::new();
        for d in 0..=9u8 {
            let c = char::from(b'0' + d);
            assert_eq!(
                handler.handle_key(key_event(KeyCode::Char(c))),
                KeyAction::Token(Token::Digit(d))
            );
        }
    }

    #[test]
    fn test_handle_operator_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('*'))),
            KeyAction::Token(Token::Operator(Operator::Multiply))
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('/'))),
            KeyAction::Token(Token::Operator(Operator::Divide))
        );
    }

    #[test]
    fn test_shifted_plus_still_maps() {
        let handler = InputHandler::new();
        let event = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        assert_eq!(
            handler.handle_key(event),
            KeyAction::Token(Token::Operator(Operator::Add))
        );
    }

    #[test]
    fn test_handle_named_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Enter)),
            KeyAction::Token(Token::Evaluate)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Backspace)),
            KeyAction::Token(Token::Delete)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Esc)),
            KeyAction::Token(Token::Clear)
        );
        assert_eq!(
            handler.handle_key(key_event(KeyCode::Char('='))),
            KeyAction::Token(Token::Evaluate)
        );
    }

    #[test]
    fn test_handle_ctrl_keys() {
        let handler = InputHandler::new();
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('c'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('q'))),
            KeyAction::Quit
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('l'))),
            KeyAction::ClearHistory
        );
        assert_eq!(
            handler.handle_key(key_event_ctrl(KeyCode::Char('7'))),
            KeyAction::None
        );
    }

    #[test]
    fn test_unmapped_keys_ignored() {
        let handler = InputHandler::new();
        for code in [
            KeyCode::Char('x'),
            KeyCode::Char('%'),
            KeyCode::Tab,
            KeyCode::Delete,
            KeyCode::Left,
            KeyCode::F(1),
        ] {
            assert_eq!(handler.handle_key(key_event(code)), KeyAction::None);
        }
    }

    #[test]
    fn test_alt_modified_keys_ignored() {
        let handler = InputHandler::new();
        let event = KeyEvent::new(KeyCode::Char('7'), KeyModifiers::ALT);
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }

    #[test]
    fn test_release_events_ignored() {
        let handler = InputHandler::new();
        let mut event = key_event(KeyCode::Char('7'));
        event.kind = KeyEventKind::Release;
        assert_eq!(handler.handle_key(event), KeyAction::None);
    }

    #[test]
    fn test_key_value() {
        assert_eq!(key_value(KeyCode::Char('5')).as_deref(), Some("5"));
        assert_eq!(key_value(KeyCode::Esc).as_deref(), Some("Escape"));
        assert_eq!(key_value(KeyCode::Up), None);
    }
}
