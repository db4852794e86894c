//! TUI application state
//!
//! Owns the calculator session and the keypad highlights. Every input path,
//! keyboard or mouse, ends in [`CalculatorApp::press`].

use std::time::{Duration, Instant};

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use tracing::debug;

use super::input::{InputHandler, KeyAction};
use super::keypad::hit_test;
use crate::core::{Calculator, CalculatorConfig, Token, Transition};
use crate::input::Keypad;

/// Calculator application state
#[derive(Debug)]
pub struct CalculatorApp {
    calculator: Calculator,
    keypad: Keypad,
    input: InputHandler,
    should_quit: bool,
}

impl Default for CalculatorApp {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorApp {
    /// Creates a new calculator app with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a calculator app from a configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            calculator: Calculator::with_config(config),
            keypad: Keypad::with_highlight(config.highlight()),
            input: InputHandler::new(),
            should_quit: false,
        }
    }

    /// The calculator session
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }

    /// The keypad with its current highlights
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// Returns whether the app should quit
    #[must_use]
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Sets the quit flag
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Applies a token and lights its keypad button
    pub fn press(&mut self, token: Token, now: Instant) -> Transition {
        self.keypad.flash_token(token, now);
        let transition = self.calculator.press(token);
        debug!(%token, display = self.calculator.display(), "tui press");
        transition
    }

    /// Handles a key event
    pub fn handle_key(&mut self, event: KeyEvent, now: Instant) -> KeyAction {
        let action = self.input.handle_key(event);
        match action {
            KeyAction::Token(token) => {
                self.press(token, now);
            }
            KeyAction::ClearHistory => self.calculator.clear_history(),
            KeyAction::Quit => self.quit(),
            KeyAction::None => {}
        }
        action
    }

    /// Handles a click on a keypad button by index
    pub fn handle_click(&mut self, index: usize, now: Instant) -> Option<Transition> {
        let token = self.keypad.activate_index(index, now)?;
        let transition = self.calculator.press(token);
        debug!(%token, display = self.calculator.display(), "tui click");
        Some(transition)
    }

    /// Handles a mouse event against the keypad drawn at `keypad_area`
    ///
    /// Only left button presses count.
    pub fn handle_mouse(
        &mut self,
        event: MouseEvent,
        keypad_area: Rect,
        now: Instant,
    ) -> Option<Transition> {
        if event.kind != MouseEventKind::Down(MouseButton::Left) {
            return None;
        }
        let index = hit_test(&self.keypad, keypad_area, event.column, event.row)?;
        self.handle_click(index, now)
    }

    /// Expires keypad highlights; returns true if a redraw is needed
    pub fn tick(&mut self, now: Instant) -> bool {
        self.keypad.release_expired(now)
    }

    /// How long the event loop may block before the next highlight expires
    #[must_use]
    pub fn poll_timeout(&self, now: Instant, idle: Duration) -> Duration {
        self.keypad
            .next_deadline()
            .map_or(idle, |deadline| deadline.saturating_duration_since(now).min(idle))
    }
}
