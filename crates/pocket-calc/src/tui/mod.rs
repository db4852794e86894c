//! Terminal front end
//!
//! ratatui widgets over the shared keypad model, crossterm for input.
//! The event loop itself lives in the CLI crate.

mod app;
mod input;
mod keypad;
mod ui;

pub use app::CalculatorApp;
pub use input::{key_value, InputHandler, KeyAction};
pub use keypad::{hit_test, KeypadWidget};
pub use ui::{keypad_area, render, CalculatorUI, UiLayout, TITLE, TUI_SHORTCUTS};
