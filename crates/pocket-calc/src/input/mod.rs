//! Input adapters
//!
//! Both adapters only translate events into [`Token`](crate::core::Token)s;
//! neither touches calculator state.

mod keyboard;
mod keypad;

pub use keyboard::{key_to_token, token_to_key, KEY_BINDINGS};
pub use keypad::{button_id, Keypad, KeypadButton};
