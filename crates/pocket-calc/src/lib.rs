//! Pocket Calculator
//!
//! A four-function calculator modeled as a token-driven state machine.
//! Keyboard keys and keypad clicks are both translated into the same
//! [`Token`](core::Token)s, so every front end behaves identically.
//!
//! # Example
//!
//! ```rust
//! use pocket_calc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! calc.enter("2+3*4=").unwrap();
//! assert_eq!(calc.display(), "20");
//!
//! calc.enter("C5/0=").unwrap();
//! assert_eq!(calc.display(), "Error");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod input;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::token::tokenize;
    pub use crate::core::{
        CalcError, CalcResult, Calculator, CalculatorConfig, CalculatorState, Operator, Token,
        Transition, ERROR_MARKER,
    };
    pub use crate::driver::{
        run_all_checks, CalculatorDriver, EngineDriver, KeyboardDriver, Mismatch, PointerDriver,
    };
    pub use crate::input::{key_to_token, Keypad};

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
}
