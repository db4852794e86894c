//! Calculator core: tokens, operators, the state machine and its history
//!
//! Everything in here is UI-free. Front ends translate their events into
//! [`Token`]s and read back [`CalculatorState::display`].

pub mod calculator;
pub mod config;
pub mod engine;
pub mod history;
pub mod number;
mod operations;
pub mod token;

pub use calculator::Calculator;
pub use config::CalculatorConfig;
pub use engine::{CalculatorState, Transition};
pub use operations::Operator;
pub use token::Token;

use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Text shown in place of a number after an arithmetic fault
pub const ERROR_MARKER: &str = "Error";

/// Calculator error types
///
/// The engine itself never returns these to callers; arithmetic faults are
/// folded into the display as [`ERROR_MARKER`]. They surface from operator
/// arithmetic, token parsing and configuration checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Division by zero attempted
    #[error("Division by zero")]
    DivisionByZero,
    /// Result too large for a finite number
    #[error("Result out of range")]
    Overflow,
    /// Text that does not name a calculator token
    #[error("Unknown token: {0:?}")]
    UnknownToken(String),
    /// Configuration value out of range
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}
