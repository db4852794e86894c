//! Calculator session: the state machine plus its history
//!
//! Front ends hold one of these and feed it tokens.

use crate::core::engine::{CalculatorState, Transition};
use crate::core::history::History;
use crate::core::token::tokenize;
use crate::core::{CalcResult, CalculatorConfig, Operator, Token};

/// A calculator that remembers completed operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Calculator {
    state: CalculatorState,
    history: History,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator with the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a calculator with a custom configuration
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            state: CalculatorState::with_config(config),
            history: History::with_capacity(config.history_capacity),
        }
    }

    /// Applies one token, recording any completed operation
    pub fn press(&mut self, token: Token) -> Transition {
        let transition = self.state.apply_token(token);
        if let Transition::Evaluated(entry) = &transition {
            self.history.push(entry.clone());
        }
        transition
    }

    /// Applies a script string such as `"12+3="`
    ///
    /// Nothing is applied if the script contains an unknown character.
    pub fn enter(&mut self, script: &str) -> CalcResult<Vec<Transition>> {
        let tokens = tokenize(script)?;
        Ok(tokens.into_iter().map(|token| self.press(token)).collect())
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        self.state.display()
    }

    /// Operator awaiting its second operand
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        self.state.operator()
    }

    /// The underlying state machine
    #[must_use]
    pub const fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// Completed operations
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Forgets completed operations; the display is untouched
    pub fn clear_history(&mut self) {
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{CalcError, ERROR_MARKER};

    #[test]
    fn test_calculator_new() {
        let calc = Calculator::new();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.operator(), None);
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_press_records_history() {
        let mut calc = Calculator::new();
        calc.enter("2+3*4=").unwrap();
        assert_eq!(calc.display(), "20");
        let lines: Vec<_> = calc.history().iter().map(|e| e.display()).collect();
        assert_eq!(lines, vec!["2 + 3 = 5", "5 * 4 = 20"]);
    }

    #[test]
    fn test_errors_not_recorded() {
        let mut calc = Calculator::new();
        calc.enter("5/0=").unwrap();
        assert_eq!(calc.display(), ERROR_MARKER);
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_overflow_not_recorded() {
        let mut calc = Calculator::new();
        calc.enter("999999999999999").unwrap();
        let transitions: Vec<_> = (0..25)
            .flat_map(|_| calc.enter("*999999999999999=").unwrap())
            .collect();
        assert!(transitions.contains(&Transition::Failed(CalcError::Overflow)));
        assert_eq!(calc.display(), ERROR_MARKER);
        assert_eq!(calc.history().len(), 20);
        assert!(calc.history().iter().all(|e| !e.result.contains("inf")));
    }

    #[test]
    fn test_clear_keeps_history() {
        let mut calc = Calculator::new();
        calc.enter("1+1=C").unwrap();
        assert_eq!(calc.display(), "0");
        assert_eq!(calc.history().len(), 1);
        calc.clear_history();
        assert!(calc.history().is_empty());
    }

    #[test]
    fn test_enter_rejects_unknown_characters() {
        let mut calc = Calculator::new();
        let err = calc.enter("12x").unwrap_err();
        assert_eq!(err, CalcError::UnknownToken("x".into()));
        assert_eq!(calc.display(), "0");
    }

    #[test]
    fn test_history_capacity_from_config() {
        let mut calc = Calculator::with_config(CalculatorConfig::new().with_history_capacity(1));
        calc.enter("1+1=C2+2=").unwrap();
        assert_eq!(calc.history().len(), 1);
        assert_eq!(calc.history().last().unwrap().result, "4");
    }
}
