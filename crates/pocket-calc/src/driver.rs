//! Unified calculator drivers
//!
//! Every front end is a way of producing tokens. A [`CalculatorDriver`] hides
//! which one, so the behavioral checks below are written once and run
//! against direct tokens, keyboard keys, keypad clicks and terminal events.

use std::time::Instant;

use thiserror::Error;

use crate::core::token::tokenize;
use crate::core::{CalcResult, Calculator, Operator, Token, ERROR_MARKER};
use crate::input::{button_id, key_to_token, token_to_key, Keypad};

/// Abstract driver for calculator interactions
pub trait CalculatorDriver {
    /// Feeds one token through the driver's input path
    fn press(&mut self, token: Token);

    /// Current display text
    fn display(&self) -> String;

    /// Operator awaiting its second operand
    fn pending_operator(&self) -> Option<Operator>;

    /// Resets the calculator
    fn clear(&mut self) {
        self.press(Token::Clear);
    }

    /// Feeds a token string such as `"12+3="`
    fn enter(&mut self, script: &str) -> CalcResult<()> {
        for token in tokenize(script)? {
            self.press(token);
        }
        Ok(())
    }
}

/// Drives the calculator with tokens directly
#[derive(Debug, Default)]
pub struct EngineDriver {
    calculator: Calculator,
}

impl EngineDriver {
    /// Creates a driver around a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying calculator
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calculator
    }
}

impl CalculatorDriver for EngineDriver {
    fn press(&mut self, token: Token) {
        self.calculator.press(token);
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn pending_operator(&self) -> Option<Operator> {
        self.calculator.operator()
    }
}

/// Drives the calculator through keyboard key values
#[derive(Debug, Default)]
pub struct KeyboardDriver {
    calculator: Calculator,
}

impl KeyboardDriver {
    /// Creates a driver around a fresh calculator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Presses a key by its value; returns false if the key is ignored
    pub fn press_key(&mut self, key: &str) -> bool {
        match key_to_token(key) {
            Some(token) => {
                self.calculator.press(token);
                true
            }
            None => false,
        }
    }
}

impl CalculatorDriver for KeyboardDriver {
    fn press(&mut self, token: Token) {
        self.press_key(&token_to_key(token));
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn pending_operator(&self) -> Option<Operator> {
        self.calculator.operator()
    }
}

/// Drives the calculator by clicking keypad buttons
#[derive(Debug, Default)]
pub struct PointerDriver {
    calculator: Calculator,
    keypad: Keypad,
}

impl PointerDriver {
    /// Creates a driver around a fresh calculator and keypad
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Clicks a button by element id; returns false for unknown ids
    pub fn click(&mut self, id: &str) -> bool {
        match self.keypad.activate(id, Instant::now()) {
            Some(token) => {
                self.calculator.press(token);
                true
            }
            None => false,
        }
    }

    /// The keypad, including highlight state
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }
}

impl CalculatorDriver for PointerDriver {
    fn press(&mut self, token: Token) {
        self.click(&button_id(token));
    }

    fn display(&self) -> String {
        self.calculator.display().to_string()
    }

    fn pending_operator(&self) -> Option<Operator> {
        self.calculator.operator()
    }
}

/// Terminal driver
#[cfg(feature = "tui")]
pub mod tui_driver {
    use std::time::Instant;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use super::CalculatorDriver;
    use crate::core::{Operator, Token};
    use crate::tui::CalculatorApp;

    /// Drives the terminal app with crossterm key events
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    /// The key event a user would type for a token
    #[must_use]
    pub fn key_event_for(token: Token) -> KeyEvent {
        let code = match token {
            Token::Evaluate => KeyCode::Enter,
            Token::Delete => KeyCode::Backspace,
            Token::Clear => KeyCode::Esc,
            other => KeyCode::Char(other.symbol()),
        };
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, token: Token) {
            self.app.handle_key(key_event_for(token), Instant::now());
        }

        fn display(&self) -> String {
            self.app.calculator().display().to_string()
        }

        fn pending_operator(&self) -> Option<Operator> {
            self.app.calculator().operator()
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

// ===== Shared behavioral checks =====

/// A driver produced something other than what a check expected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{check}: after {input:?} expected {expected:?}, got {actual:?}")]
pub struct Mismatch {
    /// Name of the failing check
    pub check: &'static str,
    /// Token string that was entered
    pub input: String,
    /// Expected observation
    pub expected: String,
    /// Actual observation
    pub actual: String,
}

/// Result of a behavioral check
pub type CheckResult = Result<(), Mismatch>;

fn expect_display<D: CalculatorDriver>(
    driver: &mut D,
    check: &'static str,
    input: &str,
    expected: &str,
) -> CheckResult {
    driver.clear();
    let entered = driver.enter(input);
    let actual = match entered {
        Ok(()) => driver.display(),
        Err(err) => err.to_string(),
    };
    if actual == expected {
        Ok(())
    } else {
        Err(Mismatch {
            check,
            input: input.to_string(),
            expected: expected.to_string(),
            actual,
        })
    }
}

/// Digits concatenate, a leading zero is replaced, and `.` appears once
pub fn verify_digit_entry<D: CalculatorDriver>(driver: &mut D) -> CheckResult {
    expect_display(driver, "digit entry", "123", "123")?;
    expect_display(driver, "leading zero", "007", "7")?;
    expect_display(driver, "zero point", ".5", "0.5")?;
    expect_display(driver, "single decimal", "1.2.3", "1.23")
}

/// Entry stops at the display length limit
pub fn verify_length_cap<D: CalculatorDriver>(driver: &mut D) -> CheckResult {
    expect_display(driver, "length cap", "1234567890123456789", "123456789012345")
}

/// Basic operations and left-to-right chaining
pub fn verify_arithmetic<D: CalculatorDriver>(driver: &mut D) -> CheckResult {
    expect_display(driver, "addition", "2+3=", "5")?;
    expect_display(driver, "subtraction", "2-5=", "-3")?;
    expect_display(driver, "multiplication", "6*7=", "42")?;
    expect_display(driver, "division", "9/4=", "2.25")?;
    expect_display(driver, "chaining", "2+3*4=", "20")
}

/// Results are rounded to suppress float artifacts
pub fn verify_rounding<D: CalculatorDriver>(driver: &mut D) -> CheckResult {
    expect_display(driver, "float artifacts", "0.1+0.2=", "0.3")?;
    expect_display(driver, "repeating decimal", "2/3=", "0.66667")
}

/// Division by zero shows the error marker until cleared
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) -> CheckResult {
    expect_display(driver, "division by zero", "5/0=", ERROR_MARKER)?;
    expect_display(driver, "error is sticky", "5/0=7+", ERROR_MARKER)?;
    expect_display(driver, "delete clears error", "5/0=⌫", "0")
}

/// Clear resets display and operator; Delete trims one character
pub fn verify_clear_and_delete<D: CalculatorDriver>(driver: &mut D) -> CheckResult {
    expect_display(driver, "clear", "12+34C", "0")?;
    if let Some(op) = driver.pending_operator() {
        return Err(Mismatch {
            check: "clear drops operator",
            input: "12+34C".to_string(),
            expected: "no operator".to_string(),
            actual: op.to_string(),
        });
    }
    expect_display(driver, "delete", "123⌫", "12")?;
    expect_display(driver, "delete last digit", "7⌫", "0")
}

/// Evaluate with nothing pending changes nothing
pub fn verify_evaluate_noop<D: CalculatorDriver>(driver: &mut D) -> CheckResult {
    expect_display(driver, "evaluate without operator", "42=", "42")?;
    expect_display(driver, "evaluate without operand", "7+=", "7")
}

/// Runs every check against a driver
pub fn run_all_checks<D: CalculatorDriver>(driver: &mut D) -> CheckResult {
    verify_digit_entry(driver)?;
    verify_length_cap(driver)?;
    verify_arithmetic(driver)?;
    verify_rounding(driver)?;
    verify_division_by_zero(driver)?;
    verify_clear_and_delete(driver)?;
    verify_evaluate_noop(driver)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_driver_all_checks() {
        let mut driver = EngineDriver::new();
        run_all_checks(&mut driver).unwrap();
    }

    #[test]
    fn test_keyboard_driver_all_checks() {
        let mut driver = KeyboardDriver::new();
        run_all_checks(&mut driver).unwrap();
    }

    #[test]
    fn test_pointer_driver_all_checks() {
        let mut driver = PointerDriver::new();
        run_all_checks(&mut driver).unwrap();
    }

    #[test]
    fn test_enter_rejects_unknown_token() {
        let mut driver = EngineDriver::new();
        assert!(driver.enter("1x").is_err());
        assert_eq!(driver.display(), "0");
    }

    #[test]
    fn test_pending_operator() {
        let mut driver = EngineDriver::new();
        driver.enter("3*").unwrap();
        assert_eq!(driver.pending_operator(), Some(Operator::Multiply));
        driver.clear();
        assert_eq!(driver.pending_operator(), None);
    }

    #[test]
    fn test_engine_driver_records_history() {
        let mut driver = EngineDriver::new();
        driver.enter("1+2=").unwrap();
        assert_eq!(driver.calculator().history().len(), 1);
    }

    #[test]
    fn test_keyboard_driver_ignores_unknown_keys() {
        let mut driver = KeyboardDriver::new();
        assert!(driver.press_key("4"));
        assert!(!driver.press_key("Tab"));
        assert!(!driver.press_key("x"));
        assert_eq!(driver.display(), "4");
    }

    #[test]
    fn test_pointer_driver_click() {
        let mut driver = PointerDriver::new();
        assert!(driver.click("btn-9"));
        assert!(!driver.click("btn-nope"));
        assert_eq!(driver.display(), "9");
        assert!(!driver.keypad().pressed().is_empty());
    }

    #[test]
    fn test_mismatch_reports_details() {
        #[derive(Default)]
        struct StuckDriver;

        impl CalculatorDriver for StuckDriver {
            fn press(&mut self, _token: Token) {}
            fn display(&self) -> String {
                "0".to_string()
            }
            fn pending_operator(&self) -> Option<Operator> {
                None
            }
        }

        let err = verify_arithmetic(&mut StuckDriver).unwrap_err();
        assert_eq!(err.check, "addition");
        assert_eq!(err.input, "2+3=");
        assert_eq!(err.expected, "5");
        assert_eq!(err.actual, "0");
        assert!(err.to_string().starts_with("addition: after \"2+3=\""));
    }

    #[cfg(feature = "tui")]
    mod tui_tests {
        use super::*;
        use crossterm::event::KeyCode;

        #[test]
        fn test_tui_driver_all_checks() {
            let mut driver = TuiDriver::new();
            run_all_checks(&mut driver).unwrap();
        }

        #[test]
        fn test_tui_driver_lights_keypad() {
            let mut driver = TuiDriver::new();
            driver.enter("5").unwrap();
            assert_eq!(driver.app().keypad().pressed().len(), 1);
        }

        #[test]
        fn test_tui_driver_with_app() {
            let driver = TuiDriver::with_app(crate::tui::CalculatorApp::new());
            assert_eq!(driver.display(), "0");
        }

        #[test]
        fn test_tui_driver_app_mut() {
            let mut driver = TuiDriver::new();
            driver.app_mut().quit();
            assert!(driver.app().should_quit());
        }

        #[test]
        fn test_key_event_for_tokens() {
            use super::super::tui_driver::key_event_for;
            assert_eq!(key_event_for(Token::Evaluate).code, KeyCode::Enter);
            assert_eq!(key_event_for(Token::Delete).code, KeyCode::Backspace);
            assert_eq!(key_event_for(Token::Clear).code, KeyCode::Esc);
            assert_eq!(key_event_for(Token::Digit(3)).code, KeyCode::Char('3'));
        }
    }
}
