//! The calculator state machine
//!
//! Single-operator arithmetic with left-to-right chaining: choosing an
//! operator while another is pending evaluates the pending one first, so
//! `2 + 3 * 4 =` shows `20`.
//!
//! Out-of-sequence input is ignored rather than reported. Once the display
//! holds [`ERROR_MARKER`], only Clear and Delete do anything.

use crate::core::history::HistoryEntry;
use crate::core::number::{format_number, parse_operand, round_to};
use crate::core::{CalcError, CalculatorConfig, Operator, Token, ERROR_MARKER};

/// What a token did to the state
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The state changed without completing an operation
    Applied,
    /// The token was not meaningful in this state; nothing changed
    Ignored,
    /// An operation completed (explicitly or by chaining)
    Evaluated(HistoryEntry),
    /// An operation failed; the display now shows the error marker
    Failed(CalcError),
}

impl Transition {
    /// Returns true if the state is unchanged
    #[must_use]
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored)
    }
}

/// Calculator state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalculatorState {
    display: String,
    pending_operand: Option<String>,
    operator: Option<Operator>,
    reset_pending: bool,
    config: CalculatorConfig,
}

impl Default for CalculatorState {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculatorState {
    /// Display text of a fresh or cleared calculator
    pub const INITIAL_DISPLAY: &'static str = "0";

    /// Creates a calculator with default limits
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(CalculatorConfig::default())
    }

    /// Creates a calculator with custom limits
    #[must_use]
    pub fn with_config(config: CalculatorConfig) -> Self {
        Self {
            display: Self::INITIAL_DISPLAY.to_string(),
            pending_operand: None,
            operator: None,
            reset_pending: false,
            config,
        }
    }

    /// Current display text
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Operand captured when the current operator was chosen
    #[must_use]
    pub fn pending_operand(&self) -> Option<&str> {
        self.pending_operand.as_deref()
    }

    /// Operator awaiting its second operand
    #[must_use]
    pub const fn operator(&self) -> Option<Operator> {
        self.operator
    }

    /// True when the next digit starts a new number
    #[must_use]
    pub const fn is_reset_pending(&self) -> bool {
        self.reset_pending
    }

    /// True when the display shows the error marker
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.display == ERROR_MARKER
    }

    /// Limits in effect
    #[must_use]
    pub const fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// The half-entered operation, e.g. `12 +`
    #[must_use]
    pub fn pending_expression(&self) -> Option<String> {
        let op = self.operator?;
        let left = self.pending_operand.as_deref().unwrap_or(Self::INITIAL_DISPLAY);
        Some(format!("{left} {op}"))
    }

    /// Pure transition: returns the state after `token`
    #[must_use]
    pub fn apply(&self, token: Token) -> Self {
        let mut next = self.clone();
        next.apply_token(token);
        next
    }

    /// Applies one token in place
    pub fn apply_token(&mut self, token: Token) -> Transition {
        let transition = if self.is_error() && !matches!(token, Token::Clear | Token::Delete) {
            Transition::Ignored
        } else {
            match token {
                Token::Digit(_) | Token::Decimal => self.append(token.symbol()),
                Token::Operator(op) => self.choose_operator(op),
                Token::Evaluate => self.evaluate(),
                Token::Clear => {
                    self.clear();
                    Transition::Applied
                }
                Token::Delete => self.delete(),
            }
        };

        if transition.is_ignored() {
            tracing::trace!(token = %token, display = %self.display, "token ignored");
        } else {
            tracing::debug!(token = %token, display = %self.display, "token applied");
        }
        transition
    }

    /// Applies a sequence of tokens, returning completed operations
    pub fn apply_all<I>(&mut self, tokens: I) -> Vec<HistoryEntry>
    where
        I: IntoIterator<Item = Token>,
    {
        tokens
            .into_iter()
            .filter_map(|token| match self.apply_token(token) {
                Transition::Evaluated(entry) => Some(entry),
                _ => None,
            })
            .collect()
    }

    /// Resets to the initial state, keeping the configured limits
    pub fn clear(&mut self) {
        self.display.clear();
        self.display.push_str(Self::INITIAL_DISPLAY);
        self.pending_operand = None;
        self.operator = None;
        self.reset_pending = false;
    }

    fn append(&mut self, symbol: char) -> Transition {
        let mut changed = false;
        if self.reset_pending {
            self.display.clear();
            self.reset_pending = false;
            changed = true;
        }

        if symbol == '.' && self.display.contains('.') {
            return Self::changed_or_ignored(changed);
        }
        if self.display.chars().count() >= self.config.max_display_len {
            return Self::changed_or_ignored(changed);
        }

        if self.display == Self::INITIAL_DISPLAY && symbol != '.' {
            self.display.clear();
        }
        self.display.push(symbol);
        Transition::Applied
    }

    fn choose_operator(&mut self, op: Operator) -> Transition {
        let mut transition = Transition::Applied;
        if self.operator.is_some() {
            transition = self.evaluate();
            if matches!(transition, Transition::Failed(_)) {
                return transition;
            }
            if transition.is_ignored() {
                transition = Transition::Applied;
            }
        }

        self.pending_operand = Some(self.display.clone());
        self.operator = Some(op);
        self.reset_pending = true;
        transition
    }

    fn evaluate(&mut self) -> Transition {
        let Some(op) = self.operator else {
            return Transition::Ignored;
        };
        if self.reset_pending {
            return Transition::Ignored;
        }

        let left = self.pending_operand.take().unwrap_or_default();
        let right = std::mem::take(&mut self.display);
        self.operator = None;

        match op.apply(parse_operand(&left), parse_operand(&right)) {
            Ok(value) => {
                let result = format_number(round_to(value, self.config.precision));
                self.display.clone_from(&result);
                self.pending_operand = Some(result.clone());
                Transition::Evaluated(HistoryEntry::new(left, op, right, result))
            }
            Err(err) => {
                tracing::debug!(left = %left, op = %op, right = %right, error = %err, "evaluation failed");
                self.display.push_str(ERROR_MARKER);
                Transition::Failed(err)
            }
        }
    }

    fn delete(&mut self) -> Transition {
        if self.is_error() {
            self.clear();
        } else if self.display.chars().count() <= 1 {
            self.display.clear();
            self.display.push_str(Self::INITIAL_DISPLAY);
        } else {
            self.display.pop();
        }
        Transition::Applied
    }

    const fn changed_or_ignored(changed: bool) -> Transition {
        if changed {
            Transition::Applied
        } else {
            Transition::Ignored
        }
    }
}
