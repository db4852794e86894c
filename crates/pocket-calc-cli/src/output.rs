//! Output formatting

use console::Style;
use pocket_calc::core::{CalculatorState, Transition, ERROR_MARKER};
use serde::Serialize;

use pocket_calc::core::history::HistoryEntry;

/// What one input did, for transcripts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// State changed
    Applied,
    /// Input had no effect
    Ignored,
    /// An operation completed
    Evaluated,
    /// An operation failed
    Failed,
}

impl From<&Transition> for Outcome {
    fn from(transition: &Transition) -> Self {
        match transition {
            Transition::Applied => Self::Applied,
            Transition::Ignored => Self::Ignored,
            Transition::Evaluated(_) => Self::Evaluated,
            Transition::Failed(_) => Self::Failed,
        }
    }
}

/// One input and the display after it
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Step {
    /// Token symbol or key value
    pub input: String,
    /// Display text after the input
    pub display: String,
    /// What the input did
    pub outcome: Outcome,
}

/// Everything a scripted run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transcript {
    /// Inputs in order
    pub steps: Vec<Step>,
    /// Final display text
    pub display: String,
    /// Half-entered operation, e.g. `12 +`
    pub pending: Option<String>,
    /// Completed operations, oldest first
    pub history: Vec<HistoryEntry>,
}

/// Styled terminal output
#[derive(Debug, Clone)]
pub struct Printer {
    result: Style,
    error: Style,
    dim: Style,
}

impl Printer {
    /// Creates a printer; `color` forces styling on or off
    #[must_use]
    pub fn new(color: bool) -> Self {
        Self {
            result: Style::new().green().bold().force_styling(color),
            error: Style::new().red().bold().force_styling(color),
            dim: Style::new().dim().force_styling(color),
        }
    }

    /// The display text, red when it holds the error marker
    #[must_use]
    pub fn display(&self, text: &str) -> String {
        if text == ERROR_MARKER {
            self.error.apply_to(text).to_string()
        } else {
            self.result.apply_to(text).to_string()
        }
    }

    /// Display line for a calculator state, with any pending operation
    #[must_use]
    pub fn state(&self, state: &CalculatorState) -> String {
        match state.pending_expression() {
            Some(pending) if state.is_reset_pending() => {
                format!("{}  {}", self.dim.apply_to(pending), self.display(state.display()))
            }
            _ => self.display(state.display()),
        }
    }

    /// One `input -> display` trace line
    #[must_use]
    pub fn step(&self, step: &Step) -> String {
        let marker = match step.outcome {
            Outcome::Ignored => " (ignored)",
            _ => "",
        };
        format!(
            "{:>9} -> {}{}",
            step.input,
            self.display(&step.display),
            self.dim.apply_to(marker)
        )
    }

    /// History lines, oldest first
    #[must_use]
    pub fn history<'a, I>(&self, entries: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a HistoryEntry>,
    {
        entries
            .into_iter()
            .map(|entry| {
                format!(
                    "{} = {}",
                    self.dim.apply_to(entry.expression()),
                    self.display(&entry.result)
                )
            })
            .collect()
    }
}
