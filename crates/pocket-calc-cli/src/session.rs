//! Scripted sessions: token strings, key values and the line REPL

use std::io::{BufRead, Write};

use pocket_calc::core::token::tokenize;
use pocket_calc::core::{Calculator, CalculatorConfig, Token};
use pocket_calc::input::key_to_token;
use tracing::{debug, info};

use crate::error::CliResult;
use crate::output::{Outcome, Printer, Step, Transcript};

fn transcript(calc: &Calculator, steps: Vec<Step>) -> Transcript {
    Transcript {
        steps,
        display: calc.display().to_string(),
        pending: calc.state().pending_expression(),
        history: calc.history().iter().cloned().collect(),
    }
}

fn press(calc: &mut Calculator, input: String, token: Token) -> Step {
    let transition = calc.press(token);
    Step {
        input,
        display: calc.display().to_string(),
        outcome: Outcome::from(&transition),
    }
}

/// Applies token strings in order
///
/// Every string is parsed before any token is applied, so a typo leaves
/// no partial run behind.
pub fn eval_scripts(config: CalculatorConfig, scripts: &[String]) -> CliResult<Transcript> {
    let mut tokens = Vec::new();
    for script in scripts {
        tokens.extend(tokenize(script)?);
    }
    info!(tokens = tokens.len(), "evaluating scripts");

    let mut calc = Calculator::with_config(config);
    let steps = tokens
        .into_iter()
        .map(|token| press(&mut calc, token.to_string(), token))
        .collect();
    Ok(transcript(&calc, steps))
}

/// Applies keyboard key values in order; unmapped keys are ignored
#[must_use]
pub fn press_keys(config: CalculatorConfig, keys: &[String]) -> Transcript {
    let mut calc = Calculator::with_config(config);
    let steps = keys
        .iter()
        .map(|key| match key_to_token(key) {
            Some(token) => press(&mut calc, key.clone(), token),
            None => {
                debug!(key = key.as_str(), "unmapped key ignored");
                Step {
                    input: key.clone(),
                    display: calc.display().to_string(),
                    outcome: Outcome::Ignored,
                }
            }
        })
        .collect();
    transcript(&calc, steps)
}

/// Line-oriented session over any reader and writer
#[derive(Debug)]
pub struct Repl {
    calc: Calculator,
    printer: Printer,
    prompt: bool,
}

impl Repl {
    /// Prompt printed before each line
    pub const PROMPT: &'static str = "> ";

    /// Creates a session
    #[must_use]
    pub fn new(config: CalculatorConfig, printer: Printer, prompt: bool) -> Self {
        Self {
            calc: Calculator::with_config(config),
            printer,
            prompt,
        }
    }

    /// The calculator behind the session
    #[must_use]
    pub fn calculator(&self) -> &Calculator {
        &self.calc
    }

    /// Handles one line; returns false when the session should end
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> CliResult<bool> {
        match line.trim() {
            "" => {}
            "quit" | "exit" => return Ok(false),
            "history" => {
                if self.calc.history().is_empty() {
                    writeln!(out, "(no history)")?;
                }
                for entry in self.printer.history(self.calc.history().iter()) {
                    writeln!(out, "{entry}")?;
                }
            }
            "clear-history" => self.calc.clear_history(),
            script => match self.calc.enter(script) {
                Ok(_) => writeln!(out, "{}", self.printer.state(self.calc.state()))?,
                Err(e) => writeln!(out, "error: {e}")?,
            },
        }
        Ok(true)
    }

    /// Runs until end of input or `quit`
    pub fn run<R: BufRead, W: Write>(&mut self, reader: R, mut out: W) -> CliResult<()> {
        let mut lines = reader.lines();
        loop {
            if self.prompt {
                write!(out, "{}", Self::PROMPT)?;
                out.flush()?;
            }
            let Some(line) = lines.next() else {
                break;
            };
            if !self.handle_line(&line?, &mut out)? {
                break;
            }
        }
        debug!(history = self.calc.history().len(), "repl finished");
        Ok(())
    }
}
