//! Calculator configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{CalcError, CalcResult};

/// Tunables shared by the engine, the keypad and the history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Longest display text that digit entry may produce
    pub max_display_len: usize,
    /// Decimal places kept in evaluation results
    pub precision: u32,
    /// How long a keypad button stays highlighted after activation
    pub highlight_ms: u64,
    /// Number of evaluations kept in history
    pub history_capacity: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_display_len: Self::DEFAULT_MAX_DISPLAY_LEN,
            precision: Self::DEFAULT_PRECISION,
            highlight_ms: Self::DEFAULT_HIGHLIGHT_MS,
            history_capacity: Self::DEFAULT_HISTORY_CAPACITY,
        }
    }
}

impl CalculatorConfig {
    /// Default display length cap
    pub const DEFAULT_MAX_DISPLAY_LEN: usize = 15;
    /// Default result precision
    pub const DEFAULT_PRECISION: u32 = 5;
    /// Default highlight duration in milliseconds
    pub const DEFAULT_HIGHLIGHT_MS: u64 = 150;
    /// Default history size
    pub const DEFAULT_HISTORY_CAPACITY: usize = 100;
    /// Largest accepted precision
    pub const MAX_PRECISION: u32 = 10;

    /// Creates the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the display length cap
    #[must_use]
    pub const fn with_max_display_len(mut self, len: usize) -> Self {
        self.max_display_len = len;
        self
    }

    /// Sets the result precision
    #[must_use]
    pub const fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the highlight duration
    #[must_use]
    pub const fn with_highlight_ms(mut self, ms: u64) -> Self {
        self.highlight_ms = ms;
        self
    }

    /// Sets the history size
    #[must_use]
    pub const fn with_history_capacity(mut self, capacity: usize) -> Self {
        self.history_capacity = capacity;
        self
    }

    /// Highlight duration as a [`Duration`]
    #[must_use]
    pub const fn highlight(&self) -> Duration {
        Duration::from_millis(self.highlight_ms)
    }

    /// Checks value ranges
    pub fn validate(&self) -> CalcResult<()> {
        if self.max_display_len == 0 {
            return Err(CalcError::InvalidConfig(
                "max_display_len must be at least 1".into(),
            ));
        }
        if self.precision > Self::MAX_PRECISION {
            return Err(CalcError::InvalidConfig(format!(
                "precision must be at most {}",
                Self::MAX_PRECISION
            )));
        }
        Ok(())
    }
}
