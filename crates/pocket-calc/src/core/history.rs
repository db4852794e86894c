//! Record of completed evaluations
//!
//! Bounded queue: the oldest entry drops once capacity is reached.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::core::Operator;

/// One successful evaluation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Pending operand text at evaluation time
    pub left: String,
    /// The operator that was applied
    pub operator: Operator,
    /// Display text used as the second operand
    pub right: String,
    /// Rendered result
    pub result: String,
}

impl HistoryEntry {
    /// Creates a new history entry
    #[must_use]
    pub fn new(
        left: impl Into<String>,
        operator: Operator,
        right: impl Into<String>,
        result: impl Into<String>,
    ) -> Self {
        Self {
            left: left.into(),
            operator,
            right: right.into(),
            result: result.into(),
        }
    }

    /// The operation without its result, e.g. `2 + 3`
    #[must_use]
    pub fn expression(&self) -> String {
        format!("{} {} {}", self.left, self.operator, self.right)
    }

    /// Returns a formatted display string, e.g. `2 + 3 = 5`
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression(), self.result)
    }
}

/// Calculator history
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    entries: VecDeque<HistoryEntry>,
    max_entries: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    /// Default maximum history size
    pub const DEFAULT_MAX_ENTRIES: usize = 100;

    /// Creates a new history with default capacity
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(Self::DEFAULT_MAX_ENTRIES)
    }

    /// Creates a history with custom maximum size
    ///
    /// A capacity of zero keeps nothing.
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries.min(Self::DEFAULT_MAX_ENTRIES)),
            max_entries,
        }
    }

    /// Adds an entry to the history
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.max_entries == 0 {
            return;
        }
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Returns the number of entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the history is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Clears all history entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns an iterator over the entries (oldest first)
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Returns an iterator over the entries (newest first)
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Returns the entry at the given index (0 = oldest)
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Serializes the history to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries)
    }

    /// Deserializes history from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        let mut history = Self::new();
        for entry in entries {
            history.push(entry);
        }
        Ok(history)
    }

    /// Exports history as one `a op b = r` line per entry
    #[must_use]
    pub fn export_formatted(&self) -> String {
        self.entries
            .iter()
            .map(HistoryEntry::display)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
