//! Calculation history
//!
//! A bounded record of successful evaluations, oldest evicted first.
//! Entries serialize to JSON so a frontend can persist or share them.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

/// A single entry in the calculation history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// The expression that was evaluated
    pub expression: String,
    /// The result of the calculation
    pub result: f64,
    /// When the calculation was performed (Unix epoch millis)
    pub timestamp: u64,
}

impl HistoryEntry {
    /// Creates an entry stamped with the current time.
    #[must_use]
    pub fn new(expression: String, result: f64) -> Self {
        Self {
            expression,
            result,
            timestamp: Self::current_timestamp(),
        }
    }

    /// Creates an entry with a specific timestamp (for testing).
    #[must_use]
    pub fn with_timestamp(expression: String, result: f64, timestamp: u64) -> Self {
        Self {
            expression,
            result,
            timestamp,
        }
    }

    fn current_timestamp() -> u64 {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }

    /// Returns a formatted display string.
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} = {}", self.expression, self.result)
    }
}

/// Bounded queue of past calculations.
#[derive(Debug, Clone)]
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

    /// Creates a history with the default capacity.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: VecDeque::new(),
            max_entries: Self::DEFAULT_MAX_ENTRIES,
        }
    }

    /// Creates a history with a custom maximum size.
    #[must_use]
    pub fn with_capacity(max_entries: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(max_entries),
            max_entries,
        }
    }

    /// Adds an entry, evicting the oldest when full.
    pub fn push(&mut self, entry: HistoryEntry) {
        if self.entries.len() >= self.max_entries {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    /// Records a calculation result.
    pub fn record(&mut self, expression: &str, result: f64) {
        self.push(HistoryEntry::new(expression.to_string(), result));
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if there are no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the maximum number of entries.
    #[must_use]
    pub fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Iterates the entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    /// Iterates the entries, newest first.
    pub fn iter_rev(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter().rev()
    }

    /// Returns the most recent entry.
    #[must_use]
    pub fn last(&self) -> Option<&HistoryEntry> {
        self.entries.back()
    }

    /// Serializes the history to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.entries.iter().collect::<Vec<_>>())
    }

    /// Deserializes a history from JSON, applying the default capacity.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let entries: Vec<HistoryEntry> = serde_json::from_str(json)?;
        let mut history = Self::new();
        for entry in entries {
            history.push(entry);
        }
        Ok(history)
    }
}
