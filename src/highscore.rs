#![cfg(feature = "std")]
//! In-memory high-score table, highest first.

use crate::config::{HIGH_SCORE_CAPACITY, NAME_MIN_WIDTH, NAME_WIDTH};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Score {
    pub name: String,
    pub value: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct HighScores {
    capacity: usize,
    entries: Vec<Score>,
}

impl Default for HighScores {
    fn default() -> Self {
        Self::with_capacity(HIGH_SCORE_CAPACITY)
    }
}

impl HighScores {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            capacity,
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Entries sorted by descending value.
    pub fn entries(&self) -> &[Score] {
        &self.entries
    }

    /// Whether `value` would make it onto the table.
    pub fn qualifies(&self, value: i32) -> bool {
        if self.capacity == 0 {
            return false;
        }
        self.entries.len() < self.capacity
            || self.entries.last().is_some_and(|lowest| value > lowest.value)
    }

    /// Add a score if it qualifies, evicting the lowest entry when full.
    /// Names are cut to `NAME_WIDTH` characters and space-padded up to
    /// `NAME_MIN_WIDTH`. Among equal values the earlier entry ranks first.
    pub fn record(&mut self, name: &str, value: i32) -> bool {
        if !self.qualifies(value) {
            return false;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop();
        }
        let name = format!(
            "{:<min$.max$}",
            name,
            min = NAME_MIN_WIDTH,
            max = NAME_WIDTH
        );
        let pos = self.entries.partition_point(|s| s.value >= value);
        self.entries.insert(pos, Score { name, value });
        true
    }
}
