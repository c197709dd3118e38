//! Core data types for tracked patterns and their journal entries.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single journal entry logged against a pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    /// Free-form, usually `YYYY-MM-DD HH:MM`. Never validated.
    pub timestamp: String,
    pub content: String,
    pub intensity: i64,
}

impl PatternEntry {
    pub fn new(timestamp: impl Into<String>, content: impl Into<String>, intensity: i64) -> Self {
        Self {
            timestamp: timestamp.into(),
            content: content.into(),
            intensity,
        }
    }
}

/// A recurring pattern the user is actively tracking.
///
/// `frequency`, `entries` and `intensity_over_time` only change together
/// through [`crate::log_entry`], so they are read through accessors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivePattern {
    pub(crate) title: String,
    pub(crate) created_at: String,
    pub(crate) frequency: u64,
    pub(crate) entries: Vec<PatternEntry>,
    /// Date key -> last intensity logged on that date.
    pub(crate) intensity_over_time: BTreeMap<String, i64>,
}

impl ActivePattern {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Number of entries ever logged against this pattern.
    pub fn frequency(&self) -> u64 {
        self.frequency
    }

    /// Entries in the order they were logged.
    pub fn entries(&self) -> &[PatternEntry] {
        &self.entries
    }

    /// Last-write-wins projection of intensity per date.
    pub fn intensity_over_time(&self) -> &BTreeMap<String, i64> {
        &self.intensity_over_time
    }

    /// Intensity recorded for a date key, if any entry was logged on it.
    pub fn intensity_on(&self, date: &str) -> Option<i64> {
        self.intensity_over_time.get(date).copied()
    }
}

/// Errors that can occur in the journal library.
#[derive(thiserror::Error, Debug)]
pub enum JournalError {
    #[error("Pattern not found: {0}")]
    PatternNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Convenience result type.
pub type JournalResult<T> = Result<T, JournalError>;
