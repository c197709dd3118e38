//! Pattern operations and the in-memory pattern store.

use std::collections::BTreeMap;

use crate::types::{ActivePattern, JournalError, JournalResult, PatternEntry};

/// Create a new pattern with no entries.
///
/// The pattern is not registered anywhere; pass it to
/// [`PatternStore::register`] to make it visible to lookups.
pub fn create_pattern(title: impl Into<String>, created_at: impl Into<String>) -> ActivePattern {
    ActivePattern {
        title: title.into(),
        created_at: created_at.into(),
        frequency: 0,
        entries: Vec::new(),
        intensity_over_time: BTreeMap::new(),
    }
}

/// Find the first pattern whose title matches exactly (case-sensitive).
pub fn find_pattern<'a>(title: &str, patterns: &'a [ActivePattern]) -> Option<&'a ActivePattern> {
    patterns.iter().find(|p| p.title == title)
}

/// Append an entry, bump the frequency and record the intensity for the
/// entry's date, replacing whatever was logged on that date before.
pub fn log_entry(
    pattern: &mut ActivePattern,
    timestamp: impl Into<String>,
    content: impl Into<String>,
    intensity: i64,
) {
    let entry = PatternEntry::new(timestamp, content, intensity);
    let date = date_key(&entry.timestamp).to_string();

    tracing::debug!(
        "Logging entry on '{}' for {date} (intensity {intensity})",
        pattern.title
    );

    pattern.entries.push(entry);
    pattern.frequency += 1;
    pattern.intensity_over_time.insert(date, intensity);
}

/// [`log_entry`] with the default intensity of 0.
pub fn log_entry_default(
    pattern: &mut ActivePattern,
    timestamp: impl Into<String>,
    content: impl Into<String>,
) {
    log_entry(pattern, timestamp, content, PatternEntry::default().intensity);
}

/// Replace a pattern's title. Other patterns' titles are not checked.
pub fn rename_pattern(pattern: &mut ActivePattern, new_title: impl Into<String>) {
    let new_title = new_title.into();
    tracing::debug!("Renaming pattern '{}' to '{new_title}'", pattern.title);
    pattern.title = new_title;
}

/// Date part of a timestamp: everything before the first space.
///
/// A timestamp without a space is used whole.
pub fn date_key(timestamp: &str) -> &str {
    timestamp
        .split_once(' ')
        .map_or(timestamp, |(date, _)| date)
}

/// In-memory, append-only registry of patterns.
#[derive(Debug, Clone, Default)]
pub struct PatternStore {
    patterns: Vec<ActivePattern>,
}

impl PatternStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a pattern and return its position. Duplicate titles are kept.
    pub fn register(&mut self, pattern: ActivePattern) -> usize {
        tracing::debug!("Registering pattern '{}'", pattern.title);
        self.patterns.push(pattern);
        self.patterns.len() - 1
    }

    /// All patterns in registration order.
    pub fn list_all_patterns(&self) -> &[ActivePattern] {
        &self.patterns
    }

    pub fn find_pattern(&self, title: &str) -> Option<&ActivePattern> {
        find_pattern(title, &self.patterns)
    }

    pub fn find_pattern_mut(&mut self, title: &str) -> Option<&mut ActivePattern> {
        self.patterns.iter_mut().find(|p| p.title == title)
    }

    /// Log an entry against the first pattern with this title.
    pub fn log_entry(
        &mut self,
        title: &str,
        timestamp: impl Into<String>,
        content: impl Into<String>,
        intensity: i64,
    ) -> JournalResult<&ActivePattern> {
        let pattern = self
            .find_pattern_mut(title)
            .ok_or_else(|| JournalError::PatternNotFound(title.to_string()))?;
        log_entry(pattern, timestamp, content, intensity);
        Ok(pattern)
    }

    /// Rename the first pattern with this title.
    pub fn rename_pattern(
        &mut self,
        title: &str,
        new_title: impl Into<String>,
    ) -> JournalResult<&ActivePattern> {
        let pattern = self
            .find_pattern_mut(title)
            .ok_or_else(|| JournalError::PatternNotFound(title.to_string()))?;
        rename_pattern(pattern, new_title);
        Ok(pattern)
    }

    /// Return the number of registered patterns.
    pub fn count(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sunday_blues() -> ActivePattern {
        create_pattern("The Sunday Evening Blues", "2024-02-20")
    }

    #[test]
    fn test_create_pattern_is_empty() {
        let p = sunday_blues();
        assert_eq!(p.title(), "The Sunday Evening Blues");
        assert_eq!(p.created_at(), "2024-02-20");
        assert_eq!(p.frequency(), 0);
        assert!(p.entries().is_empty());
        assert!(p.intensity_over_time().is_empty());
    }

    #[test]
    fn test_frequency_tracks_entries() {
        let mut p = sunday_blues();
        for n in 1..=25u64 {
            log_entry(&mut p, format!("2024-03-{:02} 08:00", n), "check-in", n as i64);
            assert_eq!(p.frequency(), n);
            assert_eq!(p.entries().len() as u64, p.frequency());
        }
    }

    #[test]
    fn test_distinct_dates_keep_their_intensity() {
        let mut p = sunday_blues();
        log_entry(&mut p, "2024-02-25 18:00", "a", 3);
        log_entry(&mut p, "2024-03-03 19:30", "b", 7);
        assert_eq!(p.intensity_on("2024-02-25"), Some(3));
        assert_eq!(p.intensity_on("2024-03-03"), Some(7));
        assert_eq!(p.intensity_over_time().len(), 2);
    }

    #[test]
    fn test_same_date_last_write_wins() {
        let mut p = sunday_blues();
        log_entry(&mut p, "2024-02-25 18:00", "Felt down...", 3);
        log_entry(&mut p, "2024-02-25 09:00", "Morning check-in", 1);

        assert_eq!(p.frequency(), 2);
        assert_eq!(
            p.entries(),
            &[
                PatternEntry::new("2024-02-25 18:00", "Felt down...", 3),
                PatternEntry::new("2024-02-25 09:00", "Morning check-in", 1),
            ]
        );
        assert_eq!(p.intensity_over_time().len(), 1);
        assert_eq!(p.intensity_on("2024-02-25"), Some(1));
    }

    #[test]
    fn test_timestamp_without_space_uses_whole_string() {
        let mut p = sunday_blues();
        log_entry(&mut p, "yesterday", "vague", 2);
        assert_eq!(p.intensity_on("yesterday"), Some(2));
        assert_eq!(p.frequency(), 1);
    }

    #[test]
    fn test_date_key() {
        assert_eq!(date_key("2024-02-25 18:00"), "2024-02-25");
        assert_eq!(date_key("2024-02-25  18:00"), "2024-02-25");
        assert_eq!(date_key(" 18:00"), "");
        assert_eq!(date_key(""), "");
    }

    #[test]
    fn test_log_entry_default_intensity() {
        let mut p = sunday_blues();
        log_entry_default(&mut p, "2024-02-25 18:00", "no rating");
        assert_eq!(p.entries()[0].intensity, 0);
        assert_eq!(p.intensity_on("2024-02-25"), Some(0));
    }

    #[test]
    fn test_rename_changes_only_title() {
        let mut p = sunday_blues();
        log_entry(&mut p, "2024-02-25 18:00", "Felt down...", 3);
        let before = p.clone();

        rename_pattern(&mut p, "Sunday Scaries");

        assert_eq!(p.title(), "Sunday Scaries");
        assert_eq!(p.created_at(), before.created_at());
        assert_eq!(p.frequency(), before.frequency());
        assert_eq!(p.entries(), before.entries());
        assert_eq!(p.intensity_over_time(), before.intensity_over_time());
    }

    #[test]
    fn test_find_pattern_empty() {
        assert!(find_pattern("anything", &[]).is_none());
    }

    #[test]
    fn test_find_pattern_no_match() {
        let patterns = vec![sunday_blues()];
        assert!(find_pattern("the sunday evening blues", &patterns).is_none());
        assert!(find_pattern("Sunday", &patterns).is_none());
    }

    #[test]
    fn test_find_pattern_returns_first_duplicate() {
        let mut first = sunday_blues();
        log_entry(&mut first, "2024-02-25 18:00", "first", 3);
        let second = sunday_blues();
        let patterns = vec![first, second];

        let found = find_pattern("The Sunday Evening Blues", &patterns).unwrap();
        assert_eq!(found.frequency(), 1);
    }

    #[test]
    fn test_create_does_not_register() {
        let store = PatternStore::new();
        let _p = sunday_blues();
        assert!(store.is_empty());
        assert!(store.find_pattern("The Sunday Evening Blues").is_none());
    }

    #[test]
    fn test_store_register_and_list_in_order() {
        let mut store = PatternStore::new();
        assert_eq!(store.register(create_pattern("A", "2024-01-01")), 0);
        assert_eq!(store.register(create_pattern("B", "2024-01-02")), 1);
        assert_eq!(store.register(create_pattern("A", "2024-01-03")), 2);

        let titles: Vec<_> = store.list_all_patterns().iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["A", "B", "A"]);
        assert_eq!(store.count(), 3);
        assert_eq!(store.find_pattern("A").unwrap().created_at(), "2024-01-01");
    }

    #[test]
    fn test_store_log_entry_targets_first_match() {
        let mut store = PatternStore::new();
        store.register(create_pattern("A", "2024-01-01"));
        store.register(create_pattern("A", "2024-01-03"));

        let p = store.log_entry("A", "2024-01-04 10:00", "x", 5).unwrap();
        assert_eq!(p.frequency(), 1);

        let all = store.list_all_patterns();
        assert_eq!(all[0].frequency(), 1);
        assert_eq!(all[1].frequency(), 0);
    }

    #[test]
    fn test_store_missing_title_is_not_found() {
        let mut store = PatternStore::new();
        let err = store.log_entry("nope", "2024-01-04 10:00", "x", 5).unwrap_err();
        assert!(matches!(err, JournalError::PatternNotFound(ref t) if t == "nope"));
        assert!(store.rename_pattern("nope", "still nope").is_err());
    }

    #[test]
    fn test_store_rename_keeps_position() {
        let mut store = PatternStore::new();
        store.register(create_pattern("A", "2024-01-01"));
        store.register(create_pattern("B", "2024-01-02"));
        store.rename_pattern("A", "B").unwrap();

        let titles: Vec<_> = store.list_all_patterns().iter().map(|p| p.title()).collect();
        assert_eq!(titles, vec!["B", "B"]);
        assert_eq!(store.find_pattern("B").unwrap().created_at(), "2024-01-01");
        assert!(store.find_pattern("A").is_none());
    }
}
