//! Seeded demo: one pattern, one entry.

use pattern_journal::{create_pattern, log_entry, PatternStore};

pub const DEMO_TITLE: &str = "The Sunday Evening Blues";
pub const DEMO_CREATED_AT: &str = "2024-02-20";
pub const DEMO_TIMESTAMP: &str = "2024-02-25 18:00";
pub const DEMO_CONTENT: &str = "Felt down and anxious thinking about the week ahead.";
pub const DEMO_INTENSITY: i64 = 3;

/// Build a store holding the demo pattern with its first entry logged.
pub fn seed_demo_store() -> PatternStore {
    let mut store = PatternStore::new();

    let mut pattern = create_pattern(DEMO_TITLE, DEMO_CREATED_AT);
    log_entry(&mut pattern, DEMO_TIMESTAMP, DEMO_CONTENT, DEMO_INTENSITY);
    store.register(pattern);

    tracing::info!("Demo store seeded with {} pattern(s)", store.count());
    store
}
