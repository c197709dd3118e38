//! PatternJournal — core library for tracked patterns, journal entries, and intensity over time.

pub mod render;
pub mod store;
pub mod types;

pub use render::{render_pattern, render_patterns, RenderFormat, FORMAT_VERSION};
pub use store::{
    create_pattern, date_key, find_pattern, log_entry, log_entry_default, rename_pattern,
    PatternStore,
};
pub use types::*;
