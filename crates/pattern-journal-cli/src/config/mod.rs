//! Configuration loading and resolution.

use std::path::PathBuf;

use pattern_journal::{JournalResult, RenderFormat};

/// Environment variable holding the default output format.
pub const FORMAT_ENV: &str = "PATTERN_JOURNAL_FORMAT";

/// Resolve the output format: explicit flag, then environment, then text.
pub fn resolve_format(explicit: Option<&str>) -> JournalResult<RenderFormat> {
    resolve_format_from(explicit, std::env::var(FORMAT_ENV).ok().as_deref())
}

/// Same as [`resolve_format`] with the environment value passed in.
pub fn resolve_format_from(
    explicit: Option<&str>,
    env_value: Option<&str>,
) -> JournalResult<RenderFormat> {
    if let Some(format) = explicit {
        return format.parse();
    }

    match env_value {
        Some(format) if !format.trim().is_empty() => format.parse(),
        _ => Ok(RenderFormat::default()),
    }
}

/// Location of the REPL history file.
pub fn resolve_history_path() -> PathBuf {
    let home = std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .unwrap_or_else(|_| ".".to_string());

    PathBuf::from(home).join(".pattern_journal_history")
}
