//! Text and JSON renderings of patterns.
//!
//! `Debug` output is not stable. The JSON rendering is versioned through
//! `format_version` and is the one to rely on.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::types::{ActivePattern, JournalError, JournalResult, PatternEntry};

/// Current JSON rendering version.
pub const FORMAT_VERSION: u16 = 1;

/// Output format for rendered patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderFormat {
    #[default]
    Text,
    Json,
}

impl RenderFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Json => "json",
        }
    }
}

impl FromStr for RenderFormat {
    type Err = JournalError;

    fn from_str(s: &str) -> JournalResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(JournalError::InvalidInput(format!(
                "Unknown format '{other}'. Use 'text' or 'json'."
            ))),
        }
    }
}

impl fmt::Display for RenderFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for PatternEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] ({}) {}",
            self.timestamp, self.intensity, self.content
        )
    }
}

impl fmt::Display for ActivePattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "  Created:   {}", self.created_at)?;
        writeln!(f, "  Frequency: {}", self.frequency)?;
        if self.entries.is_empty() {
            writeln!(f, "  Entries:   (none)")?;
        } else {
            writeln!(f, "  Entries:")?;
            for entry in &self.entries {
                writeln!(f, "    {entry}")?;
            }
        }
        if !self.intensity_over_time.is_empty() {
            writeln!(f, "  Intensity by date:")?;
            for (date, intensity) in &self.intensity_over_time {
                writeln!(f, "    {date}: {intensity}")?;
            }
        }
        Ok(())
    }
}

#[derive(Serialize)]
struct RenderedPatterns<'a> {
    format_version: u16,
    patterns: &'a [ActivePattern],
}

/// Render a list of patterns in the given format.
pub fn render_patterns(patterns: &[ActivePattern], format: RenderFormat) -> JournalResult<String> {
    match format {
        RenderFormat::Text => {
            if patterns.is_empty() {
                return Ok("No patterns tracked yet.\n".to_string());
            }
            let blocks: Vec<String> = patterns.iter().map(|p| p.to_string()).collect();
            Ok(blocks.join("\n"))
        }
        RenderFormat::Json => serde_json::to_string_pretty(&RenderedPatterns {
            format_version: FORMAT_VERSION,
            patterns,
        })
        .map_err(|e| JournalError::Render(format!("Serialization failed: {e}"))),
    }
}

/// Render a single pattern in the given format.
pub fn render_pattern(pattern: &ActivePattern, format: RenderFormat) -> JournalResult<String> {
    render_patterns(std::slice::from_ref(pattern), format)
}
