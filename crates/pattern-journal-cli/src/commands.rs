//! REPL command parsing and execution.
//!
//! Arguments are separated by `|` so titles and content can contain spaces:
//!
//! ```text
//! /log The Sunday Evening Blues | Felt down | 3 | 2024-02-25 18:00
//! ```

use chrono::NaiveDateTime;

use pattern_journal::{
    create_pattern, render_pattern, render_patterns, JournalError, PatternStore, RenderFormat,
};

/// Available REPL commands.
pub const COMMANDS: &[(&str, &str)] = &[
    ("/create", "Create a pattern: <title> [| created_at]"),
    (
        "/log",
        "Log an entry: <title> | <content> [| intensity [| timestamp]]",
    ),
    ("/rename", "Rename a pattern: <title> | <new title>"),
    ("/find", "Show the first pattern with a title"),
    ("/list", "Show all patterns"),
    ("/format", "Set output format: text | json"),
    ("/clear", "Clear the screen"),
    ("/help", "Show available commands"),
    ("/exit", "Quit the REPL"),
];

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";

/// A parsed REPL command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Create {
        title: String,
        created_at: String,
    },
    Log {
        title: String,
        content: String,
        intensity: i64,
        timestamp: String,
    },
    Rename {
        title: String,
        new_title: String,
    },
    Find {
        title: String,
    },
    List,
    Format(RenderFormat),
    Help,
    Clear,
    Exit,
}

/// What the REPL loop should do after a command ran.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Print(String),
    Clear,
    Exit,
}

#[derive(thiserror::Error, Debug)]
pub enum CommandError {
    #[error("Unknown command '/{0}'. Type /help for commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Intensity must be a whole number, got '{0}'")]
    InvalidIntensity(String),

    #[error(transparent)]
    Journal(#[from] JournalError),
}

/// Session state for the REPL.
#[derive(Debug, Default)]
pub struct ReplState {
    pub store: PatternStore,
    pub format: RenderFormat,
}

impl ReplState {
    pub fn new(format: RenderFormat) -> Self {
        Self {
            store: PatternStore::new(),
            format,
        }
    }
}

/// Parse one input line. `now` fills in omitted dates and timestamps.
pub fn parse_command(line: &str, now: NaiveDateTime) -> Result<ReplCommand, CommandError> {
    let input = line.trim();
    let input = input.strip_prefix('/').unwrap_or(input);
    if input.is_empty() {
        return Ok(ReplCommand::Help);
    }

    let mut parts = input.splitn(2, ' ');
    let cmd = parts.next().unwrap_or("");
    let args = split_args(parts.next().unwrap_or(""));

    match cmd {
        "create" => {
            let title = required(&args, 0, "/create <title> [| created_at]")?;
            let created_at = optional(&args, 1)
                .map(str::to_string)
                .unwrap_or_else(|| now.format(DATE_FORMAT).to_string());
            Ok(ReplCommand::Create { title, created_at })
        }
        "log" => {
            const USAGE: &str = "/log <title> | <content> [| intensity [| timestamp]]";
            let title = required(&args, 0, USAGE)?;
            let content = required(&args, 1, USAGE)?;
            let intensity = match optional(&args, 2) {
                Some(raw) => raw
                    .parse::<i64>()
                    .map_err(|_| CommandError::InvalidIntensity(raw.to_string()))?,
                None => 0,
            };
            let timestamp = optional(&args, 3)
                .map(str::to_string)
                .unwrap_or_else(|| now.format(TIMESTAMP_FORMAT).to_string());
            Ok(ReplCommand::Log {
                title,
                content,
                intensity,
                timestamp,
            })
        }
        "rename" => {
            const USAGE: &str = "/rename <title> | <new title>";
            let title = required(&args, 0, USAGE)?;
            let new_title = required(&args, 1, USAGE)?;
            Ok(ReplCommand::Rename { title, new_title })
        }
        "find" => Ok(ReplCommand::Find {
            title: required(&args, 0, "/find <title>")?,
        }),
        "list" | "ls" => Ok(ReplCommand::List),
        "format" => {
            let raw = required(&args, 0, "/format <text|json>")?;
            Ok(ReplCommand::Format(raw.parse()?))
        }
        "help" | "h" | "?" => Ok(ReplCommand::Help),
        "clear" | "cls" => Ok(ReplCommand::Clear),
        "exit" | "quit" => Ok(ReplCommand::Exit),
        other => Err(CommandError::Unknown(other.to_string())),
    }
}

/// Run a parsed command against the session state.
pub fn execute(state: &mut ReplState, command: ReplCommand) -> Result<Outcome, CommandError> {
    let output = match command {
        ReplCommand::Create { title, created_at } => {
            let index = state.store.register(create_pattern(title, created_at));
            let pattern = &state.store.list_all_patterns()[index];
            format!("Created '{}' ({})", pattern.title(), pattern.created_at())
        }
        ReplCommand::Log {
            title,
            content,
            intensity,
            timestamp,
        } => {
            let pattern = state.store.log_entry(&title, timestamp, content, intensity)?;
            format!(
                "Logged entry #{} on '{}'",
                pattern.frequency(),
                pattern.title()
            )
        }
        ReplCommand::Rename { title, new_title } => {
            state.store.rename_pattern(&title, new_title.as_str())?;
            format!("Renamed '{title}' to '{new_title}'")
        }
        ReplCommand::Find { title } => match state.store.find_pattern(&title) {
            Some(pattern) => render_pattern(pattern, state.format)?,
            None => format!("No pattern titled '{title}'"),
        },
        ReplCommand::List => render_patterns(state.store.list_all_patterns(), state.format)?,
        ReplCommand::Format(format) => {
            state.format = format;
            format!("Output format: {format}")
        }
        ReplCommand::Help => help_text(),
        ReplCommand::Clear => return Ok(Outcome::Clear),
        ReplCommand::Exit => return Ok(Outcome::Exit),
    };
    Ok(Outcome::Print(output))
}

/// Help listing for all commands.
pub fn help_text() -> String {
    let mut out = String::from("Commands:\n\n");
    for (cmd, desc) in COMMANDS {
        out.push_str(&format!("  {cmd:<10} {desc}\n"));
    }
    out.push_str("\nSeparate arguments with '|'. Tab completes commands.\n");
    out
}

fn split_args(raw: &str) -> Vec<&str> {
    if raw.trim().is_empty() {
        return Vec::new();
    }
    raw.split('|').map(str::trim).collect()
}

fn optional<'a>(args: &[&'a str], index: usize) -> Option<&'a str> {
    args.get(index).copied().filter(|s| !s.is_empty())
}

fn required(args: &[&str], index: usize, usage: &'static str) -> Result<String, CommandError> {
    optional(args, index)
        .map(str::to_string)
        .ok_or(CommandError::Usage(usage))
}
