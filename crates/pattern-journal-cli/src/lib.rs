//! PatternJournal console front end — demo run and interactive REPL.

pub mod commands;
pub mod config;
pub mod demo;
pub mod repl;

pub use commands::{execute, parse_command, Outcome, ReplCommand, ReplState};
pub use config::resolve_format;
pub use demo::seed_demo_store;
