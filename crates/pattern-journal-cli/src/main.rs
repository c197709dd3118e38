//! PatternJournal — entry point.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use pattern_journal::render_patterns;
use pattern_journal_cli::config::resolve_format;
use pattern_journal_cli::demo::seed_demo_store;

#[derive(Parser)]
#[command(
    name = "pattern-journal",
    about = "PatternJournal — track recurring patterns, log entries, watch intensity over time",
    version
)]
struct Cli {
    /// Output format (text, json). Also reads PATTERN_JOURNAL_FORMAT.
    #[arg(short, long)]
    format: Option<String>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed the sample pattern, log one entry and print all patterns (default).
    Demo,

    /// Launch interactive REPL mode.
    Repl,

    /// Generate shell completion scripts.
    ///
    /// Examples:
    ///   pattern-journal completions bash > ~/.local/share/bash-completion/completions/pattern-journal
    ///   pattern-journal completions zsh > ~/.zfunc/_pattern-journal
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let format = resolve_format(cli.format.as_deref())?;
    tracing::debug!("Output format: {format}");

    match cli.command.unwrap_or(Commands::Demo) {
        Commands::Demo => {
            let store = seed_demo_store();
            let rendered = render_patterns(store.list_all_patterns(), format)?;
            println!("{}", rendered.trim_end());
        }

        Commands::Repl => {
            pattern_journal_cli::repl::run(format)?;
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "pattern-journal", &mut std::io::stdout());
        }
    }

    Ok(())
}
