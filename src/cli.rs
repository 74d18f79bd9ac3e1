//! Command-line interface for the dashboard binary.

use clap::Parser;
use clap_complete::Shell as CompletionShell;

/// Startup management dashboard TUI.
/// All state is in-memory and lost on exit.
#[derive(Parser)]
#[command(name = "startupd", version, about = "Startup management dashboard")]
pub struct Cli {
    /// Section to open on launch (e.g. "dashboard", "tasks").
    #[arg(long, value_name = "KEY")]
    pub section: Option<String>,

    /// Start with the sidebar collapsed.
    #[arg(long)]
    pub collapsed: bool,

    /// Seed the board with sample tasks.
    #[arg(long)]
    pub demo: bool,

    /// Print shell completions and exit.
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<CompletionShell>,
}
