//! Dashboard binary entry point.
//!
//! Parses the command line, prepares the initial shell and store state, then
//! hands over to the TUI. All task state lives in memory for the lifetime of
//! the process.

use clap::{CommandFactory, Parser};
use clap_complete::generate;

use startupd::cli::Cli;
use startupd::fields::{Assignee, Status, Urgency};
use startupd::shell::{self, Shell};
use startupd::store::TaskStore;
use startupd::task::Task;
use startupd::tui::run::run_tui;

fn main() {
    let cli = Cli::parse();

    if let Some(completion_shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(completion_shell, &mut cmd, "startupd", &mut std::io::stdout());
        return;
    }

    let mut nav = Shell::new();
    if let Some(key) = cli.section.as_deref() {
        match shell::find_item(key) {
            Some(item) => nav.select(item.key),
            None => {
                eprintln!("Unknown section '{}'. Known sections:", key);
                for item in shell::SIDEBAR_ITEMS {
                    eprintln!("  {}", item.key);
                }
                std::process::exit(1);
            }
        }
    }
    if cli.collapsed {
        nav.toggle_collapsed();
    }

    let mut store = TaskStore::new();
    if cli.demo {
        seed_demo(&mut store);
    }

    if let Err(e) = run_tui(nav, store) {
        eprintln!("Terminal error: {}", e);
        std::process::exit(1);
    }
}

/// Fill the store with a few sample tasks for demo mode.
fn seed_demo(store: &mut TaskStore) {
    let today = chrono::Local::now().date_naive();
    let samples = [
        (
            "Write pitch deck",
            "Ten slides, problem first.",
            Assignee::Sammy,
            Some(7),
            Urgency::High,
            Status::InProgress,
        ),
        (
            "Book investor meetings",
            "",
            Assignee::Soleil,
            Some(3),
            Urgency::Medium,
            Status::Todo,
        ),
        (
            "Draft lean business plan",
            "One page.",
            Assignee::Sammy,
            None,
            Urgency::Low,
            Status::Todo,
        ),
        (
            "Register trademark",
            "",
            Assignee::Soleil,
            None,
            Urgency::Low,
            Status::Done,
        ),
    ];

    for (title, description, assigned_to, due_in_days, urgency, status) in samples {
        let id = store.alloc_id();
        let due_date = due_in_days
            .map(|days| (today + chrono::Duration::days(days)).to_string())
            .unwrap_or_default();
        store.add(Task {
            id,
            title: title.to_string(),
            description: description.to_string(),
            assigned_to,
            due_date,
            urgency,
            status,
        });
    }
}
