//! # startupd - Startup Management Dashboard
//!
//! A single-screen dashboard for managing a startup from the terminal:
//! a sidebar navigation shell, a kanban-style task board and a modal form
//! for rapid task capture.
//!
//! State is an in-memory list of task records scoped to the running process.
//! There is no backend and no persistence; the board resets on relaunch.
//!
//! ## Layout
//!
//! The core is a small library independent of any rendering technology:
//!
//! - [`store::TaskStore`] owns the committed tasks (add / remove / view /
//!   set_status).
//! - [`editor::Editor`] owns the uncommitted draft and the commit validation
//!   gate.
//! - [`board::Board`] partitions a store snapshot into the three status
//!   columns.
//! - [`shell::Shell`] holds the sidebar selection and collapsed state.
//!
//! The [`tui`] module tree is a thin ratatui collaborator that consumes
//! `view()` and calls `add`/`remove`/`commit`.
//!
//! ## Quick start
//!
//! ```bash
//! # Launch the dashboard
//! startupd
//!
//! # Open straight on the task list, seeded with sample tasks
//! startupd --section tasks --demo
//! ```

pub mod board;
pub mod cli;
pub mod dates;
pub mod editor;
pub mod fields;
pub mod shell;
pub mod store;
pub mod task;
pub mod tui {
    pub mod app;
    pub mod colors;
    pub mod enums;
    pub mod input;
    pub mod run;
    pub mod task_form;
    pub mod utils;
}
