//! Enumerations for TUI state management.

/// Application state for the terminal user interface.
#[derive(Clone, Copy, PartialEq)]
pub enum AppState {
    /// Navigating the sidebar and section content.
    Browse,
    /// The create-task dialog is open.
    NewTask,
    /// Waiting for delete confirmation on a task.
    ConfirmDelete,
    /// The help overlay is open.
    Help,
}

/// Which pane receives navigation keys while browsing.
#[derive(Clone, Copy, PartialEq)]
pub enum Focus {
    Sidebar,
    Content,
}
