//! Task record and the transient draft used while creating one.
//!
//! A `Task` is a committed work item owned by the [`TaskStore`](crate::store::TaskStore).
//! A `Draft` is the not-yet-committed form state owned by the
//! [`Editor`](crate::editor::Editor): it has no `id` and no `status`, and its
//! assignee may still be unset.

use serde::{Deserialize, Serialize};

use crate::fields::{Assignee, Status, Urgency};

/// A committed work item on the board.
///
/// The due date is kept exactly as the user typed it; it is only parsed
/// opportunistically for display (see [`crate::dates`]). An empty string
/// means no due date.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub assigned_to: Assignee,
    #[serde(default)]
    pub due_date: String,
    #[serde(default)]
    pub urgency: Urgency,
    pub status: Status,
}

/// An uncommitted task being filled in by the editor dialog.
///
/// `Default` is the empty form: blank strings, no assignee, urgency low.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Draft {
    pub title: String,
    pub description: String,
    pub assigned_to: Option<Assignee>,
    pub due_date: String,
    pub urgency: Urgency,
}

impl Draft {
    /// Whether every field is back at its initial value.
    pub fn is_empty(&self) -> bool {
        *self == Draft::default()
    }
}
