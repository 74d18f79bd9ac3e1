//! Task editor: draft ownership and the commit validation gate.
//!
//! The editor owns the [`Draft`] for the create-task dialog. Fields are
//! replaced one at a time as the user types; `commit` either promotes the
//! draft into the store or reports which required fields are missing.
//! Closing the dialog without committing discards all edits.

use thiserror::Error;

use crate::fields::{Assignee, Status, Urgency};
use crate::store::TaskStore;
use crate::task::{Draft, Task};

/// Why a draft could not be committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommitError {
    #[error("a task needs a title")]
    MissingTitle,
    #[error("a task needs an assignee")]
    MissingAssignee,
    #[error("a task needs a title and an assignee")]
    MissingTitleAndAssignee,
}

/// The create-task dialog state: a draft plus open/closed visibility.
#[derive(Debug, Default)]
pub struct Editor {
    draft: Draft,
    open: bool,
}

impl Editor {
    /// Create a closed editor with an empty draft.
    pub fn new() -> Self {
        Editor::default()
    }

    /// The current draft, for rendering.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Whether the dialog is visible.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the dialog with a fresh, empty draft.
    pub fn open(&mut self) {
        self.draft = Draft::default();
        self.open = true;
    }

    /// Close the dialog, discarding any uncommitted edits.
    pub fn close(&mut self) {
        self.draft = Draft::default();
        self.open = false;
    }

    /// Replace the draft title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    /// Replace the draft description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.draft.description = description.into();
    }

    /// Replace the draft assignee. `None` clears it.
    pub fn set_assignee(&mut self, assignee: Option<Assignee>) {
        self.draft.assigned_to = assignee;
    }

    /// Replace the draft due date, stored verbatim.
    pub fn set_due_date(&mut self, due_date: impl Into<String>) {
        self.draft.due_date = due_date.into();
    }

    /// Replace the draft urgency.
    pub fn set_urgency(&mut self, urgency: Urgency) {
        self.draft.urgency = urgency;
    }

    /// Promote the draft into the store.
    ///
    /// Requires a non-empty title and an assignee. On success the new task
    /// enters the store with a fresh ID and `Status::Todo`, the draft resets
    /// to empty, and the new ID is returned. On failure nothing changes.
    pub fn commit(&mut self, store: &mut TaskStore) -> Result<u64, CommitError> {
        let missing_title = self.draft.title.trim().is_empty();
        let missing_assignee = self.draft.assigned_to.is_none();
        match (missing_title, missing_assignee) {
            (true, true) => return Err(CommitError::MissingTitleAndAssignee),
            (true, false) => return Err(CommitError::MissingTitle),
            (false, true) => return Err(CommitError::MissingAssignee),
            (false, false) => {}
        }

        let draft = std::mem::take(&mut self.draft);
        let id = store.alloc_id();
        store.add(Task {
            id,
            title: draft.title,
            description: draft.description,
            // Checked above.
            assigned_to: draft.assigned_to.unwrap_or(Assignee::Sammy),
            due_date: draft.due_date,
            urgency: draft.urgency,
            status: Status::Todo,
        });
        Ok(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_rejects_missing_required_fields() {
        let mut store = TaskStore::new();
        let mut editor = Editor::new();
        editor.open();

        assert_eq!(
            editor.commit(&mut store),
            Err(CommitError::MissingTitleAndAssignee)
        );

        editor.set_title("Write pitch deck");
        assert_eq!(editor.commit(&mut store), Err(CommitError::MissingAssignee));

        editor.set_title("");
        editor.set_assignee(Some(Assignee::Sammy));
        assert_eq!(editor.commit(&mut store), Err(CommitError::MissingTitle));

        // No failed attempt changed the store, and edits survive failures.
        assert!(store.is_empty());
        assert_eq!(editor.draft().assigned_to, Some(Assignee::Sammy));
    }

    #[test]
    fn test_whitespace_title_does_not_pass_validation() {
        let mut store = TaskStore::new();
        let mut editor = Editor::new();
        editor.open();
        editor.set_title("   ");
        editor.set_assignee(Some(Assignee::Soleil));
        assert_eq!(editor.commit(&mut store), Err(CommitError::MissingTitle));
        assert!(store.is_empty());
    }

    #[test]
    fn test_commit_preserves_fields_and_resets_draft() {
        let mut store = TaskStore::new();
        let mut editor = Editor::new();
        editor.open();
        editor.set_title("Write pitch deck");
        editor.set_description("Ten slides max");
        editor.set_assignee(Some(Assignee::Sammy));
        editor.set_due_date("2024-05-01");
        editor.set_urgency(Urgency::High);

        let id = editor.commit(&mut store).unwrap();
        assert_eq!(store.len(), 1);

        let task = store.get(id).unwrap();
        assert_eq!(task.title, "Write pitch deck");
        assert_eq!(task.description, "Ten slides max");
        assert_eq!(task.assigned_to, Assignee::Sammy);
        assert_eq!(task.due_date, "2024-05-01");
        assert_eq!(task.urgency, Urgency::High);
        assert_eq!(task.status, Status::Todo);

        assert!(editor.draft().is_empty());
    }

    #[test]
    fn test_consecutive_commits_get_distinct_ids() {
        let mut store = TaskStore::new();
        let mut editor = Editor::new();

        let mut ids = Vec::new();
        for _ in 0..2 {
            editor.open();
            editor.set_title("Standup notes");
            editor.set_assignee(Some(Assignee::Soleil));
            ids.push(editor.commit(&mut store).unwrap());
        }
        assert_eq!(store.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn test_close_without_commit_discards_edits() {
        let mut store = TaskStore::new();
        let mut editor = Editor::new();
        editor.open();
        editor.set_title("Abandoned");
        editor.set_assignee(Some(Assignee::Sammy));
        editor.close();

        assert!(store.is_empty());
        assert!(!editor.is_open());

        editor.open();
        assert!(editor.draft().is_empty());
    }
}
