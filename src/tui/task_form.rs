//! Create-task dialog form state.
//!
//! Holds the text fields and selectors of the new-task dialog and the focus
//! order between them. The form writes through to the [`Editor`] draft after
//! every change; validation itself lives in the editor's commit gate.

use crate::editor::Editor;
use crate::fields::{Assignee, Urgency};
use crate::tui::input::InputField;

/// Focus order of the dialog fields, top to bottom.
pub const TITLE_FIELD: usize = 0;
pub const DESCRIPTION_FIELD: usize = 1;
pub const ASSIGNEE_FIELD: usize = 2;
pub const DUE_FIELD: usize = 3;
pub const URGENCY_FIELD: usize = 4;

const FIELD_COUNT: usize = 5;

/// Form state for the create-task dialog.
pub struct TaskForm {
    pub title: InputField,
    pub description: InputField,
    pub due: InputField,
    pub assignee: usize,
    pub urgency: usize,
    pub current_field: usize,
    pub assignees: Vec<Option<Assignee>>,
    pub urgencies: Vec<Urgency>,
}

impl Default for TaskForm {
    fn default() -> Self {
        TaskForm::new()
    }
}

impl TaskForm {
    /// Create an empty form focused on the title field.
    pub fn new() -> Self {
        let mut assignees = vec![None];
        assignees.extend(Assignee::ALL.iter().copied().map(Some));

        let mut form = TaskForm {
            title: InputField::new(),
            description: InputField::new(),
            due: InputField::new(),
            assignee: 0, // Unassigned
            urgency: 0,  // Low
            current_field: TITLE_FIELD,
            assignees,
            urgencies: Urgency::ALL.to_vec(),
        };
        form.update_active_field();
        form
    }

    /// Reset every field to its initial value.
    pub fn reset(&mut self) {
        *self = TaskForm::new();
    }

    /// Number of focusable fields.
    pub fn field_count(&self) -> usize {
        FIELD_COUNT
    }

    /// Move focus to the next field, wrapping at the end.
    pub fn next_field(&mut self) {
        self.current_field = (self.current_field + 1) % self.field_count();
        self.update_active_field();
    }

    /// Move focus to the previous field, wrapping at the start.
    pub fn prev_field(&mut self) {
        self.current_field = if self.current_field == 0 {
            self.field_count() - 1
        } else {
            self.current_field - 1
        };
        self.update_active_field();
    }

    /// Update which text field is active for cursor display.
    pub fn update_active_field(&mut self) {
        self.title.active = self.current_field == TITLE_FIELD;
        self.description.active = self.current_field == DESCRIPTION_FIELD;
        self.due.active = self.current_field == DUE_FIELD;
    }

    /// Type a character into the focused text field.
    pub fn handle_char(&mut self, c: char) {
        match self.current_field {
            TITLE_FIELD => self.title.handle_char(c),
            DESCRIPTION_FIELD => self.description.handle_char(c),
            DUE_FIELD => self.due.handle_char(c),
            _ => {}
        }
    }

    /// Backspace in the focused text field.
    pub fn handle_backspace(&mut self) {
        match self.current_field {
            TITLE_FIELD => self.title.handle_backspace(),
            DESCRIPTION_FIELD => self.description.handle_backspace(),
            DUE_FIELD => self.due.handle_backspace(),
            _ => {}
        }
    }

    /// Delete under the cursor in the focused text field.
    pub fn handle_delete(&mut self) {
        match self.current_field {
            TITLE_FIELD => self.title.handle_delete(),
            DESCRIPTION_FIELD => self.description.handle_delete(),
            DUE_FIELD => self.due.handle_delete(),
            _ => {}
        }
    }

    /// Left/right arrows: cursor movement in text fields, cycling in
    /// selectors (wrapping both ways).
    pub fn handle_left_right(&mut self, right: bool) {
        match self.current_field {
            TITLE_FIELD => {
                if right {
                    self.title.move_cursor_right()
                } else {
                    self.title.move_cursor_left()
                }
            }
            DESCRIPTION_FIELD => {
                if right {
                    self.description.move_cursor_right()
                } else {
                    self.description.move_cursor_left()
                }
            }
            DUE_FIELD => {
                if right {
                    self.due.move_cursor_right()
                } else {
                    self.due.move_cursor_left()
                }
            }
            ASSIGNEE_FIELD => {
                self.assignee = cycle(self.assignee, self.assignees.len(), right);
            }
            URGENCY_FIELD => {
                self.urgency = cycle(self.urgency, self.urgencies.len(), right);
            }
            _ => {}
        }
    }

    /// Currently selected assignee, `None` when still unassigned.
    pub fn selected_assignee(&self) -> Option<Assignee> {
        self.assignees.get(self.assignee).copied().flatten()
    }

    /// Currently selected urgency.
    pub fn selected_urgency(&self) -> Urgency {
        self.urgencies
            .get(self.urgency)
            .copied()
            .unwrap_or_default()
    }

    /// Write every form field through to the editor draft.
    pub fn apply(&self, editor: &mut Editor) {
        editor.set_title(self.title.value.clone());
        editor.set_description(self.description.value.clone());
        editor.set_assignee(self.selected_assignee());
        editor.set_due_date(self.due.value.clone());
        editor.set_urgency(self.selected_urgency());
    }
}

fn cycle(current: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (current + 1) % len
    } else if current == 0 {
        len - 1
    } else {
        current - 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_navigation_wraps_both_ways() {
        let mut form = TaskForm::new();
        assert_eq!(form.current_field, TITLE_FIELD);
        form.prev_field();
        assert_eq!(form.current_field, URGENCY_FIELD);
        form.next_field();
        assert_eq!(form.current_field, TITLE_FIELD);
        for _ in 0..FIELD_COUNT {
            form.next_field();
        }
        assert_eq!(form.current_field, TITLE_FIELD);
    }

    #[test]
    fn test_selector_cycling_wraps() {
        let mut form = TaskForm::new();
        form.current_field = ASSIGNEE_FIELD;
        assert_eq!(form.selected_assignee(), None);
        form.handle_left_right(true);
        assert_eq!(form.selected_assignee(), Some(Assignee::Sammy));
        form.handle_left_right(false);
        form.handle_left_right(false);
        assert_eq!(form.selected_assignee(), Some(Assignee::Soleil));

        form.current_field = URGENCY_FIELD;
        assert_eq!(form.selected_urgency(), Urgency::Low);
        form.handle_left_right(false);
        assert_eq!(form.selected_urgency(), Urgency::High);
    }

    #[test]
    fn test_typing_targets_the_focused_text_field() {
        let mut form = TaskForm::new();
        form.handle_char('a');
        form.next_field();
        form.handle_char('b');
        form.current_field = DUE_FIELD;
        form.handle_char('c');
        assert_eq!(form.title.value, "a");
        assert_eq!(form.description.value, "b");
        assert_eq!(form.due.value, "c");

        // Selectors swallow typed characters.
        form.current_field = URGENCY_FIELD;
        form.handle_char('x');
        assert_eq!(form.due.value, "c");
    }

    #[test]
    fn test_apply_writes_every_field_to_the_draft() {
        let mut form = TaskForm::new();
        for c in "Write pitch deck".chars() {
            form.title.handle_char(c);
        }
        for c in "2024-05-01".chars() {
            form.due.handle_char(c);
        }
        form.assignee = 1; // Sammy
        form.urgency = 2; // High

        let mut editor = Editor::new();
        editor.open();
        form.apply(&mut editor);

        let draft = editor.draft();
        assert_eq!(draft.title, "Write pitch deck");
        assert_eq!(draft.assigned_to, Some(Assignee::Sammy));
        assert_eq!(draft.due_date, "2024-05-01");
        assert_eq!(draft.urgency, Urgency::High);
    }

    #[test]
    fn test_reset_restores_initial_state() {
        let mut form = TaskForm::new();
        form.handle_char('x');
        form.assignee = 2;
        form.urgency = 1;
        form.next_field();
        form.reset();
        assert!(form.title.value.is_empty());
        assert_eq!(form.assignee, 0);
        assert_eq!(form.urgency, 0);
        assert_eq!(form.current_field, TITLE_FIELD);
    }
}
