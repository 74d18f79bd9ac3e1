//! Kanban board derivation.
//!
//! Partitions a task store snapshot into the three status columns. This is a
//! pure function of the snapshot and is recomputed on every render; at the
//! expected scale (a handful to low hundreds of tasks) caching buys nothing.

use crate::fields::Status;
use crate::task::Task;

/// A snapshot of the board: one column per status, insertion order preserved.
#[derive(Debug)]
pub struct Board<'a> {
    pub todo: Vec<&'a Task>,
    pub in_progress: Vec<&'a Task>,
    pub done: Vec<&'a Task>,
}

impl<'a> Board<'a> {
    /// Partition the given tasks by status, preserving their relative order.
    pub fn from_tasks(tasks: &'a [Task]) -> Self {
        let mut board = Board {
            todo: Vec::new(),
            in_progress: Vec::new(),
            done: Vec::new(),
        };
        for task in tasks {
            match task.status {
                Status::Todo => board.todo.push(task),
                Status::InProgress => board.in_progress.push(task),
                Status::Done => board.done.push(task),
            }
        }
        board
    }

    /// The column for a given status.
    pub fn column(&self, status: Status) -> &[&'a Task] {
        match status {
            Status::Todo => &self.todo,
            Status::InProgress => &self.in_progress,
            Status::Done => &self.done,
        }
    }

    /// Total number of tasks across all columns.
    pub fn len(&self) -> usize {
        self.todo.len() + self.in_progress.len() + self.done.len()
    }

    /// Whether the board has no tasks at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fields::{Assignee, Urgency};

    fn task(id: u64, title: &str, status: Status) -> Task {
        Task {
            id,
            title: title.to_string(),
            description: String::new(),
            assigned_to: Assignee::Soleil,
            due_date: String::new(),
            urgency: Urgency::Low,
            status,
        }
    }

    #[test]
    fn test_grouping_preserves_relative_order_within_columns() {
        let tasks = vec![
            task(1, "first todo", Status::Todo),
            task(2, "done", Status::Done),
            task(3, "second todo", Status::Todo),
            task(4, "working", Status::InProgress),
        ];
        let board = Board::from_tasks(&tasks);

        let todo: Vec<&str> = board.todo.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(todo, vec!["first todo", "second todo"]);
        assert_eq!(board.in_progress.len(), 1);
        assert_eq!(board.in_progress[0].id, 4);
        assert_eq!(board.done.len(), 1);
        assert_eq!(board.done[0].id, 2);
        assert_eq!(board.len(), 4);
    }

    #[test]
    fn test_empty_snapshot_yields_empty_board() {
        let board = Board::from_tasks(&[]);
        assert!(board.is_empty());
        for status in Status::ALL {
            assert!(board.column(status).is_empty());
        }
    }

    #[test]
    fn test_column_lookup_matches_fields() {
        let tasks = vec![task(1, "a", Status::InProgress)];
        let board = Board::from_tasks(&tasks);
        assert_eq!(board.column(Status::InProgress).len(), 1);
        assert!(board.column(Status::Todo).is_empty());
        assert!(board.column(Status::Done).is_empty());
    }
}
