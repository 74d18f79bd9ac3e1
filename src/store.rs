//! The in-memory task store.
//!
//! `TaskStore` is the sole owner of committed [`Task`] records. Insertion
//! order is display order within each board column. There is no persistence:
//! the store is created empty at launch and lost on exit.

use crate::fields::Status;
use crate::task::Task;

/// Ordered, in-memory collection of committed tasks.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    next_id: u64,
}

impl Default for TaskStore {
    fn default() -> Self {
        TaskStore::new()
    }
}

impl TaskStore {
    /// Create an empty store.
    pub fn new() -> Self {
        TaskStore {
            tasks: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate the next task ID.
    ///
    /// IDs are never reused within the process, even after deletions.
    pub fn alloc_id(&mut self) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Append a task to the store.
    ///
    /// Assumes the caller has already validated required fields and assigned
    /// the ID and status. Keeps the ID counter ahead of explicitly supplied
    /// IDs so later allocations stay unique.
    pub fn add(&mut self, task: Task) {
        self.next_id = self.next_id.max(task.id + 1);
        self.tasks.push(task);
    }

    /// Remove the task with the given ID. Removing an absent ID is a no-op.
    pub fn remove(&mut self, id: u64) {
        self.tasks.retain(|t| t.id != id);
    }

    /// Read-only snapshot of all tasks in insertion order.
    pub fn view(&self) -> &[Task] {
        &self.tasks
    }

    /// Get a task by ID.
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Move a task to a new board status.
    ///
    /// Returns `true` if a task with the given ID existed and was updated.
    pub fn set_status(&mut self, id: u64, status: Status) -> bool {
        match self.tasks.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.status = status;
                true
            }
            None => false,
        }
    }

    /// Number of tasks in the store.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Whether the store holds no tasks.
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
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
            assigned_to: Assignee::Sammy,
            due_date: String::new(),
            urgency: Urgency::Low,
            status,
        }
    }

    #[test]
    fn test_view_reflects_adds_in_insertion_order() {
        let mut store = TaskStore::new();
        for i in 1..=4 {
            let id = store.alloc_id();
            store.add(task(id, &format!("task {i}"), Status::Todo));
        }
        assert_eq!(store.len(), 4);
        let titles: Vec<&str> = store.view().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["task 1", "task 2", "task 3", "task 4"]);
    }

    #[test]
    fn test_remove_is_idempotent_and_preserves_order() {
        let mut store = TaskStore::new();
        store.add(task(1, "a", Status::Todo));
        store.add(task(2, "b", Status::Todo));
        store.add(task(3, "c", Status::Todo));

        store.remove(2);
        let titles: Vec<&str> = store.view().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, vec!["a", "c"]);

        // Absent ID leaves the store unchanged.
        store.remove(2);
        store.remove(99);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_ids_are_not_reused_after_removal() {
        let mut store = TaskStore::new();
        let first = store.alloc_id();
        store.add(task(first, "a", Status::Todo));
        let second = store.alloc_id();
        store.add(task(second, "b", Status::Todo));
        store.remove(second);

        let third = store.alloc_id();
        assert_ne!(third, second);
        assert!(third > second);
    }

    #[test]
    fn test_add_keeps_counter_ahead_of_supplied_ids() {
        let mut store = TaskStore::new();
        store.add(task(10, "seeded", Status::Todo));
        assert!(store.alloc_id() > 10);
    }

    #[test]
    fn test_set_status_moves_only_the_matching_task() {
        let mut store = TaskStore::new();
        store.add(task(1, "a", Status::Todo));
        store.add(task(2, "b", Status::Todo));

        assert!(store.set_status(2, Status::InProgress));
        assert_eq!(store.get(1).unwrap().status, Status::Todo);
        assert_eq!(store.get(2).unwrap().status, Status::InProgress);

        assert!(!store.set_status(99, Status::Done));
        assert_eq!(store.get(1).unwrap().status, Status::Todo);
        assert_eq!(store.get(2).unwrap().status, Status::InProgress);
    }
}
