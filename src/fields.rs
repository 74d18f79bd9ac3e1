//! Enumerations and field types for the task board.
//!
//! This module defines the structured data types used to categorise tasks:
//! board status, urgency level, and the fixed set of known assignees.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Board status of a task. Every task starts in `Todo`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl Status {
    /// All statuses in board column order.
    pub const ALL: [Status; 3] = [Status::Todo, Status::InProgress, Status::Done];

    /// Human-readable column heading.
    pub fn label(self) -> &'static str {
        match self {
            Status::Todo => "To Do",
            Status::InProgress => "In Progress",
            Status::Done => "Done",
        }
    }

    /// Stable lowercase key, matching the serialised form.
    pub fn key(self) -> &'static str {
        match self {
            Status::Todo => "todo",
            Status::InProgress => "in-progress",
            Status::Done => "done",
        }
    }

    /// The next status in the board flow, if any.
    pub fn next(self) -> Option<Status> {
        match self {
            Status::Todo => Some(Status::InProgress),
            Status::InProgress => Some(Status::Done),
            Status::Done => None,
        }
    }

    /// The previous status in the board flow, if any.
    pub fn prev(self) -> Option<Status> {
        match self {
            Status::Todo => None,
            Status::InProgress => Some(Status::Todo),
            Status::Done => Some(Status::InProgress),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Urgency classification for a task. Defaults to `Low`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Urgency {
    #[default]
    Low,
    Medium,
    High,
}

impl Urgency {
    /// All urgency levels in ascending order.
    pub const ALL: [Urgency; 3] = [Urgency::Low, Urgency::Medium, Urgency::High];

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Urgency::Low => "Low",
            Urgency::Medium => "Medium",
            Urgency::High => "High",
        }
    }
}

impl fmt::Display for Urgency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The fixed set of people tasks can be assigned to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Assignee {
    Sammy,
    Soleil,
}

impl Assignee {
    /// All known assignees.
    pub const ALL: [Assignee; 2] = [Assignee::Sammy, Assignee::Soleil];

    /// Display name of the assignee.
    pub fn name(self) -> &'static str {
        match self {
            Assignee::Sammy => "Sammy",
            Assignee::Soleil => "Soleil",
        }
    }
}

impl fmt::Display for Assignee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parse a status key, tolerating either case style.
pub fn parse_status(s: &str) -> Option<Status> {
    match s.trim().to_lowercase().as_str() {
        "todo" | "to-do" => Some(Status::Todo),
        "in-progress" | "inprogress" => Some(Status::InProgress),
        "done" => Some(Status::Done),
        _ => None,
    }
}

/// Parse an urgency key.
pub fn parse_urgency(s: &str) -> Option<Urgency> {
    match s.trim().to_lowercase().as_str() {
        "low" => Some(Urgency::Low),
        "medium" => Some(Urgency::Medium),
        "high" => Some(Urgency::High),
        _ => None,
    }
}

/// Parse an assignee name (case-insensitive).
pub fn parse_assignee(s: &str) -> Option<Assignee> {
    Assignee::ALL
        .iter()
        .copied()
        .find(|a| a.name().eq_ignore_ascii_case(s.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_serialises_with_kebab_case_tokens() {
        assert_eq!(serde_json::to_string(&Status::Todo).unwrap(), "\"todo\"");
        assert_eq!(
            serde_json::to_string(&Status::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(serde_json::to_string(&Status::Done).unwrap(), "\"done\"");
        assert_eq!(
            serde_json::from_str::<Status>("\"in-progress\"").unwrap(),
            Status::InProgress
        );
    }

    #[test]
    fn test_urgency_tokens_and_default() {
        assert_eq!(Urgency::default(), Urgency::Low);
        assert_eq!(serde_json::to_string(&Urgency::Low).unwrap(), "\"low\"");
        assert_eq!(serde_json::to_string(&Urgency::Medium).unwrap(), "\"medium\"");
        assert_eq!(serde_json::to_string(&Urgency::High).unwrap(), "\"high\"");
    }

    #[test]
    fn test_assignee_serialises_as_display_name() {
        assert_eq!(serde_json::to_string(&Assignee::Sammy).unwrap(), "\"Sammy\"");
        assert_eq!(
            serde_json::to_string(&Assignee::Soleil).unwrap(),
            "\"Soleil\""
        );
    }

    #[test]
    fn test_parse_helpers() {
        assert_eq!(parse_status("in-progress"), Some(Status::InProgress));
        assert_eq!(parse_status("TODO"), Some(Status::Todo));
        assert_eq!(parse_status("archived"), None);
        assert_eq!(parse_urgency("High"), Some(Urgency::High));
        assert_eq!(parse_urgency(""), None);
        assert_eq!(parse_assignee("sammy"), Some(Assignee::Sammy));
        assert_eq!(parse_assignee("nobody"), None);
    }

    #[test]
    fn test_status_board_flow() {
        assert_eq!(Status::Todo.next(), Some(Status::InProgress));
        assert_eq!(Status::InProgress.next(), Some(Status::Done));
        assert_eq!(Status::Done.next(), None);
        assert_eq!(Status::Todo.prev(), None);
        assert_eq!(Status::Done.prev(), Some(Status::InProgress));
    }
}
