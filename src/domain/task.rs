//! Task Entity
//!
//! Represents one entry in the persisted task list.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Filter criterion over the task list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TaskFilter {
    /// Every task
    #[default]
    All,
    /// Not yet completed
    Active,
    /// Completed only
    Completed,
}

impl TaskFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskFilter::All => "all",
            TaskFilter::Active => "active",
            TaskFilter::Completed => "completed",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "active" => TaskFilter::Active,
            "completed" => TaskFilter::Completed,
            _ => TaskFilter::All,
        }
    }
}

/// A single task list entry
///
/// The serde shape matches the persisted JSON of the original client
/// (`createdAt` key), so existing payloads hydrate cleanly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, creation-time-derived and monotonic
    pub id: i64,
    /// Task text, trimmed and non-empty
    pub text: String,
    /// Completion status
    pub completed: bool,
    /// Creation timestamp
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new, not-yet-completed task stamped with the current time
    pub fn new(id: i64, text: String) -> Self {
        Self {
            id,
            text,
            completed: false,
            created_at: Utc::now(),
        }
    }

    /// Whether this task is selected by `filter`
    pub fn matches(&self, filter: TaskFilter) -> bool {
        match filter {
            TaskFilter::All => true,
            TaskFilter::Active => !self.completed,
            TaskFilter::Completed => self.completed,
        }
    }
}

/// Sizes of the three filtered views
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TaskCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_creation() {
        let task = Task::new(1, "Test task".to_string());
        assert_eq!(task.id, 1);
        assert_eq!(task.text, "Test task");
        assert!(!task.completed);
    }

    #[test]
    fn test_filter_matching() {
        let mut task = Task::new(1, "Test task".to_string());
        assert!(task.matches(TaskFilter::All));
        assert!(task.matches(TaskFilter::Active));
        assert!(!task.matches(TaskFilter::Completed));

        task.completed = true;
        assert!(task.matches(TaskFilter::All));
        assert!(!task.matches(TaskFilter::Active));
        assert!(task.matches(TaskFilter::Completed));
    }

    #[test]
    fn test_filter_string_round_trip() {
        assert_eq!(TaskFilter::Active.as_str(), "active");
        assert_eq!(TaskFilter::from_str("completed"), TaskFilter::Completed);
        assert_eq!(TaskFilter::from_str("garbage"), TaskFilter::All);
    }

    #[test]
    fn test_serde_uses_created_at_key() {
        let task = Task::new(7, "Persist me".to_string());
        let json = serde_json::to_string(&task).unwrap();
        assert!(json.contains("\"createdAt\""));

        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(back, task);
    }
}
