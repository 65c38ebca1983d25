//! Task model.
//!
//! A task is one unit of work waiting in a scheduler. It is built once, at
//! insertion time, and never mutated afterwards.

use serde::{Deserialize, Serialize};

use super::Priority;

/// Insertion sequence number.
///
/// Strictly increasing per scheduler, never reused. Used only to break
/// priority ties (earlier insertion wins).
pub type Sequence = u64;

/// A unit of work held by a scheduler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Human-readable label.
    pub description: String,
    /// Urgency rank.
    pub priority: Priority,
    /// Insertion order within the owning scheduler.
    pub sequence: Sequence,
}

impl Task {
    /// Creates a task. Sequence numbers are normally assigned by the scheduler.
    pub fn new(description: impl Into<String>, priority: Priority, sequence: Sequence) -> Self {
        Self {
            description: description.into(),
            priority,
            sequence,
        }
    }

    /// Priority as a plain integer.
    pub fn priority_value(&self) -> u8 {
        self.priority.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_new() {
        let task = Task::new("Fix DB", Priority::new(9).unwrap(), 1);
        assert_eq!(task.description, "Fix DB");
        assert_eq!(task.priority_value(), 9);
        assert_eq!(task.sequence, 1);
    }

    #[test]
    fn test_task_json_shape() {
        let task = Task::new("Plan meeting", Priority::new(3).unwrap(), 4);
        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(
            value,
            serde_json::json!({"description": "Plan meeting", "priority": 3, "sequence": 4})
        );
    }
}
