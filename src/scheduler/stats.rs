//! Scheduler backlog summary.
//!
//! | Field | Definition |
//! |-------|-----------|
//! | `pending` | Tasks currently held |
//! | `by_priority` | Pending count per priority level |
//! | `highest_priority` | Priority of the next task, if any |
//! | `accepted` | Tasks ever accepted (sequence numbers issued) |

use std::collections::BTreeMap;

use serde::Serialize;

use crate::models::Task;

/// Point-in-time summary of a scheduler's backlog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchedulerStats {
    /// Tasks currently held.
    pub pending: usize,
    /// Pending count keyed by priority value.
    pub by_priority: BTreeMap<u8, usize>,
    /// Highest pending priority.
    pub highest_priority: Option<u8>,
    /// Tasks accepted since the scheduler was created.
    pub accepted: u64,
}

impl SchedulerStats {
    /// Summarizes `tasks`, given how many sequence numbers were issued.
    pub fn calculate<'a>(tasks: impl IntoIterator<Item = &'a Task>, accepted: u64) -> Self {
        let mut by_priority = BTreeMap::new();
        let mut pending = 0;
        for task in tasks {
            *by_priority.entry(task.priority_value()).or_insert(0) += 1;
            pending += 1;
        }
        let highest_priority = by_priority.keys().next_back().copied();

        Self {
            pending,
            by_priority,
            highest_priority,
            accepted,
        }
    }

    /// Tasks removed since creation.
    pub fn dispatched(&self) -> u64 {
        self.accepted.saturating_sub(self.pending as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Priority;

    #[test]
    fn test_calculate_histogram() {
        let tasks = vec![
            Task::new("a", Priority::new(5).unwrap(), 2),
            Task::new("b", Priority::new(3).unwrap(), 4),
            Task::new("c", Priority::new(5).unwrap(), 6),
        ];
        let stats = SchedulerStats::calculate(&tasks, 6);

        assert_eq!(stats.pending, 3);
        assert_eq!(stats.by_priority.get(&5), Some(&2));
        assert_eq!(stats.by_priority.get(&3), Some(&1));
        assert_eq!(stats.highest_priority, Some(5));
        assert_eq!(stats.dispatched(), 3);
    }

    #[test]
    fn test_calculate_empty() {
        let stats = SchedulerStats::calculate(&Vec::<Task>::new(), 0);
        assert_eq!(stats.pending, 0);
        assert!(stats.by_priority.is_empty());
        assert_eq!(stats.highest_priority, None);
        assert_eq!(stats.dispatched(), 0);
    }
}
