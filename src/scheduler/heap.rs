//! Heap-backed priority task scheduler.
//!
//! # Algorithm
//!
//! Tasks live in a binary max-heap whose entries compare by dispatch order
//! (see [`dispatch_order`]): priority descending, then insertion sequence
//! ascending. The root is always the next task to dispatch.
//!
//! # Complexity
//!
//! | Operation | Cost |
//! |-----------|------|
//! | `insert` | O(log n) |
//! | `pop_highest` | O(log n) |
//! | `peek_highest` | O(1) |
//! | `list_all` | O(n log n), sorts a copy |
//! | `is_empty`, `len` | O(1) |

use std::collections::BinaryHeap;

use tracing::{debug, warn};

use super::ordering::{dispatch_order, HeapEntry};
use super::SchedulerStats;
use crate::error::Result;
use crate::models::{Priority, Sequence, Task};

/// Priority task scheduler.
///
/// Owns its tasks exclusively. Multiple schedulers are fully independent;
/// each keeps its own sequence counter, starting at 1.
///
/// Not internally synchronized: callers sharing one across threads must
/// serialize access (e.g. `Mutex<TaskScheduler>`).
///
/// # Example
///
/// ```
/// use u_taskheap::scheduler::TaskScheduler;
///
/// let mut scheduler = TaskScheduler::new();
/// scheduler.insert("Fix DB", 9).unwrap();
/// scheduler.insert("Critical bug", 10).unwrap();
/// assert!(scheduler.insert("Bad priority", 99).is_err());
///
/// let next = scheduler.pop_highest().unwrap();
/// assert_eq!(next.description, "Critical bug");
/// assert_eq!(scheduler.len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct TaskScheduler {
    heap: BinaryHeap<HeapEntry>,
    next_sequence: Sequence,
}

impl TaskScheduler {
    /// Creates an empty scheduler.
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_sequence: 1,
        }
    }

    /// Adds a task and returns the sequence number it was assigned.
    ///
    /// # Errors
    /// `InvalidPriority` if `priority` is outside `[1, 10]`. The scheduler
    /// is left untouched and no sequence number is consumed.
    pub fn insert(&mut self, description: impl Into<String>, priority: i64) -> Result<Sequence> {
        let description = description.into();
        let priority = match Priority::new(priority) {
            Ok(p) => p,
            Err(e) => {
                warn!(%description, priority, "rejected task");
                return Err(e);
            }
        };

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        debug!(%description, %priority, sequence, "task queued");
        self.heap
            .push(HeapEntry(Task::new(description, priority, sequence)));
        Ok(sequence)
    }

    /// Removes and returns the next task, or `None` if empty.
    pub fn pop_highest(&mut self) -> Option<Task> {
        let HeapEntry(task) = self.heap.pop()?;
        debug!(
            description = %task.description,
            priority = %task.priority,
            sequence = task.sequence,
            remaining = self.heap.len(),
            "task dispatched"
        );
        Some(task)
    }

    /// The next task without removing it, or `None` if empty.
    pub fn peek_highest(&self) -> Option<&Task> {
        self.heap.peek().map(|entry| &entry.0)
    }

    /// All held tasks in dispatch order.
    ///
    /// The returned vector is a snapshot; later inserts and pops do not
    /// affect it.
    pub fn list_all(&self) -> Vec<Task> {
        let mut tasks: Vec<Task> = self.heap.iter().map(|entry| entry.0.clone()).collect();
        tasks.sort_by(dispatch_order);
        tasks
    }

    /// Whether no tasks are held.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Number of tasks held.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Sequence number the next successful insert will receive.
    pub fn next_sequence(&self) -> Sequence {
        self.next_sequence
    }

    /// Backlog summary at call time.
    pub fn stats(&self) -> SchedulerStats {
        SchedulerStats::calculate(
            self.heap.iter().map(|entry| &entry.0),
            self.next_sequence - 1,
        )
    }
}

impl Default for TaskScheduler {
    fn default() -> Self {
        Self::new()
    }
}
