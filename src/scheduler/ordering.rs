//! Dispatch ordering.
//!
//! Tasks are dispatched by descending priority, then ascending sequence.
//! Equivalently, the sort key is `(-priority, sequence)` ascending.

use std::cmp::Ordering;

use crate::models::Task;

/// Compares two tasks in dispatch order.
///
/// `Less` means `a` is dispatched before `b`. Sorting a slice with this
/// comparator yields the extraction order of a scheduler holding it.
pub fn dispatch_order(a: &Task, b: &Task) -> Ordering {
    b.priority
        .cmp(&a.priority)
        .then_with(|| a.sequence.cmp(&b.sequence))
}

/// Heap slot for a task.
///
/// `BinaryHeap` is a max-heap, so the entry that dispatches first must
/// compare greatest.
#[derive(Debug, Clone)]
pub(crate) struct HeapEntry(pub(crate) Task);

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        dispatch_order(&other.0, &self.0)
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
