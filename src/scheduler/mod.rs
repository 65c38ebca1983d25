//! Priority task scheduler and backlog summary.
//!
//! # Algorithm
//!
//! `TaskScheduler` keeps tasks in a binary max-heap ordered by
//! `dispatch_order`: highest priority first, FIFO among equal priorities.
//!
//! # Stats
//!
//! `SchedulerStats` summarizes the pending backlog per priority level.

mod heap;
mod ordering;
mod stats;

pub use heap::TaskScheduler;
pub use ordering::dispatch_order;
pub use stats::SchedulerStats;
