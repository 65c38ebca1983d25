//! Heap-backed priority task scheduler.
//!
//! Tasks carry a priority in `[1, 10]` (10 = most urgent) and are
//! dispatched highest priority first. Ties go to the task inserted first,
//! using a per-scheduler sequence number.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Task`, `Priority`, `Sequence`
//! - **`scheduler`**: `TaskScheduler`, the `dispatch_order` comparator,
//!   and `SchedulerStats`
//! - **`error`**: `SchedulerError` (`InvalidPriority`)
//!
//! # Usage
//!
//! ```
//! use u_taskheap::TaskScheduler;
//!
//! let mut scheduler = TaskScheduler::new();
//! scheduler.insert("Weekly report", 5).unwrap();
//! scheduler.insert("Plan meeting", 3).unwrap();
//!
//! let listed = scheduler.list_all();
//! assert_eq!(listed[0].description, "Weekly report");
//! assert_eq!(scheduler.peek_highest().map(|t| t.sequence), Some(1));
//! ```
//!
//! # Concurrency
//!
//! Single-threaded and synchronous. Wrap a scheduler in a `Mutex` to share
//! it between threads.

pub mod error;
pub mod models;
pub mod scheduler;

pub use error::{Result, SchedulerError};
pub use models::{Priority, Sequence, Task};
pub use scheduler::{dispatch_order, SchedulerStats, TaskScheduler};
