//! Scheduling domain models.
//!
//! | Type | Meaning |
//! |------|---------|
//! | `Task` | One unit of work: description, priority, sequence |
//! | `Priority` | Validated urgency rank in `[1, 10]` |
//! | `Sequence` | Per-scheduler insertion counter |

mod priority;
mod task;

pub use priority::Priority;
pub use task::{Sequence, Task};
