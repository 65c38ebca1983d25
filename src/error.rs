//! Scheduler error types.

use thiserror::Error;

use crate::models::Priority;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors raised by the scheduler core.
///
/// Emptiness is never an error: `pop_highest` and `peek_highest`
/// return `None` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchedulerError {
    /// A priority outside the accepted range was supplied.
    #[error("priority must be between {min} and {max}, got {value}", min = Priority::MIN, max = Priority::MAX)]
    InvalidPriority {
        /// The rejected value.
        value: i64,
    },
}
