//! Task priority.
//!
//! Priorities are integers in the closed range `[1, 10]`, where 10 is the
//! most urgent. Out-of-range values never reach the scheduler: they are
//! rejected when a [`Priority`] is constructed.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, SchedulerError};

/// A validated urgency rank (higher = more urgent).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Priority(u8);

impl Priority {
    /// Least urgent priority.
    pub const MIN: u8 = 1;
    /// Most urgent priority.
    pub const MAX: u8 = 10;

    /// Validates `value` against `[MIN, MAX]`.
    pub fn new(value: i64) -> Result<Self> {
        if (i64::from(Self::MIN)..=i64::from(Self::MAX)).contains(&value) {
            Ok(Self(value as u8))
        } else {
            Err(SchedulerError::InvalidPriority { value })
        }
    }

    /// Numeric value of this priority.
    pub fn get(self) -> u8 {
        self.0
    }

    /// Whether this is the most urgent level.
    pub fn is_max(self) -> bool {
        self.0 == Self::MAX
    }
}

impl TryFrom<i64> for Priority {
    type Error = SchedulerError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_accepted() {
        assert_eq!(Priority::new(1).unwrap().get(), 1);
        assert_eq!(Priority::new(10).unwrap().get(), 10);
        assert!(Priority::new(10).unwrap().is_max());
    }

    #[test]
    fn test_out_of_range_rejected() {
        for value in [0, 11, -3, 99, i64::MAX, i64::MIN] {
            assert_eq!(
                Priority::new(value),
                Err(SchedulerError::InvalidPriority { value })
            );
        }
    }

    #[test]
    fn test_ordering_follows_value() {
        assert!(Priority::new(9).unwrap() > Priority::new(3).unwrap());
    }

    #[test]
    fn test_deserialize_revalidates() {
        let ok: Priority = serde_json::from_str("7").unwrap();
        assert_eq!(ok.get(), 7);
        assert!(serde_json::from_str::<Priority>("11").is_err());
        assert_eq!(serde_json::to_string(&ok).unwrap(), "7");
    }
}
