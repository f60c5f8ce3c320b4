// Error types for the wallclock library

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Represents an error raised while reading a clock or converting time values
#[derive(Debug, Error, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeError {
    /// The system real-time clock reported an instant before the Unix epoch.
    /// This does not arise on supported platforms under normal operation.
    #[error("system clock reads before the Unix epoch: {0}")]
    ClockBeforeEpoch(String),

    #[error("invalid time value: {0}")]
    InvalidTimeValue(String),

    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

/// Result type for clock reads and time conversions
pub type Result<T> = std::result::Result<T, TimeError>;
