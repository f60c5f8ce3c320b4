// Wallclock Core Library
//
// This library provides wall-clock time primitives: a millisecond-resolution
// timestamp read from the system real-time clock, delta arithmetic, and
// pluggable clock sources for deterministic testing.

pub mod clock;
pub mod delta;
pub mod error;
pub mod timestamp;

#[cfg(test)]
mod tests;

// Re-export important types to simplify imports
pub use clock::{Clock, ClockSource, IncrementingClock, ManualClock, SharedClock, SystemClock};
pub use delta::TimeDelta;
pub use error::{Result, TimeError};
pub use timestamp::{Timestamp, TimestampFormat};

/// A constant representing the zero timestamp
pub const ZERO_TIMESTAMP: Timestamp = Timestamp::zero();

/// A constant representing the max timestamp
pub const MAX_TIMESTAMP: Timestamp = Timestamp::max();

/// A constant representing the zero delta
pub const ZERO_DELTA: TimeDelta = TimeDelta::zero();

/// A constant representing the max delta
pub const MAX_DELTA: TimeDelta = TimeDelta::max();

/// Read the current wall-clock time as milliseconds since the Unix epoch.
///
/// The value is `seconds_since_epoch * 1000 + nanos_within_second / 1_000_000`
/// with the sub-millisecond remainder truncated. A clock reading before the
/// epoch is treated as an unrecoverable fault.
pub fn current_time_millis() -> i64 {
    SystemClock::now().as_millis()
}

/// Fallible variant of [`current_time_millis`] for callers that want to
/// observe a failed clock read instead of aborting
pub fn try_current_time_millis() -> Result<i64> {
    SystemClock::try_now().map(|ts| ts.as_millis())
}

/// Helper function to get the current time from the system clock
pub fn now() -> Timestamp {
    SystemClock::now()
}

/// Helper function to sleep for the specified delta; negative deltas are a no-op
pub fn sleep(delta: TimeDelta) {
    if let Some(duration) = delta.to_duration() {
        std::thread::sleep(duration);
    }
}

/// Helper function to create a timer that measures elapsed time
pub fn timer() -> Timer {
    Timer::new()
}

/// Helper function to create a deadline the specified delta from now
pub fn deadline(delta: TimeDelta) -> Timestamp {
    SystemClock::now().saturating_add(delta)
}

/// A timer for measuring elapsed wall-clock time
#[derive(Debug, Clone)]
pub struct Timer {
    start: Timestamp,
}

impl Timer {
    /// Create a new timer starting from now
    pub fn new() -> Self {
        Self {
            start: SystemClock::now(),
        }
    }

    /// Reset the timer to start from now
    pub fn reset(&mut self) {
        self.start = SystemClock::now();
    }

    /// Get the elapsed time since the timer started
    pub fn elapsed(&self) -> TimeDelta {
        SystemClock::now() - self.start
    }

    /// Check if the timer has exceeded the specified delta
    pub fn has_elapsed(&self, delta: TimeDelta) -> bool {
        self.elapsed() >= delta
    }

    /// Get the start timestamp of the timer
    pub fn start_time(&self) -> Timestamp {
        self.start
    }
}

impl Default for Timer {
    fn default() -> Self {
        Self::new()
    }
}
