// Time delta implementation
//
// This module provides the signed span type produced by subtracting
// two timestamps, stored with millisecond resolution.

use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::TimeError;

/// A signed span of time with millisecond resolution
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeDelta {
    /// The number of milliseconds; negative when the span runs backwards
    millis: i64,
}

impl TimeDelta {
    /// Create a new delta from milliseconds
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Create a new delta from seconds
    pub const fn from_secs(secs: i64) -> Self {
        Self {
            millis: secs * 1_000,
        }
    }

    /// Create a new delta from minutes
    pub const fn from_minutes(minutes: i64) -> Self {
        Self {
            millis: minutes * 60 * 1_000,
        }
    }

    /// Create a new delta from hours
    pub const fn from_hours(hours: i64) -> Self {
        Self {
            millis: hours * 60 * 60 * 1_000,
        }
    }

    /// Get the number of milliseconds
    pub const fn as_millis(&self) -> i64 {
        self.millis
    }

    /// Get the number of whole seconds, truncating the remainder
    pub const fn as_secs(&self) -> i64 {
        self.millis / 1_000
    }

    /// Get the number of whole minutes
    pub const fn as_minutes(&self) -> i64 {
        self.millis / (60 * 1_000)
    }

    /// Get the number of whole hours
    pub const fn as_hours(&self) -> i64 {
        self.millis / (60 * 60 * 1_000)
    }

    /// Get the number of seconds as a floating-point value
    pub fn as_secs_f64(&self) -> f64 {
        self.millis as f64 / 1_000.0
    }

    /// Get the zero delta
    pub const fn zero() -> Self {
        Self { millis: 0 }
    }

    /// Get the maximum possible delta
    pub const fn max() -> Self {
        Self { millis: i64::MAX }
    }

    /// Check if this delta is zero
    pub const fn is_zero(&self) -> bool {
        self.millis == 0
    }

    /// Check if this delta runs backwards
    pub const fn is_negative(&self) -> bool {
        self.millis < 0
    }

    /// Get the absolute value of this delta
    pub const fn abs(&self) -> Self {
        Self {
            millis: self.millis.abs(),
        }
    }

    /// Add another delta to this one, saturating at the numeric bounds
    pub const fn saturating_add(&self, other: TimeDelta) -> Self {
        Self {
            millis: self.millis.saturating_add(other.millis),
        }
    }

    /// Subtract another delta from this one, saturating at the numeric bounds
    pub const fn saturating_sub(&self, other: TimeDelta) -> Self {
        Self {
            millis: self.millis.saturating_sub(other.millis),
        }
    }

    /// Add another delta to this one, returning `None` on overflow
    pub const fn checked_add(&self, other: TimeDelta) -> Option<Self> {
        match self.millis.checked_add(other.millis) {
            Some(millis) => Some(Self { millis }),
            None => None,
        }
    }

    /// Subtract another delta from this one, returning `None` on overflow
    pub const fn checked_sub(&self, other: TimeDelta) -> Option<Self> {
        match self.millis.checked_sub(other.millis) {
            Some(millis) => Some(Self { millis }),
            None => None,
        }
    }

    /// Convert a standard duration to a delta, truncating sub-millisecond precision
    pub fn from_duration(duration: Duration) -> Self {
        Self {
            millis: duration.as_millis() as i64,
        }
    }

    /// Convert this delta to a standard duration; `None` when the span runs backwards
    pub fn to_duration(&self) -> Option<Duration> {
        if self.millis < 0 {
            return None;
        }
        Some(Duration::from_millis(self.millis as u64))
    }
}

impl Default for TimeDelta {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for TimeDelta {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            millis: self.millis + other.millis,
        }
    }
}

impl Sub for TimeDelta {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            millis: self.millis - other.millis,
        }
    }
}

impl Mul<i64> for TimeDelta {
    type Output = Self;

    fn mul(self, scalar: i64) -> Self {
        Self {
            millis: self.millis * scalar,
        }
    }
}

impl Div<i64> for TimeDelta {
    type Output = Self;

    fn div(self, scalar: i64) -> Self {
        Self {
            millis: self.millis / scalar,
        }
    }
}

impl Neg for TimeDelta {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            millis: -self.millis,
        }
    }
}

impl fmt::Display for TimeDelta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.millis % 1_000 == 0 {
            write!(f, "{}s", self.as_secs())
        } else {
            write!(f, "{}ms", self.millis)
        }
    }
}

impl FromStr for TimeDelta {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(ms_str) = s.strip_suffix("ms") {
            ms_str
                .parse::<i64>()
                .map(Self::from_millis)
                .map_err(|e| TimeError::InvalidFormat(e.to_string()))
        } else if let Some(secs_str) = s.strip_suffix('s') {
            secs_str
                .parse::<i64>()
                .map(Self::from_secs)
                .map_err(|e| TimeError::InvalidFormat(e.to_string()))
        } else {
            Err(TimeError::InvalidFormat(format!(
                "invalid delta format: {}",
                s
            )))
        }
    }
}
