// Millisecond timestamp implementation
//
// The timestamp is a signed 64-bit count of milliseconds since the Unix
// epoch (1970-01-01T00:00:00Z), UTC, with no timezone component. The
// signed 64-bit width covers dates far beyond the year 2262 without
// wraparound.

use std::fmt;
use std::ops::{Add, Sub};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::delta::TimeDelta;
use crate::error::{Result, TimeError};

/// A point in wall-clock time, in milliseconds since the Unix epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    /// Milliseconds since the Unix epoch
    millis: i64,
}

impl Timestamp {
    /// Create a new timestamp from milliseconds since the epoch
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Create a new timestamp from seconds since the epoch
    pub const fn from_secs(secs: i64) -> Self {
        Self {
            millis: secs * 1_000,
        }
    }

    /// Create a timestamp from a (seconds, nanoseconds-within-second) clock
    /// reading. The sub-millisecond remainder is truncated, never rounded.
    pub const fn from_parts(secs: i64, subsec_nanos: u32) -> Self {
        Self {
            millis: secs * 1_000 + (subsec_nanos / 1_000_000) as i64,
        }
    }

    /// Create a timestamp from a `SystemTime`
    pub fn from_system_time(time: SystemTime) -> Result<Self> {
        let elapsed = time
            .duration_since(UNIX_EPOCH)
            .map_err(|e| TimeError::ClockBeforeEpoch(e.to_string()))?;

        Ok(Self::from_parts(elapsed.as_secs() as i64, elapsed.subsec_nanos()))
    }

    /// Get the milliseconds since the epoch
    pub const fn as_millis(&self) -> i64 {
        self.millis
    }

    /// Get the whole seconds since the epoch, truncating the remainder
    pub const fn as_secs(&self) -> i64 {
        self.millis / 1_000
    }

    /// Get the millisecond part within the current second
    pub const fn subsec_millis(&self) -> i64 {
        self.millis % 1_000
    }

    /// Convert to a `SystemTime`
    pub fn to_system_time(&self) -> SystemTime {
        if self.millis >= 0 {
            UNIX_EPOCH + Duration::from_millis(self.millis as u64)
        } else {
            UNIX_EPOCH - Duration::from_millis(self.millis.unsigned_abs())
        }
    }

    /// Get the zero timestamp (the epoch itself)
    pub const fn zero() -> Self {
        Self { millis: 0 }
    }

    /// Get the maximum representable timestamp
    pub const fn max() -> Self {
        Self { millis: i64::MAX }
    }

    /// Add a delta to this timestamp, saturating at the numeric bounds
    pub const fn saturating_add(&self, delta: TimeDelta) -> Self {
        Self {
            millis: self.millis.saturating_add(delta.as_millis()),
        }
    }

    /// Subtract a delta from this timestamp, saturating at the numeric bounds
    pub const fn saturating_sub(&self, delta: TimeDelta) -> Self {
        Self {
            millis: self.millis.saturating_sub(delta.as_millis()),
        }
    }

    /// Add a delta to this timestamp, returning `None` on overflow
    pub const fn checked_add(&self, delta: TimeDelta) -> Option<Self> {
        match self.millis.checked_add(delta.as_millis()) {
            Some(millis) => Some(Self { millis }),
            None => None,
        }
    }

    /// Subtract a delta from this timestamp, returning `None` on overflow
    pub const fn checked_sub(&self, delta: TimeDelta) -> Option<Self> {
        match self.millis.checked_sub(delta.as_millis()) {
            Some(millis) => Some(Self { millis }),
            None => None,
        }
    }

    /// Get the wall-clock time elapsed since this timestamp
    pub fn elapsed(&self) -> TimeDelta {
        crate::clock::SystemClock::now() - *self
    }

    /// Render this timestamp in the given format
    pub fn format(&self, format: TimestampFormat) -> String {
        match format {
            TimestampFormat::Millis => self.millis.to_string(),
            TimestampFormat::Seconds => self.as_secs().to_string(),
            TimestampFormat::Iso8601 => match DateTime::from_timestamp_millis(self.millis) {
                Some(dt) => dt.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string(),
                None => self.millis.to_string(),
            },
            TimestampFormat::Rfc3339 => match DateTime::from_timestamp_millis(self.millis) {
                Some(dt) => dt.format("%Y-%m-%d %H:%M:%S%.3f").to_string(),
                None => self.millis.to_string(),
            },
            TimestampFormat::Human => {
                let delta = self.elapsed();
                if delta.is_negative() {
                    format!("in {} seconds", delta.abs().as_secs())
                } else {
                    format!("{} seconds ago", delta.as_secs())
                }
            }
        }
    }

    /// Parse a timestamp from a string in the given format
    pub fn parse(s: &str, format: TimestampFormat) -> Result<Self> {
        match format {
            TimestampFormat::Millis => {
                let millis = s
                    .parse::<i64>()
                    .map_err(|e| TimeError::InvalidTimeValue(format!("invalid milliseconds: {}", e)))?;
                Ok(Self::from_millis(millis))
            }
            TimestampFormat::Seconds => {
                let secs = s
                    .parse::<i64>()
                    .map_err(|e| TimeError::InvalidTimeValue(format!("invalid seconds: {}", e)))?;
                Ok(Self::from_secs(secs))
            }
            TimestampFormat::Iso8601 => {
                let dt = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.fZ")
                    .map_err(|e| TimeError::InvalidFormat(e.to_string()))?;
                Ok(Self::from_millis(dt.and_utc().timestamp_millis()))
            }
            TimestampFormat::Rfc3339 => {
                let dt = chrono::NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f")
                    .map_err(|e| TimeError::InvalidFormat(e.to_string()))?;
                Ok(Self::from_millis(dt.and_utc().timestamp_millis()))
            }
            TimestampFormat::Human => Err(TimeError::InvalidFormat(
                "human-relative timestamps cannot be parsed".to_string(),
            )),
        }
    }
}

impl Add<TimeDelta> for Timestamp {
    type Output = Self;

    fn add(self, delta: TimeDelta) -> Self {
        Self {
            millis: self.millis + delta.as_millis(),
        }
    }
}

impl Sub<TimeDelta> for Timestamp {
    type Output = Self;

    fn sub(self, delta: TimeDelta) -> Self {
        Self {
            millis: self.millis - delta.as_millis(),
        }
    }
}

impl Sub for Timestamp {
    type Output = TimeDelta;

    fn sub(self, other: Self) -> TimeDelta {
        TimeDelta::from_millis(self.millis - other.millis)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}ms", self.millis)
    }
}

/// Format for rendering and parsing timestamps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampFormat {
    /// Milliseconds since epoch
    Millis,
    /// Seconds since epoch
    Seconds,
    /// ISO 8601 format (YYYY-MM-DDTHH:MM:SS.sssZ)
    Iso8601,
    /// RFC 3339 format (YYYY-MM-DD HH:MM:SS.sss)
    Rfc3339,
    /// Human-readable relative format
    Human,
}
