// Clock implementations for wall-clock time measurement
//
// This module provides clock abstractions for deterministic and
// non-deterministic time sources. `SystemClock` is the real-time clock
// reader; the deterministic clocks exist so callers can test time-dependent
// code without touching the system clock.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::delta::TimeDelta;
use crate::error::{Result, TimeError};
use crate::timestamp::Timestamp;

/// A trait for sources of time
pub trait ClockSource {
    /// Get the current timestamp from this clock source
    fn now(&self) -> Timestamp;

    /// Get the resolution of this clock source
    fn resolution(&self) -> TimeDelta;

    /// Check if this clock source is deterministic
    fn is_deterministic(&self) -> bool;
}

/// A trait representing a clock that provides timestamps
pub trait Clock: ClockSource {
    /// Advance the clock by the specified delta (for deterministic clocks)
    fn advance(&mut self, delta: TimeDelta) -> Timestamp;

    /// Set the clock to a specific timestamp (for deterministic clocks)
    fn set(&mut self, timestamp: Timestamp);

    /// Reset the clock to zero
    fn reset(&mut self);
}

/// The system real-time clock.
///
/// Reads the operating system's real-time clock as a (seconds,
/// nanoseconds-within-second) pair and converts it to milliseconds with
/// truncating arithmetic. The returned values are non-decreasing only to
/// the extent the underlying clock is; a backwards adjustment of the
/// system clock is visible to callers.
#[derive(Debug, Clone)]
pub struct SystemClock;

impl SystemClock {
    /// Create a new system clock
    pub fn new() -> Self {
        Self
    }

    /// Read the system clock, propagating a reading before the Unix epoch
    /// as an error. Safe to call concurrently from any number of threads.
    pub fn try_now() -> Result<Timestamp> {
        let elapsed = SystemTime::now().duration_since(UNIX_EPOCH).map_err(|e| {
            log::error!("system real-time clock reads before the Unix epoch: {}", e);
            TimeError::ClockBeforeEpoch(e.to_string())
        })?;

        Ok(Timestamp::from_parts(
            elapsed.as_secs() as i64,
            elapsed.subsec_nanos(),
        ))
    }

    /// Read the system clock. A reading before the Unix epoch is treated
    /// as an unrecoverable fault rather than reported through a sentinel
    /// value.
    pub fn now() -> Timestamp {
        Self::try_now().expect("system real-time clock read failed")
    }
}

impl ClockSource for SystemClock {
    fn now(&self) -> Timestamp {
        SystemClock::now()
    }

    fn resolution(&self) -> TimeDelta {
        TimeDelta::from_millis(1)
    }

    fn is_deterministic(&self) -> bool {
        false
    }
}

impl Clock for SystemClock {
    fn advance(&mut self, _delta: TimeDelta) -> Timestamp {
        // Cannot advance the system clock, just return current time
        ClockSource::now(self)
    }

    fn set(&mut self, _timestamp: Timestamp) {
        // Cannot set the system clock, no-op
    }

    fn reset(&mut self) {
        // Cannot reset the system clock, no-op
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

/// A manual clock that can be controlled programmatically
#[derive(Debug, Clone)]
pub struct ManualClock {
    /// The current timestamp
    current: Timestamp,
}

impl ManualClock {
    /// Create a new manual clock at the specified timestamp
    pub fn new(initial: Timestamp) -> Self {
        Self { current: initial }
    }

    /// Create a new manual clock at zero
    pub fn zero() -> Self {
        Self::new(Timestamp::zero())
    }
}

impl ClockSource for ManualClock {
    fn now(&self) -> Timestamp {
        self.current
    }

    fn resolution(&self) -> TimeDelta {
        TimeDelta::from_millis(1)
    }

    fn is_deterministic(&self) -> bool {
        true
    }
}

impl Clock for ManualClock {
    fn advance(&mut self, delta: TimeDelta) -> Timestamp {
        self.current = self.current + delta;
        self.current
    }

    fn set(&mut self, timestamp: Timestamp) {
        self.current = timestamp;
    }

    fn reset(&mut self) {
        self.current = Timestamp::zero();
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::zero()
    }
}

/// A deterministic clock that increments on each read
#[derive(Debug)]
pub struct IncrementingClock {
    /// The current timestamp in milliseconds
    current: AtomicI64,

    /// The increment amount in milliseconds
    increment: i64,
}

impl IncrementingClock {
    /// Create a new incrementing clock with the specified initial timestamp
    /// and increment
    pub fn new(initial: Timestamp, increment: TimeDelta) -> Self {
        Self {
            current: AtomicI64::new(initial.as_millis()),
            increment: increment.as_millis(),
        }
    }

    /// Create a new incrementing clock that steps by 1 millisecond
    pub fn milli_step() -> Self {
        Self::new(Timestamp::zero(), TimeDelta::from_millis(1))
    }

    /// Create a new incrementing clock that steps by 1 second
    pub fn second_step() -> Self {
        Self::new(Timestamp::zero(), TimeDelta::from_secs(1))
    }
}

impl ClockSource for IncrementingClock {
    fn now(&self) -> Timestamp {
        let millis = self.current.fetch_add(self.increment, Ordering::SeqCst);
        Timestamp::from_millis(millis)
    }

    fn resolution(&self) -> TimeDelta {
        TimeDelta::from_millis(self.increment)
    }

    fn is_deterministic(&self) -> bool {
        true
    }
}

impl Clock for IncrementingClock {
    fn advance(&mut self, delta: TimeDelta) -> Timestamp {
        let millis = delta.as_millis();
        let current = self.current.fetch_add(millis, Ordering::SeqCst);
        Timestamp::from_millis(current + millis)
    }

    fn set(&mut self, timestamp: Timestamp) {
        self.current.store(timestamp.as_millis(), Ordering::SeqCst);
    }

    fn reset(&mut self) {
        self.current.store(0, Ordering::SeqCst);
    }
}

impl Clone for IncrementingClock {
    fn clone(&self) -> Self {
        Self {
            current: AtomicI64::new(self.current.load(Ordering::SeqCst)),
            increment: self.increment,
        }
    }
}

impl Default for IncrementingClock {
    fn default() -> Self {
        Self::milli_step()
    }
}

/// A shared clock source that can be cloned across threads
#[derive(Debug, Clone)]
pub struct SharedClock<C: ClockSource + ?Sized> {
    /// The inner clock source
    inner: Arc<C>,
}

impl<C: ClockSource + ?Sized> SharedClock<C> {
    /// Create a new shared clock
    pub fn new(clock: C) -> Self
    where
        C: Sized,
    {
        Self {
            inner: Arc::new(clock),
        }
    }

    /// Get a reference to the inner clock source
    pub fn inner(&self) -> &C {
        &self.inner
    }
}

impl<C: ClockSource + ?Sized> ClockSource for SharedClock<C> {
    fn now(&self) -> Timestamp {
        self.inner.now()
    }

    fn resolution(&self) -> TimeDelta {
        self.inner.resolution()
    }

    fn is_deterministic(&self) -> bool {
        self.inner.is_deterministic()
    }
}

// Cannot implement Clock for SharedClock because advance/set/reset require
// &mut self but SharedClock only has immutable access to the inner clock

/// Helper functions to create clocks
pub mod helpers {
    use super::*;

    /// Create a new system clock
    pub fn system_clock() -> SystemClock {
        SystemClock::new()
    }

    /// Create a new manual clock
    pub fn manual_clock(initial: Timestamp) -> ManualClock {
        ManualClock::new(initial)
    }

    /// Create a new incrementing clock
    pub fn incrementing_clock(increment: TimeDelta) -> IncrementingClock {
        IncrementingClock::new(Timestamp::zero(), increment)
    }

    /// Create a new shared system clock
    pub fn shared_system_clock() -> SharedClock<SystemClock> {
        SharedClock::new(SystemClock::new())
    }

    /// Create a new shared manual clock
    pub fn shared_manual_clock(initial: Timestamp) -> SharedClock<ManualClock> {
        SharedClock::new(ManualClock::new(initial))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock() {
        let clock = SystemClock::new();

        let t1 = ClockSource::now(&clock);
        std::thread::sleep(std::time::Duration::from_millis(10));
        let t2 = ClockSource::now(&clock);

        assert!(t2 > t1);
        assert!(!clock.is_deterministic());
    }

    #[test]
    fn test_system_clock_try_now() {
        let ts = SystemClock::try_now().unwrap();
        assert!(ts > Timestamp::zero());
    }

    #[test]
    fn test_manual_clock() {
        let mut clock = ManualClock::zero();

        assert_eq!(clock.now(), Timestamp::zero());

        clock.advance(TimeDelta::from_secs(1));
        assert_eq!(clock.now(), Timestamp::from_secs(1));

        clock.set(Timestamp::from_secs(10));
        assert_eq!(clock.now(), Timestamp::from_secs(10));

        clock.reset();
        assert_eq!(clock.now(), Timestamp::zero());

        assert!(clock.is_deterministic());
    }

    #[test]
    fn test_incrementing_clock() {
        let mut clock = IncrementingClock::new(Timestamp::zero(), TimeDelta::from_secs(1));

        // First read returns the initial value
        assert_eq!(clock.now(), Timestamp::zero());

        // Subsequent reads step by the configured amount
        assert_eq!(clock.now(), Timestamp::from_secs(1));
        assert_eq!(clock.now(), Timestamp::from_secs(2));

        clock.set(Timestamp::from_secs(10));
        assert_eq!(clock.now(), Timestamp::from_secs(10));

        clock.advance(TimeDelta::from_secs(5));
        assert_eq!(clock.now(), Timestamp::from_secs(16));

        assert!(clock.is_deterministic());
    }

    #[test]
    fn test_incrementing_clock_concurrent_reads() {
        let clock = Arc::new(IncrementingClock::milli_step());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let clock = Arc::clone(&clock);
                std::thread::spawn(move || {
                    for _ in 0..1_000 {
                        clock.now();
                    }
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }

        // Every read stepped the clock exactly once
        assert_eq!(clock.now(), Timestamp::from_millis(4_000));
    }

    #[test]
    fn test_shared_clock() {
        let shared = SharedClock::new(ManualClock::new(Timestamp::from_secs(5)));
        let shared2 = shared.clone();

        // Shared clock forwards to the inner clock
        assert_eq!(shared.now(), Timestamp::from_secs(5));
        assert_eq!(shared2.now(), Timestamp::from_secs(5));

        assert!(shared.is_deterministic());
        assert!(!helpers::shared_system_clock().is_deterministic());
    }
}
