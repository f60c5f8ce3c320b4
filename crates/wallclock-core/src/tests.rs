// Tests for the wallclock crate
use std::thread::sleep as std_sleep;
use std::time::{Duration as StdDuration, SystemTime, UNIX_EPOCH};

use super::clock::{Clock, ClockSource, ManualClock, SystemClock};
use super::{current_time_millis, deadline, now, timer, try_current_time_millis};
use super::{TimeDelta, Timestamp};

#[test]
fn test_successive_reads_non_decreasing() {
    let t1 = current_time_millis();
    std_sleep(StdDuration::from_millis(5));
    let t2 = current_time_millis();

    assert!(t2 >= t1);
}

#[test]
fn test_tight_loop_never_errors_and_never_decreases() {
    let mut previous = try_current_time_millis().expect("clock read failed");
    for _ in 0..10_000 {
        let current = try_current_time_millis().expect("clock read failed");
        assert!(current >= previous);
        previous = current;
    }
}

#[test]
fn test_agrees_with_independent_query() {
    let independent_secs = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_secs() as i64;
    let reported_secs = current_time_millis() / 1_000;

    // Within a small bounded delta of an independent time-of-day query
    assert!((reported_secs - independent_secs).abs() <= 2);
}

#[test]
fn test_millis_not_seconds_or_nanos() {
    let millis = current_time_millis();

    // A plausible millisecond reading for 2020..2200, which a seconds or
    // nanoseconds reading would fall far outside of
    assert!(millis > 1_577_836_800_000);
    assert!(millis < 7_258_118_400_000);
}

#[test]
fn test_helpers_consistency() {
    let before = now();
    let target = deadline(TimeDelta::from_secs(60));
    assert!(target >= before + TimeDelta::from_secs(60));

    let t = timer();
    std_sleep(StdDuration::from_millis(10));
    let elapsed = t.elapsed();
    assert!(elapsed > TimeDelta::zero());
    assert!(t.start_time() <= SystemClock::now());
}

#[test]
fn test_sleep_is_observable() {
    let t = timer();
    super::sleep(TimeDelta::from_millis(20));
    assert!(t.has_elapsed(TimeDelta::from_millis(10)));

    // Negative spans do not sleep
    super::sleep(TimeDelta::from_millis(-50));
}

#[test]
fn test_deterministic_clock_drives_timer_free_code() {
    let mut clock = ManualClock::new(Timestamp::from_millis(100));
    assert_eq!(clock.now(), Timestamp::from_millis(100));

    clock.advance(TimeDelta::from_millis(50));
    assert_eq!(clock.now(), Timestamp::from_millis(150));
}
