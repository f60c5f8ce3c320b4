use wallclock_core::{
    current_time_millis, Clock, ClockSource, IncrementingClock, ManualClock, SystemClock,
    TimeDelta, Timestamp, Timer,
};

fn main() {
    println!("Testing wallclock...");

    // Test the system clock read
    let millis = current_time_millis();
    println!("Current time: {} ms since epoch", millis);
    assert!(millis > 0);

    let t1 = SystemClock::now();
    let t2 = SystemClock::now();
    assert!(t2 >= t1);
    println!("Successive reads: {} -> {}", t1, t2);

    // Test ManualClock
    let mut clock = ManualClock::new(Timestamp::from_millis(100));
    println!("Initial clock time: {}", clock.now());
    assert_eq!(clock.now(), Timestamp::from_millis(100));

    clock.advance(TimeDelta::from_millis(50));
    println!("Advanced clock time: {}", clock.now());
    assert_eq!(clock.now(), Timestamp::from_millis(150));

    // Test IncrementingClock
    let stepping = IncrementingClock::second_step();
    println!("Stepped reads: {} {} {}", stepping.now(), stepping.now(), stepping.now());

    // Test Timer
    let timer = Timer::new();
    wallclock_core::sleep(TimeDelta::from_millis(10));
    let elapsed = timer.elapsed();
    println!("Timer elapsed: {}", elapsed);
    assert!(elapsed > TimeDelta::zero());

    println!("All tests passed!");
}
