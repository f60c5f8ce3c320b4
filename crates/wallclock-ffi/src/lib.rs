//! C-compatible FFI surface for the wallclock clock primitive
//!
//! This crate exports the millisecond wall-clock read as plain C symbols so
//! that compiled or transpiled programs can link against it, typically from
//! the runtime-support layer of their standard library. The contract is
//! standard Unix-epoch milliseconds in a signed 64-bit integer: not seconds,
//! not nanoseconds, not floating point.

#![warn(missing_docs)]
#![allow(unsafe_code)]

/// Status codes returned by the checked FFI calls
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum WallclockStatus {
    /// Operation succeeded
    Success = 0,
    /// A required out-parameter was null
    NullArgument = 1,
    /// The system real-time clock reported an instant before the Unix epoch
    ClockBeforeEpoch = 2,
}

/// Read the current wall-clock time as milliseconds since the Unix epoch.
///
/// The value is `seconds_since_epoch * 1000 + nanos_within_second / 1_000_000`
/// with the sub-millisecond remainder truncated. If the platform clock read
/// fails, the process aborts: no sentinel value is ever returned, and no
/// panic crosses the C boundary.
#[no_mangle]
pub extern "C" fn wallclock_current_time_millis() -> i64 {
    match wallclock_core::try_current_time_millis() {
        Ok(millis) => millis,
        Err(err) => {
            log::error!("fatal wall-clock read failure: {}", err);
            std::process::abort();
        }
    }
}

/// Checked variant of [`wallclock_current_time_millis`] for hosts that
/// prefer to observe the failure instead of aborting. Writes the timestamp
/// through `out` and returns a status code.
#[no_mangle]
pub extern "C" fn wallclock_try_current_time_millis(out: *mut i64) -> WallclockStatus {
    if out.is_null() {
        return WallclockStatus::NullArgument;
    }

    match wallclock_core::try_current_time_millis() {
        Ok(millis) => {
            unsafe { *out = millis };
            WallclockStatus::Success
        }
        Err(_) => WallclockStatus::ClockBeforeEpoch,
    }
}

/// Suspend the calling thread for the specified number of milliseconds.
/// Zero and negative arguments return immediately.
#[no_mangle]
pub extern "C" fn wallclock_sleep_millis(millis: i64) {
    if millis > 0 {
        std::thread::sleep(std::time::Duration::from_millis(millis as u64));
    }
}
