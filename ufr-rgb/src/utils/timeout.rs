//! Delay helpers used by the device lifecycle and the poll loop.

use std::time::Duration;

use crate::constants::{POLL_INTERVAL_MS, RESET_SETTLE_MS};

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Default settling time after a reader reset.
pub fn default_settle_delay() -> Duration {
    ms(RESET_SETTLE_MS)
}

/// Default delay between card polls.
pub fn default_poll_interval() -> Duration {
    ms(POLL_INTERVAL_MS)
}

/// Sleep for `delay`, skipping the syscall for a zero delay (tests run with
/// zero delays).
pub fn pause(delay: Duration) {
    if !delay.is_zero() {
        std::thread::sleep(delay);
    }
}
