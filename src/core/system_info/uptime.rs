use std::time::Duration;
use sysinfo::System;

/// Boot time in seconds since the Unix epoch
pub fn boot_time() -> u64 {
    System::boot_time()
}

/// Time elapsed between boot and `now`, both in seconds since the epoch.
/// A boot time in the future (clock skew) yields zero.
pub fn uptime_since(boot_time: u64, now: i64) -> Duration {
    let now = u64::try_from(now).unwrap_or(0);
    Duration::from_secs(now.saturating_sub(boot_time))
}

/// Whole hours and remaining whole minutes; leftover seconds are dropped
pub fn split_hours_minutes(uptime: Duration) -> (u64, u64) {
    let secs = uptime.as_secs();
    (secs / 3600, (secs % 3600) / 60)
}
