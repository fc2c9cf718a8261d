//! Time source for submission timestamps.

use std::time::{SystemTime, UNIX_EPOCH};

/// Supplies the current time in whole seconds since the Unix epoch.
pub trait Clock: Send + Sync {
    /// Returns the current timestamp.
    fn now_secs(&self) -> u64;
}

/// The system wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> u64 {
        // A clock set before 1970 reads as the epoch.
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

/// A clock frozen at a fixed timestamp.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub u64);

impl Clock for FixedClock {
    fn now_secs(&self) -> u64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_after_2023() {
        assert!(SystemClock.now_secs() > 1_672_531_200);
    }

    #[test]
    fn fixed_clock() {
        assert_eq!(FixedClock(7).now_secs(), 7);
    }
}
