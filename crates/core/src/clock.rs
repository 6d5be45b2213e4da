// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Wall-clock abstraction for time-dependent scheduling decisions.
//!
//! Scheduling state is shared across workers and hosts, so the clock deals
//! in epoch seconds rather than monotonic instants.

/// Wall-clock time in whole seconds since the Unix epoch.
pub type Timestamp = u64;

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync + 'static {
    /// Current time in epoch seconds.
    fn now(&self) -> Timestamp;
}

/// Production clock backed by the system time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    }
}

/// Controllable clock for tests.
///
/// Clones share the same underlying time, so a clock handed to the code
/// under test can be advanced from the test body.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, Default)]
pub struct FakeClock {
    now: std::sync::Arc<parking_lot::Mutex<Timestamp>>,
}

#[cfg(any(test, feature = "test-support"))]
impl FakeClock {
    /// Create a clock starting at epoch zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a clock starting at the given epoch time.
    pub fn at(now: Timestamp) -> Self {
        let clock = Self::default();
        clock.set(now);
        clock
    }

    /// Set the current time.
    pub fn set(&self, now: Timestamp) {
        *self.now.lock() = now;
    }

    /// Advance the current time by `secs`.
    pub fn advance(&self, secs: u64) {
        *self.now.lock() += secs;
    }
}

#[cfg(any(test, feature = "test-support"))]
impl Clock for FakeClock {
    fn now(&self) -> Timestamp {
        *self.now.lock()
    }
}

#[cfg(test)]
#[path = "clock_tests.rs"]
mod tests;
