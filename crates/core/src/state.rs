// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared scheduler state persisted in the cross-worker cache.

use crate::clock::Timestamp;
use serde::{Deserialize, Serialize};

/// Key under which a claimed run timestamp is mirrored to the durable store.
///
/// Audit-only: the coordinator writes it on every claim and never reads it
/// back. Operators can inspect it after a cache eviction or restart.
pub const LAST_RUN_STORE_KEY: &str = "lastTrackerCronRun";

/// Cross-worker scheduling state.
///
/// Lives in the shared cache for the lifetime of the cache; an absent or
/// evicted entry deserializes to the default, which is inert (never run,
/// browser trigger off) so an empty cache fails closed.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SchedulerState {
    /// Wall-clock time the job was last claimed to start; `None` means never.
    #[serde(default)]
    pub last_run_at: Option<Timestamp>,
    /// Operator toggle. When false an external dedicated scheduler owns the
    /// job and request-triggered runs must stay inert.
    #[serde(default)]
    pub browser_trigger_enabled: bool,
}

impl SchedulerState {
    /// State with the browser trigger switched on and no run recorded.
    pub fn enabled() -> Self {
        Self {
            last_run_at: None,
            browser_trigger_enabled: true,
        }
    }

    /// Next time a claim becomes eligible, or `None` when never run
    /// (never run means due immediately).
    pub fn next_run_at(&self, interval_secs: u64) -> Option<Timestamp> {
        self.last_run_at.map(|t| t + interval_secs)
    }

    /// Record a claim at `now` and return the timestamp written.
    ///
    /// `last_run_at` is monotonically non-decreasing once set: a worker
    /// whose clock lags a stored claim keeps the stored value.
    pub fn claim(&mut self, now: Timestamp) -> Timestamp {
        let claimed = match self.last_run_at {
            Some(previous) => now.max(previous),
            None => now,
        };
        self.last_run_at = Some(claimed);
        claimed
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
