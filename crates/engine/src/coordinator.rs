// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Claim-before-run debouncing over the shared cache.
//!
//! Many request workers race to read the shared last-run timestamp; a
//! naive read-then-run would let every racer execute the job. Writing the
//! claim back *before* any job logic runs bounds duplicate execution to
//! the read-to-write gap instead of the job's full duration. The window
//! is narrowed, not closed: cache consistency is best effort, and the
//! mechanism throttles rather than mutually excludes.

use crate::config::{ConfigError, IntervalPolicy};
use sidecron_adapters::{DurableStore, SharedCache};
use sidecron_core::{ClaimDecision, DisabledReason, Timestamp, LAST_RUN_STORE_KEY};

/// Owns the shared scheduler state and decides, per request, whether this
/// request claims the right to run the maintenance job.
pub struct DebounceCoordinator<I, C, D> {
    policy: I,
    cache: C,
    store: D,
    force_run: bool,
}

impl<I, C, D> DebounceCoordinator<I, C, D>
where
    I: IntervalPolicy,
    C: SharedCache,
    D: DurableStore,
{
    pub fn new(policy: I, cache: C, store: D) -> Self {
        Self {
            policy,
            cache,
            store,
            force_run: false,
        }
    }

    /// Claim on every eligible request regardless of the interval window.
    /// Debug escape hatch.
    pub fn with_force_run(mut self, force_run: bool) -> Self {
        self.force_run = force_run;
        self
    }

    /// Evaluate whether this request claims the run at `now`.
    ///
    /// A winning claim is published to the cache before the caller runs
    /// any job logic, then mirrored to the durable store for audit. Cache
    /// trouble fails closed to `Disabled`; only missing configuration is
    /// an error.
    pub async fn maybe_claim(&self, now: Timestamp) -> Result<ClaimDecision, ConfigError> {
        let interval = self.policy.minimum_interval_secs()?;
        if interval <= 0 {
            return Ok(ClaimDecision::Disabled {
                reason: DisabledReason::IntervalNotPositive,
                next_run_at: None,
            });
        }
        let interval = interval as u64;

        let mut state = match self.cache.get_general().await {
            Ok(entry) => entry.unwrap_or_default(),
            Err(e) => {
                tracing::warn!(error = %e, "shared cache unreadable; not triggering");
                return Ok(ClaimDecision::Disabled {
                    reason: DisabledReason::CacheUnavailable,
                    next_run_at: None,
                });
            }
        };

        if !state.browser_trigger_enabled {
            return Ok(ClaimDecision::Disabled {
                reason: DisabledReason::BrowserTriggerOff,
                next_run_at: state.next_run_at(interval),
            });
        }

        if let Some(next_run_at) = state.next_run_at(interval) {
            if !self.force_run && now < next_run_at {
                return Ok(ClaimDecision::NotDue { next_run_at });
            }
        }

        // Claim: publish the new timestamp before any job logic executes.
        let last_run_at = state.claim(now);
        if let Err(e) = self.cache.set_general(&state).await {
            // The claim never became visible; running now would reopen the
            // full-job-duration duplicate window. Fail closed.
            tracing::warn!(error = %e, "claim write failed; not triggering");
            return Ok(ClaimDecision::Disabled {
                reason: DisabledReason::CacheUnavailable,
                next_run_at: None,
            });
        }

        // Durable mirror for audit; never read back, failure keeps the claim.
        if let Err(e) = self
            .store
            .set(LAST_RUN_STORE_KEY, &last_run_at.to_string())
            .await
        {
            tracing::warn!(error = %e, "durable mirror write failed");
        }

        tracing::debug!(last_run_at, "claimed scheduled-tasks run");
        Ok(ClaimDecision::Claimed {
            last_run_at,
            next_run_at: last_run_at + interval,
        })
    }
}

#[cfg(test)]
#[path = "coordinator_tests.rs"]
mod tests;
