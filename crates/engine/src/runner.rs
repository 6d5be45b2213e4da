// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Request-triggered orchestration of a scheduled-tasks run.
//!
//! Invoked inline from the request pipeline once per incoming request.
//! Gate, then claim, then — only for the winning request — run the job
//! under elevated privilege and replay its captured output to the
//! diagnostic sink. The winning request blocks for the job's full
//! duration; the privilege and capture boundaries are defined around
//! synchronous completion, so the job is never spawned off.

use crate::config::IntervalPolicy;
use crate::coordinator::DebounceCoordinator;
use crate::error::RunnerError;
use crate::gate;
use crate::job_runner::run_job;
use crate::privilege::ElevatedScope;
use sidecron_adapters::{DurableStore, MaintenanceJob, PrivilegeSession, SharedCache, TraceSink};
use sidecron_core::{format_utc, ClaimDecision, Clock, RequestContext};

/// Collaborators the runner is wired with.
pub struct RunnerDeps<C, D, P, J, S> {
    pub cache: C,
    pub store: D,
    pub privilege: P,
    pub job: J,
    pub sink: S,
}

/// Per-request entry point for opportunistic scheduling.
pub struct ScheduledTasksRunner<I, C, D, P, J, S, K: Clock> {
    coordinator: DebounceCoordinator<I, C, D>,
    privilege: P,
    job: J,
    sink: S,
    clock: K,
}

impl<I, C, D, P, J, S, K> ScheduledTasksRunner<I, C, D, P, J, S, K>
where
    I: IntervalPolicy,
    C: SharedCache,
    D: DurableStore,
    P: PrivilegeSession,
    J: MaintenanceJob,
    S: TraceSink,
    K: Clock,
{
    pub fn new(policy: I, deps: RunnerDeps<C, D, P, J, S>, clock: K) -> Self {
        Self {
            coordinator: DebounceCoordinator::new(policy, deps.cache, deps.store),
            privilege: deps.privilege,
            job: deps.job,
            sink: deps.sink,
            clock,
        }
    }

    /// Claim on every eligible request. Debug escape hatch.
    pub fn with_force_run(mut self, force_run: bool) -> Self {
        self.coordinator = self.coordinator.with_force_run(force_run);
        self
    }

    /// Whether this request is even a candidate for triggering.
    pub fn should_run(&self, ctx: &RequestContext) -> bool {
        gate::is_candidate(ctx)
    }

    /// Evaluate and, if this request wins the claim, run the scheduled
    /// tasks inline.
    ///
    /// Never returns an error for cache trouble or job failure; only
    /// misconfiguration propagates.
    pub async fn run_scheduled_tasks(&self, ctx: &RequestContext) -> Result<(), RunnerError> {
        if !gate::is_candidate(ctx) {
            return Ok(());
        }

        let now = self.clock.now();
        let decision = self.coordinator.maybe_claim(now).await?;

        match &decision {
            ClaimDecision::Disabled { reason, .. } => {
                self.sink
                    .trace(&format!("-> Scheduled tasks not running: {reason}."));
            }
            ClaimDecision::NotDue { .. } => {
                self.sink.trace("-> Scheduled tasks not triggered.");
            }
            ClaimDecision::Claimed { .. } => {
                self.sink.trace("-> Scheduled Tasks: Starting...");
                let outcome = {
                    let _scope = ElevatedScope::enter(&self.privilege);
                    run_job(&self.job).await
                };
                for segment in outcome.segments() {
                    self.sink.trace(&segment);
                }
                self.sink.trace("Finished Scheduled Tasks.");
            }
        }

        // operator visibility on every branch where a value is known
        if let Some(next_run_at) = decision.next_run_at() {
            self.sink
                .trace(&format!("Next run will be from: {}", format_utc(next_run_at)));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
