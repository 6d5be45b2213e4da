// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::config::SchedulingConfig;
use sidecron_adapters::{
    FakeCache, FakeJob, FakePrivilegeSession, FakeStore, RecordingTraceSink,
};
use sidecron_core::{FakeClock, SchedulerState};

struct Fixture {
    cache: FakeCache,
    store: FakeStore,
    privilege: FakePrivilegeSession,
    job: FakeJob,
    sink: RecordingTraceSink,
    clock: FakeClock,
}

impl Fixture {
    fn new(state: SchedulerState) -> Self {
        Self {
            cache: FakeCache::with_state(state),
            store: FakeStore::new(),
            privilege: FakePrivilegeSession::new(false),
            job: FakeJob::new(),
            sink: RecordingTraceSink::new(),
            clock: FakeClock::new(),
        }
    }

    fn runner(
        &self,
        interval: i64,
    ) -> ScheduledTasksRunner<
        SchedulingConfig,
        FakeCache,
        FakeStore,
        FakePrivilegeSession,
        FakeJob,
        RecordingTraceSink,
        FakeClock,
    > {
        ScheduledTasksRunner::new(
            SchedulingConfig::with_interval(interval),
            RunnerDeps {
                cache: self.cache.clone(),
                store: self.store.clone(),
                privilege: self.privilege.clone(),
                job: self.job.clone(),
                sink: self.sink.clone(),
            },
            self.clock.clone(),
        )
    }
}

#[tokio::test]
async fn non_candidate_request_does_nothing() {
    let fx = Fixture::new(SchedulerState::enabled());
    let runner = fx.runner(3600);

    runner
        .run_scheduled_tasks(&RequestContext::bulk(true))
        .await
        .unwrap();

    assert!(fx.cache.calls().is_empty());
    assert!(fx.sink.lines().is_empty());
    assert_eq!(fx.job.runs(), 0);
}

#[tokio::test]
async fn should_run_mirrors_the_gate() {
    let fx = Fixture::new(SchedulerState::enabled());
    let runner = fx.runner(3600);
    assert!(runner.should_run(&RequestContext::interactive(true)));
    assert!(!runner.should_run(&RequestContext::bulk(true)));
    assert!(!runner.should_run(&RequestContext::interactive(false)));
}

#[tokio::test]
async fn claimed_run_emits_full_transcript() {
    let fx = Fixture::new(SchedulerState::enabled());
    fx.job.set_segments(&["daily reports", "purge"]);
    let runner = fx.runner(3600);
    fx.clock.set(1000);

    runner
        .run_scheduled_tasks(&RequestContext::interactive(true))
        .await
        .unwrap();

    assert_eq!(
        fx.sink.lines(),
        vec![
            "-> Scheduled Tasks: Starting...".to_string(),
            "daily reports".to_string(),
            "purge".to_string(),
            "Finished Scheduled Tasks.".to_string(),
            "Next run will be from: 1970-01-01 01:16:40 UTC".to_string(),
        ]
    );
}

#[tokio::test]
async fn scenario_claim_at_1000_with_hour_interval() {
    let fx = Fixture::new(SchedulerState::enabled());
    let runner = fx.runner(3600);
    fx.clock.set(1000);

    runner
        .run_scheduled_tasks(&RequestContext::interactive(true))
        .await
        .unwrap();

    assert_eq!(
        fx.cache.visible_state().and_then(|s| s.last_run_at),
        Some(1000)
    );
    assert_eq!(fx.store.get("lastTrackerCronRun"), Some("1000".to_string()));
    // next run 1000 + 3600 = 4600
    assert!(fx.sink.contains(&sidecron_core::format_utc(4600)));
    assert_eq!(fx.job.runs(), 1);
}

#[tokio::test]
async fn job_runs_elevated_and_level_is_restored() {
    let fx = Fixture::new(SchedulerState::enabled());
    let observed = std::sync::Arc::new(parking_lot::Mutex::new(None));
    let probe = observed.clone();
    let session = fx.privilege.clone();
    fx.job.on_run(move || {
        *probe.lock() = Some(session.has_elevated_access());
    });
    let runner = fx.runner(3600);

    runner
        .run_scheduled_tasks(&RequestContext::interactive(true))
        .await
        .unwrap();

    assert_eq!(*observed.lock(), Some(true));
    assert!(!fx.privilege.has_elevated_access());
    assert_eq!(fx.privilege.transitions(), vec![true, false]);
}

#[tokio::test]
async fn job_failure_is_relayed_not_raised() {
    let fx = Fixture::new(SchedulerState::enabled());
    fx.job.set_failure("report generation broke");
    let runner = fx.runner(3600);

    runner
        .run_scheduled_tasks(&RequestContext::interactive(true))
        .await
        .unwrap();

    assert!(fx.sink.contains("report generation broke"));
    assert!(fx.sink.contains("Finished Scheduled Tasks."));
    // privilege restored despite the failure
    assert!(!fx.privilege.has_elevated_access());
}

#[tokio::test]
async fn second_request_inside_the_window_is_not_triggered() {
    let fx = Fixture::new(SchedulerState::enabled());
    let runner = fx.runner(3600);
    fx.clock.set(1000);

    runner
        .run_scheduled_tasks(&RequestContext::interactive(true))
        .await
        .unwrap();
    fx.clock.advance(10);
    runner
        .run_scheduled_tasks(&RequestContext::interactive(true))
        .await
        .unwrap();

    assert_eq!(fx.job.runs(), 1);
    assert!(fx.sink.contains("-> Scheduled tasks not triggered."));
    // both requests report the same next eligible time
    let next_line = format!("Next run will be from: {}", sidecron_core::format_utc(4600));
    assert_eq!(
        fx.sink.lines().iter().filter(|l| **l == next_line).count(),
        2
    );
}

#[tokio::test]
async fn disabled_browser_trigger_reports_reason() {
    let mut state = SchedulerState::enabled();
    state.browser_trigger_enabled = false;
    state.claim(1000);
    let fx = Fixture::new(state);
    let runner = fx.runner(3600);
    fx.clock.set(2000);

    runner
        .run_scheduled_tasks(&RequestContext::interactive(true))
        .await
        .unwrap();

    assert!(fx.sink.contains("browser trigger is disabled"));
    // next-run line still emitted: the state was readable
    assert!(fx.sink.contains(&sidecron_core::format_utc(4600)));
    assert_eq!(fx.job.runs(), 0);
}

#[tokio::test]
async fn zero_interval_reports_reason_without_next_run() {
    let fx = Fixture::new(SchedulerState::enabled());
    let runner = fx.runner(0);

    runner
        .run_scheduled_tasks(&RequestContext::interactive(true))
        .await
        .unwrap();

    assert!(fx.sink.contains("minimum interval is zero or negative"));
    assert!(!fx.sink.contains("Next run will be from"));
}

#[tokio::test]
async fn cache_outage_never_reaches_the_request() {
    let fx = Fixture::new(SchedulerState::enabled());
    fx.cache.set_unavailable(true);
    let runner = fx.runner(3600);

    runner
        .run_scheduled_tasks(&RequestContext::interactive(true))
        .await
        .unwrap();

    assert!(fx.sink.contains("shared cache is unavailable"));
    assert_eq!(fx.job.runs(), 0);
}

#[tokio::test]
async fn missing_configuration_propagates() {
    let fx = Fixture::new(SchedulerState::enabled());
    let runner = ScheduledTasksRunner::new(
        SchedulingConfig::default(),
        RunnerDeps {
            cache: fx.cache.clone(),
            store: fx.store.clone(),
            privilege: fx.privilege.clone(),
            job: fx.job.clone(),
            sink: fx.sink.clone(),
        },
        fx.clock.clone(),
    );

    let err = runner
        .run_scheduled_tasks(&RequestContext::interactive(true))
        .await
        .unwrap_err();
    assert!(matches!(err, RunnerError::Config(_)));
}

#[tokio::test]
async fn force_run_triggers_back_to_back() {
    let fx = Fixture::new(SchedulerState::enabled());
    let runner = fx.runner(3600).with_force_run(true);
    fx.clock.set(1000);

    runner
        .run_scheduled_tasks(&RequestContext::interactive(true))
        .await
        .unwrap();
    fx.clock.advance(1);
    runner
        .run_scheduled_tasks(&RequestContext::interactive(true))
        .await
        .unwrap();

    assert_eq!(fx.job.runs(), 2);
}
