// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::cache::FakeCache;
use crate::job::FakeJob;

#[tokio::test]
async fn traced_job_passes_output_and_result_through() {
    let inner = FakeJob::with_segments(&["report"]);
    let job = TracedJob::new(inner.clone());

    let mut out = OutputBuffer::new();
    job.run_triggered(&mut out).await.unwrap();

    assert_eq!(out.into_outcome().segments(), vec!["report"]);
    assert_eq!(inner.runs(), 1);
}

#[tokio::test]
async fn traced_job_relays_failure() {
    let inner = FakeJob::new();
    inner.set_failure("boom");
    let job = TracedJob::new(inner);
    let err = job.run_triggered(&mut OutputBuffer::new()).await.unwrap_err();
    assert!(err.to_string().contains("boom"));
}

#[tokio::test]
async fn traced_cache_passes_state_through() {
    let inner = FakeCache::new();
    let cache = TracedCache::new(inner.clone());

    let state = SchedulerState::enabled();
    cache.set_general(&state).await.unwrap();
    assert_eq!(cache.get_general().await.unwrap(), Some(state));

    // the wrapper must not swallow failures either
    inner.set_unavailable(true);
    assert!(cache.get_general().await.is_err());
}
