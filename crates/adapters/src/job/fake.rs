// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake job adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{JobError, MaintenanceJob};
use async_trait::async_trait;
use parking_lot::Mutex;
use sidecron_core::OutputBuffer;
use std::sync::Arc;

type ObserveHook = Arc<dyn Fn() + Send + Sync>;

#[derive(Default)]
struct FakeJobState {
    segments: Vec<String>,
    fail_with: Option<String>,
    runs: u64,
    observe: Option<ObserveHook>,
}

/// Fake job with scripted output for testing.
///
/// Writes its configured segments on every run, optionally fails after
/// writing them, counts invocations, and can call an observation hook
/// mid-run (e.g. to probe the privilege level the job executes under).
#[derive(Clone, Default)]
pub struct FakeJob {
    inner: Arc<Mutex<FakeJobState>>,
}

impl FakeJob {
    pub fn new() -> Self {
        Self::default()
    }

    /// Job reporting the given sub-task segments
    pub fn with_segments(segments: &[&str]) -> Self {
        let job = Self::default();
        job.inner.lock().segments = segments.iter().map(|s| s.to_string()).collect();
        job
    }

    /// Replace the scripted segments
    pub fn set_segments(&self, segments: &[&str]) {
        self.inner.lock().segments = segments.iter().map(|s| s.to_string()).collect();
    }

    /// Make every run fail with this message, after writing its segments
    pub fn set_failure(&self, message: &str) {
        self.inner.lock().fail_with = Some(message.to_string());
    }

    /// Hook invoked in the middle of each run
    pub fn on_run(&self, hook: impl Fn() + Send + Sync + 'static) {
        self.inner.lock().observe = Some(Arc::new(hook));
    }

    /// Number of completed invocations
    pub fn runs(&self) -> u64 {
        self.inner.lock().runs
    }
}

#[async_trait]
impl MaintenanceJob for FakeJob {
    async fn run_triggered(&self, out: &mut OutputBuffer) -> Result<(), JobError> {
        let (segments, fail_with, observe) = {
            let mut state = self.inner.lock();
            state.runs += 1;
            (
                state.segments.clone(),
                state.fail_with.clone(),
                state.observe.clone(),
            )
        };
        if let Some(hook) = observe {
            hook();
        }
        for segment in &segments {
            out.write_segment(segment);
        }
        match fail_with {
            Some(message) => Err(JobError::Failed(message)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
