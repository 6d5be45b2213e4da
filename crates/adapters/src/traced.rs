// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrappers for consistent observability

use crate::cache::{CacheError, SharedCache};
use crate::job::{JobError, MaintenanceJob};
use async_trait::async_trait;
use sidecron_core::{OutputBuffer, SchedulerState};
use tracing::Instrument;

/// Wrapper that adds tracing to any MaintenanceJob
#[derive(Clone)]
pub struct TracedJob<J> {
    inner: J,
}

impl<J> TracedJob<J> {
    pub fn new(inner: J) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<J: MaintenanceJob> MaintenanceJob for TracedJob<J> {
    async fn run_triggered(&self, out: &mut OutputBuffer) -> Result<(), JobError> {
        async {
            tracing::info!("starting");
            let start = std::time::Instant::now();
            let result = self.inner.run_triggered(out).await;
            let elapsed_ms = start.elapsed().as_millis() as u64;
            match &result {
                Ok(()) => tracing::info!(elapsed_ms, "job finished"),
                Err(e) => tracing::warn!(elapsed_ms, error = %e, "job reported failure"),
            }
            result
        }
        .instrument(tracing::info_span!("job.run_triggered"))
        .await
    }
}

/// Wrapper that adds tracing to any SharedCache
#[derive(Clone)]
pub struct TracedCache<C> {
    inner: C,
}

impl<C> TracedCache<C> {
    pub fn new(inner: C) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<C: SharedCache> SharedCache for TracedCache<C> {
    async fn get_general(&self) -> Result<Option<SchedulerState>, CacheError> {
        let result = self.inner.get_general().await;
        tracing::info_span!("cache.get_general").in_scope(|| match &result {
            Ok(state) => tracing::trace!(present = state.is_some(), "read"),
            Err(e) => tracing::warn!(error = %e, "read failed"),
        });
        result
    }

    async fn set_general(&self, state: &SchedulerState) -> Result<(), CacheError> {
        let result = self.inner.set_general(state).await;
        tracing::info_span!("cache.set_general").in_scope(|| match &result {
            Ok(()) => tracing::trace!(last_run_at = ?state.last_run_at, "written"),
            Err(e) => tracing::warn!(error = %e, "write failed"),
        });
        result
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
