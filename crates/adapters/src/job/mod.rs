// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Maintenance job adapters

mod noop;

pub use noop::NoOpJob;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::FakeJob;

use async_trait::async_trait;
use sidecron_core::OutputBuffer;
use thiserror::Error;

/// Errors from a job run, opaque to the coordinator
#[derive(Debug, Error)]
pub enum JobError {
    #[error("job failed: {0}")]
    Failed(String),
}

/// The triggered maintenance job.
///
/// An opaque long-running operation: internal scheduling, retries, and
/// partial-failure handling are its own business. It writes human-readable
/// sub-task reports into `out`, one per segment, and may return an error —
/// which the runner relays as captured text, never raises.
#[async_trait]
pub trait MaintenanceJob: Clone + Send + Sync + 'static {
    /// Run in triggered mode, reporting progress into `out`.
    async fn run_triggered(&self, out: &mut OutputBuffer) -> Result<(), JobError>;
}
