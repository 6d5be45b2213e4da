// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Job invocation with output capture.
//!
//! The job writes into an explicit buffer, never into the caller's
//! response channel. Whatever the job reports — success, partial
//! failure, or an outright error — comes back as captured text; the
//! coordinator never interprets job-internal failures as its own.

use sidecron_adapters::MaintenanceJob;
use sidecron_core::{JobOutcome, OutputBuffer};

/// Run the maintenance job and capture everything it writes.
///
/// A job error is relayed as a captured segment rather than raised: a
/// failing maintenance job must not fail the triggering request.
pub async fn run_job<J: MaintenanceJob>(job: &J) -> JobOutcome {
    let mut out = OutputBuffer::new();
    if let Err(e) = job.run_triggered(&mut out).await {
        tracing::warn!(error = %e, "maintenance job reported failure");
        out.write_segment(&format!("scheduled tasks failed: {e}"));
    }
    out.into_outcome()
}

#[cfg(test)]
#[path = "job_runner_tests.rs"]
mod tests;
