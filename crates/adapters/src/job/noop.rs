// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op job adapter

use super::{JobError, MaintenanceJob};
use async_trait::async_trait;
use sidecron_core::OutputBuffer;

/// Job that does nothing. Placeholder for deployments that wire the
/// scheduler before the maintenance job itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpJob;

#[async_trait]
impl MaintenanceJob for NoOpJob {
    async fn run_triggered(&self, _out: &mut OutputBuffer) -> Result<(), JobError> {
        Ok(())
    }
}
