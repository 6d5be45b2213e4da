// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-request context consulted by the trigger gate.

/// How the surrounding request entered the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMode {
    /// Ordinary live traffic.
    Interactive,
    /// Bulk/offline replay of historical data (e.g. log import).
    Bulk,
}

/// The slice of request state the scheduler needs: enough to decide
/// eligibility, nothing more. Created and dropped within one request.
#[derive(Debug, Clone)]
pub struct RequestContext {
    pub mode: RequestMode,
    /// Whether this request will be recorded as statistics. Requests the
    /// pipeline excludes from recording never trigger maintenance either.
    pub records_statistics: bool,
}

impl RequestContext {
    /// Context for a live request.
    pub fn interactive(records_statistics: bool) -> Self {
        Self {
            mode: RequestMode::Interactive,
            records_statistics,
        }
    }

    /// Context for a bulk/offline replay request.
    pub fn bulk(records_statistics: bool) -> Self {
        Self {
            mode: RequestMode::Bulk,
            records_statistics,
        }
    }
}
