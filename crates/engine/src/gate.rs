// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Eligibility predicate applied before any interval checking

use sidecron_core::{RequestContext, RequestMode};

/// Whether this request may evaluate a trigger at all.
///
/// Bulk/offline replays load historical data and must not fire
/// maintenance tied to "now". Requests the pipeline excludes from
/// statistics recording are not candidates either.
pub fn is_candidate(ctx: &RequestContext) -> bool {
    if ctx.mode == RequestMode::Bulk {
        return false;
    }
    ctx.records_statistics
}

#[cfg(test)]
#[path = "gate_tests.rs"]
mod tests;
