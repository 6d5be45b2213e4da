// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Trace sink forwarding to the tracing subscriber

use super::TraceSink;

/// Forwards each trace line as a `tracing` debug event under the
/// `scheduler` target.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogTraceSink;

impl TraceSink for LogTraceSink {
    fn trace(&self, line: &str) {
        tracing::debug!(target: "scheduler", "{line}");
    }
}
