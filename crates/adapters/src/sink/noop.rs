// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! No-op trace sink

use super::TraceSink;

/// Discards every trace line.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpTraceSink;

impl TraceSink for NoOpTraceSink {
    fn trace(&self, _line: &str) {}
}
