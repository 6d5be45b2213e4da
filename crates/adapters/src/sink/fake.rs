// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Recording trace sink for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::TraceSink;
use parking_lot::Mutex;
use std::sync::Arc;

/// Records every trace line for assertions.
#[derive(Debug, Clone, Default)]
pub struct RecordingTraceSink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl RecordingTraceSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded lines, in order
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().clone()
    }

    /// True if any recorded line contains `needle`
    pub fn contains(&self, needle: &str) -> bool {
        self.lines.lock().iter().any(|l| l.contains(needle))
    }
}

impl TraceSink for RecordingTraceSink {
    fn trace(&self, line: &str) {
        self.lines.lock().push(line.to_string());
    }
}
