// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Captured job output and its sub-task segmentation.
//!
//! The maintenance job writes human-readable progress into an explicit
//! [`OutputBuffer`] handed to it by the runner; nothing is intercepted from
//! a global stream. After the run, [`JobOutcome::segments`] splits the
//! capture into the discrete sub-task reports the job produced.

use std::fmt;

/// Delimiter the job emits between reported sub-tasks.
pub const SEGMENT_DELIMITER: &str = "</pre>";

/// Decorative markup stripped from each segment before forwarding.
pub const SEGMENT_MARKUP_OPEN: &str = "<pre>";

/// Explicit capture target for one job execution.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    buf: String,
}

impl OutputBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append raw text as the job produced it.
    pub fn write_raw(&mut self, text: &str) {
        self.buf.push_str(text);
    }

    /// Append one complete sub-task report, wrapped in the markup and
    /// delimiter the segmentation expects.
    pub fn write_segment(&mut self, report: &str) {
        self.buf.push_str(SEGMENT_MARKUP_OPEN);
        self.buf.push_str(report);
        self.buf.push_str(SEGMENT_DELIMITER);
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Finish the capture.
    pub fn into_outcome(self) -> JobOutcome {
        JobOutcome { raw: self.buf }
    }
}

impl fmt::Write for OutputBuffer {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.buf.push_str(s);
        Ok(())
    }
}

/// The captured textual output of one job execution. Consumed immediately
/// by the diagnostic sink, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobOutcome {
    raw: String,
}

impl JobOutcome {
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self { raw: raw.into() }
    }

    /// The capture exactly as written.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Split the capture into sub-task reports, in original order, with
    /// decorative markup stripped.
    ///
    /// Splitting on a trailing delimiter leaves an empty remainder; that
    /// remainder is dropped so the count matches what the job produced.
    pub fn segments(&self) -> Vec<String> {
        let mut segments: Vec<String> = self
            .raw
            .split(SEGMENT_DELIMITER)
            .map(|piece| piece.replace(SEGMENT_MARKUP_OPEN, ""))
            .collect();
        if segments.last().is_some_and(|last| last.is_empty()) {
            segments.pop();
        }
        segments
    }
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
