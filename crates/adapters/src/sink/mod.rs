// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic trace sink adapters

mod log;
mod noop;

pub use log::LogTraceSink;
pub use noop::NoOpTraceSink;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::RecordingTraceSink;

/// Line-oriented diagnostic sink for operator-facing trace messages.
///
/// Infallible by contract: a trace line that cannot be delivered is
/// dropped, never an error the scheduler would surface to a request.
pub trait TraceSink: Clone + Send + Sync + 'static {
    /// Emit one trace line.
    fn trace(&self, line: &str);
}
