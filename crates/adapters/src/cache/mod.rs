// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Shared cache adapters holding the cross-worker scheduler state

mod memory;

pub use memory::InMemoryCache;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{CacheCall, FakeCache};

use async_trait::async_trait;
use sidecron_core::SchedulerState;
use thiserror::Error;

/// Errors from cache operations
#[derive(Debug, Error)]
pub enum CacheError {
    #[error("cache unavailable: {0}")]
    Unavailable(String),
}

/// Best-effort shared cache for the scheduler state.
///
/// Entries may be missing or evicted at any time; callers must treat
/// `Ok(None)` as "never written" and failures as "do not trigger".
/// Write visibility to other workers is best effort, not linearizable.
#[async_trait]
pub trait SharedCache: Clone + Send + Sync + 'static {
    /// Read the general scheduler state. `Ok(None)` means no entry.
    async fn get_general(&self) -> Result<Option<SchedulerState>, CacheError>;

    /// Write the general scheduler state.
    async fn set_general(&self, state: &SchedulerState) -> Result<(), CacheError>;
}
