// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake cache adapter for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{CacheError, SharedCache};
use async_trait::async_trait;
use parking_lot::Mutex;
use sidecron_core::SchedulerState;
use std::sync::Arc;

/// Recorded cache call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CacheCall {
    GetGeneral,
    SetGeneral { state: SchedulerState },
}

struct FakeCacheState {
    entry: Option<SchedulerState>,
    /// Writes not yet visible to readers (see `hold_writes`).
    pending: Vec<SchedulerState>,
    hold_writes: bool,
    unavailable: bool,
    fail_writes: bool,
    calls: Vec<CacheCall>,
}

/// Fake cache adapter for testing.
///
/// Supports unavailability injection and held-back write visibility:
/// with `hold_writes(true)`, writes are recorded but readers keep seeing
/// the old entry until `flush_writes()`. That reproduces the window where
/// two workers both read a stale state and both claim the run.
#[derive(Clone)]
pub struct FakeCache {
    inner: Arc<Mutex<FakeCacheState>>,
}

impl Default for FakeCache {
    fn default() -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeCacheState {
                entry: None,
                pending: Vec::new(),
                hold_writes: false,
                unavailable: false,
                fail_writes: false,
                calls: Vec::new(),
            })),
        }
    }
}

impl FakeCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fake seeded with an initial state.
    pub fn with_state(state: SchedulerState) -> Self {
        let cache = Self::default();
        cache.inner.lock().entry = Some(state);
        cache
    }

    /// Replace the visible entry directly, without recording a call
    pub fn seed(&self, state: SchedulerState) {
        self.inner.lock().entry = Some(state);
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<CacheCall> {
        self.inner.lock().calls.clone()
    }

    /// Currently visible entry
    pub fn visible_state(&self) -> Option<SchedulerState> {
        self.inner.lock().entry.clone()
    }

    /// Make every subsequent operation fail
    pub fn set_unavailable(&self, unavailable: bool) {
        self.inner.lock().unavailable = unavailable;
    }

    /// Make only writes fail; reads keep working
    pub fn fail_writes(&self, fail: bool) {
        self.inner.lock().fail_writes = fail;
    }

    /// Hold writes back from readers until `flush_writes`
    pub fn hold_writes(&self, hold: bool) {
        self.inner.lock().hold_writes = hold;
    }

    /// Make held-back writes visible, last write wins
    pub fn flush_writes(&self) {
        let mut state = self.inner.lock();
        if let Some(last) = state.pending.pop() {
            state.entry = Some(last);
        }
        state.pending.clear();
    }

    /// Drop the entry, simulating eviction
    pub fn evict(&self) {
        self.inner.lock().entry = None;
    }
}

#[async_trait]
impl SharedCache for FakeCache {
    async fn get_general(&self) -> Result<Option<SchedulerState>, CacheError> {
        let mut state = self.inner.lock();
        state.calls.push(CacheCall::GetGeneral);
        if state.unavailable {
            return Err(CacheError::Unavailable("injected failure".into()));
        }
        Ok(state.entry.clone())
    }

    async fn set_general(&self, new: &SchedulerState) -> Result<(), CacheError> {
        let mut state = self.inner.lock();
        state.calls.push(CacheCall::SetGeneral { state: new.clone() });
        if state.unavailable || state.fail_writes {
            return Err(CacheError::Unavailable("injected failure".into()));
        }
        if state.hold_writes {
            state.pending.push(new.clone());
        } else {
            state.entry = Some(new.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
