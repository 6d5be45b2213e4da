// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Process-local shared cache

use super::{CacheError, SharedCache};
use async_trait::async_trait;
use parking_lot::Mutex;
use sidecron_core::SchedulerState;
use std::sync::Arc;

/// Process-local cache shared between worker threads.
///
/// Clones share one entry, which is the multi-threaded single-host
/// deployment. Multi-host deployments substitute their own
/// [`SharedCache`] over whatever distributed cache they already run.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCache {
    entry: Arc<Mutex<Option<SchedulerState>>>,
}

impl InMemoryCache {
    /// Empty cache; reads return `Ok(None)` until the first write.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache seeded with an initial state.
    pub fn with_state(state: SchedulerState) -> Self {
        Self {
            entry: Arc::new(Mutex::new(Some(state))),
        }
    }
}

#[async_trait]
impl SharedCache for InMemoryCache {
    async fn get_general(&self) -> Result<Option<SchedulerState>, CacheError> {
        Ok(self.entry.lock().clone())
    }

    async fn set_general(&self, state: &SchedulerState) -> Result<(), CacheError> {
        *self.entry.lock() = Some(state.clone());
        Ok(())
    }
}
