// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Caller privilege session adapters.
//!
//! Models the in-process session state the authorization system exposes:
//! a single elevated/not-elevated capability level that scoped elevation
//! saves and restores around the maintenance job. Synchronous because the
//! restore must be callable from a `Drop` impl.

use parking_lot::Mutex;
use std::sync::Arc;

/// The executing context's privilege level.
pub trait PrivilegeSession: Clone + Send + Sync + 'static {
    /// Whether the caller currently holds administrative access.
    fn has_elevated_access(&self) -> bool;

    /// Set the caller's access level.
    fn set_elevated_access(&self, elevated: bool);
}

/// Process-local privilege session.
#[derive(Debug, Clone)]
pub struct LocalPrivilegeSession {
    elevated: Arc<Mutex<bool>>,
}

impl LocalPrivilegeSession {
    pub fn new(elevated: bool) -> Self {
        Self {
            elevated: Arc::new(Mutex::new(elevated)),
        }
    }
}

impl PrivilegeSession for LocalPrivilegeSession {
    fn has_elevated_access(&self) -> bool {
        *self.elevated.lock()
    }

    fn set_elevated_access(&self, elevated: bool) {
        *self.elevated.lock() = elevated;
    }
}

/// Fake session recording every level transition, for asserting that
/// elevation and restoration happen in order.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Clone, Default)]
pub struct FakePrivilegeSession {
    inner: Arc<Mutex<FakeSessionState>>,
}

#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default)]
struct FakeSessionState {
    elevated: bool,
    transitions: Vec<bool>,
}

#[cfg(any(test, feature = "test-support"))]
impl FakePrivilegeSession {
    pub fn new(elevated: bool) -> Self {
        Self {
            inner: Arc::new(Mutex::new(FakeSessionState {
                elevated,
                transitions: Vec::new(),
            })),
        }
    }

    /// Every level set on this session, in order
    pub fn transitions(&self) -> Vec<bool> {
        self.inner.lock().transitions.clone()
    }
}

#[cfg(any(test, feature = "test-support"))]
impl PrivilegeSession for FakePrivilegeSession {
    fn has_elevated_access(&self) -> bool {
        self.inner.lock().elevated
    }

    fn set_elevated_access(&self, elevated: bool) {
        let mut state = self.inner.lock();
        state.elevated = elevated;
        state.transitions.push(elevated);
    }
}

#[cfg(test)]
#[path = "privilege_tests.rs"]
mod tests;
