// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]
// Enable coverage(off) attribute for excluding test infrastructure
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! Adapters for the scheduler's external collaborators

pub mod cache;
pub mod job;
pub mod privilege;
pub mod sink;
pub mod store;
pub mod traced;

pub use cache::{CacheError, InMemoryCache, SharedCache};
pub use job::{JobError, MaintenanceJob, NoOpJob};
pub use privilege::{LocalPrivilegeSession, PrivilegeSession};
pub use sink::{LogTraceSink, NoOpTraceSink, TraceSink};
pub use store::{DurableStore, FileStore, StoreError};
pub use traced::{TracedCache, TracedJob};

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use cache::{CacheCall, FakeCache};
#[cfg(any(test, feature = "test-support"))]
pub use job::FakeJob;
#[cfg(any(test, feature = "test-support"))]
pub use privilege::FakePrivilegeSession;
#[cfg(any(test, feature = "test-support"))]
pub use sink::RecordingTraceSink;
#[cfg(any(test, feature = "test-support"))]
pub use store::FakeStore;
