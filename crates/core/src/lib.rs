// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sidecron-core: domain types for the request-triggered scheduler

pub mod clock;
pub mod decision;
pub mod output;
pub mod request;
pub mod state;
pub mod time_fmt;

pub use clock::{Clock, SystemClock, Timestamp};
pub use decision::{ClaimDecision, DisabledReason};
pub use output::{JobOutcome, OutputBuffer, SEGMENT_DELIMITER, SEGMENT_MARKUP_OPEN};
pub use request::{RequestContext, RequestMode};
pub use state::{SchedulerState, LAST_RUN_STORE_KEY};
pub use time_fmt::format_utc;

// FakeClock available for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
pub use clock::FakeClock;
