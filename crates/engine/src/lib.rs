// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! sidecron-engine: request-triggered opportunistic scheduling.
//!
//! Piggybacks a low-frequency maintenance job on ordinary incoming
//! traffic: each eligible request may claim the right to run the job by
//! writing a fresh timestamp to a shared cache before any job logic
//! executes. No cron process, no scheduler thread; the claiming request
//! runs the job inline and eats the latency.

pub mod config;
pub mod coordinator;
pub mod error;
pub mod gate;
pub mod job_runner;
pub mod privilege;
pub mod runner;

pub use config::{ConfigError, IntervalPolicy, SchedulingConfig};
pub use coordinator::DebounceCoordinator;
pub use error::RunnerError;
pub use gate::is_candidate;
pub use job_runner::run_job;
pub use privilege::ElevatedScope;
pub use runner::{RunnerDeps, ScheduledTasksRunner};
