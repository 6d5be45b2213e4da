// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the scheduler runner

use crate::config::ConfigError;
use thiserror::Error;

/// Errors the runner surfaces to the request pipeline.
///
/// Only misconfiguration propagates; cache trouble fails closed and
/// job-internal failures are relayed as captured text. A triggering
/// request must never see an error response from this mechanism.
#[derive(Debug, Error)]
pub enum RunnerError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}
