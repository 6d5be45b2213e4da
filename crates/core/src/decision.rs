// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outcome of one debounce evaluation.

use crate::clock::Timestamp;
use std::fmt;

/// Why the coordinator refused to evaluate a claim at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisabledReason {
    /// The configured minimum interval is zero or negative.
    IntervalNotPositive,
    /// The operator runs a dedicated scheduler; browser triggering is off.
    BrowserTriggerOff,
    /// The shared cache could not be read or the claim could not be
    /// published. Fail closed: prefer not running over duplicate runs.
    CacheUnavailable,
}

impl fmt::Display for DisabledReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            DisabledReason::IntervalNotPositive => "minimum interval is zero or negative",
            DisabledReason::BrowserTriggerOff => "browser trigger is disabled",
            DisabledReason::CacheUnavailable => "shared cache is unavailable",
        };
        write!(f, "{}", reason)
    }
}

/// Result of one debounce evaluation: exactly one of claimed, inside the
/// debounce window, or inert for this request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimDecision {
    /// This request won the claim and must run the job now.
    Claimed {
        /// The timestamp written as the new last run.
        last_run_at: Timestamp,
        /// When the next claim becomes eligible.
        next_run_at: Timestamp,
    },
    /// Inside the debounce window; another run happened recently.
    NotDue { next_run_at: Timestamp },
    /// The mechanism is inert for this request.
    Disabled {
        reason: DisabledReason,
        /// Next eligible time when the state was readable, `None` otherwise.
        next_run_at: Option<Timestamp>,
    },
}

impl ClaimDecision {
    /// Next eligible run time known at decision time, if any.
    pub fn next_run_at(&self) -> Option<Timestamp> {
        match self {
            ClaimDecision::Claimed { next_run_at, .. } => Some(*next_run_at),
            ClaimDecision::NotDue { next_run_at } => Some(*next_run_at),
            ClaimDecision::Disabled { next_run_at, .. } => *next_run_at,
        }
    }

    /// True when this request claimed the run.
    pub fn is_claimed(&self) -> bool {
        matches!(self, ClaimDecision::Claimed { .. })
    }
}
