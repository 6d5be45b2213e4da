// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! UTC formatting for operator-facing trace lines.

use crate::clock::Timestamp;
use chrono::{LocalResult, TimeZone, Utc};

/// Format an epoch-seconds timestamp as `YYYY-MM-DD HH:MM:SS UTC`.
pub fn format_utc(ts: Timestamp) -> String {
    match Utc.timestamp_opt(ts as i64, 0) {
        LocalResult::Single(dt) => dt.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        // unrepresentable (far-future overflow); fall back to the raw value
        _ => format!("{} (epoch seconds)", ts),
    }
}

#[cfg(test)]
#[path = "time_fmt_tests.rs"]
mod tests;
