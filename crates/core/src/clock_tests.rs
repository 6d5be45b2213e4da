// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn system_clock_returns_post_epoch_time() {
    // 2020-01-01T00:00:00Z — any sane host clock is past this
    assert!(SystemClock.now() > 1_577_836_800);
}

#[test]
fn fake_clock_starts_at_zero() {
    assert_eq!(FakeClock::new().now(), 0);
}

#[test]
fn fake_clock_set_and_advance() {
    let clock = FakeClock::at(1000);
    assert_eq!(clock.now(), 1000);

    clock.advance(500);
    assert_eq!(clock.now(), 1500);

    clock.set(42);
    assert_eq!(clock.now(), 42);
}

#[test]
fn fake_clock_clones_share_time() {
    let clock = FakeClock::new();
    let handle = clock.clone();
    clock.advance(10);
    assert_eq!(handle.now(), 10);
}
