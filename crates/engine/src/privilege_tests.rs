// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use sidecron_adapters::FakePrivilegeSession;
use std::panic::{catch_unwind, AssertUnwindSafe};

#[yare::parameterized(
    ordinary_caller = { false },
    already_admin   = { true },
)]
fn restores_the_captured_level(initial: bool) {
    let session = FakePrivilegeSession::new(initial);
    {
        let scope = ElevatedScope::enter(&session);
        assert_eq!(scope.previous(), initial);
        assert!(session.has_elevated_access());
    }
    assert_eq!(session.has_elevated_access(), initial);
}

#[test]
fn restores_on_panic_unwind() {
    let session = FakePrivilegeSession::new(false);
    let result = catch_unwind(AssertUnwindSafe(|| {
        let _scope = ElevatedScope::enter(&session);
        panic!("job blew up");
    }));
    assert!(result.is_err());
    assert!(!session.has_elevated_access());
}

#[test]
fn restores_on_early_return() {
    fn body(session: &FakePrivilegeSession, bail: bool) -> u32 {
        let _scope = ElevatedScope::enter(session);
        if bail {
            return 0;
        }
        1
    }

    let session = FakePrivilegeSession::new(false);
    body(&session, true);
    assert!(!session.has_elevated_access());
}

#[test]
fn nested_scopes_unwind_in_order() {
    let session = FakePrivilegeSession::new(false);
    {
        let _outer = ElevatedScope::enter(&session);
        {
            let inner = ElevatedScope::enter(&session);
            // inner captured the already-elevated level
            assert!(inner.previous());
        }
        assert!(session.has_elevated_access());
    }
    assert!(!session.has_elevated_access());
    assert_eq!(session.transitions(), vec![true, true, true, false]);
}
