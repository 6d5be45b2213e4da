// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scoped elevation to administrative access.
//!
//! The maintenance job assumes it runs with administrative capability,
//! but the triggering request carries an ordinary caller's level. The
//! guard captures the caller's level, elevates, and restores the capture
//! when dropped — normal return, early return, and panic unwind alike.

use sidecron_adapters::PrivilegeSession;

/// Elevates the session for as long as the guard lives.
#[must_use = "dropping the guard immediately restores the prior level"]
pub struct ElevatedScope<'a, P: PrivilegeSession> {
    session: &'a P,
    previous: bool,
}

impl<'a, P: PrivilegeSession> ElevatedScope<'a, P> {
    /// Capture the current level and elevate.
    pub fn enter(session: &'a P) -> Self {
        let previous = session.has_elevated_access();
        session.set_elevated_access(true);
        Self { session, previous }
    }

    /// The level captured at entry.
    pub fn previous(&self) -> bool {
        self.previous
    }
}

impl<P: PrivilegeSession> Drop for ElevatedScope<'_, P> {
    fn drop(&mut self) {
        self.session.set_elevated_access(self.previous);
    }
}

#[cfg(test)]
#[path = "privilege_tests.rs"]
mod tests;
