//! Navigation guard.
//!
//! Evaluated once per navigation attempt, before the target view is built.
//! Pure and synchronous: it reads the session and never performs I/O. A
//! redirect is final for that attempt; the denied target is not retried.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use super::table::{LOGIN_PATH, RouteIntent, RouteRequirements, UNAUTHORIZED_PATH};
use crate::net::types::Session;
use crate::state::session::SessionSnapshot;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToUnauthorized,
}

impl GuardDecision {
    /// Where to send the user instead, if anywhere.
    #[must_use]
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            GuardDecision::Allow => None,
            GuardDecision::RedirectToLogin => Some(LOGIN_PATH),
            GuardDecision::RedirectToUnauthorized => Some(UNAUTHORIZED_PATH),
        }
    }
}

/// Decide a transition. Role is checked only when the route declares one, and
/// only for routes that require auth; comparison is exact.
#[must_use]
pub fn check(requirements: &RouteRequirements, session: Option<&Session>) -> GuardDecision {
    if !requirements.requires_auth {
        return GuardDecision::Allow;
    }
    let Some(session) = session else {
        return GuardDecision::RedirectToLogin;
    };
    match requirements.required_role.as_deref() {
        Some(role) if role != session.role => GuardDecision::RedirectToUnauthorized,
        _ => GuardDecision::Allow,
    }
}

/// [`check`] against a resolved intent and a store snapshot.
#[must_use]
pub fn check_intent(intent: &RouteIntent, snapshot: &SessionSnapshot) -> GuardDecision {
    let decision = check(&intent.requirements, snapshot.session.as_ref());
    if decision != GuardDecision::Allow {
        log::debug!("navigation to {} ({}) denied: {decision:?}", intent.path, intent.name);
    }
    decision
}
