//! Navigation guard decisions.
//!
//! SYSTEM CONTEXT
//! ==============
//! Evaluated before every route renders (see `components::route_guard`).
//! This is a UX layer over client-held state; the API enforces authorization
//! independently.
//!
//! DESIGN
//! ======
//! Decisions are pure functions of `(RouteRequirement, &Session)` so every
//! transition is judged from the session as it is at that instant, with no
//! state carried between transitions. Role checks are strict equality: an
//! admin is not admitted to a user-only route.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::routes::{RouteId, RouteRequirement, match_path};
use crate::state::session::Session;

/// Where a session stands relative to one route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessState {
    Anonymous,
    AuthenticatedWrongRole,
    Authorized,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    Redirect(RouteId),
}

impl GuardDecision {
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::Redirect(target) => Some(target.path()),
        }
    }
}

/// First match wins: missing token on an auth route, then role mismatch.
pub fn evaluate(requirement: RouteRequirement, session: &Session) -> GuardDecision {
    if requirement.requires_auth() && session.token().is_empty() {
        return GuardDecision::Redirect(RouteId::Login);
    }
    if let Some(role) = requirement.required_role() {
        if session.role() != Some(role) {
            return GuardDecision::Redirect(RouteId::Unauthorized);
        }
    }
    GuardDecision::Allow
}

/// Classify `session` against `requirement`.
pub fn access_state(requirement: RouteRequirement, session: &Session) -> AccessState {
    if !session.is_authenticated() {
        return AccessState::Anonymous;
    }
    match requirement.required_role() {
        Some(role) if session.role() != Some(role) => AccessState::AuthenticatedWrongRole,
        _ => AccessState::Authorized,
    }
}

/// Guard decision for a raw URL path.
pub fn evaluate_path(path: &str, session: &Session) -> GuardDecision {
    evaluate(match_path(path).entry.requirement, session)
}
