//! Static route table with per-route access requirements.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` registers one Leptos route per entry and the navigation guard reads
//! each entry's `RouteRequirement` before the page renders. `match_path`
//! resolves raw URLs the same way so requirements can be checked outside the
//! router (tests, redirects after login).
//!
//! INVARIANTS
//! ==========
//! - Exactly one public login target, one public unauthorized target, and one
//!   public catch-all.
//! - Entries are never mutated after startup.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::state::session::Role;

/// What a session must satisfy to reach a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RouteRequirement {
    Public,
    Authenticated,
    /// Authenticated with exactly this role.
    Role(Role),
}

impl RouteRequirement {
    pub fn requires_auth(self) -> bool {
        !matches!(self, Self::Public)
    }

    pub fn required_role(self) -> Option<Role> {
        match self {
            Self::Role(role) => Some(role),
            Self::Public | Self::Authenticated => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RouteId {
    Home,
    Login,
    Register,
    Dashboard,
    ParkingLots,
    Reservations,
    AdminUsers,
    ExportsReports,
    Bookings,
    LotReservations,
    Unauthorized,
    NotFound,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Path pattern; `:name` segments capture, `*` matches anything.
    pub path: &'static str,
    pub id: RouteId,
    pub requirement: RouteRequirement,
}

/// Ordered route table. First match wins; the catch-all stays last.
pub const ROUTES: &[RouteEntry] = &[
    RouteEntry { path: "/", id: RouteId::Home, requirement: RouteRequirement::Public },
    RouteEntry { path: "/login", id: RouteId::Login, requirement: RouteRequirement::Public },
    RouteEntry { path: "/register", id: RouteId::Register, requirement: RouteRequirement::Public },
    RouteEntry { path: "/dashboard", id: RouteId::Dashboard, requirement: RouteRequirement::Authenticated },
    RouteEntry { path: "/lots", id: RouteId::ParkingLots, requirement: RouteRequirement::Authenticated },
    RouteEntry { path: "/reservations", id: RouteId::Reservations, requirement: RouteRequirement::Authenticated },
    RouteEntry { path: "/admin/users", id: RouteId::AdminUsers, requirement: RouteRequirement::Role(Role::Admin) },
    RouteEntry {
        path: "/exports-reports",
        id: RouteId::ExportsReports,
        requirement: RouteRequirement::Authenticated,
    },
    RouteEntry { path: "/book/:lot_id", id: RouteId::Bookings, requirement: RouteRequirement::Role(Role::User) },
    RouteEntry {
        path: "/admin/reservations/:lot_id",
        id: RouteId::LotReservations,
        requirement: RouteRequirement::Role(Role::Admin),
    },
    RouteEntry { path: "/unauthorized", id: RouteId::Unauthorized, requirement: RouteRequirement::Public },
    RouteEntry { path: "*", id: RouteId::NotFound, requirement: RouteRequirement::Public },
];

impl RouteId {
    pub fn entry(self) -> &'static RouteEntry {
        ROUTES
            .iter()
            .find(|e| e.id == self)
            .unwrap_or(&ROUTES[ROUTES.len() - 1])
    }

    pub fn requirement(self) -> RouteRequirement {
        self.entry().requirement
    }

    /// Concrete path for parameterless routes; pattern text otherwise.
    pub fn path(self) -> &'static str {
        self.entry().path
    }
}

/// A resolved URL: the matching entry plus captured `:name` segments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteMatch {
    pub entry: &'static RouteEntry,
    pub params: Vec<(&'static str, String)>,
}

impl RouteMatch {
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.iter().find(|(k, _)| *k == name).map(|(_, v)| v.as_str())
    }
}

/// Resolve `path` against `ROUTES`. Query strings, fragments, and a trailing
/// slash are ignored. Unknown paths resolve to the catch-all.
pub fn match_path(path: &str) -> RouteMatch {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let segments = split_segments(path);
    for entry in ROUTES {
        if let Some(params) = match_pattern(entry.path, &segments) {
            return RouteMatch { entry, params };
        }
    }
    RouteMatch { entry: RouteId::NotFound.entry(), params: Vec::new() }
}

fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

fn match_pattern(pattern: &'static str, segments: &[&str]) -> Option<Vec<(&'static str, String)>> {
    if pattern == "*" {
        return Some(Vec::new());
    }
    let parts = split_segments(pattern);
    if parts.len() != segments.len() {
        return None;
    }
    let mut params = Vec::new();
    for (part, segment) in parts.into_iter().zip(segments) {
        if let Some(name) = part.strip_prefix(':') {
            params.push((name, (*segment).to_owned()));
        } else if part != *segment {
            return None;
        }
    }
    Some(params)
}

/// `/book/{lot_id}`
pub fn booking_path(lot_id: i64) -> String {
    format!("/book/{lot_id}")
}

/// `/admin/reservations/{lot_id}`
pub fn lot_reservations_path(lot_id: i64) -> String {
    format!("/admin/reservations/{lot_id}")
}
