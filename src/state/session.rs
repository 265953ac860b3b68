//! Session identity for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the navigation guard and identity-aware pages. Owned and mutated
//! only by `SessionStore`.
//!
//! DESIGN
//! ======
//! `user` and `token` live together in one `Option`, so a profile without a
//! token (or the reverse) cannot be represented.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

/// Coarse authorization category attached to users and route requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Admin => "admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Profile returned by `POST /login` and persisted under the user key.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub username: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub role: Role,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct Identity {
    user: UserProfile,
    token: String,
}

/// Either fully authenticated (profile + non-empty token) or anonymous.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Build an authenticated session. A blank token yields `None`.
    pub fn authenticated(user: UserProfile, token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return None;
        }
        Some(Self { identity: Some(Identity { user, token }) })
    }

    pub fn user(&self) -> Option<&UserProfile> {
        self.identity.as_ref().map(|i| &i.user)
    }

    /// Bearer token, empty when anonymous.
    pub fn token(&self) -> &str {
        self.identity.as_ref().map_or("", |i| i.token.as_str())
    }

    pub fn role(&self) -> Option<Role> {
        self.user().map(|u| u.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}
