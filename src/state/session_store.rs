//! Single source of truth for who is logged in.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the in-memory `Session` and mirrors it into durable storage under two
//! keys (profile JSON and bearer token). Constructed once by the app and
//! shared through `SessionContext`; there is no global instance.
//!
//! INVARIANTS
//! ==========
//! - Storage holds both session keys or neither after every mutation.
//! - Memory and storage agree after every mutation. When a write fails the
//!   store falls back to anonymous in both and reports the failure.
//!
//! TRADE-OFFS
//! ==========
//! Logout removes only the session keys. Other origin-scoped data (theme,
//! drafts) survives.

#[cfg(test)]
#[path = "session_store_test.rs"]
mod session_store_test;

use crate::config::StorageKeys;
use crate::net::auth::{Authenticator, LoginOutcome};
use crate::net::types::{Credentials, Registration};
use crate::state::session::{Session, UserProfile};
use crate::util::storage::{KeyValueStore, StorageError};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("{0}")]
    Rejected(String),
    #[error("could not persist session: {0}")]
    Storage(#[from] StorageError),
}

pub struct SessionStore<S> {
    storage: S,
    keys: StorageKeys,
    session: Session,
}

impl<S: KeyValueStore> SessionStore<S> {
    /// Rehydrate from storage. Absent, partial, or malformed data yields an
    /// anonymous session and the stale keys are removed.
    pub fn initialize(storage: S, keys: StorageKeys) -> Self {
        let mut store = Self { storage, keys, session: Session::anonymous() };
        match store.read_persisted() {
            Ok(Some(session)) => {
                if let Some(user) = session.user() {
                    leptos::logging::log!("session restored for {}", user.username);
                }
                store.session = session;
            }
            Ok(None) => {}
            Err(reason) => {
                leptos::logging::warn!("discarding persisted session: {reason}");
                store.clear_storage();
            }
        }
        store
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Verify `credentials` through `auth` and apply the result.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Rejected` when the collaborator refuses the
    /// credentials, or `SessionError::Storage` when the session could not be
    /// persisted. Either way the store is left anonymous.
    pub async fn login<A: Authenticator>(&mut self, auth: &A, credentials: &Credentials) -> Result<(), SessionError> {
        let outcome = auth.login(credentials).await;
        self.complete_login(outcome)
    }

    /// Apply an authentication outcome obtained elsewhere.
    ///
    /// # Errors
    ///
    /// Same as [`SessionStore::login`].
    pub fn complete_login(&mut self, outcome: LoginOutcome) -> Result<(), SessionError> {
        match outcome {
            LoginOutcome::Authenticated { user, token } => {
                let Some(session) = Session::authenticated(user.clone(), token.clone()) else {
                    self.logout();
                    return Err(SessionError::Rejected("server issued an empty token".to_owned()));
                };
                if let Err(e) = self.write_pair(&user, &token) {
                    leptos::logging::warn!("session write failed, staying anonymous: {e}");
                    self.logout();
                    return Err(e.into());
                }
                self.session = session;
                leptos::logging::log!("logged in as {}", user.username);
                Ok(())
            }
            LoginOutcome::Rejected(reason) => {
                leptos::logging::log!("login rejected: {reason}");
                self.logout();
                Err(SessionError::Rejected(reason))
            }
        }
    }

    /// Clear memory and the session keys. Idempotent.
    pub fn logout(&mut self) {
        self.session = Session::anonymous();
        self.clear_storage();
    }

    /// Create an account. Never touches the current session.
    ///
    /// # Errors
    ///
    /// Returns the collaborator's failure message.
    pub async fn register<A: Authenticator>(&self, auth: &A, registration: &Registration) -> Result<(), String> {
        auth.register(registration).await
    }

    fn read_persisted(&self) -> Result<Option<Session>, String> {
        let raw_user = self.storage.get(&self.keys.user).map_err(|e| e.to_string())?;
        let token = self.storage.get(&self.keys.token).map_err(|e| e.to_string())?;
        match (raw_user, token) {
            (None, None) => Ok(None),
            (Some(raw_user), Some(token)) => {
                let user: UserProfile =
                    serde_json::from_str(&raw_user).map_err(|e| format!("malformed user profile: {e}"))?;
                Session::authenticated(user, token).map(Some).ok_or_else(|| "empty token".to_owned())
            }
            (Some(_), None) => Err("user profile without token".to_owned()),
            (None, Some(_)) => Err("token without user profile".to_owned()),
        }
    }

    fn write_pair(&mut self, user: &UserProfile, token: &str) -> Result<(), StorageError> {
        let raw_user =
            serde_json::to_string(user).map_err(|_| StorageError::WriteRejected { key: self.keys.user.clone() })?;
        self.storage.set(&self.keys.user, &raw_user)?;
        self.storage.set(&self.keys.token, token)
    }

    fn clear_storage(&mut self) {
        for key in [&self.keys.user, &self.keys.token] {
            if let Err(e) = self.storage.remove(key) {
                leptos::logging::warn!("failed to clear {key}: {e}");
            }
        }
    }
}
