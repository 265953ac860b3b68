//! Reactive handle over the app's single `SessionStore`.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` builds one `SessionContext` and provides it through Leptos context.
//! The guard and pages read the reactive `Session` mirror; login and logout go
//! through the store so memory and storage never diverge.
//!
//! DESIGN
//! ======
//! The store lives in a local-arena `StoredValue` because browser storage
//! handles are not `Send`. Network calls run outside the store; only the
//! resulting `LoginOutcome` is applied, so no borrow is held across `.await`.

use leptos::prelude::*;

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::auth::LoginOutcome;
use crate::state::session::Session;
use crate::state::session_store::{SessionError, SessionStore};
use crate::util::storage::{DefaultStorage, default_storage};

#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<Session>,
    store: StoredValue<SessionStore<DefaultStorage>, LocalStorage>,
    config: StoredValue<ClientConfig>,
}

impl SessionContext {
    /// Rehydrate the session from storage and wrap it for the reactive graph.
    pub fn new(config: ClientConfig) -> Self {
        let store = SessionStore::initialize(default_storage(), config.storage_keys.clone());
        let session = RwSignal::new(store.session().clone());
        Self { session, store: StoredValue::new_local(store), config: StoredValue::new(config) }
    }

    /// Current session, tracked.
    pub fn session(&self) -> Session {
        self.session.get()
    }

    pub fn session_untracked(&self) -> Session {
        self.session.get_untracked()
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    /// REST client carrying the current bearer token.
    pub fn api(&self) -> ApiClient {
        let token = self.session.with_untracked(|s| s.token().to_owned());
        self.config.with_value(|config| ApiClient::new(config, token))
    }

    /// Apply a login result to the store and publish the new session.
    ///
    /// # Errors
    ///
    /// Forwards the store's rejection or persistence failure.
    pub fn apply_login(&self, outcome: LoginOutcome) -> Result<(), SessionError> {
        let mut result = Ok(());
        self.store.update_value(|store| result = store.complete_login(outcome));
        self.publish();
        result
    }

    pub fn logout(&self) {
        self.store.update_value(SessionStore::logout);
        self.publish();
    }

    fn publish(&self) {
        let current = self.store.with_value(|store| store.session().clone());
        self.session.set(current);
    }
}
