//! Credential verification seam between the session store and the API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `SessionStore` only needs a success/failure answer for login and register.
//! `HttpAuthenticator` provides it over the REST client; tests substitute a
//! scripted implementation.
//!
//! ERROR HANDLING
//! ==============
//! Every transport, status, or decode failure is folded into a rejected
//! outcome carrying display text. Nothing crosses this boundary as a panic.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use super::api::{ApiClient, ApiError};
use super::types::{Credentials, LoginResponse, Registration};
use crate::config::ClientConfig;
use crate::state::session::UserProfile;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";
pub const REGISTRATION_FAILED: &str = "Registration failed";

/// Result of a login attempt as seen by the session store.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    Authenticated { user: UserProfile, token: String },
    Rejected(String),
}

/// External authentication collaborator.
pub trait Authenticator {
    fn login(&self, credentials: &Credentials) -> impl Future<Output = LoginOutcome>;

    /// Create an account. `Err` carries the server's message when it sent one.
    fn register(&self, registration: &Registration) -> impl Future<Output = Result<(), String>>;
}

/// `Authenticator` backed by `POST /login` and `POST /register`.
#[derive(Clone, Debug)]
pub struct HttpAuthenticator {
    api: ApiClient,
}

impl HttpAuthenticator {
    pub fn new(config: &ClientConfig) -> Self {
        Self { api: ApiClient::new(config, "") }
    }
}

impl Authenticator for HttpAuthenticator {
    async fn login(&self, credentials: &Credentials) -> LoginOutcome {
        login_outcome(self.api.login(credentials).await)
    }

    async fn register(&self, registration: &Registration) -> Result<(), String> {
        self.api.register(registration).await.map(|_| ()).map_err(|e| register_failure_message(&e))
    }
}

fn login_outcome(result: Result<LoginResponse, ApiError>) -> LoginOutcome {
    match result {
        Ok(resp) => LoginOutcome::Authenticated { user: resp.user, token: resp.access_token },
        Err(ApiError::Status { status: 401, .. }) => LoginOutcome::Rejected(INVALID_CREDENTIALS.to_owned()),
        Err(e) => {
            leptos::logging::warn!("login request failed: {e}");
            LoginOutcome::Rejected(INVALID_CREDENTIALS.to_owned())
        }
    }
}

fn register_failure_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { message, .. } if !message.is_empty() => message.clone(),
        _ => REGISTRATION_FAILED.to_owned(),
    }
}
