//! Client configuration resolved at build time.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so overrides are
//! baked in through `option_env!` when the crate is compiled. The resulting
//! `ClientConfig` is provided once through Leptos context by `App`.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";
pub const DEFAULT_USER_KEY: &str = "user";
pub const DEFAULT_TOKEN_KEY: &str = "token";
pub const DEFAULT_TASK_POLL_INTERVAL_MS: u32 = 2_000;

/// Durable-storage keys holding the persisted session pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub user: String,
    pub token: String,
}

impl Default for StorageKeys {
    fn default() -> Self {
        Self { user: DEFAULT_USER_KEY.to_owned(), token: DEFAULT_TOKEN_KEY.to_owned() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// REST API root without a trailing slash.
    pub api_base: String,
    pub storage_keys: StorageKeys,
    /// Delay between export task-status polls.
    pub task_poll_interval_ms: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_owned(),
            storage_keys: StorageKeys::default(),
            task_poll_interval_ms: DEFAULT_TASK_POLL_INTERVAL_MS,
        }
    }
}

impl ClientConfig {
    /// Build config from compile-time environment.
    ///
    /// Optional:
    /// - `PARKING_API_BASE`: REST API root (default `http://localhost:5000/api`)
    pub fn from_build_env() -> Self {
        Self::with_api_base(option_env!("PARKING_API_BASE"))
    }

    fn with_api_base(raw: Option<&str>) -> Self {
        let api_base = normalize_api_base(raw.unwrap_or(DEFAULT_API_BASE));
        Self { api_base, ..Self::default() }
    }
}

fn normalize_api_base(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        DEFAULT_API_BASE.to_owned()
    } else {
        trimmed.to_owned()
    }
}
