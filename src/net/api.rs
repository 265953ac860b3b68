//! REST API client for the parking service.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests): every call resolves to `ApiError::Unavailable`
//! since these endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, ApiError>` instead of panics so fetch failures
//! degrade page state without crashing the app. Non-2xx responses carry the
//! server's `message` when the body has one.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::types::{
    AdminDashboard, AdminUser, CacheStatus, Credentials, LoginResponse, LotInput, LotOccupancy, MessageResponse,
    ParkingLot, Registration, ReleaseResponse, ReserveRequest, ReserveResponse, Reservation, TaskStarted, TaskStatus,
};
use crate::config::ClientConfig;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("{message} (status {status})")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Text suitable for an inline page message.
    pub fn user_message(&self) -> String {
        match self {
            Self::Status { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

/// Bearer-authenticated client bound to one API root.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(not(feature = "csr"), allow(dead_code))]
pub struct ApiClient {
    base: String,
    token: String,
}

impl ApiClient {
    pub fn new(config: &ClientConfig, token: impl Into<String>) -> Self {
        Self { base: config.api_base.clone(), token: token.into() }
    }

    #[cfg(any(test, feature = "csr"))]
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    // ---- auth ----

    /// `POST /login`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` with 401 for bad credentials.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse, ApiError> {
        self.call(Verb::Post, "login", Some(to_body(credentials)?)).await
    }

    /// `POST /register`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` with 400 when the user already exists.
    pub async fn register(&self, registration: &Registration) -> Result<MessageResponse, ApiError> {
        self.call(Verb::Post, "register", Some(to_body(registration)?)).await
    }

    // ---- parking lots ----

    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn fetch_lots(&self) -> Result<Vec<ParkingLot>, ApiError> {
        self.call(Verb::Get, "parking-lots", None).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Status` with 403 for non-admin sessions.
    pub async fn create_lot(&self, lot: &LotInput) -> Result<MessageResponse, ApiError> {
        self.call(Verb::Post, "parking-lots", Some(to_body(lot)?)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Status` with 400 when shrinking below occupied spots.
    pub async fn update_lot(&self, lot_id: i64, lot: &LotInput) -> Result<MessageResponse, ApiError> {
        self.call(Verb::Put, &lot_endpoint(lot_id), Some(to_body(lot)?)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Status` with 400 when the lot has occupied spots.
    pub async fn delete_lot(&self, lot_id: i64) -> Result<MessageResponse, ApiError> {
        self.call(Verb::Delete, &lot_endpoint(lot_id), None).await
    }

    // ---- reservations ----

    /// # Errors
    ///
    /// Returns `ApiError::Status` with 400 when no spot is free or the user
    /// already holds an active reservation.
    pub async fn reserve_spot(&self, lot_id: i64, vehicle_number: &str) -> Result<ReserveResponse, ApiError> {
        let body = ReserveRequest { lot_id, vehicle_number: vehicle_number.to_owned() };
        self.call(Verb::Post, "reserve-spot", Some(to_body(&body)?)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Status` with 400 when the spot was already released.
    pub async fn release_spot(&self, reservation_id: i64) -> Result<ReleaseResponse, ApiError> {
        self.call(Verb::Put, &release_endpoint(reservation_id), Some(serde_json::json!({}))).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails or the body cannot be decoded.
    pub async fn fetch_my_reservations(&self) -> Result<Vec<Reservation>, ApiError> {
        self.call(Verb::Get, "user-reservations", None).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Status` with 403 for non-admin sessions.
    pub async fn fetch_lot_occupancy(&self, lot_id: i64) -> Result<LotOccupancy, ApiError> {
        self.call(Verb::Get, &lot_reservations_endpoint(lot_id), None).await
    }

    // ---- admin ----

    /// # Errors
    ///
    /// Returns `ApiError::Status` with 403 for non-admin sessions.
    pub async fn fetch_users(&self) -> Result<Vec<AdminUser>, ApiError> {
        self.call(Verb::Get, "admin/users", None).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Status` with 403 for non-admin sessions.
    pub async fn fetch_admin_dashboard(&self) -> Result<AdminDashboard, ApiError> {
        self.call(Verb::Get, "admin/dashboard", None).await
    }

    // ---- exports and background tasks ----

    /// # Errors
    ///
    /// Returns an error if the export job could not be queued.
    pub async fn export_csv(&self) -> Result<TaskStarted, ApiError> {
        self.call(Verb::Post, "export-csv", Some(serde_json::json!({}))).await
    }

    /// # Errors
    ///
    /// Returns an error if the request fails; a failed task is still `Ok`.
    pub async fn task_status(&self, task_id: &str) -> Result<TaskStatus, ApiError> {
        self.call(Verb::Get, &task_status_endpoint(task_id), None).await
    }

    /// Fetch a finished export as raw CSV text.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Status` with 404 once the cached file has expired.
    pub async fn download_csv(&self, download_key: &str) -> Result<String, ApiError> {
        self.call_text(&download_endpoint(download_key)).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Status` with 403 for non-admin sessions.
    pub async fn trigger_reminders(&self) -> Result<TaskStarted, ApiError> {
        self.call(Verb::Post, "trigger-reminders", Some(serde_json::json!({}))).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Status` with 403 for non-admin sessions.
    pub async fn generate_reports(&self) -> Result<TaskStarted, ApiError> {
        self.call(Verb::Post, "generate-reports", Some(serde_json::json!({}))).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Status` with 403 for non-admin sessions.
    pub async fn clear_cache(&self) -> Result<MessageResponse, ApiError> {
        self.call(Verb::Post, "clear-cache", Some(serde_json::json!({}))).await
    }

    /// # Errors
    ///
    /// Returns `ApiError::Status` with 403 for non-admin sessions.
    pub async fn cache_status(&self) -> Result<CacheStatus, ApiError> {
        self.call(Verb::Get, "cache-status", None).await
    }

    // ---- transport ----

    #[cfg(feature = "csr")]
    fn request(&self, verb: Verb, path: &str) -> gloo_net::http::RequestBuilder {
        use gloo_net::http::Request;

        let url = self.endpoint(path);
        let builder = match verb {
            Verb::Get => Request::get(&url),
            Verb::Post => Request::post(&url),
            Verb::Put => Request::put(&url),
            Verb::Delete => Request::delete(&url),
        };
        match bearer_header(&self.token) {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }

    async fn call<T: DeserializeOwned>(
        &self,
        verb: Verb,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ApiError> {
        #[cfg(feature = "csr")]
        {
            let builder = self.request(verb, path);
            let request = match body {
                Some(body) => builder.json(&body),
                None => builder.build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;
            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                let text = resp.text().await.unwrap_or_default();
                return Err(status_error(resp.status(), &text));
            }
            resp.json::<T>().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (verb, path, body);
            Err(ApiError::Unavailable)
        }
    }

    async fn call_text(&self, path: &str) -> Result<String, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = self
                .request(Verb::Get, path)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            if !resp.ok() {
                let text = resp.text().await.unwrap_or_default();
                return Err(status_error(resp.status(), &text));
            }
            resp.text().await.map_err(|e| ApiError::Decode(e.to_string()))
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = path;
            Err(ApiError::Unavailable)
        }
    }
}

fn to_body<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

#[cfg(any(test, feature = "csr"))]
fn bearer_header(token: &str) -> Option<String> {
    if token.is_empty() { None } else { Some(format!("Bearer {token}")) }
}

#[cfg(any(test, feature = "csr"))]
fn status_error(status: u16, body: &str) -> ApiError {
    let message = serde_json::from_str::<MessageResponse>(body)
        .map(|m| m.message)
        .unwrap_or_else(|_| format!("request failed: {status}"));
    ApiError::Status { status, message }
}

fn lot_endpoint(lot_id: i64) -> String {
    format!("parking-lots/{lot_id}")
}

fn release_endpoint(reservation_id: i64) -> String {
    format!("release-spot/{reservation_id}")
}

fn lot_reservations_endpoint(lot_id: i64) -> String {
    format!("reservations/{lot_id}")
}

fn task_status_endpoint(task_id: &str) -> String {
    format!("task-status/{task_id}")
}

fn download_endpoint(download_key: &str) -> String {
    format!("download-csv/{download_key}")
}
