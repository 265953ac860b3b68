//! REST DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! Field names mirror the server's JSON payloads so serde stays lossless.
//! Fields the server omits for older rows are `#[serde(default)]`.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use crate::state::session::UserProfile;

/// Username/password pair submitted to `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Account details submitted to `POST /register`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phone: String,
}

/// Successful `POST /login` body.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserProfile,
}

/// Generic `{ "message": ... }` body; some admin checks answer `{ "msg": ... }`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct MessageResponse {
    #[serde(alias = "msg")]
    pub message: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParkingLot {
    pub id: i64,
    pub prime_location_name: String,
    pub price: f64,
    pub address: String,
    pub pin_code: String,
    pub number_of_spots: u32,
    #[serde(default)]
    pub available_spots: u32,
}

/// Create/update payload for a parking lot.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LotInput {
    pub prime_location_name: String,
    pub price: f64,
    pub address: String,
    pub pin_code: String,
    pub number_of_spots: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ReserveRequest {
    pub lot_id: i64,
    pub vehicle_number: String,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReserveResponse {
    pub message: String,
    pub reservation_id: i64,
    pub spot_number: u32,
    pub initial_cost: f64,
    pub lot_name: String,
}

/// Server-computed cost of a stay: one base hour plus pro-rated extra hours.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CostBreakdown {
    pub base_cost: f64,
    pub hourly_rate: f64,
    pub total_hours: f64,
    pub additional_hours: f64,
    pub additional_cost: f64,
    pub total_cost: f64,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Reservation {
    pub id: i64,
    pub spot_number: u32,
    pub lot_name: String,
    pub vehicle_number: Option<String>,
    pub parking_timestamp: String,
    pub leaving_timestamp: Option<String>,
    pub parking_cost: Option<f64>,
    pub status: String,
    #[serde(default)]
    pub cost_breakdown: CostBreakdown,
}

impl Reservation {
    pub fn is_active(&self) -> bool {
        self.status == "active"
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ReleaseResponse {
    pub message: String,
    #[serde(default)]
    pub cost_breakdown: CostBreakdown,
    pub total_cost: f64,
    pub duration_hours: f64,
}

/// Spot occupancy code as sent by the server (`"A"` / `"O"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpotStatus {
    #[serde(rename = "A")]
    Available,
    #[serde(rename = "O")]
    Occupied,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct SpotSummary {
    pub spot_number: u32,
    pub status: SpotStatus,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct OccupiedSpot {
    pub username: String,
    pub spot_number: u32,
    pub vehicle_number: Option<String>,
    pub parking_timestamp: String,
    pub leaving_timestamp: Option<String>,
}

/// `GET /reservations/{lot_id}` body (admin).
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LotOccupancy {
    pub lot_id: i64,
    pub total_spots: u32,
    pub occupied_count: u32,
    #[serde(default)]
    pub summary: Vec<SpotSummary>,
    #[serde(default)]
    pub details: Vec<OccupiedSpot>,
}

/// Row of `GET /admin/users`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AdminUser {
    pub id: i64,
    pub username: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub total_reservations: u32,
}

/// `GET /admin/dashboard` body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct AdminDashboard {
    pub total_lots: u32,
    pub total_spots: u32,
    pub occupied_spots: u32,
    pub available_spots: u32,
    pub total_users: u32,
    pub active_reservations: u32,
}

/// Acknowledgement for queued background work.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct TaskStarted {
    pub task_id: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Background task state as reported by `GET /task-status/{id}`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum TaskState {
    Pending,
    Progress,
    Success,
    Failure,
    Other(String),
}

impl From<String> for TaskState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "PENDING" => Self::Pending,
            "PROGRESS" => Self::Progress,
            "SUCCESS" => Self::Success,
            "FAILURE" => Self::Failure,
            _ => Self::Other(raw),
        }
    }
}

impl TaskState {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Success | Self::Failure)
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TaskStatus {
    pub status: TaskState,
    #[serde(default)]
    pub progress: u32,
    #[serde(default)]
    pub result: Option<serde_json::Value>,
    #[serde(default)]
    pub error: Option<String>,
}

impl TaskStatus {
    /// Download key of a finished CSV export, if the result carries one.
    pub fn download_key(&self) -> Option<&str> {
        self.result.as_ref()?.get("download_key")?.as_str()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CacheStatus {
    #[serde(rename = "parkingLots")]
    pub parking_lots: u32,
}
