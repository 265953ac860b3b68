use super::*;
use crate::state::session::Role;

#[test]
fn login_response_parses_server_body() {
    let raw = serde_json::json!({
        "access_token": "jwt-abc",
        "user": { "id": 3, "username": "carol", "email": "c@x.io", "role": "user" }
    });
    let resp: LoginResponse = serde_json::from_value(raw).unwrap();
    assert_eq!(resp.access_token, "jwt-abc");
    assert_eq!(resp.user.role, Role::User);
}

#[test]
fn message_response_accepts_msg_alias() {
    let resp: MessageResponse = serde_json::from_str(r#"{"msg":"Unauthorized"}"#).unwrap();
    assert_eq!(resp.message, "Unauthorized");
}

#[test]
fn registration_serializes_all_fields() {
    let reg = Registration {
        username: "dan".to_owned(),
        email: "dan@x.io".to_owned(),
        password: "secret1".to_owned(),
        phone: String::new(),
    };
    assert_eq!(
        serde_json::to_value(&reg).unwrap(),
        serde_json::json!({ "username": "dan", "email": "dan@x.io", "password": "secret1", "phone": "" })
    );
}

#[test]
fn reservation_without_breakdown_uses_defaults() {
    let raw = serde_json::json!({
        "id": 9,
        "spot_number": 4,
        "lot_name": "Central",
        "vehicle_number": "KA01AB1234",
        "parking_timestamp": "2025-01-01T10:00:00",
        "leaving_timestamp": null,
        "parking_cost": null,
        "status": "active"
    });
    let res: Reservation = serde_json::from_value(raw).unwrap();
    assert!(res.is_active());
    assert_eq!(res.cost_breakdown, CostBreakdown::default());
}

#[test]
fn partial_cost_breakdown_fills_missing_fields() {
    let breakdown: CostBreakdown =
        serde_json::from_str(r#"{"total_cost": 40.0, "hourly_rate": 20.0, "total_hours": 2.0, "calculation_time": "x"}"#)
            .unwrap();
    assert!((breakdown.total_cost - 40.0).abs() < f64::EPSILON);
    assert!(breakdown.additional_cost.abs() < f64::EPSILON);
}

#[test]
fn lot_occupancy_parses_spot_codes() {
    let raw = serde_json::json!({
        "lot_id": 2,
        "total_spots": 2,
        "occupied_count": 1,
        "summary": [
            { "spot_number": 1, "status": "O" },
            { "spot_number": 2, "status": "A" }
        ],
        "details": [{
            "username": "erin",
            "spot_number": 1,
            "vehicle_number": "MH12",
            "parking_timestamp": "2025-01-01T08:00:00",
            "leaving_timestamp": null,
            "status": "Occupied"
        }]
    });
    let occ: LotOccupancy = serde_json::from_value(raw).unwrap();
    assert_eq!(occ.summary[0].status, SpotStatus::Occupied);
    assert_eq!(occ.summary[1].status, SpotStatus::Available);
    assert_eq!(occ.details[0].username, "erin");
}

#[test]
fn task_state_maps_known_and_unknown_values() {
    assert_eq!(TaskState::from("SUCCESS".to_owned()), TaskState::Success);
    assert_eq!(TaskState::from("RETRY".to_owned()), TaskState::Other("RETRY".to_owned()));
    assert!(TaskState::Failure.is_finished());
    assert!(!TaskState::Progress.is_finished());
}

#[test]
fn task_status_extracts_download_key() {
    let raw = serde_json::json!({
        "status": "SUCCESS",
        "progress": 100,
        "result": { "status": "completed", "download_key": "csv_export_7_1", "records_count": 3 }
    });
    let status: TaskStatus = serde_json::from_value(raw).unwrap();
    assert_eq!(status.download_key(), Some("csv_export_7_1"));
}

#[test]
fn pending_task_status_has_no_download_key() {
    let status: TaskStatus =
        serde_json::from_str(r#"{"status":"PENDING","progress":0,"result":null}"#).unwrap();
    assert_eq!(status.status, TaskState::Pending);
    assert_eq!(status.download_key(), None);
}

#[test]
fn cache_status_reads_camel_case_key() {
    let status: CacheStatus = serde_json::from_str(r#"{"parkingLots":1}"#).unwrap();
    assert_eq!(status.parking_lots, 1);
}
