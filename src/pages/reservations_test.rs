use super::*;
use crate::net::types::CostBreakdown;

fn reservation(id: i64, status: &str, parked: &str) -> Reservation {
    Reservation {
        id,
        spot_number: 2,
        lot_name: "Central".to_owned(),
        vehicle_number: None,
        parking_timestamp: parked.to_owned(),
        leaving_timestamp: None,
        parking_cost: None,
        status: status.to_owned(),
        cost_breakdown: CostBreakdown::default(),
    }
}

#[test]
fn sort_reservations_puts_active_first_then_newest() {
    let mut rows = vec![
        reservation(1, "completed", "2026-01-03T09:00:00"),
        reservation(2, "active", "2026-01-01T09:00:00"),
        reservation(3, "completed", "2026-01-05T09:00:00"),
        reservation(4, "active", "2026-01-02T09:00:00"),
    ];
    sort_reservations(&mut rows);
    let ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![4, 2, 3, 1]);
}

#[test]
fn release_summary_reports_cost_and_duration() {
    let resp = ReleaseResponse {
        message: "Spot released.".to_owned(),
        cost_breakdown: CostBreakdown::default(),
        total_cost: 45.0,
        duration_hours: 2.5,
    };
    assert_eq!(release_summary(&resp), "Spot released. Total: 45.00 for 2.5 h.");
}
