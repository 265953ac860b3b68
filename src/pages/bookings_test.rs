use super::*;

#[test]
fn parse_lot_id_accepts_positive_integers() {
    assert_eq!(parse_lot_id(Some("12")), Some(12));
    assert_eq!(parse_lot_id(Some(" 3 ")), Some(3));
}

#[test]
fn parse_lot_id_rejects_missing_or_bad_values() {
    assert_eq!(parse_lot_id(None), None);
    assert_eq!(parse_lot_id(Some("")), None);
    assert_eq!(parse_lot_id(Some("abc")), None);
    assert_eq!(parse_lot_id(Some("0")), None);
    assert_eq!(parse_lot_id(Some("-4")), None);
}

#[test]
fn normalize_vehicle_number_uppercases_and_strips_whitespace() {
    assert_eq!(normalize_vehicle_number(" ka 01\tab 1234 "), "KA01AB1234");
    assert_eq!(normalize_vehicle_number("   "), "");
}

#[test]
fn booking_summary_names_spot_and_charge() {
    let resp = ReserveResponse {
        message: "Spot reserved successfully".to_owned(),
        reservation_id: 9,
        spot_number: 4,
        lot_name: "Central".to_owned(),
        initial_cost: 20.0,
    };
    assert_eq!(booking_summary(&resp), "Spot 4 reserved at Central. Initial charge 20.00.");
}
