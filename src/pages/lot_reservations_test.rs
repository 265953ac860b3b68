use super::*;

#[test]
fn spot_class_distinguishes_status() {
    assert_eq!(spot_class(SpotStatus::Available), "spot spot--available");
    assert_eq!(spot_class(SpotStatus::Occupied), "spot spot--occupied");
}

#[test]
fn occupancy_label_counts_spots() {
    let data = LotOccupancy {
        lot_id: 3,
        total_spots: 8,
        occupied_count: 5,
        summary: Vec::new(),
        details: Vec::new(),
    };
    assert_eq!(occupancy_label(&data), "5 of 8 spots occupied");
}
