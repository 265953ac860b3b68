use super::*;

fn filled() -> LotForm {
    LotForm {
        name: " Central ".to_owned(),
        price: "25.5".to_owned(),
        address: "1 Main St".to_owned(),
        pin_code: "560001".to_owned(),
        spots: "10".to_owned(),
    }
}

fn lot(available: u32) -> ParkingLot {
    ParkingLot {
        id: 7,
        prime_location_name: "Central".to_owned(),
        price: 20.0,
        address: "1 Main St".to_owned(),
        pin_code: "560001".to_owned(),
        number_of_spots: 10,
        available_spots: available,
    }
}

#[test]
fn validate_lot_form_builds_trimmed_input() {
    let input = validate_lot_form(&filled()).unwrap();
    assert_eq!(input.prime_location_name, "Central");
    assert!((input.price - 25.5).abs() < f64::EPSILON);
    assert_eq!(input.number_of_spots, 10);
    assert_eq!(input.pin_code, "560001");
}

#[test]
fn validate_lot_form_requires_pin_code() {
    let form = LotForm { pin_code: "  ".to_owned(), ..filled() };
    assert_eq!(validate_lot_form(&form), Err("Name, address, and pin code are required."));
}

#[test]
fn validate_lot_form_rejects_non_positive_price() {
    for price in ["0", "-3", "abc", ""] {
        let form = LotForm { price: price.to_owned(), ..filled() };
        assert_eq!(validate_lot_form(&form), Err("Price must be a positive number."), "price {price:?}");
    }
}

#[test]
fn validate_lot_form_requires_at_least_one_spot() {
    for spots in ["0", "-1", "2.5", "many"] {
        let form = LotForm { spots: spots.to_owned(), ..filled() };
        assert_eq!(validate_lot_form(&form), Err("Number of spots must be at least 1."), "spots {spots:?}");
    }
}

#[test]
fn lot_form_from_lot_prefills_edit_fields() {
    let form = LotForm::from_lot(&lot(3));
    assert_eq!(form.name, "Central");
    assert_eq!(form.price, "20");
    assert_eq!(form.spots, "10");
    assert!(validate_lot_form(&form).is_ok());
}

#[test]
fn can_book_only_with_free_spots() {
    assert!(can_book(&lot(1)));
    assert!(!can_book(&lot(0)));
}
