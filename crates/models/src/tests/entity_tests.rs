use chrono::{FixedOffset, NaiveDate, TimeZone};
use rust_decimal::Decimal;
use sea_orm::prelude::DateTimeWithTimeZone;
use std::str::FromStr;

use crate::{booking, car, customer, insurance, maintenance, payment, reservation};

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

fn ts() -> DateTimeWithTimeZone {
    FixedOffset::east_opt(0).unwrap().with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
}

#[test]
fn email_requires_both_sides_of_at() {
    assert!(customer::validate_email("a@b.com").is_ok());
    assert!(customer::validate_email("ab.com").is_err());
    assert!(customer::validate_email("@b.com").is_err());
    assert!(customer::validate_email("a@").is_err());
}

#[test]
fn name_and_password_rules() {
    assert!(customer::validate_name("  ").is_err());
    assert!(customer::validate_name("Jane").is_ok());
    assert!(customer::validate_password("short").is_err());
    assert!(customer::validate_password("longenough").is_ok());
}

#[test]
fn money_must_not_be_negative() {
    let neg = Decimal::from_str("-0.01").unwrap();
    assert!(car::validate_rental_rate(neg).is_err());
    assert!(booking::validate_total_amount(neg).is_err());
    assert!(maintenance::validate_cost(neg).is_err());
    assert!(payment::validate_amount(neg).is_err());
    assert!(payment::validate_amount(Decimal::ZERO).is_ok());
}

#[test]
fn date_ranges() {
    assert!(booking::validate_rental_period(d(2024, 1, 1), d(2024, 1, 1)).is_ok());
    assert!(booking::validate_rental_period(d(2024, 1, 2), d(2024, 1, 1)).is_err());
    assert!(reservation::validate_return_date(d(2024, 1, 5), None).is_ok());
    assert!(reservation::validate_return_date(d(2024, 1, 5), Some(d(2024, 1, 4))).is_err());
    assert!(insurance::validate_coverage(d(2024, 1, 1), Some(d(2025, 1, 1))).is_ok());
    assert!(insurance::validate_coverage(d(2024, 1, 1), Some(d(2023, 1, 1))).is_err());
}

#[test]
fn car_serializes_with_api_field_names() {
    let m = car::Model {
        car_id: 7,
        car_model: "Toyota Corolla".into(),
        year: d(2020, 1, 1),
        color: "Red".into(),
        rental_rate: Decimal::from_str("50.00").unwrap(),
        availability: true,
        location_id: 1,
        created_at: ts(),
        updated_at: ts(),
    };
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["carID"], 7);
    assert_eq!(v["carModel"], "Toyota Corolla");
    assert_eq!(v["year"], "2020-01-01");
    assert_eq!(v["rentalRate"], "50.00");
    assert_eq!(v["locationID"], 1);
    assert!(v.get("createdAt").is_some());
}

#[test]
fn customer_hash_is_never_serialized() {
    let m = customer::Model {
        customer_id: 1,
        name: "Jane".into(),
        email: "jane@example.com".into(),
        phone: None,
        address: None,
        password_hash: "$argon2id$secret".into(),
        created_at: ts(),
        updated_at: ts(),
    };
    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["customerID"], 1);
    assert!(v.get("passwordHash").is_none());
    assert!(!v.to_string().contains("argon2"));
}
