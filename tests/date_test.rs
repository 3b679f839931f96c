use chrono::{TimeZone, Utc};
use conform::{parse_date, Schema, Shape, Value};
use serde_json::json;

#[test]
fn test_date_inputs() {
    let validator = Schema::date();
    let expected = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();

    assert_eq!(validator.check(&Value::from("2024-06-01T12:00:00Z")).unwrap(), expected);
    assert_eq!(validator.check(&Value::from("2024-06-01T14:00:00+02:00")).unwrap(), expected);
    assert_eq!(
        validator.check(&Value::from(expected.timestamp_millis())).unwrap(),
        expected
    );
    assert_eq!(validator.check(&Value::Date(expected)).unwrap(), expected);
}

#[test]
fn test_invalid_dates() {
    let validator = Schema::date();

    let error = validator.check(&Value::from("2024-13-01")).unwrap_err();
    assert_eq!(error.code, "invalid_date");
    assert_eq!(error.message, "invalid date: \"2024-13-01\"");

    assert_eq!(validator.check(&Value::from(1.5)).unwrap_err().code, "invalid_date");
    assert_eq!(validator.check(&Value::Null).unwrap_err().code, "invalid_type");
}

#[test]
fn test_before_and_after_are_strict() {
    let cutoff = parse_date("2024-06-01T12:00:00Z").unwrap();

    let before = Schema::date().before(cutoff);
    assert!(before.check(&Value::from("2024-06-01T11:59:59Z")).is_ok());
    let error = before.check(&Value::from("2024-06-01T12:00:00Z")).unwrap_err();
    assert_eq!(error.code, "before");
    assert_eq!(error.message, "Date must be before 2024-06-01T12:00:00.000Z");

    let after = Schema::date().after(cutoff);
    assert!(after.check(&Value::from("2024-06-01T12:00:01Z")).is_ok());
    assert!(after.check(&Value::Date(cutoff)).is_err());
}

#[test]
fn test_same_date_as_compares_utc_calendar_day() {
    let reference = parse_date("2024-06-01").unwrap();
    let validator = Schema::date().same_date_as(reference);

    assert!(validator.check(&Value::from("2024-06-01T23:59:59Z")).is_ok());
    assert!(validator.check(&Value::from("2024-06-02T00:00:00Z")).is_err());
    assert!(validator.check(&Value::from("2024-06-01T01:00:00+02:00")).is_err());
}

#[test]
fn test_date_rules_reject_non_dates() {
    let error = Schema::unknown()
        .before(Utc::now())
        .check(&Value::from("2020-01-01"))
        .unwrap_err();

    assert_eq!(error.code, "invalid_type_for_validation");
    assert_eq!(error.message, "invalid type for before validation: string");
}

#[test]
fn test_date_field_in_object() {
    let event = Schema::object(
        Shape::new()
            .field("title", Schema::string())
            .field("starts_at", Schema::date().after(parse_date("2000-01-01").unwrap())),
    );

    let checked = event
        .check(&Value::from(json!({"title": "launch", "starts_at": "2030-01-01"})))
        .unwrap();
    assert!(matches!(checked["starts_at"], Value::Date(_)));

    let error = event
        .check(&Value::from(json!({"title": "launch", "starts_at": "1999-12-31"})))
        .unwrap_err();
    assert_eq!(error.path.to_string(), "starts_at");
}
