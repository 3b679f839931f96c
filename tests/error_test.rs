//! Integration tests for failure values, error collections and build errors.

use conform::{BuildError, Schema, Shape, ValidationError, ValidationErrors, Value, ValuePath};
use serde_json::json;
use stillwater::prelude::*;

#[test]
fn test_validation_error_full_context() {
    let error = Schema::number()
        .check_at(&Value::from("x"), &ValuePath::from_field("age"))
        .unwrap_err();

    assert_eq!(error.path.to_string(), "age");
    assert_eq!(error.message, "expected number, got string");
    assert_eq!(error.code, "invalid_type");
    assert_eq!(error.expected.as_deref(), Some("number"));
    assert_eq!(error.got.as_deref(), Some("string"));
    assert!(error.source_message.is_none());
}

#[test]
fn test_error_location_points_at_construction_site() {
    let line = line!() + 1;
    let validator = Schema::string().min_length(3);
    let error = validator.check(&Value::from("ab")).unwrap_err();

    let location = error.location().expect("location captured");
    assert!(location.file.ends_with("error_test.rs"));
    assert_eq!(location.line, line);
}

#[test]
fn test_innermost_location_is_kept() {
    let inner_line = line!() + 1;
    let inner = Schema::number();
    let outer = Schema::object(Shape::new().field("n", inner));

    let error = outer.check(&Value::from(json!({"n": "x"}))).unwrap_err();
    assert_eq!(error.location().map(|l| l.line), Some(inner_line));
}

#[test]
fn test_same_input_same_error() {
    let validator = Schema::array(Schema::string().email());
    let input = Value::from(json!(["a@b.co", "nope"]));

    let first = validator.check(&input).unwrap_err();
    let second = validator.check(&input).unwrap_err();
    assert_eq!(first, second);
}

#[test]
fn test_errors_combine_via_semigroup() {
    let a = ValidationErrors::single(ValidationError::new(ValuePath::from_field("a"), "first"));
    let b = ValidationErrors::single(ValidationError::new(ValuePath::from_field("b"), "second"));

    let combined = a.combine(b);
    assert_eq!(combined.len(), 2);
    assert_eq!(combined.first().message, "first");

    let messages: Vec<String> = combined.into_iter().map(|e| e.message).collect();
    assert_eq!(messages, ["first", "second"]);
}

#[test]
fn test_errors_from_vec_and_queries() {
    let errors = ValidationErrors::from_vec(vec![
        ValidationError::new(ValuePath::from_field("email"), "bad").with_code("pattern"),
        ValidationError::new(ValuePath::from_field("age"), "bad").with_code("invalid_type"),
        ValidationError::new(ValuePath::from_field("email"), "worse").with_code("required"),
    ])
    .expect("non-empty");

    assert_eq!(errors.at_path(&ValuePath::from_field("email")).len(), 2);
    assert_eq!(errors.with_code("invalid_type").len(), 1);
    assert!(!errors.is_empty());
    assert_eq!(errors.into_vec().len(), 3);
}

#[test]
fn test_errors_display() {
    let errors = ValidationErrors::single(
        ValidationError::new(ValuePath::from_field("name"), "required").with_code("required"),
    );
    assert_eq!(
        errors.to_string(),
        "Validation failed with 1 error(s):\n  1. name: required\n"
    );
}

#[test]
fn test_build_errors() {
    let error = Schema::string().pattern("a(b").unwrap_err();
    assert!(matches!(error, BuildError::InvalidPattern { ref pattern, .. } if pattern == "a(b"));
    assert!(std::error::Error::source(&error).is_some());

    let error = conform::parse_date("not a date").unwrap_err();
    assert_eq!(error.to_string(), "invalid date literal 'not a date'");
}

#[test]
fn test_unsupported_kind_message() {
    let error = Schema::unknown()
        .min_length(1)
        .check(&Value::from(true))
        .unwrap_err();

    assert_eq!(error.code, "invalid_type_for_validation");
    assert_eq!(error.message, "invalid type for min_length validation: boolean");
}

#[test]
#[should_panic(expected = "callback bug")]
fn test_panics_are_not_validation_failures() {
    let validator = Schema::string()
        .map(|_| -> String { panic!("callback bug") })
        .or(Schema::string())
        .default(String::new());

    let _ = validator.check(&Value::from("x"));
}
