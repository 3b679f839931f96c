use conform::{Schema, ValidationError, Validator, Value};
use serde_json::json;

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

// ====== or / union Tests ======

#[test]
fn test_or_falls_through_to_second_alternative() {
    let validator = Schema::string().erase().or(Schema::number().erase());

    assert_eq!(validator.check(&v(json!(5))).unwrap(), Value::from(5));
    assert_eq!(validator.check(&v(json!("x"))).unwrap(), Value::from("x"));
}

#[test]
fn test_or_all_alternatives_fail() {
    let validator = Schema::string().erase().or(Schema::number().erase());
    let error = validator.check(&v(json!(true))).unwrap_err();

    assert_eq!(error.message, "no valid alternative");
    assert_eq!(error.code, "no_valid_alternative");
    assert_eq!(error.got.as_deref(), Some("boolean"));
}

#[test]
fn test_or_first_success_wins() {
    let validator = Schema::string()
        .map(|_| "first")
        .or([Schema::string().map(|_| "second"), Schema::string().map(|_| "third")]);

    assert_eq!(validator.check(&v(json!("x"))).unwrap(), "first");
}

#[test]
fn test_or_accepts_vec_of_alternatives() {
    let alternatives: Vec<Validator<Value>> = vec![
        Schema::boolean().erase(),
        Schema::unknown().not_empty().erase(),
    ];
    let validator = Schema::number().erase().or(alternatives);

    assert!(validator.check(&v(json!(false))).is_ok());
    assert!(validator.check(&v(json!([1]))).is_ok());
    assert!(validator.check(&v(json!([]))).is_err());
}

#[test]
fn test_union_method_ignores_receiver() {
    let validator = Schema::string().union(vec![Schema::string().min_length(3)]);
    assert!(validator.check(&v(json!("abc"))).is_ok());
    assert!(validator.check(&v(json!("a"))).is_err());
}

// ====== and / not Tests ======

#[test]
fn test_and_requires_both() {
    let validator = Schema::string().min_length(2).and(Schema::string().max_length(4));

    assert_eq!(
        validator.check(&v(json!("abc"))).unwrap(),
        ("abc".to_string(), "abc".to_string())
    );
    assert!(validator.check(&v(json!("a"))).is_err());
    assert!(validator.check(&v(json!("abcde"))).is_err());
}

#[test]
fn test_not_semantics() {
    let validator = Schema::string().not(Schema::string().max_length(3));

    let error = validator.check(&v(json!("hi"))).unwrap_err();
    assert_eq!(error.code, "not_failed");
    assert_eq!(validator.check(&v(json!("hello"))).unwrap(), "hello");
}

// ====== absence Tests ======

#[test]
fn test_optional_passes_absent_values() {
    let validator = Schema::string().min_length(3).optional();

    assert_eq!(validator.check(&Value::Undefined).unwrap(), None);
    assert_eq!(validator.check(&Value::Null).unwrap(), None);
    assert_eq!(validator.check(&v(json!("abc"))).unwrap().as_deref(), Some("abc"));
    assert!(validator.check(&v(json!("ab"))).is_err());
}

#[test]
fn test_nullable_only_passes_null() {
    let validator = Schema::string().nullable();

    assert_eq!(validator.check(&Value::Null).unwrap(), None);
    assert_eq!(validator.check(&Value::Undefined).unwrap_err().code, "invalid_type");
}

#[test]
fn test_default_substitution() {
    let validator = Schema::number().default(0.0);

    assert_eq!(validator.check(&v(json!("bad"))).unwrap(), 0.0);
    assert_eq!(validator.check(&v(json!(7))).unwrap(), 7.0);
}

#[test]
fn test_required_and_prohibited() {
    let required = Schema::string().required();
    assert_eq!(required.check(&Value::Undefined).unwrap_err().code, "required");
    assert_eq!(required.check(&v(json!(1))).unwrap_err().code, "invalid_type");

    let prohibited = Schema::string().prohibited();
    assert!(prohibited.check(&Value::Null).is_ok());
    assert!(prohibited.check(&v(json!("x"))).is_err());
}

// ====== pipelines and branching Tests ======

#[test]
fn test_map_then_refine() {
    let validator = Schema::string().map(|s| s.trim().to_string()).min_length(2);

    assert_eq!(validator.check(&v(json!("  ab "))).unwrap(), "ab");
    assert!(validator.check(&v(json!("  a  "))).is_err());
}

#[test]
fn test_combine_passes_output_to_next_validator() {
    let validator = Schema::string()
        .map(|s| s.len())
        .combine(Schema::number().more_than(2.0));

    assert_eq!(validator.check(&v(json!("abc"))).unwrap(), 3.0);
    assert_eq!(
        validator.check(&v(json!("ab"))).unwrap_err().message,
        "Number must be more than 2"
    );
}

#[test]
fn test_conditional_pass_through() {
    let validator = Schema::string().conditional(|s| s.starts_with('#'), Schema::string().length(7));

    assert_eq!(validator.check(&v(json!("red"))).unwrap(), Value::from("red"));
    assert!(validator.check(&v(json!("#ff0000"))).is_ok());
    assert!(validator.check(&v(json!("#fff"))).is_err());
}

#[test]
fn test_conditional_with_fail_branch() {
    let validator = Schema::number().conditional_else(
        |n| *n >= 0.0,
        Schema::unknown(),
        Schema::fail("negative numbers are not allowed"),
    );

    assert!(validator.check(&v(json!(1))).is_ok());
    assert_eq!(
        validator.check(&v(json!(-1))).unwrap_err().message,
        "negative numbers are not allowed"
    );
}

#[test]
fn test_custom_and_error_handler() {
    let validator = Schema::string()
        .custom(|s| s.chars().all(char::is_alphanumeric), "must be alphanumeric")
        .custom_error_handler(|error| error.with_code("bad_username"));

    assert!(validator.check(&v(json!("ada99"))).is_ok());

    let error = validator.check(&v(json!("ada!"))).unwrap_err();
    assert_eq!(error.message, "must be alphanumeric");
    assert_eq!(error.code, "bad_username");
}

// ====== override Tests ======

#[test]
fn test_override_message_is_exact() {
    let validator = Schema::string().min_length(5).with_message("too short");

    for input in [json!("abc"), json!(5), json!(null)] {
        assert_eq!(validator.check(&v(input)).unwrap_err().message, "too short");
    }
}

#[test]
fn test_outermost_override_wins() {
    let inner = Schema::string().with_message("inner");
    let outer = inner.optional().with_message("outer");

    let error = outer.check(&v(json!(1))).unwrap_err();
    assert_eq!(error.message, "outer");
    assert_eq!(error.source_message.as_deref(), Some("expected string, got number"));
    assert_eq!(inner.check(&v(json!(1))).unwrap_err().message, "inner");
}

#[test]
fn test_override_survives_repeated_rechecks() {
    let base = Schema::number().with_message("need a number");
    let nested = base
        .or(base.clone())
        .combine(base.clone())
        .with_message("need a number");

    let error = nested.check(&v(json!("x"))).unwrap_err();
    assert_eq!(error.message, "need a number");
    assert!(error.is_overridden());
}

#[test]
fn test_override_applies_to_format_shortcuts() {
    let error = Schema::string().email().check(&v(json!("nope"))).unwrap_err();
    assert_eq!(error.message, "Invalid email address");
    assert_eq!(error.code, "pattern");
}

// ====== immutability Tests ======

#[test]
fn test_combinators_leave_original_unchanged() {
    let base = Schema::string();
    let _derived = [
        base.min_length(10),
        base.with_message("changed"),
        base.default("fallback".to_string()),
    ];

    assert!(base.check(&v(json!("short"))).is_ok());
    assert_eq!(
        base.check(&v(json!(1))).unwrap_err().message,
        "expected string, got number"
    );
}

#[test]
fn test_custom_validate_implementation() {
    struct Even;

    impl conform::Validate for Even {
        type Output = i64;

        fn check_at(
            &self,
            value: &Value,
            path: &conform::ValuePath,
        ) -> Result<i64, ValidationError> {
            match value {
                Value::Number(n) if n.fract() == 0.0 && (*n as i64) % 2 == 0 => Ok(*n as i64),
                _ => Err(ValidationError::new(path.clone(), "expected an even number")),
            }
        }
    }

    let validator = Validator::from_validate(Even).optional();
    assert_eq!(validator.check(&v(json!(4))).unwrap(), Some(4));
    assert!(validator.check(&v(json!(3))).is_err());
}
