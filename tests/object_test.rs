use conform::{Schema, Shape, Value};
use indexmap::IndexMap;
use serde_json::json;

fn v(json: serde_json::Value) -> Value {
    Value::from(json)
}

fn signup() -> conform::Validator<IndexMap<String, Value>> {
    Schema::object(
        Shape::new()
            .field("username", Schema::string().min_length(3).max_length(16))
            .field("email", Schema::string().email())
            .field("age", Schema::number().integer().range(13.0, 120.0).optional())
            .field("newsletter", Schema::boolean().default(false)),
    )
}

#[test]
fn test_valid_object_keeps_declared_keys_in_order() {
    let checked = signup()
        .check(&v(json!({
            "email": "ada@example.com",
            "username": "ada",
            "tracking": "utm"
        })))
        .unwrap();

    assert_eq!(
        checked.keys().map(String::as_str).collect::<Vec<_>>(),
        ["username", "email", "newsletter"]
    );
    assert_eq!(checked["newsletter"], Value::Bool(false));
}

#[test]
fn test_first_failing_field_wins() {
    let error = signup()
        .check(&v(json!({"username": "ab", "email": "nope"})))
        .unwrap_err();

    assert_eq!(error.path.to_string(), "username");
    assert_eq!(error.code, "min_length");
}

#[test]
fn test_missing_required_field() {
    let error = signup()
        .check(&v(json!({"username": "ada"})))
        .unwrap_err();

    assert_eq!(error.code, "required");
    assert_eq!(error.path.to_string(), "email");
    assert_eq!(error.message, "required field 'email' is missing");
    assert_eq!(error.got.as_deref(), Some("undefined"));
}

#[test]
fn test_optional_and_nullable_fields() {
    let optional = Schema::object(Shape::new().field("note", Schema::string().optional()));
    assert!(!optional.check(&v(json!({}))).unwrap().contains_key("note"));
    assert_eq!(
        optional.check(&v(json!({"note": null}))).unwrap()["note"],
        Value::Null
    );

    let nullable = Schema::object(Shape::new().field("note", Schema::string().nullable()));
    assert_eq!(
        nullable.check(&v(json!({"note": null}))).unwrap()["note"],
        Value::Null
    );
    assert_eq!(nullable.check(&v(json!({}))).unwrap_err().code, "required");
}

#[test]
fn test_object_rejects_non_objects() {
    for input in [json!([]), json!("obj"), json!(null), json!(1)] {
        let error = signup().check(&v(input)).unwrap_err();
        assert_eq!(error.code, "invalid_type");
        assert!(error.path.is_root());
    }
}

#[test]
fn test_field_outputs_replace_inputs() {
    let validator = Schema::object(
        Shape::new().field("tags", Schema::string().map(|s| {
            s.split(',').map(str::trim).map(String::from).collect::<Vec<_>>()
        })),
    );
    let checked = validator.check(&v(json!({"tags": "a, b"}))).unwrap();
    assert_eq!(checked["tags"], v(json!(["a", "b"])));
}

#[test]
fn test_deeply_nested_paths() {
    let validator = Schema::object(Shape::new().field(
        "orders",
        Schema::array(Schema::object(Shape::new().field(
            "items",
            Schema::array(Schema::object(
                Shape::new().field("qty", Schema::number().integer().positive()),
            )),
        ))),
    ));

    let input = v(json!({
        "orders": [
            {"items": [{"qty": 1}]},
            {"items": [{"qty": 2}, {"qty": 0}]}
        ]
    }));
    let error = validator.check(&input).unwrap_err();

    assert_eq!(error.path.to_string(), "orders[1].items[1].qty");
    assert_eq!(error.message, "Number must be positive");
}

#[test]
fn test_loose_object_passes_unknown_keys() {
    let validator = Schema::object_loose(
        Shape::new()
            .field("id", Schema::number().integer())
            .field("label", Schema::string()),
    );

    let input = v(json!({"id": 7, "extra": {"deep": true}}));
    let checked = validator.check(&input).unwrap();
    assert_eq!(Value::Object(checked), input);

    let error = validator.check(&v(json!({"id": 1.5}))).unwrap_err();
    assert_eq!(error.path.to_string(), "id");
}

#[test]
fn test_object_refinements() {
    let validator = Schema::object(Shape::new())
        .includes("id")
        .max_length(2);

    assert!(validator.check(&v(json!({"id": 1}))).is_ok());
    assert_eq!(
        validator.check(&v(json!({"name": 1}))).unwrap_err().message,
        "Object must include key \"id\""
    );
    assert_eq!(
        validator
            .check(&v(json!({"id": 1, "a": 2, "b": 3})))
            .unwrap_err()
            .code,
        "max_length"
    );
}

#[test]
fn test_object_quantifiers_walk_values() {
    let all_numbers = Schema::object(Shape::new()).every(Schema::number());
    assert!(all_numbers.check(&v(json!({"a": 1, "b": 2}))).is_ok());

    let error = all_numbers.check(&v(json!({"a": 1, "b": "2"}))).unwrap_err();
    assert_eq!(error.path.to_string(), "b");
}

#[test]
fn test_field_override_survives_missing_key() {
    let validator = Schema::object(
        Shape::new()
            .field("email", Schema::string().email().with_message("email is required"))
            .field("name", Schema::string()),
    );

    let missing = validator.check(&v(json!({"name": "Ada"}))).unwrap_err();
    assert_eq!(missing.message, "email is required");
    assert_eq!(missing.code, "required");
    assert_eq!(missing.path.to_string(), "email");

    let wrong = validator
        .check(&v(json!({"email": 1, "name": "Ada"})))
        .unwrap_err();
    assert_eq!(wrong.message, "email is required");
    assert_eq!(wrong.code, "invalid_type");

    let unlabelled = validator.check(&v(json!({"email": "a@b.co"}))).unwrap_err();
    assert_eq!(unlabelled.message, "required field 'name' is missing");
}

#[test]
fn test_json_key_order_is_kept() {
    let first_bad = Schema::object(Shape::new()).every(Schema::number());
    let error = first_bad.check(&v(json!({"zeta": "x", "alpha": "y"}))).unwrap_err();
    assert_eq!(error.path.to_string(), "zeta");

    let loose = Schema::object_loose(Shape::new().field("m", Schema::number()));
    let checked = loose.check(&v(json!({"z": 1, "m": 2, "a": 3}))).unwrap();
    assert_eq!(checked.keys().map(String::as_str).collect::<Vec<_>>(), ["z", "m", "a"]);

    let record = Schema::record(Schema::boolean());
    let checked = record.check(&v(json!({"b": true, "a": false}))).unwrap();
    assert_eq!(checked.keys().map(String::as_str).collect::<Vec<_>>(), ["b", "a"]);
}
