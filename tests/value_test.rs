use std::sync::Arc;

use conform::{
    loose_eq, strict_eq, Buffer, BufferKind, Func, Instance, Kind, Schema, Symbol, Value,
};
use serde_json::json;

#[test]
fn test_json_conversion_round_trip() {
    let json = json!({"name": "Ada", "tags": ["x"], "score": 1.5, "ok": true, "none": null});
    let value = Value::from(json.clone());

    assert_eq!(value.kind(), Kind::Object);
    assert_eq!(value.get("tags").kind(), Kind::Array);
    assert!(value.get("missing").is_undefined());
    assert_eq!(value.to_json(), Some(json));
}

#[test]
fn test_to_json_skips_non_json_kinds() {
    assert_eq!(Value::Undefined.to_json(), None);
    assert_eq!(Value::Number(f64::NAN).to_json(), None);
    assert_eq!(Value::Symbol(Symbol::new("id")).to_json(), None);
    assert_eq!(Value::Set(vec![Value::from(1)]).to_json(), Some(json!([1.0])));
}

#[test]
fn test_strict_equality() {
    assert!(strict_eq(&Value::from(json!({"a": 1, "b": 2})), &Value::from(json!({"b": 2, "a": 1}))));
    assert!(!strict_eq(&Value::from(1), &Value::from("1")));
    assert!(!strict_eq(&Value::Number(f64::NAN), &Value::Number(f64::NAN)));

    let symbol = Symbol::new("token");
    assert!(strict_eq(&Value::Symbol(symbol.clone()), &Value::Symbol(symbol)));
    assert!(!strict_eq(
        &Value::Symbol(Symbol::new("token")),
        &Value::Symbol(Symbol::new("token"))
    ));
}

#[test]
fn test_loose_equality() {
    assert!(loose_eq(&Value::Null, &Value::Undefined));
    assert!(loose_eq(&Value::from(1), &Value::from("1")));
    assert!(loose_eq(&Value::from(true), &Value::from(1)));
    assert!(loose_eq(&Value::BigInt(5), &Value::from(5)));
    assert!(!loose_eq(&Value::Null, &Value::from(0)));
}

#[test]
fn test_non_json_factories() {
    let symbol = Symbol::new("marker");
    assert!(Schema::symbol().check(&Value::Symbol(symbol)).is_ok());

    let double = Func::named("double", |args: &[Value]| {
        Value::from(args.first().and_then(Value::as_f64).unwrap_or(0.0) * 2.0)
    });
    let func = Schema::func().check(&Value::Func(double)).unwrap();
    assert_eq!(func.name(), Some("double"));
    assert_eq!(func.call(&[Value::from(4)]), Value::from(8));

    let regexp = regex::Regex::new("^a+$").unwrap();
    assert!(Schema::regexp().check(&Value::RegExp(regexp)).is_ok());
    assert!(Schema::regexp().check(&Value::from("^a+$")).is_err());
}

#[test]
fn test_buffers() {
    let bytes = Value::Buffer(Buffer::new(BufferKind::Uint8, vec![1, 2, 3]));
    assert_eq!(Schema::buffer().check(&bytes).unwrap().len(), 3);
    assert!(Schema::typed_buffer(BufferKind::Uint8).check(&bytes).is_ok());

    let error = Schema::typed_buffer(BufferKind::Float32).check(&bytes).unwrap_err();
    assert_eq!(error.message, "expected Float32 buffer, got Uint8 buffer");
}

#[derive(Debug, PartialEq)]
struct Account {
    id: u32,
}

#[test]
fn test_instances() {
    let account = Value::Instance(Instance::new(Account { id: 7 }));
    let checked: Arc<Account> = Schema::instance::<Account>().check(&account).unwrap();
    assert_eq!(checked.id, 7);

    let error = Schema::instance::<String>().check(&account).unwrap_err();
    assert_eq!(error.code, "invalid_type");
}

#[test]
fn test_kind_names() {
    assert_eq!(Value::BigInt(1).kind().name(), "bigint");
    assert_eq!(Kind::RegExp.title(), "RegExp");
    assert_eq!(Kind::Function.to_string(), "function");
}
