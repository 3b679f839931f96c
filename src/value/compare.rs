//! Equality relations used by the equality and membership refinements.

use super::Value;

/// Structural equality of two values of the same kind.
///
/// Functions, symbols and instances compare by identity; everything else
/// compares by content. Object comparison ignores key order. `NaN` is never
/// equal to anything, itself included.
pub fn strict_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(x), Value::Bool(y)) => x == y,
        (Value::Number(x), Value::Number(y)) => x == y,
        (Value::BigInt(x), Value::BigInt(y)) => x == y,
        (Value::String(x), Value::String(y)) => x == y,
        (Value::Symbol(x), Value::Symbol(y)) => x.same_as(y),
        (Value::Array(x), Value::Array(y)) | (Value::Set(x), Value::Set(y)) => {
            x.len() == y.len() && x.iter().zip(y).all(|(l, r)| strict_eq(l, r))
        }
        (Value::Object(x), Value::Object(y)) => {
            x.len() == y.len()
                && x.iter()
                    .all(|(key, l)| y.get(key).is_some_and(|r| strict_eq(l, r)))
        }
        (Value::Map(x), Value::Map(y)) => {
            x.len() == y.len()
                && x.iter()
                    .zip(y)
                    .all(|((lk, lv), (rk, rv))| strict_eq(lk, rk) && strict_eq(lv, rv))
        }
        (Value::Date(x), Value::Date(y)) => x == y,
        (Value::RegExp(x), Value::RegExp(y)) => x.as_str() == y.as_str(),
        (Value::Func(x), Value::Func(y)) => x.same_as(y),
        (Value::Buffer(x), Value::Buffer(y)) => x == y,
        (Value::Instance(x), Value::Instance(y)) => x.same_as(y),
        _ => false,
    }
}

/// Loose equality with primitive coercion.
///
/// Values of the same kind use [`strict_eq`]. Across kinds: `null` equals
/// `undefined`, booleans compare as `0`/`1`, numeric strings compare with
/// numbers and big integers, and dates compare with their epoch
/// milliseconds.
pub fn loose_eq(a: &Value, b: &Value) -> bool {
    if a.kind() == b.kind() {
        return strict_eq(a, b);
    }
    match (a, b) {
        (Value::Null, Value::Undefined) | (Value::Undefined, Value::Null) => true,
        (Value::Bool(x), other) | (other, Value::Bool(x)) => {
            loose_eq(&Value::Number(if *x { 1.0 } else { 0.0 }), other)
        }
        (Value::Number(n), Value::String(s)) | (Value::String(s), Value::Number(n)) => {
            parse_numeric(s).is_some_and(|parsed| parsed == *n)
        }
        (Value::BigInt(i), Value::Number(n)) | (Value::Number(n), Value::BigInt(i)) => {
            n.fract() == 0.0 && *i as f64 == *n
        }
        (Value::BigInt(i), Value::String(s)) | (Value::String(s), Value::BigInt(i)) => {
            s.trim().parse::<i128>().is_ok_and(|parsed| parsed == *i)
        }
        (Value::Date(d), Value::Number(n)) | (Value::Number(n), Value::Date(d)) => {
            d.timestamp_millis() as f64 == *n
        }
        _ => false,
    }
}

/// Numeric reading of a string: blank strings read as zero.
fn parse_numeric(s: &str) -> Option<f64> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        Some(0.0)
    } else {
        trimmed.parse::<f64>().ok()
    }
}
