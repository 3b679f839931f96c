//! Refinements: constraints attached to an existing validator's output.
//!
//! A refinement validates with the inner validator first, then inspects the
//! output's runtime [`Kind`] and applies the rule for that kind. A kind the
//! rule has no meaning for is rejected with `invalid_type_for_validation`;
//! nothing passes silently.

mod format;
mod kinds;
mod length;
mod membership;
mod numeric;
mod quantifier;
mod temporal;

use crate::error::ValidationError;
use crate::path::ValuePath;
use crate::value::{Kind, ToValue, Value};

use super::Validator;

impl<T: ToValue + 'static> Validator<T> {
    /// Validates with `self`, then runs `rule` against the output.
    #[track_caller]
    pub(crate) fn refine<F>(&self, rule: F) -> Validator<T>
    where
        F: Fn(&Value, &ValuePath) -> Result<(), ValidationError> + Send + Sync + 'static,
    {
        let inner = self.clone();
        Validator::new(move |value, path| {
            let output = inner.check_at(value, path)?;
            rule(&output.to_value(), path)?;
            Ok(output)
        })
    }
}

/// The failure raised when a rule meets a kind it does not support.
pub(crate) fn unsupported(rule: &str, value: &Value, path: &ValuePath) -> ValidationError {
    ValidationError::new(
        path.clone(),
        format!("invalid type for {} validation: {}", rule, value.kind()),
    )
    .with_code("invalid_type_for_validation")
    .with_got(value.kind().name())
}

/// The countable size of a value: characters, elements, entries, keys or
/// decimal digits.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Size {
    pub(crate) count: usize,
    pub(crate) kind: Kind,
    singular: &'static str,
    plural: &'static str,
}

impl Size {
    pub(crate) fn of(value: &Value) -> Option<Size> {
        let (count, singular, plural) = match value {
            Value::String(s) => (s.chars().count(), "character", "characters"),
            Value::Array(items) | Value::Set(items) => (items.len(), "element", "elements"),
            Value::Map(entries) => (entries.len(), "entry", "entries"),
            Value::Object(map) => (map.len(), "key", "keys"),
            Value::Number(n) if n.is_finite() => (digit_count(*n), "digit", "digits"),
            Value::BigInt(n) => (n.unsigned_abs().to_string().len(), "digit", "digits"),
            _ => return None,
        };
        Some(Size {
            count,
            kind: value.kind(),
            singular,
            plural,
        })
    }

    /// Unit noun agreeing with `n`.
    pub(crate) fn unit(&self, n: f64) -> &'static str {
        if n == 1.0 {
            self.singular
        } else {
            self.plural
        }
    }
}

fn digit_count(n: f64) -> usize {
    n.abs()
        .to_string()
        .chars()
        .filter(char::is_ascii_digit)
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_size_per_kind() {
        let cases = [
            (json!("héllo"), 5, Kind::String),
            (json!([1, 2, 3]), 3, Kind::Array),
            (json!({"a": 1, "b": 2}), 2, Kind::Object),
            (json!(-12.5), 3, Kind::Number),
            (json!(1000), 4, Kind::Number),
        ];
        for (json, count, kind) in cases {
            let size = Size::of(&Value::from(json)).unwrap();
            assert_eq!(size.count, count);
            assert_eq!(size.kind, kind);
        }
    }

    #[test]
    fn test_size_unsupported_kinds() {
        assert!(Size::of(&Value::Bool(true)).is_none());
        assert!(Size::of(&Value::Null).is_none());
        assert!(Size::of(&Value::Number(f64::INFINITY)).is_none());
    }

    #[test]
    fn test_unit_agreement() {
        let size = Size::of(&Value::from("a")).unwrap();
        assert_eq!(size.unit(1.0), "character");
        assert_eq!(size.unit(2.0), "characters");
    }
}
