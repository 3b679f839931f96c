//! Membership and equality refinements.

use crate::error::ValidationError;
use crate::path::ValuePath;
use crate::value::{loose_eq, strict_eq, ToValue, Value};

use super::unsupported;
use crate::validator::Validator;

/// Text form of a needle used against strings.
fn text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn rejected(path: &ValuePath, code: &str, message: String, got: &Value) -> ValidationError {
    ValidationError::new(path.clone(), message)
        .with_code(code)
        .with_got(got.to_string())
}

impl<T: ToValue + 'static> Validator<T> {
    /// Requires the output to loosely equal one of `allowed`.
    #[track_caller]
    pub fn one_of<I, V>(&self, allowed: I) -> Validator<T>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let allowed: Vec<Value> = allowed.into_iter().map(Into::into).collect();
        self.refine(move |value, path| {
            if allowed.iter().any(|candidate| loose_eq(candidate, value)) {
                Ok(())
            } else {
                let listed = Value::Array(allowed.clone());
                Err(rejected(
                    path,
                    "one_of",
                    format!("Value must be one of {}", listed),
                    value,
                )
                .with_expected(listed.to_string()))
            }
        })
    }

    /// Requires a string to contain a substring, an array or set to contain
    /// an element, or an object or map to contain a key.
    ///
    /// ```rust
    /// use conform::{Schema, Value};
    /// use serde_json::json;
    ///
    /// let roles = Schema::array(Schema::string()).includes("admin");
    /// assert!(roles.check(&Value::from(json!(["user", "admin"]))).is_ok());
    /// assert!(roles.check(&Value::from(json!(["user"]))).is_err());
    /// ```
    #[track_caller]
    pub fn includes(&self, item: impl Into<Value>) -> Validator<T> {
        let item = item.into();
        self.refine(move |value, path| {
            let (found, message) = match value {
                Value::String(s) => (
                    s.contains(text(&item).as_str()),
                    format!("String must include {:?}", text(&item)),
                ),
                Value::Array(items) | Value::Set(items) => (
                    items.iter().any(|element| strict_eq(element, &item)),
                    format!("{} must include {}", value.kind().title(), item),
                ),
                Value::Object(map) => (
                    map.contains_key(text(&item).as_str()),
                    format!("Object must include key {:?}", text(&item)),
                ),
                Value::Map(entries) => (
                    entries.iter().any(|(key, _)| strict_eq(key, &item)),
                    format!("Map must include key {}", item),
                ),
                other => return Err(unsupported("includes", other, path)),
            };
            if found {
                Ok(())
            } else {
                Err(rejected(path, "includes", message, value))
            }
        })
    }

    /// Requires a string to start with `item`, or an array to have `item`
    /// as its first element.
    #[track_caller]
    pub fn first(&self, item: impl Into<Value>) -> Validator<T> {
        let item = item.into();
        self.refine(move |value, path| {
            let (found, message) = match value {
                Value::String(s) => (
                    s.starts_with(text(&item).as_str()),
                    format!("String must start with {:?}", text(&item)),
                ),
                Value::Array(items) => (
                    items.first().is_some_and(|element| strict_eq(element, &item)),
                    format!("Array must start with {}", item),
                ),
                other => return Err(unsupported("first", other, path)),
            };
            if found {
                Ok(())
            } else {
                Err(rejected(path, "first", message, value))
            }
        })
    }

    /// Requires a string to end with `item`, or an array to have `item` as
    /// its last element.
    #[track_caller]
    pub fn last(&self, item: impl Into<Value>) -> Validator<T> {
        let item = item.into();
        self.refine(move |value, path| {
            let (found, message) = match value {
                Value::String(s) => (
                    s.ends_with(text(&item).as_str()),
                    format!("String must end with {:?}", text(&item)),
                ),
                Value::Array(items) => (
                    items.last().is_some_and(|element| strict_eq(element, &item)),
                    format!("Array must end with {}", item),
                ),
                other => return Err(unsupported("last", other, path)),
            };
            if found {
                Ok(())
            } else {
                Err(rejected(path, "last", message, value))
            }
        })
    }

    /// Requires the output to equal `expected` after primitive coercion
    /// (`5` equals `"5"`, `null` equals `undefined`).
    #[track_caller]
    pub fn equal_to(&self, expected: impl Into<Value>) -> Validator<T> {
        let expected = expected.into();
        self.refine(move |value, path| {
            if loose_eq(value, &expected) {
                Ok(())
            } else {
                Err(rejected(
                    path,
                    "equal_to",
                    format!("Value must equal {}", expected),
                    value,
                ))
            }
        })
    }

    /// Requires the output to be of the same kind as `expected` and equal to
    /// it; functions, symbols and instances must be the very same handle.
    #[track_caller]
    pub fn strictly_equal_to(&self, expected: impl Into<Value>) -> Validator<T> {
        let expected = expected.into();
        self.refine(move |value, path| {
            if strict_eq(value, &expected) {
                Ok(())
            } else {
                Err(rejected(
                    path,
                    "strictly_equal_to",
                    format!("Value must be strictly equal to {}", expected),
                    value,
                ))
            }
        })
    }

    /// Rejects an output strictly equal to `excluded`.
    #[track_caller]
    pub fn not_equal_to(&self, excluded: impl Into<Value>) -> Validator<T> {
        let excluded = excluded.into();
        self.refine(move |value, path| {
            if strict_eq(value, &excluded) {
                Err(rejected(
                    path,
                    "not_equal_to",
                    format!("Value must not equal {}", excluded),
                    value,
                ))
            } else {
                Ok(())
            }
        })
    }
}
