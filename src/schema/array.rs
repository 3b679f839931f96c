//! Factories for ordered and keyed collections: arrays, sets, maps and
//! tuples.

use super::Schema;
use crate::error::ValidationError;
use crate::path::ValuePath;
use crate::validator::Validator;
use crate::value::{MapOf, SetOf, Value};

/// Path segment for a map entry: the key's text.
fn entry_path(path: &ValuePath, key: &Value) -> ValuePath {
    match key {
        Value::String(s) => path.push_field(s.as_str()),
        other => path.push_field(other.to_string()),
    }
}

fn elements<T>(
    items: &[Value],
    path: &ValuePath,
    validator: &Validator<T>,
) -> Result<Vec<T>, ValidationError>
where
    T: 'static,
{
    items
        .iter()
        .enumerate()
        .map(|(i, item)| validator.check_at(item, &path.push_index(i)))
        .collect()
}

impl Schema {
    /// Accepts an array whose every element passes `items`.
    ///
    /// The first failing element's error is returned with its index in the
    /// path.
    ///
    /// ```rust
    /// use conform::{Schema, Value};
    /// use serde_json::json;
    ///
    /// let tags = Schema::array(Schema::string());
    /// let error = tags.check(&Value::from(json!(["a", 2]))).unwrap_err();
    ///
    /// assert_eq!(error.path.to_string(), "[1]");
    /// ```
    #[track_caller]
    pub fn array<T: 'static>(items: Validator<T>) -> Validator<Vec<T>> {
        Validator::new(move |value, path| match value {
            Value::Array(array) => elements(array, path, &items),
            other => Err(ValidationError::invalid_type(path, "array", other)),
        })
    }

    /// Accepts a set whose every element passes `items`, keeping element order.
    #[track_caller]
    pub fn set<T: 'static>(items: Validator<T>) -> Validator<SetOf<T>> {
        Validator::new(move |value, path| match value {
            Value::Set(set) => elements(set, path, &items).map(SetOf),
            other => Err(ValidationError::invalid_type(path, "set", other)),
        })
    }

    /// Accepts a map whose keys pass `keys` and whose values pass `values`.
    #[track_caller]
    pub fn map<K: 'static, V: 'static>(
        keys: Validator<K>,
        values: Validator<V>,
    ) -> Validator<MapOf<K, V>> {
        Validator::new(move |value, path| match value {
            Value::Map(entries) => entries
                .iter()
                .map(|(key, item)| -> Result<(K, V), ValidationError> {
                    let entry = entry_path(path, key);
                    Ok((keys.check_at(key, &entry)?, values.check_at(item, &entry)?))
                })
                .collect::<Result<Vec<_>, _>>()
                .map(MapOf),
            other => Err(ValidationError::invalid_type(path, "map", other)),
        })
    }

    /// Accepts an array with exactly one element per validator, checked
    /// positionally.
    ///
    /// ```rust
    /// use conform::{Schema, Value};
    /// use serde_json::json;
    ///
    /// let point = Schema::tuple(vec![Schema::string().erase(), Schema::number().erase()]);
    ///
    /// assert!(point.check(&Value::from(json!(["a", 1]))).is_ok());
    /// assert_eq!(
    ///     point.check(&Value::from(json!(["a", 1, 2]))).unwrap_err().code,
    ///     "tuple_length"
    /// );
    /// ```
    #[track_caller]
    pub fn tuple(positions: Vec<Validator<Value>>) -> Validator<Vec<Value>> {
        Validator::new(move |value, path| {
            let items = match value {
                Value::Array(items) => items,
                other => return Err(ValidationError::invalid_type(path, "array", other)),
            };
            if items.len() != positions.len() {
                return Err(ValidationError::new(
                    path.clone(),
                    format!(
                        "expected tuple of {} elements, got {}",
                        positions.len(),
                        items.len()
                    ),
                )
                .with_code("tuple_length")
                .with_expected(positions.len().to_string())
                .with_got(items.len().to_string()));
            }
            positions
                .iter()
                .zip(items)
                .enumerate()
                .map(|(i, (validator, item))| validator.check_at(item, &path.push_index(i)))
                .collect()
        })
    }
}
