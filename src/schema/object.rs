//! Object and record factories.
//!
//! A [`Shape`] declares object keys in order, each with the validator its
//! value must pass. `Schema::object` is strict: every declared key is
//! checked, keys the shape does not declare are dropped from the result.
//! `Schema::object_loose` checks only the declared keys that are present
//! and keeps every other key unchanged.

use indexmap::IndexMap;

use super::Schema;
use crate::error::ValidationError;
use crate::path::ValuePath;
use crate::validator::Validator;
use crate::value::{ToValue, Value};

/// Ordered declaration of object keys and their validators.
///
/// # Example
///
/// ```rust
/// use conform::{Schema, Shape, Value};
/// use serde_json::json;
///
/// let user = Schema::object(
///     Shape::new()
///         .field("name", Schema::string().min_length(1))
///         .field("age", Schema::number().integer().non_negative())
///         .field("email", Schema::string().email().optional()),
/// );
///
/// let checked = user
///     .check(&Value::from(json!({"name": "Ada", "age": 36, "admin": true})))
///     .unwrap();
/// assert_eq!(checked.keys().collect::<Vec<_>>(), ["name", "age"]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Shape {
    fields: IndexMap<String, Validator<Value>>,
}

impl Shape {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declares `name`, replacing an earlier declaration of the same key.
    #[track_caller]
    pub fn field<T>(mut self, name: impl Into<String>, validator: Validator<T>) -> Self
    where
        T: ToValue + 'static,
    {
        self.fields.insert(name.into(), validator.erase());
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Declared keys in declaration order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}

fn expect_object<'a>(
    value: &'a Value,
    path: &ValuePath,
) -> Result<&'a IndexMap<String, Value>, ValidationError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(ValidationError::invalid_type(path, "object", other)),
    }
}

/// Turns the failure of a declared field checked as `Undefined` into a
/// `required` failure. An override message on the field survives, as does
/// the field validator's location.
fn missing_field(name: &str, path: ValuePath, error: ValidationError) -> ValidationError {
    let mut error = error.with_code("required").with_got("undefined");
    if !error.is_overridden() {
        error.message = format!("required field '{}' is missing", name);
    }
    if error.expected.is_none() {
        error.expected = Some("value".to_string());
    }
    error.path = path;
    error
}

impl Schema {
    /// Strict object validator.
    ///
    /// Each declared key is validated in declaration order; a missing key is
    /// checked as `Undefined`, so only validators that accept absence (such
    /// as `optional()`) let it be missing. The result holds only declared
    /// keys. An empty shape accepts any object unchanged.
    #[track_caller]
    pub fn object(shape: Shape) -> Validator<IndexMap<String, Value>> {
        Validator::new(move |value, path| {
            let object = expect_object(value, path)?;
            if shape.is_empty() {
                return Ok(object.clone());
            }

            let mut validated = IndexMap::with_capacity(shape.len());
            for (name, validator) in &shape.fields {
                let field_path = path.push_field(name.as_str());
                match object.get(name) {
                    Some(field) => {
                        validated.insert(name.clone(), validator.check_at(field, &field_path)?);
                    }
                    None => match validator.check_at(&Value::Undefined, &field_path) {
                        Ok(output) if output.is_absent() => {}
                        Ok(output) => {
                            validated.insert(name.clone(), output);
                        }
                        Err(error) => return Err(missing_field(name, field_path, error)),
                    },
                }
            }
            Ok(validated)
        })
    }

    /// Loose object validator: declared keys that are present are validated
    /// and replaced by their outputs; all other keys pass through.
    ///
    /// ```rust
    /// use conform::{Schema, Shape, Value};
    /// use serde_json::json;
    ///
    /// let loose = Schema::object_loose(Shape::new().field("a", Schema::string()));
    /// let checked = loose.check(&Value::from(json!({"a": "x", "b": 1}))).unwrap();
    ///
    /// assert_eq!(checked["b"], Value::from(1));
    /// ```
    #[track_caller]
    pub fn object_loose(shape: Shape) -> Validator<IndexMap<String, Value>> {
        Validator::new(move |value, path| {
            let mut object = expect_object(value, path)?.clone();
            for (name, validator) in &shape.fields {
                if let Some(field) = object.get_mut(name) {
                    *field = validator.check_at(field, &path.push_field(name.as_str()))?;
                }
            }
            Ok(object)
        })
    }

    /// Accepts an object whose every value passes `values`, whatever the keys.
    #[track_caller]
    pub fn record<T: 'static>(values: Validator<T>) -> Validator<IndexMap<String, T>> {
        Validator::new(move |value, path| {
            expect_object(value, path)?
                .iter()
                .map(|(key, item)| -> Result<(String, T), ValidationError> {
                    let output = values.check_at(item, &path.push_field(key.as_str()))?;
                    Ok((key.clone(), output))
                })
                .collect()
        })
    }
}
