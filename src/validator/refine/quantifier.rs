//! Collection quantifiers: `every` and `some`.

use crate::error::ValidationError;
use crate::path::ValuePath;
use crate::value::{ToValue, Value};

use super::unsupported;
use crate::validator::Validator;

/// The members of a collection paired with their paths.
fn members<'a>(
    rule: &str,
    value: &'a Value,
    path: &ValuePath,
) -> Result<Vec<(ValuePath, &'a Value)>, ValidationError> {
    let members = match value {
        Value::Array(items) | Value::Set(items) => items
            .iter()
            .enumerate()
            .map(|(i, item)| (path.push_index(i), item))
            .collect(),
        Value::Object(map) => map
            .iter()
            .map(|(key, item)| (path.push_field(key.as_str()), item))
            .collect(),
        Value::Map(entries) => entries
            .iter()
            .map(|(key, item)| {
                let key = match key {
                    Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (path.push_field(key), item)
            })
            .collect(),
        other => return Err(unsupported(rule, other, path)),
    };
    Ok(members)
}

impl<T: ToValue + 'static> Validator<T> {
    /// Requires every element (or object/map value) to pass `sub`.
    ///
    /// The first failing member's error is returned with that member's
    /// path. An empty collection passes.
    ///
    /// ```rust
    /// use conform::{Schema, Value};
    /// use serde_json::json;
    ///
    /// let scores = Schema::unknown().every(Schema::number().range(0.0, 100.0));
    /// assert!(scores.check(&Value::from(json!([10, 99]))).is_ok());
    ///
    /// let error = scores.check(&Value::from(json!([10, 101]))).unwrap_err();
    /// assert_eq!(error.path.to_string(), "[1]");
    /// ```
    #[track_caller]
    pub fn every<U: 'static>(&self, sub: Validator<U>) -> Validator<T> {
        self.refine(move |value, path| {
            for (member_path, member) in members("every", value, path)? {
                sub.check_at(member, &member_path)?;
            }
            Ok(())
        })
    }

    /// Requires at least one element (or object/map value) to pass `sub`.
    /// An empty collection fails.
    #[track_caller]
    pub fn some<U: 'static>(&self, sub: Validator<U>) -> Validator<T> {
        self.refine(move |value, path| {
            let members = members("some", value, path)?;
            if members
                .iter()
                .any(|(member_path, member)| sub.check_at(member, member_path).is_ok())
            {
                return Ok(());
            }
            Err(ValidationError::new(
                path.clone(),
                format!("{} must contain at least one matching value", value.kind().title()),
            )
            .with_code("some")
            .with_got(format!("{} values", members.len())))
        })
    }
}
