//! Conversions between [`Value`] and Rust / JSON values.

use std::any::Any;
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use regex::Regex;

use super::{Buffer, Func, Instance, MapOf, SetOf, Symbol, Value};

/// Converts a validator's typed output back into a [`Value`].
///
/// Refinements inspect the runtime shape of whatever the validator produced,
/// and pipelines (`combine`, `conditional`) feed one validator's output into
/// another; both go through this trait.
pub trait ToValue {
    fn to_value(&self) -> Value;
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! number_to_value {
    ($($ty:ty),*) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Number(*self as f64)
                }
            }
        )*
    };
}

number_to_value!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl ToValue for i128 {
    fn to_value(&self) -> Value {
        Value::BigInt(*self)
    }
}

impl ToValue for () {
    fn to_value(&self) -> Value {
        Value::Undefined
    }
}

/// `None` converts to `Null`.
impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        Value::Array(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue> ToValue for IndexMap<String, T> {
    fn to_value(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_value()))
                .collect(),
        )
    }
}

impl<A: ToValue, B: ToValue> ToValue for (A, B) {
    fn to_value(&self) -> Value {
        Value::Array(vec![self.0.to_value(), self.1.to_value()])
    }
}

impl<T: ToValue> ToValue for SetOf<T> {
    fn to_value(&self) -> Value {
        Value::Set(self.0.iter().map(ToValue::to_value).collect())
    }
}

impl<K: ToValue, V: ToValue> ToValue for MapOf<K, V> {
    fn to_value(&self) -> Value {
        Value::Map(
            self.0
                .iter()
                .map(|(key, value)| (key.to_value(), value.to_value()))
                .collect(),
        )
    }
}

impl ToValue for DateTime<Utc> {
    fn to_value(&self) -> Value {
        Value::Date(*self)
    }
}

impl ToValue for Regex {
    fn to_value(&self) -> Value {
        Value::RegExp(self.clone())
    }
}

impl ToValue for Symbol {
    fn to_value(&self) -> Value {
        Value::Symbol(self.clone())
    }
}

impl ToValue for Func {
    fn to_value(&self) -> Value {
        Value::Func(self.clone())
    }
}

impl ToValue for Buffer {
    fn to_value(&self) -> Value {
        Value::Buffer(self.clone())
    }
}

impl ToValue for Instance {
    fn to_value(&self) -> Value {
        Value::Instance(self.clone())
    }
}

impl<C: Any + Send + Sync> ToValue for Arc<C> {
    fn to_value(&self) -> Value {
        Value::Instance(Instance::from_arc(Arc::clone(self)))
    }
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(f64::NAN)),
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, Value::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&serde_json::Value> for Value {
    fn from(json: &serde_json::Value) -> Self {
        Value::from(json.clone())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! number_from {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for Value {
                fn from(n: $ty) -> Self {
                    Value::Number(n as f64)
                }
            }
        )*
    };
}

number_from!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl From<i128> for Value {
    fn from(n: i128) -> Self {
        Value::BigInt(n)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::Array(items)
    }
}

impl From<IndexMap<String, Value>> for Value {
    fn from(map: IndexMap<String, Value>) -> Self {
        Value::Object(map)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(date: DateTime<Utc>) -> Self {
        Value::Date(date)
    }
}

impl From<Regex> for Value {
    fn from(re: Regex) -> Self {
        Value::RegExp(re)
    }
}

impl From<Symbol> for Value {
    fn from(symbol: Symbol) -> Self {
        Value::Symbol(symbol)
    }
}

impl From<Func> for Value {
    fn from(func: Func) -> Self {
        Value::Func(func)
    }
}

impl From<Buffer> for Value {
    fn from(buffer: Buffer) -> Self {
        Value::Buffer(buffer)
    }
}

impl From<Instance> for Value {
    fn from(instance: Instance) -> Self {
        Value::Instance(instance)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(option: Option<T>) -> Self {
        option.map(Into::into).unwrap_or(Value::Null)
    }
}

impl Value {
    /// Converts to JSON where the kind has a JSON form.
    ///
    /// Dates become RFC 3339 strings, sets become arrays, and big integers
    /// become numbers when they fit in `i64`. Returns `None` for
    /// `Undefined`, non-finite numbers, and kinds JSON cannot carry
    /// (symbols, maps, regular expressions, functions, buffers, instances).
    pub fn to_json(&self) -> Option<serde_json::Value> {
        match self {
            Value::Undefined => None,
            Value::Null => Some(serde_json::Value::Null),
            Value::Bool(b) => Some(serde_json::Value::Bool(*b)),
            Value::Number(n) => serde_json::Number::from_f64(*n).map(serde_json::Value::Number),
            Value::BigInt(n) => i64::try_from(*n).ok().map(serde_json::Value::from),
            Value::String(s) => Some(serde_json::Value::String(s.clone())),
            Value::Array(items) | Value::Set(items) => items
                .iter()
                .map(Value::to_json)
                .collect::<Option<Vec<_>>>()
                .map(serde_json::Value::Array),
            Value::Object(map) => map
                .iter()
                .map(|(key, value)| value.to_json().map(|json| (key.clone(), json)))
                .collect::<Option<serde_json::Map<_, _>>>()
                .map(serde_json::Value::Object),
            Value::Date(date) => Some(serde_json::Value::String(
                date.to_rfc3339_opts(SecondsFormat::Millis, true),
            )),
            Value::Symbol(_)
            | Value::Map(_)
            | Value::RegExp(_)
            | Value::Func(_)
            | Value::Buffer(_)
            | Value::Instance(_) => None,
        }
    }
}
