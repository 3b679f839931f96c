//! The untyped input model.
//!
//! Validators accept a [`Value`]: a closed enum covering every runtime kind a
//! validator can be asked about, from `Undefined` and `Null` through plain
//! objects, sets, maps, dates, regular expressions, functions, typed buffers
//! and opaque class instances. [`Kind`] is the tag refinements dispatch on.
//!
//! Most callers build values from JSON:
//!
//! ```rust
//! use conform::{Kind, Value};
//! use serde_json::json;
//!
//! let value = Value::from(json!({"name": "Alice", "tags": ["a", "b"]}));
//! assert_eq!(value.kind(), Kind::Object);
//! ```

mod compare;
mod convert;

pub use compare::{loose_eq, strict_eq};
pub use convert::ToValue;

use std::any::Any;
use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use chrono::{DateTime, SecondsFormat, Utc};
use indexmap::IndexMap;
use regex::Regex;

/// A dynamically typed input value.
#[derive(Clone)]
pub enum Value {
    /// An absent value, e.g. a missing object key.
    Undefined,
    /// An explicit null.
    Null,
    Bool(bool),
    Number(f64),
    BigInt(i128),
    String(String),
    Symbol(Symbol),
    Array(Vec<Value>),
    /// A plain object; keys keep insertion order.
    Object(IndexMap<String, Value>),
    Set(Vec<Value>),
    Map(Vec<(Value, Value)>),
    Date(DateTime<Utc>),
    RegExp(Regex),
    Func(Func),
    Buffer(Buffer),
    Instance(Instance),
}

/// The runtime category of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Undefined,
    Null,
    Boolean,
    Number,
    BigInt,
    String,
    Symbol,
    Array,
    Object,
    Set,
    Map,
    Date,
    RegExp,
    Function,
    Buffer,
    Instance,
}

impl Kind {
    /// Lower-case name used in `got`/`expected` fields.
    pub fn name(self) -> &'static str {
        match self {
            Kind::Undefined => "undefined",
            Kind::Null => "null",
            Kind::Boolean => "boolean",
            Kind::Number => "number",
            Kind::BigInt => "bigint",
            Kind::String => "string",
            Kind::Symbol => "symbol",
            Kind::Array => "array",
            Kind::Object => "object",
            Kind::Set => "set",
            Kind::Map => "map",
            Kind::Date => "date",
            Kind::RegExp => "regexp",
            Kind::Function => "function",
            Kind::Buffer => "buffer",
            Kind::Instance => "instance",
        }
    }

    /// Capitalized name used at the start of failure messages.
    pub fn title(self) -> &'static str {
        match self {
            Kind::Undefined => "Undefined",
            Kind::Null => "Null",
            Kind::Boolean => "Boolean",
            Kind::Number => "Number",
            Kind::BigInt => "BigInt",
            Kind::String => "String",
            Kind::Symbol => "Symbol",
            Kind::Array => "Array",
            Kind::Object => "Object",
            Kind::Set => "Set",
            Kind::Map => "Map",
            Kind::Date => "Date",
            Kind::RegExp => "RegExp",
            Kind::Function => "Function",
            Kind::Buffer => "Buffer",
            Kind::Instance => "Instance",
        }
    }
}

impl Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    /// Returns the runtime category of this value.
    pub fn kind(&self) -> Kind {
        match self {
            Value::Undefined => Kind::Undefined,
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Boolean,
            Value::Number(_) => Kind::Number,
            Value::BigInt(_) => Kind::BigInt,
            Value::String(_) => Kind::String,
            Value::Symbol(_) => Kind::Symbol,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Object,
            Value::Set(_) => Kind::Set,
            Value::Map(_) => Kind::Map,
            Value::Date(_) => Kind::Date,
            Value::RegExp(_) => Kind::RegExp,
            Value::Func(_) => Kind::Function,
            Value::Buffer(_) => Kind::Buffer,
            Value::Instance(_) => Kind::Instance,
        }
    }

    /// True for both `Undefined` and `Null`.
    pub fn is_absent(&self) -> bool {
        matches!(self, Value::Undefined | Value::Null)
    }

    pub fn is_undefined(&self) -> bool {
        matches!(self, Value::Undefined)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Object(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up an object key, yielding `Undefined` when the key is missing
    /// or the value is not an object.
    pub fn get(&self, key: &str) -> &Value {
        static UNDEFINED: Value = Value::Undefined;
        match self {
            Value::Object(map) => map.get(key).unwrap_or(&UNDEFINED),
            _ => &UNDEFINED,
        }
    }
}

impl Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("Undefined"),
            Value::Null => f.write_str("Null"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Number(n) => f.debug_tuple("Number").field(n).finish(),
            Value::BigInt(n) => f.debug_tuple("BigInt").field(n).finish(),
            Value::String(s) => f.debug_tuple("String").field(s).finish(),
            Value::Symbol(s) => f.debug_tuple("Symbol").field(s).finish(),
            Value::Array(items) => f.debug_tuple("Array").field(items).finish(),
            Value::Object(map) => f.debug_tuple("Object").field(map).finish(),
            Value::Set(items) => f.debug_tuple("Set").field(items).finish(),
            Value::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
            Value::Date(date) => f.debug_tuple("Date").field(date).finish(),
            Value::RegExp(re) => f.debug_tuple("RegExp").field(&re.as_str()).finish(),
            Value::Func(func) => f.debug_tuple("Func").field(func).finish(),
            Value::Buffer(buf) => f.debug_tuple("Buffer").field(buf).finish(),
            Value::Instance(inst) => f.debug_tuple("Instance").field(inst).finish(),
        }
    }
}

/// Renders values the way they appear in failure messages.
impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Undefined => f.write_str("undefined"),
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::BigInt(n) => write!(f, "{}n", n),
            Value::String(s) => write!(f, "{:?}", s),
            Value::Symbol(s) => write!(f, "Symbol({})", s.description()),
            Value::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Value::Object(map) => {
                f.write_str("{")?;
                for (i, (key, item)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, item)?;
                }
                f.write_str("}")
            }
            Value::Set(items) => write!(f, "Set({})", items.len()),
            Value::Map(entries) => write!(f, "Map({})", entries.len()),
            Value::Date(date) => f.write_str(&date.to_rfc3339_opts(SecondsFormat::Millis, true)),
            Value::RegExp(re) => write!(f, "/{}/", re.as_str()),
            Value::Func(func) => write!(f, "[Function {}]", func.name().unwrap_or("anonymous")),
            Value::Buffer(buf) => write!(f, "{:?}({})", buf.kind(), buf.len()),
            Value::Instance(inst) => write!(f, "[{}]", inst.type_name()),
        }
    }
}

/// Structural strict equality; see [`strict_eq`].
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        strict_eq(self, other)
    }
}

/// A symbol compared by identity: clones are equal, two symbols created with
/// the same description are not.
#[derive(Clone)]
pub struct Symbol(Arc<str>);

impl Symbol {
    pub fn new(description: impl Into<String>) -> Self {
        Self(Arc::from(description.into()))
    }

    pub fn description(&self) -> &str {
        &self.0
    }

    pub fn same_as(&self, other: &Symbol) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description())
    }
}

type FuncBody = dyn Fn(&[Value]) -> Value + Send + Sync;

/// A callable value, compared by identity.
#[derive(Clone)]
pub struct Func {
    name: Option<Arc<str>>,
    body: Arc<FuncBody>,
}

impl Func {
    pub fn new<F>(body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: None,
            body: Arc::new(body),
        }
    }

    pub fn named<F>(name: impl Into<String>, body: F) -> Self
    where
        F: Fn(&[Value]) -> Value + Send + Sync + 'static,
    {
        Self {
            name: Some(Arc::from(name.into())),
            body: Arc::new(body),
        }
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn call(&self, args: &[Value]) -> Value {
        (self.body)(args)
    }

    pub fn same_as(&self, other: &Func) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }
}

impl Debug for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Func({})", self.name().unwrap_or("anonymous"))
    }
}

/// Element type of a typed buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BufferKind {
    ArrayBuffer,
    Int8,
    Uint8,
    Uint8Clamped,
    Int16,
    Uint16,
    Int32,
    Uint32,
    Float32,
    Float64,
    BigInt64,
    BigUint64,
}

impl BufferKind {
    /// Size of one element in bytes.
    pub fn element_size(self) -> usize {
        match self {
            BufferKind::ArrayBuffer
            | BufferKind::Int8
            | BufferKind::Uint8
            | BufferKind::Uint8Clamped => 1,
            BufferKind::Int16 | BufferKind::Uint16 => 2,
            BufferKind::Int32 | BufferKind::Uint32 | BufferKind::Float32 => 4,
            BufferKind::Float64 | BufferKind::BigInt64 | BufferKind::BigUint64 => 8,
        }
    }
}

/// Raw bytes tagged with their element type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    kind: BufferKind,
    bytes: Vec<u8>,
}

impl Buffer {
    pub fn new(kind: BufferKind, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            kind,
            bytes: bytes.into(),
        }
    }

    pub fn kind(&self) -> BufferKind {
        self.kind
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Number of elements, not bytes.
    pub fn len(&self) -> usize {
        self.bytes.len() / self.kind.element_size()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// An opaque instance of a Rust type, checked with `Schema::instance`.
#[derive(Clone)]
pub struct Instance {
    type_name: &'static str,
    inner: Arc<dyn Any + Send + Sync>,
}

impl Instance {
    pub fn new<C: Any + Send + Sync>(value: C) -> Self {
        Self::from_arc(Arc::new(value))
    }

    pub fn from_arc<C: Any + Send + Sync>(value: Arc<C>) -> Self {
        Self {
            type_name: std::any::type_name::<C>(),
            inner: value,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<C: Any>(&self) -> bool {
        self.inner.is::<C>()
    }

    /// Returns a shared handle to the inner value if it is a `C`.
    pub fn downcast<C: Any + Send + Sync>(&self) -> Option<Arc<C>> {
        Arc::clone(&self.inner).downcast::<C>().ok()
    }

    pub fn same_as(&self, other: &Instance) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Debug for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Instance({})", self.type_name)
    }
}

/// Validated elements of a set, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct SetOf<T>(pub Vec<T>);

impl<T> SetOf<T> {
    pub fn into_inner(self) -> Vec<T> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.0.iter()
    }
}

/// Validated entries of a map, in input order.
#[derive(Debug, Clone, PartialEq)]
pub struct MapOf<K, V>(pub Vec<(K, V)>);

impl<K, V> MapOf<K, V> {
    pub fn into_inner(self) -> Vec<(K, V)> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(K, V)> {
        self.0.iter()
    }
}
