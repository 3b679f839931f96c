//! Leaf factories for scalar and opaque kinds.

use std::any::{type_name, Any};
use std::sync::Arc;

use regex::Regex;

use super::Schema;
use crate::error::ValidationError;
use crate::validator::Validator;
use crate::value::{strict_eq, Buffer, BufferKind, Func, Symbol, Value};

impl Schema {
    /// Accepts strings.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conform::{Schema, Value};
    ///
    /// let name = Schema::string().min_length(1);
    ///
    /// assert_eq!(name.check(&Value::from("Ada")).unwrap(), "Ada");
    /// assert_eq!(
    ///     name.check(&Value::from(42)).unwrap_err().message,
    ///     "expected string, got number"
    /// );
    /// ```
    #[track_caller]
    pub fn string() -> Validator<String> {
        Validator::new(|value, path| match value {
            Value::String(s) => Ok(s.clone()),
            other => Err(ValidationError::invalid_type(path, "string", other)),
        })
    }

    /// Accepts any number, including NaN and the infinities. Chain
    /// `finite_number` or `not_nan` to narrow it.
    #[track_caller]
    pub fn number() -> Validator<f64> {
        Validator::new(|value, path| match value {
            Value::Number(n) => Ok(*n),
            other => Err(ValidationError::invalid_type(path, "number", other)),
        })
    }

    /// Accepts `true` and `false`.
    #[track_caller]
    pub fn boolean() -> Validator<bool> {
        Validator::new(|value, path| match value {
            Value::Bool(b) => Ok(*b),
            other => Err(ValidationError::invalid_type(path, "boolean", other)),
        })
    }

    /// Accepts anything, returning the input unchanged.
    #[track_caller]
    pub fn unknown() -> Validator<Value> {
        Validator::new(|value, _| Ok(value.clone()))
    }

    /// Accepts symbols, keeping their identity.
    #[track_caller]
    pub fn symbol() -> Validator<Symbol> {
        Validator::new(|value, path| match value {
            Value::Symbol(symbol) => Ok(symbol.clone()),
            other => Err(ValidationError::invalid_type(path, "symbol", other)),
        })
    }

    /// Accepts compiled regular expressions, not pattern strings.
    #[track_caller]
    pub fn regexp() -> Validator<Regex> {
        Validator::new(|value, path| match value {
            Value::RegExp(regex) => Ok(regex.clone()),
            other => Err(ValidationError::invalid_type(path, "regexp", other)),
        })
    }

    /// Accepts big integers; plain numbers are rejected.
    #[track_caller]
    pub fn big_int() -> Validator<i128> {
        Validator::new(|value, path| match value {
            Value::BigInt(n) => Ok(*n),
            other => Err(ValidationError::invalid_type(path, "bigint", other)),
        })
    }

    /// Accepts callable values.
    #[track_caller]
    pub fn func() -> Validator<Func> {
        Validator::new(|value, path| match value {
            Value::Func(func) => Ok(func.clone()),
            other => Err(ValidationError::invalid_type(path, "function", other)),
        })
    }

    /// Accepts a byte buffer of any element type.
    #[track_caller]
    pub fn buffer() -> Validator<Buffer> {
        Validator::new(|value, path| match value {
            Value::Buffer(buffer) => Ok(buffer.clone()),
            other => Err(ValidationError::invalid_type(path, "buffer", other)),
        })
    }

    /// Accepts only buffers of the given element type.
    ///
    /// ```rust
    /// use conform::{Buffer, BufferKind, Schema, Value};
    ///
    /// let pixels = Schema::typed_buffer(BufferKind::Uint8Clamped);
    /// let ok = Value::Buffer(Buffer::new(BufferKind::Uint8Clamped, vec![0, 255]));
    /// let wrong = Value::Buffer(Buffer::new(BufferKind::Int16, vec![0, 0]));
    ///
    /// assert!(pixels.check(&ok).is_ok());
    /// assert!(pixels.check(&wrong).is_err());
    /// ```
    #[track_caller]
    pub fn typed_buffer(kind: BufferKind) -> Validator<Buffer> {
        Validator::new(move |value, path| match value {
            Value::Buffer(buffer) if buffer.kind() == kind => Ok(buffer.clone()),
            Value::Buffer(buffer) => Err(ValidationError::new(
                path.clone(),
                format!("expected {:?} buffer, got {:?} buffer", kind, buffer.kind()),
            )
            .with_code("invalid_type")
            .with_expected(format!("{:?}", kind))
            .with_got(format!("{:?}", buffer.kind()))),
            other => Err(ValidationError::invalid_type(path, "buffer", other)),
        })
    }

    /// Accepts an [`Instance`](crate::Instance) wrapping a `C`.
    ///
    /// ```rust
    /// use conform::{Instance, Schema, Value};
    ///
    /// struct Session { user: String }
    ///
    /// let session = Schema::instance::<Session>();
    /// let value = Value::Instance(Instance::new(Session { user: "ada".into() }));
    ///
    /// assert_eq!(session.check(&value).unwrap().user, "ada");
    /// assert!(session.check(&Value::from("ada")).is_err());
    /// ```
    #[track_caller]
    pub fn instance<C: Any + Send + Sync>() -> Validator<Arc<C>> {
        Validator::new(|value, path| {
            let expected = type_name::<C>();
            match value {
                Value::Instance(instance) => instance.downcast::<C>().ok_or_else(|| {
                    ValidationError::new(
                        path.clone(),
                        format!("expected instance of {}, got {}", expected, instance.type_name()),
                    )
                    .with_code("invalid_type")
                    .with_expected(expected)
                    .with_got(instance.type_name())
                }),
                other => Err(ValidationError::invalid_type(path, expected, other)),
            }
        })
    }

    /// Always fails with `message`. Useful as an explicit dead branch.
    #[track_caller]
    pub fn fail(message: impl Into<String>) -> Validator<Value> {
        let message = message.into();
        Validator::new(move |_, path| {
            Err(ValidationError::new(path.clone(), message.clone()).with_code("fail"))
        })
    }

    /// Accepts a value strictly equal to one of `allowed`.
    ///
    /// ```rust
    /// use conform::{Schema, Value};
    ///
    /// let level = Schema::enums(["debug", "info", "warn"]);
    /// assert!(level.check(&Value::from("info")).is_ok());
    /// assert_eq!(level.check(&Value::from("trace")).unwrap_err().code, "enum");
    /// ```
    #[track_caller]
    pub fn enums<I, V>(allowed: I) -> Validator<Value>
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        let allowed: Vec<Value> = allowed.into_iter().map(Into::into).collect();
        Validator::new(move |value, path| {
            if allowed.iter().any(|candidate| strict_eq(candidate, value)) {
                return Ok(value.clone());
            }
            let listed = Value::Array(allowed.clone()).to_string();
            Err(
                ValidationError::new(path.clone(), format!("expected one of {}, got {}", listed, value))
                    .with_code("enum")
                    .with_expected(listed)
                    .with_got(value.to_string()),
            )
        })
    }
}
