//! Combinators deriving new validators from existing ones.
//!
//! Every combinator borrows `self` and returns a fresh [`Validator`]; the
//! original is never changed. Only [`ValidationError`]s are treated as "try
//! the next branch" by `or`, `union`, `default` and `not`. A panic raised
//! by a user closure is not a validation outcome and unwinds through every
//! combinator untouched.
//!
//! # Example
//!
//! ```rust
//! use conform::{Schema, Value};
//!
//! // A port given either as a number or as a numeric string.
//! let port = Schema::number()
//!     .or(Schema::string().pattern(r"^\d+$").unwrap().map(|s| s.parse::<f64>().unwrap_or(0.0)))
//!     .range(1.0, 65535.0);
//!
//! assert_eq!(port.check(&Value::from("8080")).unwrap(), 8080.0);
//! assert!(port.check(&Value::from(true)).is_err());
//! ```

use crate::error::ValidationError;
use crate::schema::Schema;
use crate::value::{ToValue, Value};

use super::Validator;

/// One or more alternative validators for [`Validator::or`] and
/// [`Validator::union`].
///
/// Implemented for a single validator, arrays and vectors of validators.
pub trait Alternatives<T> {
    fn into_alternatives(self) -> Vec<Validator<T>>;
}

impl<T> Alternatives<T> for Validator<T> {
    fn into_alternatives(self) -> Vec<Validator<T>> {
        vec![self]
    }
}

impl<T> Alternatives<T> for &Validator<T> {
    fn into_alternatives(self) -> Vec<Validator<T>> {
        vec![self.clone()]
    }
}

impl<T> Alternatives<T> for Vec<Validator<T>> {
    fn into_alternatives(self) -> Vec<Validator<T>> {
        self
    }
}

impl<T, const N: usize> Alternatives<T> for [Validator<T>; N] {
    fn into_alternatives(self) -> Vec<Validator<T>> {
        self.into_iter().collect()
    }
}

/// Builds a validator accepting the first branch that succeeds.
#[track_caller]
pub(crate) fn first_match<T: 'static>(branches: Vec<Validator<T>>) -> Validator<T> {
    Validator::new(move |value, path| {
        for branch in &branches {
            if let Ok(output) = branch.check_at(value, path) {
                return Ok(output);
            }
        }
        Err(ValidationError::new(path.clone(), "no valid alternative")
            .with_code("no_valid_alternative")
            .with_expected(format!("one of {} alternatives", branches.len()))
            .with_got(value.kind().name()))
    })
}

impl<T: 'static> Validator<T> {
    /// Applies `transform` to the validated output.
    #[track_caller]
    pub fn map<U, F>(&self, transform: F) -> Validator<U>
    where
        U: 'static,
        F: Fn(T) -> U + Send + Sync + 'static,
    {
        let inner = self.clone();
        Validator::new(move |value, path| inner.check_at(value, path).map(&transform))
    }

    /// Tries this validator, then each alternative in order; the first
    /// success wins.
    ///
    /// ```rust
    /// use conform::{Schema, Value};
    ///
    /// let id = Schema::string().erase().or(Schema::number().erase());
    ///
    /// assert!(id.check(&Value::from(5)).is_ok());
    /// assert_eq!(id.check(&Value::from(true)).unwrap_err().code, "no_valid_alternative");
    /// ```
    #[track_caller]
    pub fn or(&self, alternatives: impl Alternatives<T>) -> Validator<T> {
        let mut branches = vec![self.clone()];
        branches.extend(alternatives.into_alternatives());
        first_match(branches)
    }

    /// Tries only the given alternatives; `self` merely fixes the output
    /// type.
    #[track_caller]
    pub fn union(&self, alternatives: impl Alternatives<T>) -> Validator<T> {
        first_match(alternatives.into_alternatives())
    }

    /// Requires both this validator and `other` to accept the same input.
    #[track_caller]
    pub fn and<U: 'static>(&self, other: Validator<U>) -> Validator<(T, U)> {
        let inner = self.clone();
        Validator::new(move |value, path| {
            let left = inner.check_at(value, path)?;
            let right = other.check_at(value, path)?;
            Ok((left, right))
        })
    }

    /// Requires this validator to accept the input and `other` to reject it.
    #[track_caller]
    pub fn not<U: 'static>(&self, other: Validator<U>) -> Validator<T> {
        let inner = self.clone();
        Validator::new(move |value, path| {
            let output = inner.check_at(value, path)?;
            match other.check_at(value, path) {
                Ok(_) => Err(ValidationError::new(
                    path.clone(),
                    "value matches a validator it must not match",
                )
                .with_code("not_failed")
                .with_got(value.to_string())),
                Err(_) => Ok(output),
            }
        })
    }

    /// Accepts `Undefined` and `Null` as `None`.
    #[track_caller]
    pub fn optional(&self) -> Validator<Option<T>> {
        let inner = self.clone();
        Validator::new(move |value, path| {
            if value.is_absent() {
                Ok(None)
            } else {
                inner.check_at(value, path).map(Some)
            }
        })
    }

    /// Accepts `Null` as `None`; `Undefined` still goes to this validator.
    #[track_caller]
    pub fn nullable(&self) -> Validator<Option<T>> {
        let inner = self.clone();
        Validator::new(move |value, path| {
            if value.is_null() {
                Ok(None)
            } else {
                inner.check_at(value, path).map(Some)
            }
        })
    }

    /// Substitutes `fallback` whenever this validator fails.
    ///
    /// ```rust
    /// use conform::{Schema, Value};
    ///
    /// let retries = Schema::number().default(3.0);
    /// assert_eq!(retries.check(&Value::from("many")).unwrap(), 3.0);
    /// ```
    #[track_caller]
    pub fn default(&self, fallback: T) -> Validator<T>
    where
        T: Clone + Send + Sync,
    {
        let inner = self.clone();
        Validator::new(move |value, path| {
            inner
                .check_at(value, path)
                .or_else(|_| Ok(fallback.clone()))
        })
    }

    /// Rejects `Undefined` and `Null` before delegating.
    #[track_caller]
    pub fn required(&self) -> Validator<T> {
        let inner = self.clone();
        Validator::new(move |value, path| {
            if value.is_absent() {
                Err(ValidationError::new(path.clone(), "value is required")
                    .with_code("required")
                    .with_got(value.kind().name()))
            } else {
                inner.check_at(value, path)
            }
        })
    }

    /// Accepts only `Undefined` and `Null`, ignoring this validator.
    #[track_caller]
    pub fn prohibited(&self) -> Validator<()> {
        Validator::new(|value, path| {
            if value.is_absent() {
                Ok(())
            } else {
                Err(ValidationError::new(path.clone(), "value is prohibited")
                    .with_code("prohibited")
                    .with_got(value.kind().name()))
            }
        })
    }

    /// Feeds this validator's output through `other`.
    ///
    /// Unlike [`and`](Self::and), `other` sees the transformed output rather
    /// than the original input.
    #[track_caller]
    pub fn combine<U: 'static>(&self, other: Validator<U>) -> Validator<U>
    where
        T: ToValue,
    {
        let inner = self.clone();
        Validator::new(move |value, path| {
            let output = inner.check_at(value, path)?;
            other.check_at(&output.to_value(), path)
        })
    }

    /// Validates, then routes the output through `on_true` when `predicate`
    /// holds; otherwise the output passes through unchanged.
    ///
    /// ```rust
    /// use conform::{Schema, Value};
    ///
    /// let discount = Schema::number().conditional(|n| *n > 100.0, Schema::number().max_length(3));
    ///
    /// assert!(discount.check(&Value::from(50)).is_ok());
    /// assert!(discount.check(&Value::from(150)).is_ok());
    /// assert!(discount.check(&Value::from(1500)).is_err());
    /// ```
    #[track_caller]
    pub fn conditional<U, P>(&self, predicate: P, on_true: Validator<U>) -> Validator<Value>
    where
        T: ToValue,
        U: ToValue + 'static,
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        self.conditional_else(predicate, on_true.erase(), Schema::unknown())
    }

    /// Validates, then routes the output through `on_true` or `on_false`
    /// depending on `predicate`.
    #[track_caller]
    pub fn conditional_else<U, P>(
        &self,
        predicate: P,
        on_true: Validator<U>,
        on_false: Validator<U>,
    ) -> Validator<U>
    where
        T: ToValue,
        U: 'static,
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let inner = self.clone();
        Validator::new(move |value, path| {
            let output = inner.check_at(value, path)?;
            let branch = if predicate(&output) {
                &on_true
            } else {
                &on_false
            };
            branch.check_at(&output.to_value(), path)
        })
    }

    /// Validates, then requires `predicate` to hold for the output.
    #[track_caller]
    pub fn custom<P>(&self, predicate: P, message: impl Into<String>) -> Validator<T>
    where
        P: Fn(&T) -> bool + Send + Sync + 'static,
    {
        let inner = self.clone();
        let message = message.into();
        Validator::new(move |value, path| {
            let output = inner.check_at(value, path)?;
            if predicate(&output) {
                Ok(output)
            } else {
                Err(ValidationError::new(path.clone(), message.clone()).with_code("custom"))
            }
        })
    }

    /// Replaces any failure of this validator with `handler(failure)`.
    #[track_caller]
    pub fn custom_error_handler<H>(&self, handler: H) -> Validator<T>
    where
        H: Fn(ValidationError) -> ValidationError + Send + Sync + 'static,
    {
        let inner = self.clone();
        Validator::new(move |value, path| inner.check_at(value, path).map_err(&handler))
    }

    /// Erases the output type, converting it to a [`Value`].
    ///
    /// Erased validators of different primitive kinds can be mixed in `or`,
    /// `union` and `tuple`.
    #[track_caller]
    pub fn erase(&self) -> Validator<Value>
    where
        T: ToValue,
    {
        self.map(|output| output.to_value())
    }
}
