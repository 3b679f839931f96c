//! The validator engine.
//!
//! A [`Validator<T>`] pairs an evaluation closure with an optional override
//! message. Validators are immutable: every combinator and refinement returns
//! a new validator, and cloning one only bumps a reference count, so the same
//! validator can be stored, shared across threads and reused in many
//! branches of a larger tree.
//!
//! # Example
//!
//! ```rust
//! use conform::{Schema, Value};
//!
//! let name = Schema::string().min_length(2).with_message("name is too short");
//!
//! assert_eq!(name.check(&Value::from("Al")).unwrap(), "Al");
//! assert_eq!(name.check(&Value::from("A")).unwrap_err().message, "name is too short");
//! ```

mod combinators;
mod refine;

pub use combinators::Alternatives;
pub(crate) use combinators::first_match;

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use crate::error::{SourceLocation, ValidationError};
use crate::path::ValuePath;
use crate::value::Value;

/// Type alias for the evaluation closure stored in a validator.
pub(crate) type CheckFn<T> =
    Arc<dyn Fn(&Value, &ValuePath) -> Result<T, ValidationError> + Send + Sync>;

/// A type that can check a [`Value`] and produce a typed output.
///
/// [`Validator<T>`] is the implementation every combinator works with.
/// Implement this trait for a custom leaf check and lift it with
/// [`Validator::from_validate`] to gain the combinators.
pub trait Validate: Send + Sync {
    /// The output type produced by successful validation.
    type Output;

    /// Validates a value located at `path` inside a larger input.
    fn check_at(&self, value: &Value, path: &ValuePath) -> Result<Self::Output, ValidationError>;

    /// Validates a value at the root path.
    fn check(&self, value: &Value) -> Result<Self::Output, ValidationError> {
        self.check_at(value, &ValuePath::root())
    }
}

/// An immutable, composable validator producing a `T`.
pub struct Validator<T> {
    eval: CheckFn<T>,
    message: Option<Arc<str>>,
    location: Option<&'static Location<'static>>,
}

impl<T> Clone for Validator<T> {
    fn clone(&self) -> Self {
        Self {
            eval: Arc::clone(&self.eval),
            message: self.message.clone(),
            location: self.location,
        }
    }
}

impl<T> fmt::Debug for Validator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("output", &std::any::type_name::<T>())
            .field("message", &self.message)
            .field("location", &self.location.map(SourceLocation::from))
            .finish()
    }
}

impl<T: 'static> Validator<T> {
    /// Wraps an evaluation closure.
    ///
    /// The closure receives the input and its path and either produces the
    /// output or a [`ValidationError`]. The caller's source location is
    /// recorded and attached to failures raised by this validator.
    ///
    /// # Example
    ///
    /// ```rust
    /// use conform::{ValidationError, Validator, Value};
    ///
    /// let even = Validator::new(|value, path| match value {
    ///     Value::Number(n) if n % 2.0 == 0.0 => Ok(*n),
    ///     _ => Err(ValidationError::new(path.clone(), "expected an even number")),
    /// });
    ///
    /// assert!(even.check(&Value::from(4)).is_ok());
    /// assert!(even.check(&Value::from(3)).is_err());
    /// ```
    #[track_caller]
    pub fn new<F>(eval: F) -> Self
    where
        F: Fn(&Value, &ValuePath) -> Result<T, ValidationError> + Send + Sync + 'static,
    {
        Self {
            eval: Arc::new(eval),
            message: None,
            location: Some(Location::caller()),
        }
    }

    /// Lifts any [`Validate`] implementation into a `Validator`.
    #[track_caller]
    pub fn from_validate<V>(validate: V) -> Self
    where
        V: Validate<Output = T> + 'static,
    {
        Self::new(move |value, path| validate.check_at(value, path))
    }

    /// Validates a value at the root path.
    pub fn check(&self, value: &Value) -> Result<T, ValidationError> {
        self.check_at(value, &ValuePath::root())
    }

    /// Validates a value located at `path`.
    ///
    /// Failures are stamped with this validator's construction site unless
    /// a nested validator already stamped them, and then rewritten to this
    /// validator's override message when one is installed.
    pub fn check_at(&self, value: &Value, path: &ValuePath) -> Result<T, ValidationError> {
        (self.eval)(value, path).map_err(|error| {
            let error = error.locate(self.location);
            match &self.message {
                Some(message) => error.override_with(message),
                None => error,
            }
        })
    }

    /// Returns true if `value` passes this validator.
    pub fn is_valid(&self, value: &Value) -> bool {
        self.check(value).is_ok()
    }

    /// Returns a new validator whose failures carry `message`.
    ///
    /// Evaluation logic is unchanged. The outermost override wins: a
    /// failure raised anywhere inside this validator leaves with exactly
    /// `message`.
    pub fn with_message(&self, message: impl Into<String>) -> Self {
        Self {
            eval: Arc::clone(&self.eval),
            message: Some(Arc::from(message.into())),
            location: self.location,
        }
    }

    /// The installed override message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Where this validator was built.
    pub fn location(&self) -> Option<SourceLocation> {
        self.location.map(SourceLocation::from)
    }
}

impl<T: 'static> Validate for Validator<T> {
    type Output = T;

    fn check_at(&self, value: &Value, path: &ValuePath) -> Result<T, ValidationError> {
        Validator::check_at(self, value, path)
    }
}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<Validator<Value>>();
    assert_sync::<Validator<Value>>();
};
