//! Validation failure types.
//!
//! This module provides [`ValidationError`] for a single failure and
//! [`ValidationErrors`] for accumulating failures across many inputs.

use std::fmt::{self, Display};
use std::panic::Location;
use std::sync::Arc;

use stillwater::prelude::*;

use crate::path::ValuePath;
use crate::value::Value;

/// A validation failure with full context.
///
/// - **path**: where in the input the failure occurred
/// - **message**: human-readable description, possibly replaced by an
///   override installed with `with_message`
/// - **code**: machine-readable error code for programmatic handling
/// - **got** / **expected**: optional descriptions of the offending value
///
/// # Example
///
/// ```rust
/// use conform::{ValidationError, ValuePath};
///
/// let error = ValidationError::new(
///     ValuePath::root().push_field("email"),
///     "invalid email format"
/// )
/// .with_code("invalid_email")
/// .with_got("not-an-email")
/// .with_expected("valid email address");
///
/// assert_eq!(error.code, "invalid_email");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// The path to the value that failed validation.
    pub path: ValuePath,
    /// Human-readable error message.
    pub message: String,
    /// The actual value that was received (formatted as string).
    pub got: Option<String>,
    /// Description of what was expected.
    pub expected: Option<String>,
    /// Machine-readable error code (e.g. `min_length`).
    pub code: String,
    /// The message raised before an override replaced it.
    pub source_message: Option<String>,
    location: Option<&'static Location<'static>>,
    overridden_by: Option<Arc<str>>,
}

impl ValidationError {
    /// Creates a new validation error with the given path and message.
    ///
    /// The error code defaults to "validation_error".
    pub fn new(path: ValuePath, message: impl Into<String>) -> Self {
        Self {
            path,
            message: message.into(),
            got: None,
            expected: None,
            code: "validation_error".to_string(),
            source_message: None,
            location: None,
            overridden_by: None,
        }
    }

    /// Creates the standard "wrong kind of value" failure.
    pub fn invalid_type(path: &ValuePath, expected: &str, got: &Value) -> Self {
        Self::new(path.clone(), format!("expected {}, got {}", expected, got.kind()))
            .with_code("invalid_type")
            .with_expected(expected)
            .with_got(got.kind().name())
    }

    /// Sets the error code and returns self for chaining.
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    /// Sets the "got" (actual value) field and returns self for chaining.
    pub fn with_got(mut self, got: impl Into<String>) -> Self {
        self.got = Some(got.into());
        self
    }

    /// Sets the "expected" field and returns self for chaining.
    pub fn with_expected(mut self, expected: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self
    }

    /// Best-effort construction site of the validator that raised this
    /// failure. `None` when location capture was disabled or the failure
    /// was built by hand.
    pub fn location(&self) -> Option<SourceLocation> {
        self.location.map(SourceLocation::from)
    }

    /// Returns true once an override message has replaced the original.
    pub fn is_overridden(&self) -> bool {
        self.overridden_by.is_some()
    }

    pub(crate) fn locate(mut self, location: Option<&'static Location<'static>>) -> Self {
        if self.location.is_none() {
            self.location = location;
        }
        self
    }

    /// Replaces the message with `message` unless this exact override was
    /// already applied.
    pub(crate) fn override_with(mut self, message: &Arc<str>) -> Self {
        if self
            .overridden_by
            .as_ref()
            .is_some_and(|applied| Arc::ptr_eq(applied, message))
        {
            return self;
        }
        let previous = std::mem::replace(&mut self.message, message.to_string());
        if self.source_message.is_none() {
            self.source_message = Some(previous);
        }
        self.overridden_by = Some(Arc::clone(message));
        self
    }
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path_str = if self.path.is_root() {
            "(root)".to_string()
        } else {
            self.path.to_string()
        };

        write!(f, "{}: {}", path_str, self.message)?;

        if let Some(ref expected) = self.expected {
            write!(f, " (expected: {})", expected)?;
        }
        if let Some(ref got) = self.got {
            write!(f, " (got: {})", got)?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

const _: () = {
    const fn assert_send<T: Send>() {}
    const fn assert_sync<T: Sync>() {}
    assert_send::<ValidationError>();
    assert_sync::<ValidationError>();
};

/// Source position of a validator's construction site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceLocation {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl From<&'static Location<'static>> for SourceLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl Display for SourceLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.file, self.line, self.column)
    }
}

/// A non-empty collection of validation errors.
///
/// Batch validation returns one error per failing input; `ValidationErrors`
/// implements `Semigroup` so partial results combine.
///
/// ```rust
/// use conform::{ValidationError, ValidationErrors, ValuePath};
/// use stillwater::prelude::*;
///
/// let first = ValidationErrors::single(ValidationError::new(ValuePath::root(), "a"));
/// let second = ValidationErrors::single(ValidationError::new(ValuePath::root(), "b"));
///
/// assert_eq!(first.combine(second).len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationErrors(NonEmptyVec<ValidationError>);

impl ValidationErrors {
    /// Creates a `ValidationErrors` containing a single error.
    pub fn single(error: ValidationError) -> Self {
        Self(NonEmptyVec::singleton(error))
    }

    /// Creates a `ValidationErrors` from a `Vec`, or `None` if it is empty.
    pub fn from_vec(errors: Vec<ValidationError>) -> Option<Self> {
        let mut iter = errors.into_iter();
        let head = NonEmptyVec::singleton(iter.next()?);
        Some(Self(iter.fold(head, |acc, error| {
            acc.combine(NonEmptyVec::singleton(error))
        })))
    }

    /// Returns the number of errors in this collection.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; the collection is never empty.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns an iterator over the contained errors.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    /// Returns all errors at the specified path.
    pub fn at_path(&self, path: &ValuePath) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| &e.path == path).collect()
    }

    /// Returns all errors at `prefix` or anywhere beneath it.
    ///
    /// With batch results, `ValuePath::root().push_index(i)` selects the
    /// failures of input `i`.
    pub fn under(&self, prefix: &ValuePath) -> Vec<&ValidationError> {
        self.0
            .iter()
            .filter(|e| e.path.segments().take(prefix.len()).eq(prefix.segments()))
            .collect()
    }

    /// Returns all errors with the specified error code.
    pub fn with_code(&self, code: &str) -> Vec<&ValidationError> {
        self.0.iter().filter(|e| e.code == code).collect()
    }

    /// Returns the first error in the collection.
    pub fn first(&self) -> &ValidationError {
        self.0.head()
    }

    /// Converts this collection into a `Vec<ValidationError>`.
    pub fn into_vec(self) -> Vec<ValidationError> {
        self.0.into_vec()
    }
}

impl Semigroup for ValidationErrors {
    fn combine(self, other: Self) -> Self {
        ValidationErrors(self.0.combine(other.0))
    }
}

impl Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.len())?;
        for (i, error) in self.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_vec().into_iter()
    }
}
