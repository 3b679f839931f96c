//! Size and magnitude refinements.
//!
//! Length rules count characters of strings, elements of arrays and sets,
//! entries of maps, keys of objects and decimal digits of numbers. Range and
//! comparison rules compare numbers by value and everything else by that
//! same size.

use crate::error::ValidationError;
use crate::path::ValuePath;
use crate::value::{ToValue, Value};

use super::{unsupported, Size};
use crate::validator::Validator;

/// What a range or comparison rule measures.
enum Magnitude {
    Scalar(f64),
    Sized(Size),
}

impl Magnitude {
    fn of(value: &Value) -> Option<Magnitude> {
        match value {
            Value::Number(n) if !n.is_nan() => Some(Magnitude::Scalar(*n)),
            Value::BigInt(n) => Some(Magnitude::Scalar(*n as f64)),
            other => Size::of(other).map(Magnitude::Sized),
        }
    }

    fn amount(&self) -> f64 {
        match self {
            Magnitude::Scalar(n) => *n,
            Magnitude::Sized(size) => size.count as f64,
        }
    }
}

/// Builds a size rule: `holds(count)` must be true.
fn size_rule(
    rule: &'static str,
    value: &Value,
    path: &ValuePath,
    holds: impl Fn(usize) -> bool,
    describe: impl Fn(&Size) -> String,
) -> Result<(), ValidationError> {
    let size = Size::of(value).ok_or_else(|| unsupported(rule, value, path))?;
    if holds(size.count) {
        Ok(())
    } else {
        Err(ValidationError::new(path.clone(), describe(&size))
            .with_code(rule)
            .with_got(format!("{} {}", size.count, size.unit(size.count as f64))))
    }
}

/// Builds a comparison rule against `bound`.
fn compare_rule(
    rule: &'static str,
    value: &Value,
    path: &ValuePath,
    bound: f64,
    holds: fn(f64, f64) -> bool,
    phrase: &'static str,
    sized_phrase: &'static str,
) -> Result<(), ValidationError> {
    let magnitude = Magnitude::of(value).ok_or_else(|| unsupported(rule, value, path))?;
    if holds(magnitude.amount(), bound) {
        return Ok(());
    }
    let message = match &magnitude {
        Magnitude::Scalar(_) => format!("{} must be {} {}", value.kind().title(), phrase, bound),
        Magnitude::Sized(size) => format!(
            "{} must have {} {} {}",
            size.kind.title(),
            sized_phrase,
            bound,
            size.unit(bound)
        ),
    };
    Err(ValidationError::new(path.clone(), message)
        .with_code(rule)
        .with_got(magnitude.amount().to_string()))
}

impl<T: ToValue + 'static> Validator<T> {
    /// Requires a non-empty string, collection or object.
    #[track_caller]
    pub fn not_empty(&self) -> Validator<T> {
        self.refine(|value, path| {
            size_rule(
                "not_empty",
                value,
                path,
                |count| count > 0,
                |size| format!("{} must not be empty", size.kind.title()),
            )
        })
    }

    /// Requires an empty string, collection or object.
    #[track_caller]
    pub fn empty(&self) -> Validator<T> {
        self.refine(|value, path| {
            size_rule(
                "empty",
                value,
                path,
                |count| count == 0,
                |size| format!("{} must be empty", size.kind.title()),
            )
        })
    }

    /// Requires at least `min` characters, elements, keys or digits.
    ///
    /// ```rust
    /// use conform::{Schema, Value};
    /// use serde_json::json;
    ///
    /// let tags = Schema::array(Schema::string()).min_length(2);
    /// let error = tags.check(&Value::from(json!(["a"]))).unwrap_err();
    /// assert_eq!(error.message, "Array must have at least 2 elements");
    /// ```
    #[track_caller]
    pub fn min_length(&self, min: usize) -> Validator<T> {
        self.refine(move |value, path| {
            size_rule(
                "min_length",
                value,
                path,
                |count| count >= min,
                |size| {
                    format!(
                        "{} must have at least {} {}",
                        size.kind.title(),
                        min,
                        size.unit(min as f64)
                    )
                },
            )
        })
    }

    /// Requires at most `max` characters, elements, keys or digits.
    #[track_caller]
    pub fn max_length(&self, max: usize) -> Validator<T> {
        self.refine(move |value, path| {
            size_rule(
                "max_length",
                value,
                path,
                |count| count <= max,
                |size| {
                    format!(
                        "{} must have at most {} {}",
                        size.kind.title(),
                        max,
                        size.unit(max as f64)
                    )
                },
            )
        })
    }

    /// Requires exactly `len` characters, elements, keys or digits.
    #[track_caller]
    pub fn length(&self, len: usize) -> Validator<T> {
        self.refine(move |value, path| {
            size_rule(
                "length",
                value,
                path,
                |count| count == len,
                |size| {
                    format!(
                        "{} must have exactly {} {}",
                        size.kind.title(),
                        len,
                        size.unit(len as f64)
                    )
                },
            )
        })
    }

    /// Requires the value (numbers) or size (everything measurable) to lie
    /// within `min..=max`.
    ///
    /// ```rust
    /// use conform::{Schema, Value};
    ///
    /// let score = Schema::number().range(0.0, 10.0);
    /// assert!(score.check(&Value::from(0)).is_ok());
    /// assert!(score.check(&Value::from(10)).is_ok());
    /// assert!(score.check(&Value::from(11)).is_err());
    /// ```
    #[track_caller]
    pub fn range(&self, min: f64, max: f64) -> Validator<T> {
        self.refine(move |value, path| {
            let magnitude = Magnitude::of(value).ok_or_else(|| unsupported("range", value, path))?;
            let amount = magnitude.amount();
            if amount >= min && amount <= max {
                return Ok(());
            }
            let message = match &magnitude {
                Magnitude::Scalar(_) => format!(
                    "{} must be between {} and {}",
                    value.kind().title(),
                    min,
                    max
                ),
                Magnitude::Sized(size) => format!(
                    "{} must have between {} and {} {}",
                    size.kind.title(),
                    min,
                    max,
                    size.unit(max)
                ),
            };
            Err(ValidationError::new(path.clone(), message)
                .with_code("range")
                .with_expected(format!("{}..={}", min, max))
                .with_got(amount.to_string()))
        })
    }

    /// Requires a number below `bound`, or a size below it for sized values.
    #[track_caller]
    pub fn less_than(&self, bound: f64) -> Validator<T> {
        self.refine(move |value, path| {
            compare_rule("less_than", value, path, bound, |a, b| a < b, "less than", "fewer than")
        })
    }

    /// Requires a number above `bound`, or a size above it for sized values.
    #[track_caller]
    pub fn more_than(&self, bound: f64) -> Validator<T> {
        self.refine(move |value, path| {
            compare_rule("more_than", value, path, bound, |a, b| a > b, "more than", "more than")
        })
    }

    /// Like [`less_than`](Self::less_than), but `bound` itself passes.
    #[track_caller]
    pub fn less_than_or_equal_to(&self, bound: f64) -> Validator<T> {
        self.refine(move |value, path| {
            compare_rule(
                "less_than_or_equal_to",
                value,
                path,
                bound,
                |a, b| a <= b,
                "at most",
                "at most",
            )
        })
    }

    /// Like [`more_than`](Self::more_than), but `bound` itself passes.
    #[track_caller]
    pub fn more_than_or_equal_to(&self, bound: f64) -> Validator<T> {
        self.refine(move |value, path| {
            compare_rule(
                "more_than_or_equal_to",
                value,
                path,
                bound,
                |a, b| a >= b,
                "at least",
                "at least",
            )
        })
    }
}
