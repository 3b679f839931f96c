//! Numeric refinements for numbers and big integers.

use crate::error::ValidationError;
use crate::path::ValuePath;
use crate::value::{ToValue, Value};

use super::unsupported;
use crate::validator::Validator;

/// How a numeric rule sees its input.
enum Numeric {
    Float(f64),
    Big(i128),
}

impl Numeric {
    fn of(rule: &str, value: &Value, path: &ValuePath) -> Result<Numeric, ValidationError> {
        match value {
            Value::Number(n) => Ok(Numeric::Float(*n)),
            Value::BigInt(n) => Ok(Numeric::Big(*n)),
            other => Err(unsupported(rule, other, path)),
        }
    }

    fn signum(&self) -> Option<f64> {
        match self {
            Numeric::Float(n) if n.is_nan() => None,
            Numeric::Float(n) if *n == 0.0 => Some(0.0),
            Numeric::Float(n) => Some(n.signum()),
            Numeric::Big(n) => Some(n.signum() as f64),
        }
    }
}

fn numeric_rule(
    rule: &'static str,
    value: &Value,
    path: &ValuePath,
    holds: impl Fn(&Numeric) -> bool,
    message: impl Fn(&'static str) -> String,
) -> Result<(), ValidationError> {
    let numeric = Numeric::of(rule, value, path)?;
    if holds(&numeric) {
        Ok(())
    } else {
        Err(ValidationError::new(path.clone(), message(value.kind().title()))
            .with_code(rule)
            .with_got(value.to_string()))
    }
}

impl<T: ToValue + 'static> Validator<T> {
    /// Requires a whole number. Big integers always pass.
    #[track_caller]
    pub fn integer(&self) -> Validator<T> {
        self.refine(|value, path| {
            numeric_rule(
                "integer",
                value,
                path,
                |n| match n {
                    Numeric::Float(f) => f.is_finite() && f.fract() == 0.0,
                    Numeric::Big(_) => true,
                },
                |kind| format!("{} must be an integer", kind),
            )
        })
    }

    #[track_caller]
    pub fn not_nan(&self) -> Validator<T> {
        self.refine(|value, path| {
            numeric_rule(
                "not_nan",
                value,
                path,
                |n| !matches!(n, Numeric::Float(f) if f.is_nan()),
                |kind| format!("{} must not be NaN", kind),
            )
        })
    }

    #[track_caller]
    pub fn not_zero(&self) -> Validator<T> {
        self.refine(|value, path| {
            numeric_rule(
                "not_zero",
                value,
                path,
                |n| n.signum() != Some(0.0),
                |kind| format!("{} must not be zero", kind),
            )
        })
    }

    /// Rejects NaN and the infinities.
    #[track_caller]
    pub fn finite_number(&self) -> Validator<T> {
        self.refine(|value, path| {
            numeric_rule(
                "finite_number",
                value,
                path,
                |n| match n {
                    Numeric::Float(f) => f.is_finite(),
                    Numeric::Big(_) => true,
                },
                |kind| format!("{} must be finite", kind),
            )
        })
    }

    /// Requires a value greater than zero.
    ///
    /// ```rust
    /// use conform::{Schema, Value};
    ///
    /// let quantity = Schema::number().integer().positive();
    /// assert!(quantity.check(&Value::from(3)).is_ok());
    /// assert!(quantity.check(&Value::from(0)).is_err());
    /// assert!(quantity.check(&Value::from(1.5)).is_err());
    /// ```
    #[track_caller]
    pub fn positive(&self) -> Validator<T> {
        self.refine(|value, path| {
            numeric_rule(
                "positive",
                value,
                path,
                |n| n.signum() == Some(1.0),
                |kind| format!("{} must be positive", kind),
            )
        })
    }

    /// Requires a value less than zero.
    #[track_caller]
    pub fn negative(&self) -> Validator<T> {
        self.refine(|value, path| {
            numeric_rule(
                "negative",
                value,
                path,
                |n| n.signum() == Some(-1.0),
                |kind| format!("{} must be negative", kind),
            )
        })
    }

    /// Requires a value of zero or more.
    #[track_caller]
    pub fn non_negative(&self) -> Validator<T> {
        self.refine(|value, path| {
            numeric_rule(
                "non_negative",
                value,
                path,
                |n| n.signum().is_some_and(|sign| sign >= 0.0),
                |kind| format!("{} must not be negative", kind),
            )
        })
    }
}
