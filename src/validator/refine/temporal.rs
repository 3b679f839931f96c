//! Date ordering refinements.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::error::ValidationError;
use crate::path::ValuePath;
use crate::value::{ToValue, Value};

use super::unsupported;
use crate::validator::Validator;

fn date_rule(
    rule: &'static str,
    value: &Value,
    path: &ValuePath,
    reference: DateTime<Utc>,
    holds: fn(&DateTime<Utc>, &DateTime<Utc>) -> bool,
    phrase: &str,
) -> Result<(), ValidationError> {
    let date = match value {
        Value::Date(date) => date,
        other => return Err(unsupported(rule, other, path)),
    };
    if holds(date, &reference) {
        return Ok(());
    }
    let reference = reference.to_rfc3339_opts(SecondsFormat::Millis, true);
    Err(
        ValidationError::new(path.clone(), format!("Date must be {} {}", phrase, reference))
            .with_code(rule)
            .with_expected(format!("{} {}", phrase, reference))
            .with_got(value.to_string()),
    )
}

impl<T: ToValue + 'static> Validator<T> {
    /// Requires a date strictly earlier than `reference`.
    ///
    /// ```rust
    /// use conform::{Schema, Value};
    /// use chrono::{TimeZone, Utc};
    ///
    /// let cutoff = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    /// let validator = Schema::date().before(cutoff);
    ///
    /// assert!(validator.check(&Value::from("2023-12-31")).is_ok());
    /// assert!(validator.check(&Value::from("2024-01-01")).is_err());
    /// ```
    #[track_caller]
    pub fn before(&self, reference: DateTime<Utc>) -> Validator<T> {
        self.refine(move |value, path| {
            date_rule("before", value, path, reference, |a, b| a < b, "before")
        })
    }

    /// Requires a date strictly later than `reference`.
    #[track_caller]
    pub fn after(&self, reference: DateTime<Utc>) -> Validator<T> {
        self.refine(move |value, path| {
            date_rule("after", value, path, reference, |a, b| a > b, "after")
        })
    }

    /// Requires a date on the same UTC calendar day as `reference`.
    #[track_caller]
    pub fn same_date_as(&self, reference: DateTime<Utc>) -> Validator<T> {
        self.refine(move |value, path| {
            date_rule(
                "same_date_as",
                value,
                path,
                reference,
                |a, b| a.date_naive() == b.date_naive(),
                "on the same day as",
            )
        })
    }
}
