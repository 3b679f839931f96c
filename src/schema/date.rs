//! The date factory and date literal parsing.

use chrono::{DateTime, NaiveDate, Utc};

use super::Schema;
use crate::error::{BuildError, ValidationError};
use crate::path::ValuePath;
use crate::validator::Validator;
use crate::value::Value;

/// Parses an RFC 3339 timestamp or a `YYYY-MM-DD` calendar date (midnight
/// UTC).
///
/// # Errors
///
/// Returns [`BuildError::InvalidDate`] when `text` is neither.
///
/// ```rust
/// use conform::parse_date;
///
/// let day = parse_date("2024-02-29").unwrap();
/// assert_eq!(day.to_rfc3339(), "2024-02-29T00:00:00+00:00");
/// assert!(parse_date("2023-02-29").is_err());
/// ```
pub fn parse_date(text: &str) -> Result<DateTime<Utc>, BuildError> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(text) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .ok()
        .and_then(|day| day.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
        .ok_or_else(|| BuildError::InvalidDate(text.to_string()))
}

fn invalid_date(path: &ValuePath, value: &Value) -> ValidationError {
    ValidationError::new(path.clone(), format!("invalid date: {}", value))
        .with_code("invalid_date")
        .with_expected("valid date")
        .with_got(value.to_string())
}

impl Schema {
    /// Accepts a date, a date string (RFC 3339 or `YYYY-MM-DD`) or a number
    /// of milliseconds since the Unix epoch, producing a UTC timestamp.
    ///
    /// ```rust
    /// use conform::{Schema, Value};
    ///
    /// let date = Schema::date();
    ///
    /// assert!(date.check(&Value::from("2024-05-01T10:30:00Z")).is_ok());
    /// assert!(date.check(&Value::from(0)).is_ok());
    /// assert_eq!(date.check(&Value::from("soon")).unwrap_err().code, "invalid_date");
    /// ```
    #[track_caller]
    pub fn date() -> Validator<DateTime<Utc>> {
        Validator::new(|value, path| match value {
            Value::Date(date) => Ok(*date),
            Value::String(text) => parse_date(text).map_err(|_| invalid_date(path, value)),
            Value::Number(millis) if millis.is_finite() && millis.fract() == 0.0 => {
                DateTime::from_timestamp_millis(*millis as i64)
                    .ok_or_else(|| invalid_date(path, value))
            }
            Value::Number(_) => Err(invalid_date(path, value)),
            other => Err(ValidationError::invalid_type(path, "date", other)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_date_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_date("2024-03-01").unwrap(), expected);
        assert_eq!(parse_date("2024-03-01T02:00:00+02:00").unwrap(), expected);
        assert!(matches!(parse_date("03/01/2024"), Err(BuildError::InvalidDate(_))));
    }

    #[test]
    fn test_date_from_epoch_millis() {
        let date = Schema::date().check(&Value::from(86_400_000)).unwrap();
        assert_eq!(date, Utc.with_ymd_and_hms(1970, 1, 2, 0, 0, 0).unwrap());
        assert!(Schema::date().check(&Value::Number(f64::NAN)).is_err());
    }

    #[test]
    fn test_date_passes_dates_through() {
        let now = Utc::now();
        assert_eq!(Schema::date().check(&Value::Date(now)).unwrap(), now);
    }

    #[test]
    fn test_date_rejects_other_kinds() {
        let error = Schema::date().check(&Value::Bool(true)).unwrap_err();
        assert_eq!(error.code, "invalid_type");
        assert_eq!(error.message, "expected date, got boolean");
    }
}
