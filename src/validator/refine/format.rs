//! Pattern refinements and the string formats built on them.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{BuildError, ValidationError};
use crate::value::{ToValue, Value};

use super::unsupported;
use crate::validator::Validator;

static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("email pattern is valid")
});

static CREDIT_CARD: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:4[0-9]{12}(?:[0-9]{3})?|5[1-5][0-9]{14}|3[47][0-9]{13}|3(?:0[0-5]|[68][0-9])[0-9]{11}|6(?:011|5[0-9]{2})[0-9]{12}|(?:2131|1800|35\d{3})\d{11})$",
    )
    .expect("credit card pattern is valid")
});

static IPV4: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9]?[0-9])$",
    )
    .expect("ipv4 pattern is valid")
});

static IPV6: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?:",
        r"(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}",
        r"|(?:[0-9a-fA-F]{1,4}:){1,7}:",
        r"|(?:[0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}",
        r"|(?:[0-9a-fA-F]{1,4}:){1,5}(?::[0-9a-fA-F]{1,4}){1,2}",
        r"|(?:[0-9a-fA-F]{1,4}:){1,4}(?::[0-9a-fA-F]{1,4}){1,3}",
        r"|(?:[0-9a-fA-F]{1,4}:){1,3}(?::[0-9a-fA-F]{1,4}){1,4}",
        r"|(?:[0-9a-fA-F]{1,4}:){1,2}(?::[0-9a-fA-F]{1,4}){1,5}",
        r"|[0-9a-fA-F]{1,4}:(?::[0-9a-fA-F]{1,4}){1,6}",
        r"|:(?:(?::[0-9a-fA-F]{1,4}){1,7}|:)",
        r")$",
    ))
    .expect("ipv6 pattern is valid")
});

static DOMAIN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?\.)+[a-zA-Z]{2,63}$")
        .expect("domain pattern is valid")
});

impl<T: ToValue + 'static> Validator<T> {
    /// Requires a string output matching `pattern`.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidPattern`] if `pattern` is not a valid
    /// regular expression.
    ///
    /// ```rust
    /// use conform::{Schema, Value};
    ///
    /// let code = Schema::string().pattern(r"^[A-Z]{3}$").unwrap();
    /// assert!(code.check(&Value::from("ABC")).is_ok());
    /// assert!(code.check(&Value::from("abc")).is_err());
    ///
    /// assert!(Schema::string().pattern("[unclosed").is_err());
    /// ```
    #[track_caller]
    pub fn pattern(&self, pattern: &str) -> Result<Validator<T>, BuildError> {
        let regex = Regex::new(pattern).map_err(|source| BuildError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        Ok(self.matches(regex))
    }

    /// Requires a string output matching an already compiled `regex`.
    #[track_caller]
    pub fn matches(&self, regex: Regex) -> Validator<T> {
        self.refine(move |value, path| match value {
            Value::String(s) if regex.is_match(s) => Ok(()),
            Value::String(s) => Err(ValidationError::new(
                path.clone(),
                format!("String must match pattern /{}/", regex.as_str()),
            )
            .with_code("pattern")
            .with_expected(format!("/{}/", regex.as_str()))
            .with_got(s.clone())),
            other => Err(unsupported("pattern", other, path)),
        })
    }

    #[track_caller]
    pub fn email(&self) -> Validator<T> {
        self.matches(EMAIL.clone()).with_message("Invalid email address")
    }

    /// Accepts the common card number layouts (Visa, Mastercard, Amex,
    /// Diners, Discover, JCB) written without separators. No checksum.
    #[track_caller]
    pub fn credit_card(&self) -> Validator<T> {
        self.matches(CREDIT_CARD.clone())
            .with_message("Invalid credit card number")
    }

    #[track_caller]
    pub fn ipv4(&self) -> Validator<T> {
        self.matches(IPV4.clone()).with_message("Invalid IPv4 address")
    }

    #[track_caller]
    pub fn ipv6(&self) -> Validator<T> {
        self.matches(IPV6.clone()).with_message("Invalid IPv6 address")
    }

    #[track_caller]
    pub fn domain(&self) -> Validator<T> {
        self.matches(DOMAIN.clone()).with_message("Invalid domain name")
    }
}
