//! Errors raised while building a validator.

/// A mistake in a validator's definition, detected at construction time.
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    /// A regular expression did not compile.
    #[error("invalid pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A date literal could not be parsed.
    #[error("invalid date literal '{0}'")]
    InvalidDate(String),
}
