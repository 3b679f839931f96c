//! The report produced by a failed run.

use std::fmt::{self, Display};

use crate::error::{SourceLocation, ValidationError};
use crate::path::ValuePath;

/// Structured description of a failed run.
///
/// Built fresh from the [`ValidationError`] that ended the run; never
/// stored by the library.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationReport {
    /// Name of the failure kind, always `"ValidationError"`.
    pub kind: &'static str,
    pub code: String,
    pub message: String,
    pub path: ValuePath,
    /// Construction site of the failing validator, when captured and
    /// enabled.
    pub location: Option<SourceLocation>,
    formatted: String,
}

impl ValidationReport {
    pub const KIND: &'static str = "ValidationError";

    /// Builds a report, keeping the location only when `with_location`.
    pub fn new(error: &ValidationError, with_location: bool) -> Self {
        let location = if with_location { error.location() } else { None };
        let mut formatted = format!("{}: ", Self::KIND);
        if !error.path.is_root() {
            formatted.push_str(&format!("{}: ", error.path));
        }
        formatted.push_str(&error.message);
        if let Some(location) = &location {
            formatted.push_str(&format!(" (at {})", location));
        }

        Self {
            kind: Self::KIND,
            code: error.code.clone(),
            message: error.message.clone(),
            path: error.path.clone(),
            location,
            formatted,
        }
    }

    /// The human-readable line, e.g.
    /// `ValidationError: age: expected number, got string (at src/main.rs:4:15)`.
    pub fn formatted(&self) -> &str {
        &self.formatted
    }
}

impl Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.formatted)
    }
}
