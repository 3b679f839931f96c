//! The execution entry point.
//!
//! `check` returns a `Result` for programmatic use. `run` (and its alias
//! `parse`) is the boundary form: it never returns the failure, it turns it
//! into a [`ValidationReport`] and either hands it to the caller's failure
//! callback or to the configured [`ReportSink`].
//!
//! # Example
//!
//! ```rust
//! use conform::{Schema, Value};
//!
//! let mut seen = None;
//! let ok = Schema::number()
//!     .runner()
//!     .on_failure(|line, report| seen = Some((line.to_string(), report.code.clone())))
//!     .run(&Value::from("ten"));
//!
//! assert!(!ok);
//! let (line, code) = seen.unwrap();
//! assert!(line.starts_with("ValidationError: expected number, got string"));
//! assert_eq!(code, "invalid_type");
//! ```

mod config;
mod report;

pub use config::{report_config, set_report_config, NullSink, ReportConfig, ReportSink, StderrSink};
pub use report::ValidationReport;

use tracing::debug;

use crate::validator::Validator;
use crate::value::Value;

type SuccessFn<'a, T> = Box<dyn FnOnce(&T) + 'a>;
type FailureFn<'a> = Box<dyn FnOnce(&str, &ValidationReport) + 'a>;

/// A single run of a validator with optional callbacks.
///
/// Created by [`Validator::runner`].
#[must_use = "a runner does nothing until `run` or `parse` is called"]
pub struct Runner<'a, T> {
    validator: &'a Validator<T>,
    on_success: Option<SuccessFn<'a, T>>,
    on_failure: Option<FailureFn<'a>>,
    config: Option<ReportConfig>,
}

impl<'a, T: 'static> Runner<'a, T> {
    fn new(validator: &'a Validator<T>) -> Self {
        Self {
            validator,
            on_success: None,
            on_failure: None,
            config: None,
        }
    }

    /// Called with the validated output.
    pub fn on_success(mut self, callback: impl FnOnce(&T) + 'a) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Called with the formatted line and the report. Installing it
    /// suppresses the sink.
    pub fn on_failure(mut self, callback: impl FnOnce(&str, &ValidationReport) + 'a) -> Self {
        self.on_failure = Some(Box::new(callback));
        self
    }

    /// Uses `config` instead of the process-wide configuration.
    pub fn config(mut self, config: ReportConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Validates `value`; returns whether it conforms.
    pub fn run(self, value: &Value) -> bool {
        match self.validator.check(value) {
            Ok(output) => {
                debug!(kind = %value.kind(), "validation passed");
                if let Some(callback) = self.on_success {
                    callback(&output);
                }
                true
            }
            Err(error) => {
                debug!(
                    code = %error.code,
                    path = %error.path,
                    message = %error.message,
                    "validation failed"
                );
                let config = self.config.unwrap_or_else(report_config);
                let report = ValidationReport::new(&error, config.locations());
                match self.on_failure {
                    Some(callback) => callback(report.formatted(), &report),
                    None => config.sink().report(&report),
                }
                false
            }
        }
    }

    /// Alias of [`run`](Self::run).
    pub fn parse(self, value: &Value) -> bool {
        self.run(value)
    }
}

impl<T: 'static> Validator<T> {
    /// Validates `value` at the boundary: failures are reported to the
    /// configured sink and `false` is returned.
    pub fn run(&self, value: &Value) -> bool {
        self.runner().run(value)
    }

    /// Alias of [`run`](Self::run).
    pub fn parse(&self, value: &Value) -> bool {
        self.runner().parse(value)
    }

    /// Starts a run with callbacks or a per-call configuration.
    pub fn runner(&self) -> Runner<'_, T> {
        Runner::new(self)
    }
}
