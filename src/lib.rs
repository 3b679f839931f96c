//! # Conform
//!
//! Composable runtime validators for untyped values.
//!
//! A [`Validator<T>`] checks a dynamically typed [`Value`] and either
//! produces a `T` or a [`ValidationError`] carrying the path of the
//! offending element, a message, a machine-readable code and the source
//! location where the failing validator was built.
//!
//! Validators are immutable. Factories on [`Schema`] build the leaves,
//! refinements (`min_length`, `range`, `email`, ...) constrain them and
//! combinators (`or`, `and`, `optional`, `default`, `conditional`, ...)
//! compose them. Every one of these returns a new validator, so a validator
//! can be stored once and shared freely, across threads included.
//!
//! ## Core Types
//!
//! - [`Value`] / [`Kind`]: the untyped input and its runtime category
//! - [`Validator`]: the composable unit of validation
//! - [`Schema`] / [`Shape`]: factories and object shape declarations
//! - [`ValidationError`] / [`ValidationErrors`]: one failure, many failures
//! - [`ValidationReport`]: what a failed [`run`](Validator::run) reports
//!
//! ## Example
//!
//! ```rust
//! use conform::{Schema, Shape, Value};
//! use serde_json::json;
//!
//! let signup = Schema::object(
//!     Shape::new()
//!         .field("email", Schema::string().email())
//!         .field("password", Schema::string().min_length(8))
//!         .field("age", Schema::number().integer().range(13.0, 130.0).optional()),
//! );
//!
//! let input = Value::from(json!({"email": "ada@example.com", "password": "hunter22"}));
//! assert!(signup.check(&input).is_ok());
//!
//! let input = Value::from(json!({"email": "ada@example.com", "password": "short"}));
//! let error = signup.check(&input).unwrap_err();
//! assert_eq!(error.path.to_string(), "password");
//! assert_eq!(error.message, "String must have at least 8 characters");
//! ```

pub mod batch;
pub mod error;
pub mod path;
pub mod run;
pub mod schema;
pub mod validator;
pub mod value;

pub use error::{BuildError, SourceLocation, ValidationError, ValidationErrors};
pub use path::{PathSegment, ValuePath};
pub use run::{
    report_config, set_report_config, NullSink, ReportConfig, ReportSink, Runner, StderrSink,
    ValidationReport,
};
pub use schema::{parse_date, Schema, Shape};
pub use validator::{Alternatives, Validate, Validator};
pub use value::{
    loose_eq, strict_eq, Buffer, BufferKind, Func, Instance, Kind, MapOf, SetOf, Symbol, ToValue,
    Value,
};

/// Type alias for batch validation results using ValidationErrors
pub type ValidationResult<T> = stillwater::Validation<T, ValidationErrors>;
